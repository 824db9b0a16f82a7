pub mod card;
pub mod interpolate;
pub mod reveal;
pub mod scroll;

pub use card::MappedVisualState;
pub use interpolate::{BreakpointTable, Lerp, Percent};
pub use reveal::{use_entrance, use_reveal, EntrancePhase, RevealMode};
pub use scroll::{use_scroll_progress, ScrollProgress};
