use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::config;
use crate::error::{self, DomError, DomResult};

/// Fraction of the page's scrollable distance already scrolled, always in
/// `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const TOP: ScrollProgress = ScrollProgress(0.0);
    pub const BOTTOM: ScrollProgress = ScrollProgress(1.0);

    /// Clamps into range; NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::TOP;
        }
        ScrollProgress(value.clamp(0.0, 1.0))
    }

    /// Progress for a scroll offset given the full content height and the
    /// visible height. A page with nothing to scroll reports 0.
    pub fn from_metrics(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        let scrollable = scroll_height - client_height;
        if !scrollable.is_finite() || scrollable <= 0.0 {
            return Self::TOP;
        }
        Self::new(scroll_top / scrollable)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

fn root_element() -> DomResult<Element> {
    error::document()?
        .document_element()
        .ok_or(DomError::MissingElement("root"))
}

fn progress_of(root: &Element) -> ScrollProgress {
    ScrollProgress::from_metrics(
        root.scroll_top() as f64,
        root.scroll_height() as f64,
        root.client_height() as f64,
    )
}

type Listener = Closure<dyn FnMut()>;
type RootReader<T> = fn(&Element) -> T;

const EVENTS: [&str; 2] = ["scroll", "resize"];

fn listen(window: &Window, listener: &Listener) -> DomResult<()> {
    for event in EVENTS {
        window
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("add scroll listener", e))?;
    }
    Ok(())
}

fn unlisten(window: &Window, listener: &Listener) {
    for event in EVENTS {
        let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    }
}

/// Tracks `read(root element)` across scroll and resize events. The caller
/// re-renders only when the read value changes.
#[hook]
fn use_root_scroll<T>(read: RootReader<T>) -> T
where
    T: Default + PartialEq + Copy + 'static,
{
    let value = use_state_eq(T::default);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || match root_element() {
                    Ok(root) => value.set(read(&root)),
                    Err(e) => debug!("scroll sample skipped: {}", e),
                };
                update();

                let listener: Listener = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                let window = error::window().and_then(|window| {
                    listen(&window, &listener)?;
                    Ok(window)
                });
                let window = match window {
                    Ok(window) => Some(window),
                    Err(e) => {
                        warn!("scroll tracking disabled: {}", e);
                        None
                    }
                };

                move || {
                    if let Some(window) = window {
                        unlisten(&window, &listener);
                    }
                }
            },
            (),
        );
    }

    *value
}

/// Live scroll progress of the page.
#[hook]
pub fn use_scroll_progress() -> ScrollProgress {
    use_root_scroll(progress_of)
}

/// Whether the page has scrolled further than the nav bar's solid threshold.
#[hook]
pub fn use_scrolled_away() -> bool {
    use_root_scroll(|root| root.scroll_top() > config::NAV_SOLID_AFTER_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_unit_range() {
        assert_eq!(ScrollProgress::new(-0.3).value(), 0.0);
        assert_eq!(ScrollProgress::new(1.7).value(), 1.0);
        assert_eq!(ScrollProgress::new(0.25).value(), 0.25);
        assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::TOP);
    }

    #[test]
    fn progress_from_document_metrics() {
        assert_eq!(ScrollProgress::from_metrics(0.0, 3000.0, 1000.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_metrics(1000.0, 3000.0, 1000.0).value(), 0.5);
        assert_eq!(ScrollProgress::from_metrics(2000.0, 3000.0, 1000.0).value(), 1.0);
        // overscroll bounce on some browsers
        assert_eq!(ScrollProgress::from_metrics(2100.0, 3000.0, 1000.0).value(), 1.0);
        assert_eq!(ScrollProgress::from_metrics(-40.0, 3000.0, 1000.0).value(), 0.0);
    }

    #[test]
    fn nothing_to_scroll_reports_top() {
        assert_eq!(ScrollProgress::from_metrics(0.0, 800.0, 800.0), ScrollProgress::TOP);
        assert_eq!(ScrollProgress::from_metrics(10.0, 600.0, 800.0), ScrollProgress::TOP);
    }
}
