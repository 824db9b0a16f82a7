use log::Level;

/// Assets ship in the trunk dist next to index.html, so they resolve against
/// whatever origin served the page.
pub fn asset_base() -> &'static str {
    ""
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Resolves a site-relative asset path ("/card.png") against the asset base.
pub fn asset_url(path: &str) -> String {
    format!("{}/{}", asset_base(), path.trim_start_matches('/'))
}

pub const CARD_IMAGE: &str = "/assets/card.svg";

// Card entrance on mount
pub const CARD_ENTRANCE_DELAY_MS: u32 = 800;
pub const CARD_ENTRANCE_DURATION_MS: u32 = 1600;
pub const CARD_ENTRANCE_EASING: &str = "cubic-bezier(0.165, 0.84, 0.44, 1)";

// Viewport reveals
pub const REVEAL_DURATION_MS: u32 = 800;
pub const STEP_REVEAL_DURATION_MS: u32 = 600;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Nav bar turns solid once the page scrolls past this offset.
pub const NAV_SOLID_AFTER_PX: i32 = 40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_without_double_slash() {
        let url = asset_url(CARD_IMAGE);
        assert!(url.ends_with("/card.svg"));
        assert!(!url.contains("//"));
    }

    #[test]
    fn card_image_is_origin_relative() {
        assert_eq!(asset_base(), "");
        assert_eq!(asset_url(CARD_IMAGE), "/assets/card.svg");
        assert_eq!(asset_url("card.svg"), "/card.svg");
    }
}
