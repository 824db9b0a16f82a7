use log::{debug, warn};
use web_sys::Document;

use crate::content::PageMeta;
use crate::error::{self, DomError, DomResult};

fn upsert_meta(
    document: &Document,
    attribute: &'static str,
    key: &'static str,
    content: &str,
) -> DomResult<()> {
    let selector = format!("meta[{}=\"{}\"]", attribute, key);
    let existing = document
        .query_selector(&selector)
        .map_err(|e| DomError::js("query meta tag", e))?;

    let tag = match existing {
        Some(tag) => tag,
        None => {
            let tag = document
                .create_element("meta")
                .map_err(|e| DomError::js("create meta tag", e))?;
            tag.set_attribute(attribute, key)
                .map_err(|e| DomError::js("set meta key", e))?;
            let head = document.head().ok_or(DomError::MissingElement("head"))?;
            head.append_child(&tag)
                .map_err(|e| DomError::js("append meta tag", e))?;
            tag
        }
    };
    tag.set_attribute("content", content)
        .map_err(|e| DomError::js("set meta content", e))
}

fn apply(meta: &PageMeta) -> DomResult<()> {
    let document = error::document()?;
    document.set_title(meta.title);
    for (attribute, key, content) in meta.tags() {
        upsert_meta(&document, attribute, key, content)?;
    }
    Ok(())
}

/// Publishes the page title and preview metadata to the document head.
pub fn apply_page_meta(meta: &PageMeta) {
    match apply(meta) {
        Ok(()) => debug!("page metadata applied: {}", meta.title),
        Err(e) => warn!("could not apply page metadata: {}", e),
    }
}
