use super::constants::{NAVBAR_SCROLLED_AFTER, SECTION_ACTIVATION_OFFSET};

#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER
}

/// A page section as seen by the navbar: its id (if any) and its offset from
/// the top of the document.
#[derive(Clone, Copy, Debug)]
pub struct SectionMark<'a> {
    pub id: Option<&'a str>,
    pub offset_top: f64,
}

/// Id of the section the reader is in: the last section, in document order,
/// whose activation line has been scrolled past.
pub fn active_section<'a>(scroll_y: f64, sections: &[SectionMark<'a>]) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.offset_top - SECTION_ACTIVATION_OFFSET)
        .and_then(|s| s.id)
}

/// Whether a nav link with this `href` points at the active section.
#[inline]
pub fn link_is_active(href: Option<&str>, active: Option<&str>) -> bool {
    match (href, active) {
        (Some(href), Some(id)) => href.strip_prefix('#') == Some(id),
        _ => false,
    }
}
