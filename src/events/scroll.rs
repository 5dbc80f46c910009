use crate::constants::{
    ACTIVE_CLASS, ANCHOR_LINK_SELECTOR, NAVBAR_ID, NAV_LINK_SELECTOR, SCROLLED_CLASS,
    SECTIONS_SELECTOR,
};
use crate::core::{active_section, anchor_scroll_top, is_scrolled, link_is_active, SectionMark};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scrolled styling plus the active-section highlight in the navbar.
pub fn wire_navbar(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(navbar) = document.get_element_by_id(NAVBAR_ID) else {
        log::debug!("[navbar] no #{NAVBAR_ID}; skipping");
        return Ok(());
    };
    let sections: Vec<(web::HtmlElement, Option<String>)> =
        dom::query_all(document, SECTIONS_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| {
                let id = el.get_attribute("id");
                (el, id)
            })
            .collect();
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    log::info!(
        "[navbar] tracking {} sections, {} links",
        sections.len(),
        links.len()
    );

    let win = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        dom::set_class(&navbar, SCROLLED_CLASS, is_scrolled(scroll_y));

        let marks: Vec<SectionMark<'_>> = sections
            .iter()
            .map(|(s, id)| SectionMark {
                id: id.as_deref(),
                offset_top: s.offset_top() as f64,
            })
            .collect();
        let current = active_section(scroll_y, &marks);
        for link in &links {
            let href = link.get_attribute("href");
            dom::set_class(link, ACTIVE_CLASS, link_is_active(href.as_deref(), current));
        }
    })
}

/// In-page anchors scroll smoothly and stop short of the fixed navbar.
pub fn wire_smooth_scroll(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    for anchor in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let win = window.clone();
        let doc = document.clone();
        let href_source = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; treat it like a missing target.
            let Some(target) = dom::query_one(&doc, &href) else {
                return;
            };
            let rect_top = target.get_bounding_client_rect().top();
            let page_y = win.page_y_offset().unwrap_or(0.0);
            let opts = web::ScrollToOptions::new();
            opts.set_top(anchor_scroll_top(rect_top, page_y));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    Ok(())
}
