//! Effects that fire once when an element first scrolls into view.

use crate::constants::{
    ACTIVE_CLASS, COUNTER_ATTR, COUNTER_SELECTOR, REVEAL_CLASS, REVEAL_SELECTOR,
    SKILL_FILL_SELECTOR, SKILL_WIDTH_ATTR,
};
use crate::core::constants::{
    COUNTER_THRESHOLD, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_BAR_THRESHOLD,
};
use crate::core::{parse_leading_int, CountTick, CountUp};
use crate::dom::{self, js_err};
use crate::frame::{AnimationDriver, FrameControl};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Call `on_visible` the first time each element intersects the viewport,
/// then stop watching it.
fn observe_once(
    elements: &[web::Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    callback.forget();
    for el in elements {
        observer.observe(el);
    }
    Ok(())
}

pub fn init_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    for el in &elements {
        dom::set_class(el, REVEAL_CLASS, true);
    }
    log::info!("[reveal] {} elements", elements.len());
    observe_once(
        &elements,
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |el| dom::set_class(el, ACTIVE_CLASS, true),
    )
}

pub fn init_skill_bars(document: &web::Document) -> anyhow::Result<()> {
    let fills = dom::query_all(document, SKILL_FILL_SELECTOR);
    observe_once(&fills, SKILL_BAR_THRESHOLD, None, |fill| {
        if let Some(width) = fill.get_attribute(SKILL_WIDTH_ATTR) {
            dom::set_style(fill, "width", &format!("{width}%"));
        }
    })
}

pub fn init_count_up(document: &web::Document) -> anyhow::Result<()> {
    let counters = dom::query_all(document, COUNTER_SELECTOR);
    observe_once(&counters, COUNTER_THRESHOLD, None, |counter| {
        let raw = counter.get_attribute(COUNTER_ATTR).unwrap_or_default();
        let Some(target) = parse_leading_int(&raw) else {
            log::debug!("[counter] unparseable {COUNTER_ATTR}={raw:?}");
            return;
        };
        if let Err(e) = start_counter(counter.clone(), target) {
            log::error!("[counter] {:?}", e);
        }
    })
}

fn start_counter(counter: web::Element, target: i64) -> anyhow::Result<()> {
    let mut count = CountUp::new(target);
    AnimationDriver::start(move || match count.tick() {
        CountTick::Running(v) => {
            counter.set_text_content(Some(&v.to_string()));
            FrameControl::Continue
        }
        CountTick::Done(v) => {
            counter.set_text_content(Some(&v.to_string()));
            FrameControl::Stop
        }
    })?
    .detach();
    Ok(())
}
