use crate::constants::PARTICLE_CANVAS_ID;
use crate::core::{ParticleField, ParticleParams};
use crate::dom::{self, js_err};
use crate::frame::{AnimationDriver, FrameControl};
use crate::render::{sync_canvas_to_viewport, CanvasSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init_particles(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(PARTICLE_CANVAS_ID) else {
        log::debug!("[particles] no #{PARTICLE_CANVAS_ID}; skipping");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{PARTICLE_CANVAS_ID} is not a canvas: {:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let size = dom::viewport_size(window);
    sync_canvas_to_viewport(&canvas, size);

    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(ParticleField::new(
        size,
        ParticleParams::default(),
        &mut rng,
    )));
    log::info!(
        "[particles] {}x{} surface, {} particles",
        size.x,
        size.y,
        field.borrow().particles().len()
    );

    let field_resize = field.clone();
    let window_resize = window.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        let size = dom::viewport_size(&window_resize);
        sync_canvas_to_viewport(&canvas, size);
        field_resize.borrow_mut().resize(size);
    })?;

    let mut surface = CanvasSurface::new(ctx);
    AnimationDriver::start(move || {
        field.borrow_mut().frame(&mut surface);
        FrameControl::Continue
    })?
    .detach();
    Ok(())
}
