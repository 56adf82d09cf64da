#![cfg(target_arch = "wasm32")]
use effects_core::EffectEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod css;
mod dom;
mod events;
mod frame;
mod keys;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("effects-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the backing store at CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let engine = Rc::new(RefCell::new(EffectEngine::new()));
    log::info!("[engine] first effect: {}", engine.borrow().current());

    events::wire_advance_on_pointer(&canvas, &engine)?;
    events::wire_advance_on_key(&engine)?;

    frame::start_loop(frame::FrameContext {
        engine,
        canvas,
        surface: surface::Canvas2dSurface::new(ctx),
    });
    Ok(())
}
