use crate::keys;
use effects_core::EffectEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_advance_on_pointer(
    canvas: &web::HtmlCanvasElement,
    engine: &Rc<RefCell<EffectEngine>>,
) -> anyhow::Result<()> {
    let engine = engine.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        engine.borrow_mut().advance();
    }) as Box<dyn FnMut(web::PointerEvent)>);
    canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}

pub fn wire_advance_on_key(engine: &Rc<RefCell<EffectEngine>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let engine = engine.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || !keys::is_advance_key(&ev.key()) {
            return;
        }
        ev.prevent_default();
        engine.borrow_mut().advance();
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}
