use crate::dom;
use crate::surface::Canvas2dSurface;
use effects_core::EffectEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<EffectEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: Canvas2dSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Backing size may change between frames on resize
        let viewport = dom::canvas_viewport(&self.canvas);
        self.surface.resize(viewport.width, viewport.height);
        self.engine
            .borrow_mut()
            .render_frame(&mut self.surface, viewport);
    }
}

/// Drive `frame()` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(mut ctx: FrameContext) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
