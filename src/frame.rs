use crate::core::{Animation, ParticleField, PointerState};
use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame reads or mutates.
pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub animation: Rc<RefCell<Animation>>,
    pub surface: CanvasSurface,
}

impl FrameContext {
    /// One update + render pass. Returns false once the animation is no
    /// longer running so the driver stops rescheduling.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let Some(elapsed) = self.animation.borrow().elapsed(now) else {
            return false;
        };
        let attractor = self.pointer.borrow().attractor(now);

        let mut field = self.field.borrow_mut();
        field.tick(attractor, elapsed);
        field.draw(&mut self.surface);
        true
    }
}

/// Handle to a running frame loop.
#[derive(Clone)]
pub struct LoopHandle {
    animation: Rc<RefCell<Animation>>,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.animation.borrow().is_running()
    }

    /// The loop exits at its next frame.
    pub fn stop(&self) {
        self.animation.borrow_mut().stop();
        log::info!("[frame] loop stopped");
    }
}

/// Mark the animation running and drive `frame` from requestAnimationFrame
/// until it is stopped.
pub fn start_loop(frame_ctx: FrameContext) -> LoopHandle {
    let animation = frame_ctx.animation.clone();
    let handle = LoopHandle {
        animation: animation.clone(),
    };
    if !animation.borrow_mut().start(Instant::now()) {
        log::warn!("[frame] loop already running");
        return handle;
    }

    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx.borrow_mut().frame() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    log::info!("[frame] loop started");
    handle
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
