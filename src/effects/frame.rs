use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Default)]
struct LoopInner {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

/// A `requestAnimationFrame` loop. The step closure runs once per frame
/// until it returns `false`. Dropping the loop cancels the pending frame.
pub struct AnimationLoop {
    inner: Rc<RefCell<LoopInner>>,
}

impl AnimationLoop {
    pub fn start<F>(mut step: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        let inner = Rc::new(RefCell::new(LoopInner::default()));
        let weak: Weak<RefCell<LoopInner>> = Rc::downgrade(&inner);

        let callback = Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.borrow_mut().handle = None;
            if step() {
                request_frame(&inner);
            }
        }) as Box<dyn FnMut()>);

        inner.borrow_mut().callback = Some(callback);
        request_frame(&inner);
        Self { inner }
    }
}

fn request_frame(inner: &Rc<RefCell<LoopInner>>) {
    let Some(window) = window() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    let requested = match inner.callback.as_ref() {
        Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref()),
        None => return,
    };
    match requested {
        Ok(handle) => inner.handle = Some(handle),
        Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        let handle = self.inner.borrow_mut().handle.take();
        if let (Some(handle), Some(window)) = (handle, window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}
