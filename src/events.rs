use crate::input::{self, Viewport};
use orbit_core::{FrameController, SphereIntersector};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global pointer-move listener. Listens on the window rather than the
/// canvas, so movement anywhere on the page drives the hover test.
pub fn wire_pointermove(
    window: &web::Window,
    controller: Rc<RefCell<FrameController>>,
    viewport: Viewport,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(ndc) = input::client_to_ndc(ev.client_x() as f64, ev.client_y() as f64, viewport)
        else {
            return;
        };
        controller
            .borrow_mut()
            .pointer_moved(ndc, &SphereIntersector);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
