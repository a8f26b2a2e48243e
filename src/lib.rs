#![cfg(target_arch = "wasm32")]
use orbit_core::{Camera, FrameController, SceneParams, StaticScene};
use orbit_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let viewport = dom::window_viewport(&window);
    let aspect = viewport.aspect()?;
    let canvas = dom::find_or_create_canvas(&document)?;
    dom::size_canvas(&canvas, viewport);

    let params = SceneParams::default();
    let controller = Rc::new(RefCell::new(FrameController::new(
        &params,
        Camera::for_aspect(aspect),
    )?));
    let scene = StaticScene::new(&params);

    let (w, h) = viewport.pixel_size();
    let gpu = GpuState::new(wgpu::SurfaceTarget::Canvas(canvas), w, h, &scene).await?;

    events::wire_pointermove(&window, controller.clone(), viewport);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(controller, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
