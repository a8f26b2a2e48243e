use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use orbit_core::{
    pointer_to_ndc, viewport_aspect, Camera, FrameController, SceneParams, SphereIntersector,
    StaticScene,
};
use orbit_render::GpuState;

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

struct App<'w> {
    window: &'w winit::window::Window,
    gpu: GpuState<'w>,
    controller: FrameController,
    frames: u32,
    last_log: Instant,
}

impl<'w> App<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let params = SceneParams::default();
        let camera = Camera::for_aspect(viewport_aspect(size.width, size.height)?);
        let controller = FrameController::new(&params, camera)?;
        let scene = StaticScene::new(&params);
        let gpu = GpuState::new(window, size.width, size.height, &scene).await?;
        Ok(Self {
            window,
            gpu,
            controller,
            frames: 0,
            last_log: Instant::now(),
        })
    }

    fn cursor_moved(&mut self, position: winit::dpi::PhysicalPosition<f64>) {
        let (w, h) = self.gpu.size();
        if let Some(ndc) = pointer_to_ndc(position.x as f32, position.y as f32, w as f32, h as f32)
        {
            self.controller.pointer_moved(ndc, &SphereIntersector);
        }
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.controller.tick();
        self.controller.submit(&mut self.gpu)?;
        self.frames += 1;
        let elapsed = self.last_log.elapsed().as_secs_f32();
        if elapsed >= 5.0 {
            log::debug!(
                "[frame] {:.1} fps, tick {} angle {:.3}",
                self.frames as f32 / elapsed,
                self.controller.ticks(),
                self.controller.angle()
            );
            self.frames = 0;
            self.last_log = Instant::now();
        }
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Twin Orbit (native)")
        .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)
        .expect("window");

    let mut app = match pollster::block_on(App::new(&window)) {
        Ok(app) => app,
        Err(e) => {
            log::error!("init error: {:?}", e);
            return;
        }
    };

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => app.cursor_moved(position),
            Event::AboutToWait => match app.frame() {
                Ok(_) => app.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    app.gpu.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[frame] out of GPU memory, exiting");
                    elwt.exit()
                }
                Err(e) => log::error!("[frame] render error: {:?}", e),
            },
            _ => {}
        })
        .expect("event loop run");
}
