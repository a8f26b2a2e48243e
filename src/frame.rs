use instant::Instant;
use orbit_core::FrameController;
use orbit_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FPS_LOG_INTERVAL_SEC: f32 = 5.0;

pub struct FrameContext {
    pub controller: Rc<RefCell<FrameController>>,
    pub gpu: GpuState<'static>,
    pub stopped: bool,

    pub last_instant: Instant,
    pub frames_since_log: u32,
    pub secs_since_log: f32,
}

impl FrameContext {
    pub fn new(controller: Rc<RefCell<FrameController>>, gpu: GpuState<'static>) -> Self {
        Self {
            controller,
            gpu,
            stopped: false,
            last_instant: Instant::now(),
            frames_since_log: 0,
            secs_since_log: 0.0,
        }
    }

    /// One display refresh: advance the orbit, then submit the frame.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.log_fps(dt_sec);

        let result = {
            let mut c = self.controller.borrow_mut();
            c.tick();
            c.submit(&mut self.gpu)
        };
        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[frame] out of GPU memory, stopping");
                self.stopped = true;
            }
            Err(e) => log::error!("[frame] render error: {:?}", e),
        }
    }

    fn log_fps(&mut self, dt_sec: f32) {
        self.frames_since_log += 1;
        self.secs_since_log += dt_sec;
        if self.secs_since_log >= FPS_LOG_INTERVAL_SEC {
            let c = self.controller.borrow();
            log::debug!(
                "[frame] {:.1} fps, tick {} angle {:.3}",
                self.frames_since_log as f32 / self.secs_since_log,
                c.ticks(),
                c.angle()
            );
            self.frames_since_log = 0;
            self.secs_since_log = 0.0;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let stopped = {
            let mut ctx = frame_ctx_tick.borrow_mut();
            ctx.frame();
            ctx.stopped
        };
        if !stopped {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
