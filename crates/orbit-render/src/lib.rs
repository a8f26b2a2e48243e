//! wgpu renderer for the twin orbit scene.
//!
//! Each frame runs two passes: a depth-only pass from the spotlight into the
//! shadow map, then the lit scene pass (ground, spheres, spotlight helper
//! lines) into the surface.

use glam::Vec3;
use orbit_core::mesh::{ground_plane, uv_sphere};
use orbit_core::{
    AmbientLight, FrameView, ObjectId, Renderer, SpotLight, StaticScene, SPOT_HELPER_RIM_SEGMENTS,
};

mod helpers;
mod lines;
mod mesh;
mod shadow;
mod targets;
mod uniforms;

use lines::{create_line_resources, LineResources};
use mesh::{GpuMesh, ObjectSlot};
use targets::RenderTargets;
use uniforms::{GlobalsUniform, ObjectUniform};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    globals_buffer: wgpu::Buffer,
    // group0 for shadow + line passes (uniform only)
    globals_bg: wgpu::BindGroup,
    // group0 for the lit pass (uniform + shadow map + comparison sampler)
    scene_bg: wgpu::BindGroup,

    shadow_pipeline: wgpu::RenderPipeline,
    scene_pipeline: wgpu::RenderPipeline,
    lines: LineResources,

    sphere_mesh: GpuMesh,
    ground_mesh: GpuMesh,
    sphere_slots: [ObjectSlot; 2],
    ground_slot: ObjectSlot,

    spot: SpotLight,
    ambient: AmbientLight,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
        scene: &StaticScene,
    ) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter {} ({:?})", info.name, info.backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let premultiplied = scene.transparent
            && caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied);
        let alpha_mode = if premultiplied {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} {:?} alpha={:?}",
            config.width,
            config.height,
            format,
            alpha_mode
        );

        let targets = RenderTargets::new(
            &device,
            config.width,
            config.height,
            scene.spot.shadow.map_size,
        );
        log::debug!(
            "[gpu] depth {:?} shadow map {}",
            targets.depth_size(),
            targets.shadow_size()
        );

        // Bind group layouts
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Depth,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });

        let globals_buffer = helpers::create_uniform_buffer(
            &device,
            "globals",
            std::mem::size_of::<GlobalsUniform>(),
        );
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&targets.shadow_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&targets.shadow_sampler),
                },
            ],
        });

        // Pipelines
        let shadow_pipeline = shadow::create_shadow_pipeline(&device, &globals_bgl, &object_bgl);
        let scene_pipeline = create_scene_pipeline(&device, &scene_bgl, &object_bgl, format);
        let lines = create_line_resources(
            &device,
            &globals_bgl,
            format,
            &scene.spot.helper_lines(SPOT_HELPER_RIM_SEGMENTS),
            scene.spot.color,
        );

        // Geometry
        let sphere_mesh = GpuMesh::upload(
            &device,
            "sphere_mesh",
            &uv_sphere(scene.sphere_radius, scene.sphere_segments, scene.sphere_segments),
        );
        let ground_mesh = GpuMesh::upload(
            &device,
            "ground_mesh",
            &ground_plane(scene.ground.width, scene.ground.depth),
        );
        let sphere_slots = [
            ObjectSlot::new(&device, &object_bgl, "sphere_a"),
            ObjectSlot::new(&device, &object_bgl, "sphere_b"),
        ];
        let ground_slot = ObjectSlot::new(&device, &object_bgl, "ground");
        ground_slot.write(
            &queue,
            &ObjectUniform::new(Vec3::new(0.0, scene.ground.y, 0.0), scene.ground.color, true),
        );

        let clear_color = if premultiplied {
            wgpu::Color::TRANSPARENT
        } else {
            wgpu::Color::BLACK
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globals_buffer,
            globals_bg,
            scene_bg,
            shadow_pipeline,
            scene_pipeline,
            lines,
            sphere_mesh,
            ground_mesh,
            sphere_slots,
            ground_slot,
            spot: scene.spot.clone(),
            ambient: scene.ambient.clone(),
            clear_color,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Re-apply the surface configuration after the surface was lost or went
    /// out of date. The size never changes.
    pub fn reconfigure(&mut self) {
        log::warn!("[gpu] reconfiguring surface");
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, frame: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        let globals = GlobalsUniform::new(frame.camera.view_proj(), &self.spot, &self.ambient);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        for obj in frame.objects {
            // Spheres cast shadows but do not receive them.
            self.sphere_slots[obj.id.index()].write(
                &self.queue,
                &ObjectUniform::new(obj.position, obj.color(), false),
            );
        }

        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: spotlight depth → shadow map
        {
            let mut rpass = shadow::begin_shadow_pass(&mut encoder, &self.targets.shadow_view);
            rpass.set_pipeline(&self.shadow_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for id in ObjectId::ALL {
                rpass.set_bind_group(1, &self.sphere_slots[id.index()].bind_group, &[]);
                self.sphere_mesh.draw(&mut rpass);
            }
        }

        // Pass 2: lit scene + helper lines → swapchain
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene_pipeline);
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            rpass.set_bind_group(1, &self.ground_slot.bind_group, &[]);
            self.ground_mesh.draw(&mut rpass);
            for id in ObjectId::ALL {
                rpass.set_bind_group(1, &self.sphere_slots[id.index()].bind_group, &[]);
                self.sphere_mesh.draw(&mut rpass);
            }

            rpass.set_pipeline(&self.lines.pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_vertex_buffer(0, self.lines.vertex_buffer.slice(..));
            rpass.draw(0..self.lines.vertex_count, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

impl<'a> Renderer for GpuState<'a> {
    type Error = wgpu::SurfaceError;

    fn submit(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error> {
        self.render(frame)
    }
}

fn create_scene_pipeline(
    device: &wgpu::Device,
    scene_bgl: &wgpu::BindGroupLayout,
    object_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(orbit_core::SCENE_WGSL.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[scene_bgl, object_bgl],
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[helpers::mesh_vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(wgpu::DepthBiasState::default())),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
