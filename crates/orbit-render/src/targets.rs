use super::helpers;

/// Depth targets for the render passes.
///
/// - `depth_*` is the camera depth buffer, sized to the surface.
/// - `shadow_*` is the square spotlight shadow map, sampled with a comparison
///   sampler in the lit pass.
pub(crate) struct RenderTargets {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) shadow_tex: wgpu::Texture,
    pub(crate) shadow_view: wgpu::TextureView,
    pub(crate) shadow_sampler: wgpu::Sampler,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32, shadow_size: u32) -> Self {
        let (depth_tex, depth_view) = helpers::create_depth_texture(
            device,
            "depth_tex",
            width,
            height,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (shadow_tex, shadow_view) = helpers::create_depth_texture(
            device,
            "shadow_map",
            shadow_size,
            shadow_size,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        // Linear filtering on a comparison sampler gives hardware 2x2 PCF per tap.
        let shadow_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("shadow_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });
        Self {
            depth_tex,
            depth_view,
            shadow_tex,
            shadow_view,
            shadow_sampler,
        }
    }

    pub(crate) fn shadow_size(&self) -> u32 {
        self.shadow_tex.width()
    }

    pub(crate) fn depth_size(&self) -> (u32, u32) {
        (self.depth_tex.width(), self.depth_tex.height())
    }
}
