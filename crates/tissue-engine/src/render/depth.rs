/// Depth attachment format used by every renderer in this crate.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A depth texture sized to the surface.
pub struct DepthTexture {
    view: wgpu::TextureView,
    size: (u32, u32),
}

impl DepthTexture {
    pub fn new(device: &wgpu::Device, size: (u32, u32), label: &str) -> Self {
        let size = (size.0.max(1), size.1.max(1));
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: size.0,
                height: size.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { view, size }
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// True when the texture no longer matches the drawable size.
    #[inline]
    pub fn is_stale(&self, size: (u32, u32)) -> bool {
        self.size != (size.0.max(1), size.1.max(1))
    }
}
