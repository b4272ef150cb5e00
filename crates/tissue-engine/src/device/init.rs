/// Knobs for adapter, device and surface creation.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// FIFO by default: presentation waits for vertical blank, which paces the
    /// continuous redraw loop to one tick per display refresh.
    pub present_mode: wgpu::PresentMode,
    pub prefer_srgb: bool,
    /// Ignored when the surface does not support it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub power_preference: wgpu::PowerPreference,
    /// The viewer only needs vertex buffers, two uniforms and a depth target.
    pub required_limits: wgpu::Limits,
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            present_mode: wgpu::PresentMode::Fifo,
            prefer_srgb: true,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_limits: wgpu::Limits::downlevel_defaults(),
            frame_latency: 2,
        }
    }
}
