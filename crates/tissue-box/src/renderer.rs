//! GPU side of the box: static buffers, uniforms, pipeline, draw.

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use tissue_engine::render::{DepthTexture, RenderCtx, RenderTarget, DEPTH_FORMAT};

use crate::geometry::{COLORS, INDEX_COUNT, INDICES, POSITIONS};
use crate::shader::{ShaderInterface, UniformSlot};

// ── uniforms ──────────────────────────────────────────────────────────────

/// Column-major 4x4 matrix as laid out in a WGSL `mat4x4<f32>` uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MatrixUniform {
    columns: [[f32; 4]; 4],
}

impl From<Mat4> for MatrixUniform {
    fn from(m: Mat4) -> Self {
        Self { columns: m.to_cols_array_2d() }
    }
}

fn matrix_ubo_min_binding_size() -> wgpu::BufferSize {
    wgpu::BufferSize::new(std::mem::size_of::<MatrixUniform>() as u64)
        .expect("MatrixUniform has non-zero size by construction")
}

// ── static buffers ────────────────────────────────────────────────────────

/// Geometry tables resident on the GPU. Written once, never updated.
struct StaticBuffers {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

fn upload_static_buffers(device: &wgpu::Device) -> StaticBuffers {
    let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("tissue box positions"),
        contents: bytemuck::cast_slice(&POSITIONS),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let colors = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("tissue box colors"),
        contents: bytemuck::cast_slice(&COLORS),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("tissue box indices"),
        contents: bytemuck::cast_slice(&INDICES),
        usage: wgpu::BufferUsages::INDEX,
    });

    log::debug!(
        "uploaded {} positions, {} colors, {} indices",
        POSITIONS.len(),
        COLORS.len(),
        INDICES.len()
    );

    StaticBuffers {
        positions,
        colors,
        indices,
        index_count: INDEX_COUNT as u32,
    }
}

// ── attribute binding ─────────────────────────────────────────────────────

/// Slot 0 carries positions, slot 1 colors; both are 4 floats per vertex.
struct VertexAttributes {
    position: [wgpu::VertexAttribute; 1],
    color: [wgpu::VertexAttribute; 1],
}

impl VertexAttributes {
    const POSITION_SLOT: u32 = 0;
    const COLOR_SLOT: u32 = 1;

    fn bind(iface: &ShaderInterface) -> Self {
        let attr = |shader_location| wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 0,
            shader_location,
        };
        Self {
            position: [attr(iface.position_location)],
            color: [attr(iface.color_location)],
        }
    }

    fn layouts(&self) -> [wgpu::VertexBufferLayout<'_>; 2] {
        let stride = std::mem::size_of::<[f32; 4]>() as u64;
        [
            wgpu::VertexBufferLayout {
                array_stride: stride,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &self.position,
            },
            wgpu::VertexBufferLayout {
                array_stride: stride,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &self.color,
            },
        ]
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Draws the box with flat per-face colors, depth testing and back-face culling.
///
/// All GPU resources are created in [`CubeRenderer::new`]; per frame only the
/// model-view uniform is rewritten.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    model_view_ubo: wgpu::Buffer,
    buffers: StaticBuffers,
    depth: DepthTexture,
}

impl CubeRenderer {
    /// Uploads geometry, binds attributes, creates uniforms and the pipeline,
    /// and writes `projection` once.
    pub fn new(
        ctx: &RenderCtx<'_>,
        shader_source: &str,
        iface: &ShaderInterface,
        projection: Mat4,
    ) -> Result<Self> {
        anyhow::ensure!(
            iface.model_view.group == 0 && iface.projection.group == 0,
            "matrix uniforms must live in bind group 0 (found {} and {})",
            iface.model_view.group,
            iface.projection.group
        );
        anyhow::ensure!(
            iface.model_view.binding != iface.projection.binding,
            "matrix uniforms share binding {}",
            iface.model_view.binding
        );

        let buffers = upload_static_buffers(ctx.device);
        let attributes = VertexAttributes::bind(iface);

        let model_view_ubo = create_matrix_ubo(ctx, "tissue box model-view ubo", Mat4::IDENTITY);
        let projection_ubo = create_matrix_ubo(ctx, "tissue box projection ubo", projection);

        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tissue box bgl"),
                entries: &[
                    matrix_layout_entry(iface.model_view),
                    matrix_layout_entry(iface.projection),
                ],
            });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tissue box bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: iface.model_view.binding,
                    resource: model_view_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: iface.projection.binding,
                    resource: projection_ubo.as_entire_binding(),
                },
            ],
        });

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tissue box shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tissue box pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tissue box pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &attributes.layouts(),
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        let depth = DepthTexture::new(ctx.device, ctx.size, "tissue box depth");

        Ok(Self {
            pipeline,
            bind_group,
            model_view_ubo,
            buffers,
            depth,
        })
    }

    /// Writes `model_view` and records one indexed draw over the whole box.
    ///
    /// The color target is expected to be cleared already; depth is cleared here.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, model_view: Mat4) {
        if self.depth.is_stale(ctx.size) {
            log::debug!("recreating depth texture for {}x{}", ctx.size.0, ctx.size.1);
            self.depth = DepthTexture::new(ctx.device, ctx.size, "tissue box depth");
        }

        ctx.queue.write_buffer(
            &self.model_view_ubo,
            0,
            bytemuck::bytes_of(&MatrixUniform::from(model_view)),
        );

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tissue box pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: self.depth.view(),
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(VertexAttributes::POSITION_SLOT, self.buffers.positions.slice(..));
        rpass.set_vertex_buffer(VertexAttributes::COLOR_SLOT, self.buffers.colors.slice(..));
        rpass.set_index_buffer(self.buffers.indices.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.buffers.index_count, 0, 0..1);
    }
}

fn create_matrix_ubo(ctx: &RenderCtx<'_>, label: &str, initial: Mat4) -> wgpu::Buffer {
    ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::bytes_of(&MatrixUniform::from(initial)),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

fn matrix_layout_entry(slot: UniformSlot) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: slot.binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: Some(matrix_ubo_min_binding_size()),
        },
        count: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{self, ShaderInterface};

    #[test]
    fn matrix_uniform_is_column_major() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let u = MatrixUniform::from(m);
        assert_eq!(u.columns[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(std::mem::size_of::<MatrixUniform>(), 64);
    }

    #[test]
    fn attributes_follow_the_shader_locations() {
        let iface = ShaderInterface::resolve(shader::SOURCE).unwrap();
        let attrs = VertexAttributes::bind(&iface);
        let layouts = attrs.layouts();

        assert_eq!(layouts[0].attributes[0].shader_location, iface.position_location);
        assert_eq!(layouts[1].attributes[0].shader_location, iface.color_location);
        for layout in &layouts {
            assert_eq!(layout.array_stride, 16);
            assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x4);
        }
    }

    #[test]
    fn static_tables_cast_to_expected_byte_sizes() {
        assert_eq!(bytemuck::cast_slice::<_, u8>(&POSITIONS).len(), 24 * 16);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&COLORS).len(), 24 * 16);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&INDICES).len(), 36 * 2);
    }
}
