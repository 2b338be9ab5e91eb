use anyhow::{Context, Result};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::geometry::cube_data;
use crate::render::{RenderCtx, RenderTarget, SurfaceSize};
use crate::transform::{build_mvp, build_view_projection, Camera, ModelTransform, ViewProjection};

use super::depth::{depth_stencil_state, DepthTarget};
use super::uniform::{mvp_min_binding_size, write_mvp, MVP_UNIFORM_SIZE};

/// Scene parameters for [`CubeRenderer`].
#[derive(Debug, Clone, Default)]
pub struct CubeRendererConfig {
    pub camera: Camera,
    pub model: ModelTransform,
}

/// Draws the static colored cube with one draw call.
///
/// GPU resources are created lazily on the first frame. The view-projection
/// matrix and the depth texture follow the surface size; the model matrix is
/// fixed at construction.
pub struct CubeRenderer {
    camera: Camera,
    model: Mat4,
    view_projection: Option<ViewProjection>,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    mvp_ubo: Option<wgpu::Buffer>,

    position_vbo: Option<wgpu::Buffer>,
    color_vbo: Option<wgpu::Buffer>,
    vertex_count: u32,

    depth: Option<DepthTarget>,
}

impl CubeRenderer {
    pub fn new(config: CubeRendererConfig) -> Result<Self> {
        config.camera.validate().context("invalid camera")?;

        Ok(Self {
            camera: config.camera,
            model: config.model.matrix(),
            view_projection: None,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            mvp_ubo: None,
            position_vbo: None,
            color_vbo: None,
            vertex_count: 0,
            depth: None,
        })
    }

    /// The MVP matrix uploaded by the last rendered frame.
    pub fn mvp(&self) -> Option<Mat4> {
        self.view_projection
            .as_ref()
            .map(|vp| build_mvp(vp.view_projection, self.model))
    }

    /// Renders the cube into `target`, loading the existing color contents.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if ctx.size.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);
        self.ensure_depth(ctx);

        let mvp = self.update_transforms(ctx.size);

        let Some(ubo) = self.mvp_ubo.as_ref() else { return };
        write_mvp(ctx.queue, ubo, mvp);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(position_vbo) = self.position_vbo.as_ref() else { return };
        let Some(color_vbo) = self.color_vbo.as_ref() else { return };
        let Some(depth) = self.depth.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cube pass"),
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
                view: depth.view(),
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

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, position_vbo.slice(..));
        rpass.set_vertex_buffer(1, color_vbo.slice(..));
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..self.vertex_count, 0..1);
    }

    /// Rebuilds the view-projection when the aspect ratio changed and returns the MVP.
    fn update_transforms(&mut self, size: SurfaceSize) -> Mat4 {
        let aspect = size.aspect_ratio();
        let cached = self
            .view_projection
            .filter(|vp| !needs_rebuild(vp, aspect));
        let vp = match cached {
            Some(vp) => vp,
            None => {
                log::debug!(
                    "view-projection rebuilt for {}x{} (aspect {aspect})",
                    size.width,
                    size.height
                );
                let vp = build_view_projection(&self.camera, aspect);
                self.view_projection = Some(vp);
                vp
            }
        };

        build_mvp(vp.view_projection, self.model)
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cube.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("cube bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(mvp_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("cube pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cube pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[position_layout(), color_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
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

            depth_stencil: Some(depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("cube pipeline created for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bind groups are tied to the layout they were created from.
        self.bind_group = None;
        self.mvp_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.mvp_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let mvp_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cube mvp ubo"),
            size: MVP_UNIFORM_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &mvp_ubo,
                    offset: 0,
                    size: Some(mvp_min_binding_size()),
                }),
            }],
        });

        self.mvp_ubo = Some(mvp_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.position_vbo.is_some() && self.color_vbo.is_some() {
            return;
        }

        let cube = cube_data();

        self.position_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube position vbo"),
            contents: bytemuck::cast_slice(&cube.positions),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.color_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube color vbo"),
            contents: bytemuck::cast_slice(&cube.colors),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.vertex_count = cube.vertex_count();
    }

    fn ensure_depth(&mut self, ctx: &RenderCtx<'_>) {
        if self.depth.as_ref().is_some_and(|d| d.size() == ctx.size) {
            return;
        }
        self.depth = Some(DepthTarget::new(ctx.device, ctx.size));
    }
}

fn needs_rebuild(vp: &ViewProjection, aspect_ratio: f32) -> bool {
    vp.aspect_ratio != aspect_ratio
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

const VERTEX_STRIDE: wgpu::BufferAddress = std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress;

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}
