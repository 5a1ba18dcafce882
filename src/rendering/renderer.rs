// src/rendering/renderer.rs

use roomwalk::ScreenPolygon;

use crate::rendering::vertex::Vertex;

// Generous for one convex room plus the door; anything past this is truncated
// with a warning rather than growing buffers mid-frame.
const MAX_FRAME_POLYGONS: usize = 64;
const MAX_POLYGON_VERTICES: usize = 12;
const RENDERER_MAX_VERTICES: usize = MAX_FRAME_POLYGONS * MAX_POLYGON_VERTICES;
const RENDERER_MAX_INDICES: usize = MAX_FRAME_POLYGONS * (MAX_POLYGON_VERTICES - 2) * 3;

/// Draws the pipeline's emitted polygon list: fan-triangulates each polygon
/// in painter's order and replaces the whole vertex/index buffer contents
/// every frame.
pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    screen_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,

    frame_vertices: Vec<Vertex>,
    frame_indices: Vec<u16>,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Room Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let screen_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Screen Dimensions Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let screen_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Screen Dimensions Buffer"),
            size: std::mem::size_of::<[f32; 4]>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Screen Dimensions Bind Group"),
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Room Pipeline Layout"),
                bind_group_layouts: &[&screen_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Room Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // every surface is double-sided
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None, // painter's order, no z-buffer
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Room Vertex Buffer"),
            size: (RENDERER_MAX_VERTICES * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Room Index Buffer"),
            size: (RENDERER_MAX_INDICES * std::mem::size_of::<u16>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            screen_buffer,
            screen_bind_group,
            frame_vertices: Vec::with_capacity(RENDERER_MAX_VERTICES),
            frame_indices: Vec::with_capacity(RENDERER_MAX_INDICES),
        }
    }

    fn add_polygon_to_frame(&mut self, polygon: &ScreenPolygon) {
        if polygon.points.len() < 3 {
            return;
        }
        let needed_vertices = polygon.points.len().min(MAX_POLYGON_VERTICES);
        if self.frame_vertices.len() + needed_vertices > RENDERER_MAX_VERTICES {
            log::warn!("frame vertex capacity exceeded, dropping remaining polygons");
            return;
        }
        let start = self.frame_vertices.len() as u16;
        for point in polygon.points.iter().take(needed_vertices) {
            self.frame_vertices.push(Vertex::new(*point, polygon.color));
        }
        for i in 1..(needed_vertices as u16 - 1) {
            self.frame_indices.push(start);
            self.frame_indices.push(start + i);
            self.frame_indices.push(start + i + 1);
        }
    }

    pub fn render(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        frame: &[ScreenPolygon],
        screen_width: f32,
        screen_height: f32,
        clear_color: wgpu::Color,
    ) {
        self.frame_vertices.clear();
        self.frame_indices.clear();
        for polygon in frame {
            self.add_polygon_to_frame(polygon);
        }

        queue.write_buffer(
            &self.screen_buffer,
            0,
            bytemuck::cast_slice(&[screen_width, screen_height, 0.0, 0.0]),
        );

        if !self.frame_vertices.is_empty() && !self.frame_indices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.frame_vertices));
            // u16 indices need an even count for the byte-aligned copy.
            let mut padded_indices = self.frame_indices.clone();
            if padded_indices.len() % 2 == 1 {
                padded_indices.push(0);
            }
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&padded_indices));
        }

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Room Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: output_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if !self.frame_vertices.is_empty() && !self.frame_indices.is_empty() {
                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
                let vertex_bytes =
                    (self.frame_vertices.len() * std::mem::size_of::<Vertex>()) as u64;
                let index_count = self.frame_indices.len();
                let index_bytes = if index_count % 2 == 1 {
                    ((index_count + 1) * std::mem::size_of::<u16>()) as u64
                } else {
                    (index_count * std::mem::size_of::<u16>()) as u64
                };
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..vertex_bytes));
                render_pass
                    .set_index_buffer(self.index_buffer.slice(..index_bytes), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..index_count as u32, 0, 0..1);
            }
        }
    }
}
