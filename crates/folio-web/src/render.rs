//! WebGPU renderer for the avatar scene: one instanced draw per rig part
//! over a shared vertex/index buffer, opaque parts first, then blended parts
//! back to front over a transparent clear.

mod helpers;

use folio_core::{
    hex_linear, AvatarPose, Camera, MeshVertex, Rig, GROUND_LIGHT, KEY_LIGHT, KEY_LIGHT_POS,
    RIM_LIGHT, RIM_LIGHT_DECAY, RIM_LIGHT_POS, RIM_LIGHT_RANGE, SKY_LIGHT,
};
use glam::Vec3;
use std::ops::Range;
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    sky: [f32; 4],
    ground: [f32; 4],
    key_dir: [f32; 4],
    key_color: [f32; 4],
    rim_pos: [f32; 4],
    rim_color: [f32; 4],
}

#[inline]
fn light(hex: u32, intensity: f32, w: f32) -> [f32; 4] {
    let [r, g, b] = hex_linear(hex);
    [r * intensity, g * intensity, b * intensity, w]
}

impl Globals {
    fn new(camera: &Camera) -> Self {
        let key_dir = KEY_LIGHT_POS.normalize_or_zero();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            sky: light(SKY_LIGHT.0, SKY_LIGHT.1, 0.0),
            ground: light(GROUND_LIGHT, SKY_LIGHT.1, 0.0),
            key_dir: key_dir.extend(0.0).to_array(),
            key_color: light(KEY_LIGHT.0, KEY_LIGHT.1, 0.0),
            rim_pos: RIM_LIGHT_POS.extend(RIM_LIGHT_RANGE).to_array(),
            rim_color: light(RIM_LIGHT.0, RIM_LIGHT.1, RIM_LIGHT_DECAY),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive_lit: [f32; 4],
    surface: [f32; 4],
}

impl InstanceRaw {
    const ATTRIBS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBS,
    }
}

/// Where a part's triangles live in the shared index buffer.
struct PartRange {
    indices: Range<u32>,
    transparent: bool,
}

pub struct SceneRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    #[allow(dead_code)]
    depth_tex: wgpu::Texture, // owns the storage behind depth_view
    depth_view: wgpu::TextureView,

    opaque_pipeline: wgpu::RenderPipeline,
    transparent_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,

    rig: Rig,
    parts: Vec<PartRange>,
    // scratch, reused every frame
    instances: Vec<InstanceRaw>,
    blended: Vec<(f32, usize)>,
}

impl SceneRenderer {
    pub async fn new(canvas: web::HtmlCanvasElement, rig: Rig) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
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
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // shader output is linear; render through an sRGB view when the
        // canvas format itself is not sRGB
        let view_format = format.add_srgb_suffix();
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
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
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[scene] surface {}x{} {:?} (view {:?}, {:?})",
            width,
            height,
            format,
            view_format,
            alpha_mode
        );

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::SCENE_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let buffers = [vertex_layout(), InstanceRaw::layout()];
        let opaque_pipeline =
            helpers::make_part_pipeline(&device, &layout, &shader, &buffers, view_format, None);
        let transparent_pipeline = helpers::make_part_pipeline(
            &device,
            &layout,
            &shader,
            &buffers,
            view_format,
            Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
        );

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Bake every part into one vertex/index buffer pair
        let mut vertices: Vec<MeshVertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::new();
        let mut parts = Vec::with_capacity(rig.parts().len());
        for part in rig.parts() {
            let mesh = part.primitive.build();
            let base = vertices.len() as u32;
            let start = indices.len() as u32;
            vertices.extend_from_slice(&mesh.vertices);
            indices.extend(mesh.indices.iter().map(|i| i + base));
            parts.push(PartRange {
                indices: start..indices.len() as u32,
                transparent: part.material.is_transparent(),
            });
        }
        log::info!(
            "[scene] rig baked: {} parts, {} vertices, {} triangles",
            parts.len(),
            vertices.len(),
            indices.len() / 3
        );
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rig_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rig_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("rig_instances"),
            size: (std::mem::size_of::<InstanceRaw>() * parts.len().max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            depth_tex,
            depth_view,
            opaque_pipeline,
            transparent_pipeline,
            globals_buffer,
            globals_bind_group,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            instances: Vec::with_capacity(parts.len()),
            blended: Vec::new(),
            rig,
            parts,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self.depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
        }
    }

    fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, camera: &Camera, pose: &AvatarPose) -> Result<(), wgpu::SurfaceError> {
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&Globals::new(camera)));

        let posed = self.rig.pose(pose);
        self.instances.clear();
        self.blended.clear();
        for inst in &posed {
            let material = &self.rig.parts()[inst.part].material;
            let [er, eg, eb] = material.emissive;
            self.instances.push(InstanceRaw {
                model: inst.model.to_cols_array_2d(),
                color: inst.color.to_array(),
                emissive_lit: [er, eg, eb, if material.lit { 1.0 } else { 0.0 }],
                surface: [material.roughness, material.metalness, 0.0, 0.0],
            });
            if self.parts[inst.part].transparent {
                let center: Vec3 = inst.model.transform_point3(Vec3::ZERO);
                self.blended.push((center.distance_squared(camera.eye), inst.part));
            }
        }
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
        // far to near
        self.blended
            .sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

            rpass.set_pipeline(&self.opaque_pipeline);
            for (i, part) in self.parts.iter().enumerate() {
                if !part.transparent {
                    let i = i as u32;
                    rpass.draw_indexed(part.indices.clone(), 0, i..i + 1);
                }
            }
            rpass.set_pipeline(&self.transparent_pipeline);
            for &(_, i) in &self.blended {
                let range = self.parts[i].indices.clone();
                let i = i as u32;
                rpass.draw_indexed(range, 0, i..i + 1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
