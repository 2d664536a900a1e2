use std::sync::Arc;

use wgpu::util::DeviceExt;

use crate::*;

#[derive(Debug, thiserror::Error)]
pub enum RendererError
{
    #[error("failed to create a surface on the window: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no graphics adapter can present to the window")]
    NoAdapter,
    #[error("failed to retrieve a device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("the surface doesn't support any texture format")]
    UnsupportedSurface,
}

/// presents composited canvases on a window
pub struct Renderer
{
    /// the window that this renderer draws on
    pub window: Arc<Window>,

    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    output: FrameOutput,
}

impl Renderer
{
    /// creates the surface, device and present pipeline for `window`
    ///
    /// # Errors
    ///
    /// fails if no adapter is able to present to the window
    pub fn new(window: Arc<Window>) -> Result<Self, RendererError>
    {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions
        {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface)
        })).ok_or(RendererError::NoAdapter)?;

        let (device, queue) = pollster::block_on
        (
            adapter.request_device
            (
                &wgpu::DeviceDescriptor
                {
                    label: Some("renderer device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None
            )
        )?;

        let surface_caps = surface.get_capabilities(&adapter);

        //preferably srgb format
        let format = surface_caps.formats.iter()
            .find(|format| format.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(RendererError::UnsupportedSurface)?;

        let size = window.inner_size();

        let config = wgpu::SurfaceConfiguration
        {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode: surface_caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![]
        };

        surface.configure(&device, &config);

        log::info!
        (
            "renderer ready on {} ({:?}), surface format {format:?}",
            adapter.get_info().name, adapter.get_info().backend
        );

        let output = FrameOutput::new(&device, format);

        Ok(Self { window, surface, device, queue, config, output })
    }

    /// current size of the surface in physical pixels
    pub fn surface_size(&self) -> UVec2
    {
        UVec2::new(self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32)
    {
        // a minimized window reports zero, keep the last valid configuration
        if width == 0 || height == 0
        {
            return
        }

        self.config.width = width;
        self.config.height = height;
        self.reconfigure()
    }

    /// required to be called for any change to the surface config to be effective.
    pub fn reconfigure(&mut self)
    {
        self.surface.configure(&self.device, &self.config)
    }

    /// uploads the canvas and draws it stretched over the whole surface
    ///
    /// # Errors
    ///
    /// this function will return an error if the surface texture can't be retrieved.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), wgpu::SurfaceError>
    {
        if canvas.is_empty()
        {
            return Ok(())
        }

        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.output.upload(&self.device, &self.queue, canvas);

        let mut encoder = self.device.create_command_encoder
        (
            &wgpu::CommandEncoderDescriptor { label: Some("present encoder") }
        );

        self.output.draw(&mut encoder, &view);

        self.queue.submit([encoder.finish()]);
        output.present();

        Ok(())
    }
}

/// handles how to present the canvas texture
struct FrameOutput
{
    texture: Option<FrameTexture>,
    bindgroup: Option<wgpu::BindGroup>,
    bindgroup_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
}

impl FrameOutput
{
    fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self
    {
        let module = &device.create_shader_module
        (
            wgpu::ShaderModuleDescriptor
            {
                label: Some("present shader"),
                source: wgpu::ShaderSource::Wgsl
                (
                    include_str!("shaders/present.wgsl").into()
                )
            }
        );

        let bindgroup_layout = device.create_bind_group_layout
        (
            &wgpu::BindGroupLayoutDescriptor
            {
                label: Some("frame output bindgroup layout"),
                entries: &[wgpu::BindGroupLayoutEntry
                {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture
                    {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false
                    },
                    count: None
                },wgpu::BindGroupLayoutEntry
                {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None
                }]
            }
        );

        let sampler = device.create_sampler
        (
            &wgpu::SamplerDescriptor
            {
                label: Some("frame output sampler"),
                mag_filter: wgpu::FilterMode::Nearest,
                min_filter: wgpu::FilterMode::Nearest,
                ..Default::default()
            }
        );

        let pipeline = device.create_render_pipeline
        (
            &wgpu::RenderPipelineDescriptor
            {
                label: Some("output render pipeline"),
                layout: Some(&device.create_pipeline_layout
                (
                    &wgpu::PipelineLayoutDescriptor
                    {
                        label: Some("output pipeline layout"),
                        bind_group_layouts: &[&bindgroup_layout],
                        push_constant_ranges: &[]
                    }
                )),
                vertex: wgpu::VertexState
                {
                    module,
                    entry_point: "vertex",
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    buffers: &[vertex_layout_desc()]
                },
                primitive: wgpu::PrimitiveState
                {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some
                (
                    wgpu::FragmentState
                    {
                        module,
                        entry_point: "fragment",
                        compilation_options: wgpu::PipelineCompilationOptions::default(),
                        targets: &[Some(wgpu::ColorTargetState
                        {
                            format,
                            blend: Some(wgpu::BlendState::REPLACE),
                            write_mask: wgpu::ColorWrites::ALL
                        })]
                    }
                ),
                multiview: None
            }
        );

        let vertex_buffer = device.create_buffer_init
        (
            &wgpu::util::BufferInitDescriptor
            {
                label: Some("screen vertex buffer"),
                contents: bytemuck::cast_slice(&SCREEN_VERTICES),
                usage: wgpu::BufferUsages::VERTEX
            }
        );

        let index_buffer = device.create_buffer_init
        (
            &wgpu::util::BufferInitDescriptor
            {
                label: Some("screen index buffer"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX
            }
        );

        Self
        {
            texture: None,
            bindgroup: None,
            bindgroup_layout,
            sampler,
            vertex_buffer,
            index_buffer,
            pipeline,
        }
    }

    /// writes the canvas to the frame texture, recreating it when the canvas size changed
    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, canvas: &Canvas)
    {
        let size = canvas.size();

        if self.texture.as_ref().map(FrameTexture::size) != Some(size)
        {
            log::debug!("recreating frame texture at {}x{}", size.x, size.y);

            let texture = FrameTexture::new(device, size);

            self.bindgroup = Some(device.create_bind_group
            (
                &wgpu::BindGroupDescriptor
                {
                    label: Some("frame output bindgroup"),
                    layout: &self.bindgroup_layout,
                    entries: &[wgpu::BindGroupEntry
                    {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&texture.view)
                    },wgpu::BindGroupEntry
                    {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler)
                    }]
                }
            ));
            self.texture = Some(texture);
        }

        if let Some(texture) = &self.texture
        {
            texture.write(queue, canvas)
        }
    }

    /// draws the frame texture over `dest`
    fn draw(&self, encoder: &mut wgpu::CommandEncoder, dest: &wgpu::TextureView)
    {
        let mut pass = encoder.begin_render_pass
        (
            &wgpu::RenderPassDescriptor
            {
                label: Some("present renderpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment
                {
                    view: dest,
                    resolve_target: None,
                    ops: wgpu::Operations
                    {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store
                    }
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None
            }
        );

        let Some(bindgroup) = &self.bindgroup
        else
        {
            return
        };

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, bindgroup, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }
}
