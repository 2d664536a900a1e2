use crate::*;

/// gpu copy of the [Canvas], rewritten every frame
pub struct FrameTexture
{
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl FrameTexture
{
    /// the canvas holds srgb encoded rgba8 pixels
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    pub fn new(device: &wgpu::Device, size: UVec2) -> Self
    {
        let texture = device.create_texture
        (
            &wgpu::TextureDescriptor
            {
                label: Some("frame texture"),
                size: extent(size),
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: Self::FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            }
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }

    pub fn size(&self) -> UVec2
    {
        let size = self.texture.size();
        UVec2::new(size.width, size.height)
    }

    /// uploads the canvas pixels, the canvas must have the same size as the texture
    pub fn write(&self, queue: &wgpu::Queue, canvas: &Canvas)
    {
        let size = canvas.size();
        debug_assert_eq!(size, self.size(), "frame texture and canvas sizes differ");

        queue.write_texture
        (
            wgpu::ImageCopyTexture
            {
                aspect: wgpu::TextureAspect::All,
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            canvas.as_raw(),
            wgpu::ImageDataLayout
            {
                offset: 0,
                bytes_per_row: Some(4 * size.x),
                rows_per_image: Some(size.y),
            },
            extent(size)
        );
    }
}

fn extent(size: UVec2) -> wgpu::Extent3d
{
    wgpu::Extent3d
    {
        width: size.x.max(1),
        height: size.y.max(1),
        depth_or_array_layers: 1,
    }
}
