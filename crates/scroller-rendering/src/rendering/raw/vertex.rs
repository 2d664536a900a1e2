#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex
{
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

/// a quad covering the whole clip space, texture origin on the top left
pub const SCREEN_VERTICES: [Vertex; 4] =
[
    Vertex { position: [-1., 1., 0.], tex_coords: [0., 0.] },
    Vertex { position: [-1., -1., 0.], tex_coords: [0., 1.] },
    Vertex { position: [1., -1., 0.], tex_coords: [1., 1.] },
    Vertex { position: [1., 1., 0.], tex_coords: [1., 0.] },
];

/// indices of the two triangles making a quad
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// return how to read the vertex data to the gpu
pub fn vertex_layout_desc<'a>() -> wgpu::VertexBufferLayout<'a>
{
    wgpu::VertexBufferLayout
    {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes:
        &[
            wgpu::VertexAttribute
            {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute
            {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            }
        ]
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn vertex_layout_matches_the_struct()
    {
        let layout = vertex_layout_desc();

        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&SCREEN_VERTICES).len(), 80);
    }

    #[test]
    fn screen_quad_maps_the_top_left_corner_to_the_texture_origin()
    {
        let top_left = SCREEN_VERTICES[QUAD_INDICES[0] as usize];

        assert_eq!(top_left.position[..2], [-1., 1.]);
        assert_eq!(top_left.tex_coords, [0., 0.]);
    }
}
