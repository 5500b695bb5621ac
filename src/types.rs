/// Per-vertex data for the GPU: position plus the face color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Transform uniform buffer data for GPU, mirrors `Transform` in gasket.wgsl
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub theta: [f32; 3],
    pub scale: f32,
    pub trans: [f32; 2],
    pub _pad: [f32; 2],
}

impl TransformUniform {
    pub fn new(theta: [f64; 3], scale: f64, trans: [f64; 2]) -> Self {
        Self {
            theta: theta.map(|t| t as f32),
            scale: scale as f32,
            trans: trans.map(|t| t as f32),
            _pad: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_wgsl_layout() {
        // vec3 + f32 + vec2 + padding
        assert_eq!(std::mem::size_of::<TransformUniform>(), 32);
    }

    #[test]
    fn vertex_stride() {
        assert_eq!(std::mem::size_of::<Vertex>(), 28);
        assert_eq!(Vertex::layout().array_stride, 28);
    }

    #[test]
    fn uniform_narrows_to_f32() {
        let u = TransformUniform::new([90.0, -45.5, 0.0], 2.5, [0.25, -0.5]);
        assert_eq!(u.theta, [90.0, -45.5, 0.0]);
        assert_eq!(u.scale, 2.5);
        assert_eq!(u.trans, [0.25, -0.5]);
    }
}
