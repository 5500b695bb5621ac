use glam::Vec3;
use serde::Serialize;

use crate::math::Palette;
use crate::types::Vertex;

pub type Point3 = Vec3;

/// One face of the gasket, tagged with the palette slot it is painted with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],
    pub color: u8,
}

impl Triangle {
    pub const fn new(a: Point3, b: Point3, c: Point3, color: u8) -> Self {
        Self {
            vertices: [a, b, c],
            color,
        }
    }
}

/// Triangle soup produced by subdivision, in emission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub(crate) fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Face color index of every vertex, three per triangle
    pub fn color_indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.triangles
            .iter()
            .flat_map(|t| std::iter::repeat(t.color).take(3))
    }

    /// Flatten into parallel position and color lists
    pub fn flatten(&self, palette: &Palette) -> FlatMesh {
        let positions = self
            .triangles
            .iter()
            .flat_map(|t| t.vertices.map(|v| v.to_array()))
            .collect();
        let colors = self
            .color_indices()
            .map(|i| palette[i as usize])
            .collect();

        FlatMesh { positions, colors }
    }

    /// Interleaved vertex buffer contents for the GPU
    pub fn to_vertices(&self, palette: &Palette) -> Vec<Vertex> {
        self.triangles
            .iter()
            .flat_map(|t| {
                let color = palette[t.color as usize];
                t.vertices.map(|v| Vertex::new(v.to_array(), color))
            })
            .collect()
    }
}

/// Vertex list plus a parallel color list, one entry per vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatMesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::DEFAULT_PALETTE;

    fn single_face() -> Mesh {
        Mesh::from_triangles(vec![Triangle::new(Vec3::X, Vec3::Y, Vec3::Z, 3)])
    }

    #[test]
    fn flatten_keeps_lists_parallel() {
        let flat = single_face().flatten(&DEFAULT_PALETTE);

        assert_eq!(flat.positions, vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(flat.colors, vec![DEFAULT_PALETTE[3]; 3]);
    }

    #[test]
    fn to_vertices_matches_flatten() {
        let mesh = single_face();
        let flat = mesh.flatten(&DEFAULT_PALETTE);
        let vertices = mesh.to_vertices(&DEFAULT_PALETTE);

        assert_eq!(vertices.len(), mesh.vertex_count());
        for (i, v) in vertices.iter().enumerate() {
            assert_eq!(v.position, flat.positions[i]);
            assert_eq!(v.color, flat.colors[i]);
        }
    }

    #[test]
    fn empty_mesh() {
        let mesh = Mesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.color_indices().count(), 0);
    }
}
