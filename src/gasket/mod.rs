mod mesh;
mod subdivide;

pub use mesh::{FlatMesh, Mesh, Point3, Triangle};
pub use subdivide::{
    subdivide, subdivide_tetrahedron, triangle_count, BASE_TETRAHEDRON, MAX_DIVISION,
};
