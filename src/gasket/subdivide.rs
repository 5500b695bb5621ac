use glam::Vec3;

use super::mesh::{Mesh, Point3, Triangle};
use crate::error::{GasketError, Result};

/// Deepest subdivision accepted from user input. 4^9 triangles at this depth.
pub const MAX_DIVISION: i32 = 8;

/// Reference tetrahedron the gasket is carved from, centered on the origin
pub const BASE_TETRAHEDRON: [Point3; 4] = [
    Vec3::new(0.0, 0.0, -0.25),
    Vec3::new(0.0, 0.2357, 0.0833),
    Vec3::new(-0.2041, -0.1179, 0.0833),
    Vec3::new(0.2041, -0.1179, 0.0833),
];

/// Number of triangles emitted at a given depth
pub fn triangle_count(depth: u32) -> usize {
    4usize.pow(depth + 1)
}

/// Recursively split tetrahedron `abcd` into a Sierpinski gasket.
///
/// Faces are emitted depth-first in sub-tetrahedron order `a`, `b`, `c`, `d`,
/// each leaf contributing its four faces with color indices 0..=3.
pub fn subdivide(a: Point3, b: Point3, c: Point3, d: Point3, depth: u32) -> Mesh {
    let mut triangles = Vec::with_capacity(triangle_count(depth));
    divide_tetra(a, b, c, d, depth, &mut triangles);
    Mesh::from_triangles(triangles)
}

/// Validating entry point for depths coming from the UI or a config file
pub fn subdivide_tetrahedron(vertices: &[Point3; 4], division: i32) -> Result<Mesh> {
    if division < 0 {
        return Err(GasketError::InvalidConfiguration(format!(
            "division must be non-negative, got {}",
            division
        )));
    }
    if division > MAX_DIVISION {
        return Err(GasketError::InvalidConfiguration(format!(
            "division {} exceeds the maximum of {}",
            division, MAX_DIVISION
        )));
    }

    let [a, b, c, d] = *vertices;
    Ok(subdivide(a, b, c, d, division as u32))
}

fn tetra(a: Point3, b: Point3, c: Point3, d: Point3, out: &mut Vec<Triangle>) {
    // Winding per face matters for culling
    out.push(Triangle::new(a, c, b, 0));
    out.push(Triangle::new(a, c, d, 1));
    out.push(Triangle::new(a, b, d, 2));
    out.push(Triangle::new(b, c, d, 3));
}

fn divide_tetra(a: Point3, b: Point3, c: Point3, d: Point3, depth: u32, out: &mut Vec<Triangle>) {
    if depth == 0 {
        tetra(a, b, c, d, out);
        return;
    }

    let ab = a.lerp(b, 0.5);
    let ac = a.lerp(c, 0.5);
    let ad = a.lerp(d, 0.5);
    let bc = b.lerp(c, 0.5);
    let bd = b.lerp(d, 0.5);
    let cd = c.lerp(d, 0.5);

    let depth = depth - 1;
    divide_tetra(a, ab, ac, ad, depth, out);
    divide_tetra(ab, b, bc, bd, depth, out);
    divide_tetra(ac, bc, c, cd, depth, out);
    divide_tetra(ad, bd, cd, d, depth, out);
}
