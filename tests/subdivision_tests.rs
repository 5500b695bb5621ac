use gasket::gasket::{subdivide, subdivide_tetrahedron, triangle_count, BASE_TETRAHEDRON, MAX_DIVISION};
use gasket::math::DEFAULT_PALETTE;
use gasket::GasketError;
use glam::Vec3;

#[cfg(test)]
mod subdivision_tests {
    use super::*;

    #[test]
    fn test_triangle_count_grows_by_four_per_level() {
        for depth in 0..=5u32 {
            let mesh = subdivide_tetrahedron(&BASE_TETRAHEDRON, depth as i32).unwrap();
            assert_eq!(mesh.len(), 4usize.pow(depth + 1), "depth {}", depth);
            assert_eq!(mesh.len(), triangle_count(depth));
            assert_eq!(mesh.vertex_count(), 3 * mesh.len());
        }
    }

    #[test]
    fn test_colors_cycle_per_leaf_tetrahedron() {
        let mesh = subdivide_tetrahedron(&BASE_TETRAHEDRON, 3).unwrap();
        let colors: Vec<u8> = mesh.triangles().iter().map(|t| t.color).collect();

        assert_eq!(colors.len(), 256);
        for chunk in colors.chunks(4) {
            assert_eq!(chunk, &[0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_vertex_colors_repeat_each_face_index_three_times() {
        let mesh = subdivide_tetrahedron(&BASE_TETRAHEDRON, 2).unwrap();
        let colors: Vec<u8> = mesh.color_indices().collect();

        assert_eq!(colors.len(), 3 * 64);
        for chunk in colors.chunks(12) {
            assert_eq!(chunk, &[0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
        }
    }

    #[test]
    fn test_depth_zero_is_the_reference_tetrahedron() {
        let [a, b, c, d] = BASE_TETRAHEDRON;
        let mesh = subdivide_tetrahedron(&BASE_TETRAHEDRON, 0).unwrap();
        let faces: Vec<[Vec3; 3]> = mesh.triangles().iter().map(|t| t.vertices).collect();

        assert_eq!(faces, vec![[a, c, b], [a, c, d], [a, b, d], [b, c, d]]);
    }

    #[test]
    fn test_subdivision_is_deterministic() {
        let first = subdivide_tetrahedron(&BASE_TETRAHEDRON, 4).unwrap();
        let second = subdivide_tetrahedron(&BASE_TETRAHEDRON, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_leaf_sits_at_vertex_a() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 1.0, 0.0);
        let d = Vec3::new(0.0, 0.0, 1.0);
        let mesh = subdivide(a, b, c, d, 1);

        // First child is (a, mid(a,b), mid(a,c), mid(a,d)); its first face is (a, ac, ab)
        let first = mesh.triangles()[0].vertices;
        assert_eq!(first[0], a);
        assert_eq!(first[1], Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(first[2], Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_every_vertex_stays_inside_the_bounding_box() {
        let mesh = subdivide_tetrahedron(&BASE_TETRAHEDRON, 3).unwrap();
        let min = BASE_TETRAHEDRON.iter().fold(Vec3::splat(f32::MAX), |m, v| m.min(*v));
        let max = BASE_TETRAHEDRON.iter().fold(Vec3::splat(f32::MIN), |m, v| m.max(*v));

        for triangle in mesh.triangles() {
            for v in triangle.vertices {
                assert!(v.cmpge(min - 1e-6).all() && v.cmple(max + 1e-6).all());
            }
        }
    }

    #[test]
    fn test_negative_division_is_rejected() {
        let err = subdivide_tetrahedron(&BASE_TETRAHEDRON, -1).unwrap_err();
        assert!(matches!(err, GasketError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_division_above_cap_is_rejected() {
        assert!(subdivide_tetrahedron(&BASE_TETRAHEDRON, MAX_DIVISION + 1).is_err());
    }

    #[test]
    fn test_flatten_matches_triangle_order() {
        let mesh = subdivide_tetrahedron(&BASE_TETRAHEDRON, 1).unwrap();
        let flat = mesh.flatten(&DEFAULT_PALETTE);

        assert_eq!(flat.positions.len(), 48);
        assert_eq!(flat.colors.len(), 48);
        // Face 1 of the first leaf uses palette slot 1 for all three corners
        for i in 3..6 {
            assert_eq!(flat.colors[i], DEFAULT_PALETTE[1]);
        }
    }
}
