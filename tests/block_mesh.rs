use approx::assert_relative_eq;
use tetmesh::{assess_mesh_quality, BlockGenerator, MeshError, Orientation};

#[test]
fn test_unit_block_volume_sum() {
    // 10 x 10 x 10 block split 2 x 2 x 2
    for orientation in Orientation::ALL {
        let mesh = BlockGenerator::generate_uniform(10.0, 10.0, 10.0, 2, 2, 2, orientation).unwrap();
        assert_eq!(mesh.num_elements(), 6 * 8);
        assert_eq!(mesh.num_nodes(), 27);
        assert_relative_eq!(mesh.total_volume(), 1000.0, epsilon = 1e-9);
    }
}

#[test]
fn test_non_uniform_axes() {
    let xs = [0.0, 0.1, 0.5, 2.0];
    let ys = [-1.0, 0.0, 4.0];
    let zs = [1.0, 1.25, 3.0];
    let mesh = BlockGenerator::generate(&xs, &ys, &zs, Orientation::Ca).unwrap();

    assert_eq!(mesh.num_elements(), 6 * 3 * 2 * 2);
    assert_eq!(mesh.num_nodes(), 4 * 3 * 3);
    assert_relative_eq!(mesh.total_volume(), 2.0 * 5.0 * 2.0, epsilon = 1e-12);

    let quality = assess_mesh_quality(&mesh);
    assert_eq!(quality.num_inverted, 0);
    assert!(quality.min_volume > 0.0);
}

#[test]
fn test_invalid_orientation_tag() {
    match "d".parse::<Orientation>() {
        Err(MeshError::InvalidOrientation(tag)) => assert_eq!(tag, "d"),
        other => panic!("expected InvalidOrientation, got {:?}", other),
    }
}

#[test]
fn test_large_block_quality_parallel_path() {
    // 6 * 6^3 = 1296 elements, above the parallel threshold
    let mesh = BlockGenerator::generate_uniform(1.0, 2.0, 3.0, 6, 6, 6, Orientation::B).unwrap();
    let quality = assess_mesh_quality(&mesh);

    assert_eq!(quality.total_elements, 1296);
    assert!(quality.is_acceptable(), "{}", quality.report());
    assert_relative_eq!(quality.total_volume, 6.0, epsilon = 1e-10);
}
