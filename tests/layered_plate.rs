use tetmesh::{generate_layered_plate, ElementKind, Mesh, MeshError, Orientation};

fn corner_z_range(mesh: &Mesh, elem: usize) -> (f64, f64) {
    mesh.connectivity
        .elements
        .corners(elem)
        .iter()
        .map(|&n| mesh.geometry.nodes[n].z)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), z| (lo.min(z), hi.max(z)))
}

#[test]
fn test_two_layer_labels() {
    let xs = [0.0, 0.5, 1.0];
    let ys = [0.0, 1.0, 2.0, 3.0];
    let mesh = generate_layered_plate(&xs, &ys, &[1.0, 2.0], &[2, 3], Orientation::A, false).unwrap();

    // 5 element rows through the thickness, 2 x 3 cells in plane
    assert_eq!(mesh.num_elements(), 6 * 5 * 2 * 3);

    let tol = 1e-12;
    for e in 0..mesh.num_elements() {
        let (lo, hi) = corner_z_range(&mesh, e);
        match mesh.connectivity.label(e) {
            1 => assert!(lo >= -tol && hi <= 1.0 + tol, "layer 1 element at z=[{}, {}]", lo, hi),
            2 => assert!(lo >= 1.0 - tol && hi <= 3.0 + tol, "layer 2 element at z=[{}, {}]", lo, hi),
            other => panic!("unexpected label {}", other),
        }
    }

    assert_eq!(mesh.connectivity.elements_with_label(1).len(), 6 * 2 * 2 * 3);
    assert_eq!(mesh.connectivity.elements_with_label(2).len(), 6 * 3 * 2 * 3);
    approx::assert_relative_eq!(mesh.total_volume(), 1.0 * 3.0 * 3.0, epsilon = 1e-12);
}

#[test]
fn test_thin_layer_between_thick_layers() {
    let xs = [0.0, 1.0];
    let mesh = generate_layered_plate(&xs, &xs, &[0.5, 0.01, 0.5], &[1, 1, 4], Orientation::Cb, false).unwrap();

    assert_eq!(mesh.connectivity.elements_with_label(1).len(), 6);
    assert_eq!(mesh.connectivity.elements_with_label(2).len(), 6);
    assert_eq!(mesh.connectivity.elements_with_label(3).len(), 24);
}

#[test]
fn test_quadratic_layered_plate() {
    let xs = [0.0, 1.0, 2.0];
    let mesh = generate_layered_plate(&xs, &xs, &[1.0, 1.0], &[1, 1], Orientation::B, true).unwrap();

    assert_eq!(mesh.connectivity.kind(), ElementKind::Tet10);
    assert_eq!(mesh.connectivity.elements_with_label(1).len(), 24);
    assert_eq!(mesh.connectivity.elements_with_label(2).len(), 24);
    mesh.validate().unwrap();
}

#[test]
fn test_empty_thickness_list() {
    let xs = [0.0, 1.0];
    assert!(matches!(
        generate_layered_plate(&xs, &xs, &[], &[], Orientation::A, false),
        Err(MeshError::LayerCountMismatch { thicknesses: 0, counts: 0 })
    ));
}

#[test]
fn test_invalid_layer_values() {
    let xs = [0.0, 1.0];
    assert!(matches!(
        generate_layered_plate(&xs, &xs, &[1.0, -1.0], &[1, 1], Orientation::A, false),
        Err(MeshError::InvalidAxis { .. })
    ));
    assert!(matches!(
        generate_layered_plate(&xs, &xs, &[1.0], &[0], Orientation::A, false),
        Err(MeshError::InvalidAxis { .. })
    ));
}
