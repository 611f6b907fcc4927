use std::collections::{HashMap, HashSet};

use approx::assert_relative_eq;
use tetmesh::{check_orientation, voxel_to_tet_mesh, Mesh, MeshError, VoxelImage};

fn distinct_positions(mesh: &Mesh) -> usize {
    mesh.geometry
        .nodes
        .iter()
        .map(|p| {
            (
                (p.x * 1000.0).round() as i64,
                (p.y * 1000.0).round() as i64,
                (p.z * 1000.0).round() as i64,
            )
        })
        .collect::<HashSet<_>>()
        .len()
}

#[test]
fn test_two_abutting_voxels() {
    let image = VoxelImage::new([2, 1, 1], vec![1u8, 1]).unwrap();
    let mesh = voxel_to_tet_mesh(&image, [1.0, 1.0, 1.0], 1..=1).unwrap();

    assert_eq!(mesh.num_elements(), 10);
    assert_eq!(mesh.num_nodes(), 12);
    assert_eq!(distinct_positions(&mesh), 12);
    assert_relative_eq!(mesh.total_volume(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_label_range_selection() {
    // Labels 0..4 cycling through a 3 x 3 x 3 image
    let image = VoxelImage::from_fn([3, 3, 3], |i, j, k| ((i + 2 * j + 3 * k) % 5) as i32);
    let selected = (0..3)
        .flat_map(|i| (0..3).flat_map(move |j| (0..3).map(move |k| (i, j, k))))
        .filter(|&(i, j, k)| (2..=3).contains(&image.get(i, j, k)))
        .count();

    let mesh = voxel_to_tet_mesh(&image, [0.5, 0.5, 2.0], 2..=3).unwrap();

    assert_eq!(mesh.num_elements(), 5 * selected);
    assert!(mesh.connectivity.labels.iter().all(|l| (2..=3).contains(l)));
    assert_relative_eq!(mesh.total_volume(), selected as f64 * 0.5, epsilon = 1e-12);
    check_orientation(&mesh).unwrap();
}

/// Occurrences of each triangular face, keyed by its sorted corner ids
fn face_counts(mesh: &Mesh) -> HashMap<[usize; 3], usize> {
    let mut faces = HashMap::new();
    for e in 0..mesh.num_elements() {
        let c = mesh.connectivity.elements.corners(e);
        for mut f in [[c[0], c[1], c[2]], [c[0], c[1], c[3]], [c[0], c[2], c[3]], [c[1], c[2], c[3]]] {
            f.sort_unstable();
            *faces.entry(f).or_insert(0) += 1;
        }
    }
    faces
}

#[test]
fn test_no_duplicate_vertices_in_partial_selection() {
    let image = VoxelImage::from_fn([4, 5, 3], |i, j, k| ((i * 7 + j * 3 + k * 5) % 3 != 0) as u8);
    let mesh = voxel_to_tet_mesh(&image, [1.0, 1.0, 1.0], 1..=1).unwrap();

    assert_eq!(distinct_positions(&mesh), mesh.num_nodes());
    assert!(face_counts(&mesh).values().all(|&count| count <= 2));
}

#[test]
fn test_full_selection_faces_conform() {
    let dims = [4, 3, 5];
    let size = [1.0, 2.0, 0.5];
    let image = VoxelImage::from_fn(dims, |_, _, _| 1u8);
    let mesh = voxel_to_tet_mesh(&image, size, 1..=1).unwrap();
    let nodes = &mesh.geometry.nodes;

    // A face is on the hull iff all three corners share an outer plane
    let on_hull = |f: &[usize; 3]| {
        (0..3).any(|axis| {
            let extent = dims[axis] as f64 * size[axis];
            [0.0, extent]
                .iter()
                .any(|&plane| f.iter().all(|&n| (nodes[n][axis] - plane).abs() < 1e-9))
        })
    };

    let faces = face_counts(&mesh);
    let mut hull = 0;
    for (face, &count) in &faces {
        if on_hull(face) {
            assert_eq!(count, 1, "hull face {:?}", face);
            hull += 1;
        } else {
            assert_eq!(count, 2, "interior face {:?}", face);
        }
    }
    // Two triangles per hull square
    assert_eq!(hull, 2 * 2 * (4 * 3 + 3 * 5 + 4 * 5));
}

#[test]
fn test_full_image_matches_lattice_node_count() {
    let image = VoxelImage::from_fn([3, 2, 4], |_, _, _| 7i32);
    let mesh = voxel_to_tet_mesh(&image, [1.0, 1.0, 1.0], 0..=10).unwrap();

    assert_eq!(mesh.num_nodes(), 4 * 3 * 5);
    assert_eq!(mesh.num_elements(), 5 * 24);
}

#[test]
fn test_empty_selection() {
    let image = VoxelImage::new([2, 2, 1], vec![1i32, 2, 3, 4]).unwrap();
    match voxel_to_tet_mesh(&image, [1.0, 1.0, 1.0], 5..=9) {
        Err(MeshError::EmptySelection { min, max }) => assert_eq!((min.as_str(), max.as_str()), ("5", "9")),
        other => panic!("expected EmptySelection, got {:?}", other),
    }
}
