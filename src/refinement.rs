//! Tet4 → Tet10 refinement
//!
//! Every unique corner edge of the input mesh receives exactly one new node at
//! its midpoint. Edges are discovered through an [`EdgeIndex`], so two
//! elements sharing an edge (in either vertex order) reference the same
//! mid-edge node.

use crate::error::{MeshError, Result};
use crate::mesh::{
    check_orientation, Connectivity, EdgeIndex, ElementKind, ElementSet, Mesh, Tet10Element,
};

/// Refine a linear tetrahedral mesh to quadratic (Tet10) elements
///
/// Output nodes are the input nodes with unchanged indices, followed by one
/// node per unique edge in first-visit order (elements in order, edges in
/// [`Tet10Element::edges`] order). Each element keeps its 4 corners and
/// appends the 6 mid-edge nodes in the same local edge order. Labels carry
/// over unchanged.
pub fn refine_to_quadratic(mesh: &Mesh) -> Result<Mesh> {
    let tets = match &mesh.connectivity.elements {
        ElementSet::Tet4(tets) => tets,
        ElementSet::Tet10(_) => {
            return Err(MeshError::UnexpectedElementKind {
                expected: ElementKind::Tet4.name(),
                found: ElementKind::Tet10.name(),
            })
        }
    };

    mesh.validate()?;
    check_orientation(mesh)?;

    let mut geometry = mesh.geometry.clone();
    let mut edges = EdgeIndex::with_capacity(tets.len() * 2);
    let mut refined = Vec::with_capacity(tets.len());

    for tet in tets {
        let mut nodes = [0usize; 10];
        nodes[..4].copy_from_slice(&tet.nodes);

        for (slot, (a, b)) in Tet10Element::edges().into_iter().enumerate() {
            let (va, vb) = (tet.nodes[a], tet.nodes[b]);
            let next = geometry.num_nodes();
            let mid = edges.lookup_or_create([va, vb], next);

            if mid == next {
                let p = nalgebra::center(&geometry.nodes[va], &geometry.nodes[vb]);
                geometry.add_point(p);
            }
            nodes[4 + slot] = mid;
        }

        refined.push(Tet10Element::new(nodes));
    }

    log::debug!(
        "quadratic refinement: {} unique edges over {} anchors",
        edges.len(),
        edges.num_anchors()
    );

    let refined = Mesh::new(
        geometry,
        Connectivity {
            elements: ElementSet::Tet10(refined),
            labels: mesh.connectivity.labels.clone(),
        },
    );

    log::info!(
        "refined {} Tet4 -> Tet10: {} nodes ({} added)",
        refined.num_elements(),
        refined.num_nodes(),
        refined.num_nodes() - mesh.num_nodes()
    );
    Ok(refined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Geometry, Tet4Element};
    use approx::assert_relative_eq;

    fn single_tet() -> Mesh {
        let mut geometry = Geometry::new();
        geometry.add_node(0.0, 0.0, 0.0);
        geometry.add_node(2.0, 0.0, 0.0);
        geometry.add_node(0.0, 2.0, 0.0);
        geometry.add_node(0.0, 0.0, 2.0);
        Mesh::new(geometry, Connectivity::from_tet4(vec![Tet4Element::new([0, 1, 2, 3])]))
    }

    #[test]
    fn test_single_tet_midpoints() {
        let mesh = refine_to_quadratic(&single_tet()).unwrap();
        assert_eq!(mesh.num_nodes(), 10);
        assert_eq!(mesh.connectivity.kind(), ElementKind::Tet10);

        let ElementSet::Tet10(elems) = &mesh.connectivity.elements else {
            panic!("expected Tet10 elements");
        };
        let elem = elems[0];
        assert_eq!(elem.vertices(), [0, 1, 2, 3]);

        for (slot, (a, b)) in Tet10Element::edges().into_iter().enumerate() {
            let mid = mesh.geometry.nodes[elem.nodes[4 + slot]];
            let expected = nalgebra::center(&mesh.geometry.nodes[a], &mesh.geometry.nodes[b]);
            assert_relative_eq!(mid, expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_shared_face_shares_mid_nodes() {
        let mut base = single_tet();
        base.geometry.add_node(2.0, 2.0, 2.0);
        base.connectivity.add_tet4(Tet4Element::new([1, 2, 3, 4]), 3).unwrap();

        let mesh = refine_to_quadratic(&base).unwrap();
        // 4 + 5 nodes, 9 unique edges
        assert_eq!(mesh.num_nodes(), 5 + 9);
        assert_eq!(mesh.connectivity.labels, vec![0, 3]);

        let ElementSet::Tet10(elems) = &mesh.connectivity.elements else {
            panic!("expected Tet10 elements");
        };
        for (a, b) in [(1, 2), (2, 3), (3, 1)] {
            assert_eq!(elems[0].mid_node(a, b), elems[1].mid_node(b, a));
            assert!(elems[0].mid_node(a, b).is_some());
        }
    }

    #[test]
    fn test_rejects_quadratic_input() {
        let once = refine_to_quadratic(&single_tet()).unwrap();
        assert!(matches!(
            refine_to_quadratic(&once),
            Err(MeshError::UnexpectedElementKind { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_input() {
        let mut mesh = single_tet();
        mesh.connectivity = Connectivity::from_tet4(vec![Tet4Element::new([0, 2, 1, 3])]);
        assert!(matches!(
            refine_to_quadratic(&mesh),
            Err(MeshError::DegenerateGeometry { element: 0, .. })
        ));
    }
}
