use nalgebra::Point3;

use super::topology::Connectivity;
use crate::error::{MeshError, Result};

/// Signed volume of the tetrahedron (p1, p2, p3, p4)
///
/// One sixth of the scalar triple product of the edge vectors from `p1`:
/// V = (p2-p1) · ((p3-p1) × (p4-p1)) / 6
///
/// V > 0: right-handed corner ordering
/// V = 0: degenerate (flat) tetrahedron
/// V < 0: inverted ordering
pub fn signed_volume(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>, p4: &Point3<f64>) -> f64 {
    let e1 = p2 - p1;
    let e2 = p3 - p1;
    let e3 = p4 - p1;

    e1.dot(&e2.cross(&e3)) / 6.0
}

/// Node set of a mesh
///
/// Node identity is the index into `nodes`; generators only ever append.
#[derive(Debug, Clone)]
pub struct Geometry {
    /// Node coordinates
    pub nodes: Vec<Point3<f64>>,
}

impl Geometry {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn add_node(&mut self, x: f64, y: f64, z: f64) -> usize {
        self.add_point(Point3::new(x, y, z))
    }

    pub fn add_point(&mut self, point: Point3<f64>) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(point);
        idx
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Signed volume of the tetrahedron spanned by four node indices
    pub fn tet_signed_volume(&self, corners: [usize; 4]) -> f64 {
        signed_volume(
            &self.nodes[corners[0]],
            &self.nodes[corners[1]],
            &self.nodes[corners[2]],
            &self.nodes[corners[3]],
        )
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete mesh: node set plus labelled element set
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub connectivity: Connectivity,
}

impl Mesh {
    pub fn new(geometry: Geometry, connectivity: Connectivity) -> Self {
        Self {
            geometry,
            connectivity,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.geometry.num_nodes()
    }

    pub fn num_elements(&self) -> usize {
        self.connectivity.num_elements()
    }

    /// Signed volume of element `elem`, from its 4 corner nodes
    ///
    /// Mid-edge nodes of Tet10 elements sit on straight edges, so the
    /// corner tetrahedron carries the full element volume.
    pub fn element_volume(&self, elem: usize) -> f64 {
        self.geometry.tet_signed_volume(self.connectivity.elements.corners(elem))
    }

    /// Sum of signed element volumes
    pub fn total_volume(&self) -> f64 {
        (0..self.num_elements()).map(|e| self.element_volume(e)).sum()
    }

    /// Check that every element references valid nodes and every element has a label
    pub fn validate(&self) -> Result<()> {
        let num_nodes = self.num_nodes();
        let elements = &self.connectivity.elements;

        for elem in 0..elements.len() {
            if let Some(&node) = elements.node_indices(elem).iter().find(|&&n| n >= num_nodes) {
                return Err(MeshError::InvalidConnectivity {
                    element: elem,
                    node,
                    num_nodes,
                });
            }
        }

        if self.connectivity.labels.len() != elements.len() {
            return Err(MeshError::LabelMismatch {
                elements: elements.len(),
                labels: self.connectivity.labels.len(),
            });
        }

        Ok(())
    }
}
