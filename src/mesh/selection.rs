//! Element selection by bounding box, used for label assignment.

use nalgebra::Point3;

use crate::mesh::Mesh;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all `points`; `None` when empty
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::new(first, first), |bb, p| Self {
            min: bb.min.inf(p),
            max: bb.max.sup(p),
        }))
    }

    /// Box grown by `amount` on every side
    pub fn inflate(&self, amount: f64) -> Self {
        let d = nalgebra::Vector3::repeat(amount);
        Self::new(self.min - d, self.max + d)
    }

    pub fn contains(&self, p: &Point3<f64>) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }
}

impl Mesh {
    /// Bounding box of all nodes
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.geometry.nodes)
    }
}

/// Elements whose corner nodes all lie inside `bbox` grown by `inflate`
pub fn select_elements_in_box(mesh: &Mesh, bbox: &BoundingBox, inflate: f64) -> Vec<usize> {
    let region = bbox.inflate(inflate);
    let nodes = &mesh.geometry.nodes;
    let elements = &mesh.connectivity.elements;

    (0..elements.len())
        .filter(|&e| elements.corners(e).iter().all(|&n| region.contains(&nodes[n])))
        .collect()
}

/// Label every element inside the inflated box; returns how many were labelled
pub fn label_elements_in_box(mesh: &mut Mesh, bbox: &BoundingBox, inflate: f64, label: i32) -> usize {
    let selected = select_elements_in_box(mesh, bbox, inflate);
    mesh.connectivity.set_labels(&selected, label);
    selected.len()
}
