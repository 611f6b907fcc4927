/// Mesh orientation and volume checks
///
/// Provides tools to:
/// 1. Summarize signed element volumes (min/avg/max, inverted, near-degenerate)
/// 2. Reject meshes containing elements with non-positive signed volume
///
/// Downstream integration rules assume every element is positively oriented,
/// so generators and refinement run `check_orientation` on their output.

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;

/// Elements smaller than this fraction of the largest element count as near-degenerate
const DEGENERATE_RATIO: f64 = 1e-6;

/// Above this element count volumes are computed in parallel
const PARALLEL_THRESHOLD: usize = 1000;

/// Mesh volume statistics
#[derive(Debug, Clone)]
pub struct MeshQuality {
    /// Minimum signed element volume (should be > 0)
    pub min_volume: f64,
    /// Average signed element volume
    pub avg_volume: f64,
    /// Maximum signed element volume
    pub max_volume: f64,
    /// Sum of signed element volumes
    pub total_volume: f64,
    /// Number of inverted or flat elements (V <= 0)
    pub num_inverted: usize,
    /// Number of positive but near-degenerate elements
    pub num_degenerate: usize,
    /// Total elements
    pub total_elements: usize,
}

impl MeshQuality {
    /// Check if mesh is acceptable for assembly
    pub fn is_acceptable(&self) -> bool {
        self.num_inverted == 0 && self.num_degenerate == 0
    }

    /// Human-readable quality report
    pub fn report(&self) -> String {
        format!(
            "Mesh Quality: min_V={:.3e}, avg_V={:.3e}, max_V={:.3e}, total_V={:.6e}, inverted={}/{}, degenerate={}/{}",
            self.min_volume,
            self.avg_volume,
            self.max_volume,
            self.total_volume,
            self.num_inverted,
            self.total_elements,
            self.num_degenerate,
            self.total_elements
        )
    }
}

/// Signed volume of every element, in element order
///
/// Uses parallel computation for large meshes
pub fn element_volumes(mesh: &Mesh) -> Vec<f64> {
    let n = mesh.num_elements();

    if n > PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        (0..n).into_par_iter().map(|e| mesh.element_volume(e)).collect()
    } else {
        (0..n).map(|e| mesh.element_volume(e)).collect()
    }
}

/// Assess mesh quality from the signed volumes of all elements
pub fn assess_mesh_quality(mesh: &Mesh) -> MeshQuality {
    let volumes = element_volumes(mesh);

    let mut min_volume = f64::INFINITY;
    let mut max_volume = f64::NEG_INFINITY;
    let mut total_volume = 0.0;
    let mut num_inverted = 0;

    for &v in &volumes {
        if v <= 0.0 {
            num_inverted += 1;
        }
        min_volume = min_volume.min(v);
        max_volume = max_volume.max(v);
        total_volume += v;
    }

    let threshold = DEGENERATE_RATIO * max_volume.max(0.0);
    let num_degenerate = volumes.iter().filter(|&&v| v > 0.0 && v < threshold).count();

    let total_elements = volumes.len();
    let avg_volume = if total_elements > 0 {
        total_volume / total_elements as f64
    } else {
        0.0
    };

    MeshQuality {
        min_volume,
        avg_volume,
        max_volume,
        total_volume,
        num_inverted,
        num_degenerate,
        total_elements,
    }
}

/// Fail with `DegenerateGeometry` on the first element with V <= 0
pub fn check_orientation(mesh: &Mesh) -> Result<()> {
    let volumes = element_volumes(mesh);

    match volumes.iter().position(|&v| !(v > 0.0)) {
        Some(element) => Err(MeshError::DegenerateGeometry {
            element,
            volume: volumes[element],
        }),
        None => Ok(()),
    }
}
