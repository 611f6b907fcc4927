//! Structured, layered and voxel-based tetrahedral mesh generators.

pub mod block;
pub mod layered;
pub mod voxel;

pub use block::BlockGenerator;
pub use layered::{generate_layered_plate, LAYER_TOLERANCE_DIVISOR};
pub use voxel::{voxel_to_tet_mesh, VoxelImage, VoxelLabel};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};

/// Named diagonal pattern used to split each hexahedral cell into tetrahedra
///
/// * `A`  - six tetrahedra around the (1,0,0)-(0,1,1) body diagonal
/// * `B`  - six tetrahedra around the (0,0,0)-(1,1,1) body diagonal
/// * `Ca` - six-tetrahedron prism split, point-inverted on odd cells
/// * `Cb` - as `Ca` with the even/odd roles exchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Orientation {
    #[default]
    A,
    B,
    Ca,
    Cb,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Orientation::A, Orientation::B, Orientation::Ca, Orientation::Cb];

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::A => "a",
            Orientation::B => "b",
            Orientation::Ca => "ca",
            Orientation::Cb => "cb",
        }
    }
}

impl FromStr for Orientation {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a" => Ok(Orientation::A),
            "b" => Ok(Orientation::B),
            "ca" => Ok(Orientation::Ca),
            "cb" => Ok(Orientation::Cb),
            other => Err(MeshError::InvalidOrientation(other.to_string())),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = MeshError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Orientation> for String {
    fn from(o: Orientation) -> String {
        o.as_str().to_string()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local corner offsets (di, dj, dk) of a hexahedral cell
///
/// Bottom face counter-clockwise from the origin corner, then the top face:
/// 0=(0,0,0) 1=(1,0,0) 2=(1,1,0) 3=(0,1,0) 4=(0,0,1) 5=(1,0,1) 6=(1,1,1) 7=(0,1,1)
pub(crate) const CELL_CORNERS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// `count + 1` evenly spaced positions on [0, length]
pub fn uniform_axis(length: f64, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(MeshError::invalid_axis("element count must be at least 1"));
    }
    if !(length > 0.0) || !length.is_finite() {
        return Err(MeshError::invalid_axis(format!(
            "length must be positive and finite, got {}",
            length
        )));
    }

    Ok((0..=count)
        .map(|i| length * i as f64 / count as f64)
        .collect())
}

/// Check that an axis has at least two finite, strictly increasing positions
pub(crate) fn validate_axis(name: &str, coords: &[f64]) -> Result<()> {
    if coords.len() < 2 {
        return Err(MeshError::invalid_axis(format!(
            "{} axis needs at least 2 positions, got {}",
            name,
            coords.len()
        )));
    }
    if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
        return Err(MeshError::invalid_axis(format!("{} axis contains {}", name, bad)));
    }
    if let Some(i) = coords.windows(2).position(|w| !(w[1] > w[0])) {
        return Err(MeshError::invalid_axis(format!(
            "{} axis is not strictly increasing at position {} ({} -> {})",
            name,
            i + 1,
            coords[i],
            coords[i + 1]
        )));
    }
    Ok(())
}
