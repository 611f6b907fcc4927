//! Configuration for mesh generation jobs
//!
//! Reads a TOML description of one mesh (structured block, layered plate or
//! small inline voxel image) and builds it.
//!
//! ```toml
//! quadratic = true
//!
//! [mesh]
//! type = "layered"
//! x = { length = 10.0, count = 4 }
//! y = { coords = [0.0, 1.0, 3.0] }
//! thicknesses = [1.0, 2.0]
//! counts = [2, 3]
//! orientation = "ca"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::generators::{
    generate_layered_plate, uniform_axis, voxel_to_tet_mesh, BlockGenerator, Orientation, VoxelImage,
};
use crate::mesh::Mesh;
use crate::refinement::refine_to_quadratic;

/// One coordinate axis: explicit positions or a uniform (length, count) pair
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AxisConfig {
    Coords { coords: Vec<f64> },
    Uniform { length: f64, count: usize },
}

impl AxisConfig {
    pub fn positions(&self) -> Result<Vec<f64>> {
        match self {
            AxisConfig::Coords { coords } => Ok(coords.clone()),
            AxisConfig::Uniform { length, count } => uniform_axis(*length, *count),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MeshKind {
    Block {
        x: AxisConfig,
        y: AxisConfig,
        z: AxisConfig,
        #[serde(default)]
        orientation: Orientation,
    },
    Layered {
        x: AxisConfig,
        y: AxisConfig,
        thicknesses: Vec<f64>,
        counts: Vec<usize>,
        #[serde(default)]
        orientation: Orientation,
    },
    Voxel {
        /// Image dimensions (M, N, P)
        dims: [usize; 3],
        /// Labels with P fastest
        data: Vec<i32>,
        /// Physical voxel size along M, N, P
        voxel_size: [f64; 3],
        /// Inclusive label selection [min, max]
        range: [i32; 2],
    },
}

/// Main mesh job configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MeshConfig {
    /// Refine the generated mesh to Tet10
    #[serde(default)]
    pub quadratic: bool,
    pub mesh: MeshKind,
}

impl MeshConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Run the job
    pub fn build(&self) -> Result<Mesh> {
        let mesh = match &self.mesh {
            MeshKind::Block { x, y, z, orientation } => {
                BlockGenerator::generate(&x.positions()?, &y.positions()?, &z.positions()?, *orientation)?
            }
            MeshKind::Layered {
                x,
                y,
                thicknesses,
                counts,
                orientation,
            } => {
                // Refinement happens below, once for every mesh kind
                generate_layered_plate(&x.positions()?, &y.positions()?, thicknesses, counts, *orientation, false)?
            }
            MeshKind::Voxel {
                dims,
                data,
                voxel_size,
                range,
            } => {
                let image = VoxelImage::new(*dims, data.clone())?;
                voxel_to_tet_mesh(&image, *voxel_size, range[0]..=range[1])?
            }
        };

        if self.quadratic {
            refine_to_quadratic(&mesh)
        } else {
            Ok(mesh)
        }
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        match &self.mesh {
            MeshKind::Block { orientation, .. } => {
                log::info!("mesh job: block, orientation '{}'", orientation)
            }
            MeshKind::Layered {
                thicknesses,
                orientation,
                ..
            } => log::info!(
                "mesh job: layered plate, {} layer(s), orientation '{}'",
                thicknesses.len(),
                orientation
            ),
            MeshKind::Voxel { dims, range, .. } => log::info!(
                "mesh job: voxel image {}x{}x{}, labels [{}, {}]",
                dims[0],
                dims[1],
                dims[2],
                range[0],
                range[1]
            ),
        }
        log::info!("  quadratic: {}", self.quadratic);
    }
}
