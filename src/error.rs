//! Error types for mesh generation and refinement.

use thiserror::Error;

/// Errors that can occur while building or refining a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Diagonal pattern tag is not one of `a`, `b`, `ca`, `cb`
    #[error("Invalid orientation '{0}' (expected one of: a, b, ca, cb)")]
    InvalidOrientation(String),

    /// Thickness list empty, or fewer element counts than thicknesses
    #[error("Layer count mismatch: {thicknesses} thickness(es), {counts} element count(s)")]
    LayerCountMismatch { thicknesses: usize, counts: usize },

    /// No voxel label falls inside the selected range
    #[error("Empty selection: no voxel label in [{min}, {max}]")]
    EmptySelection { min: String, max: String },

    /// An element has non-positive signed volume
    #[error("Degenerate geometry: element {element} has signed volume {volume:e}")]
    DegenerateGeometry { element: usize, volume: f64 },

    /// Bad coordinate axis, count or physical size
    #[error("Invalid axis: {message}")]
    InvalidAxis { message: String },

    /// An element references a node outside the node set
    #[error("Invalid connectivity: element {element} references node {node}, mesh has {num_nodes} nodes")]
    InvalidConnectivity {
        element: usize,
        node: usize,
        num_nodes: usize,
    },

    /// Label array length differs from the element count
    #[error("Label mismatch: {elements} element(s), {labels} label(s)")]
    LabelMismatch { elements: usize, labels: usize },

    /// Operation called on the wrong element type
    #[error("Unexpected element kind: expected {expected}, found {found}")]
    UnexpectedElementKind {
        expected: &'static str,
        found: &'static str,
    },

    /// Selected voxel value is not an integer that fits an element label
    #[error("Invalid voxel label {value}: not an integer in i32 range")]
    InvalidLabel { value: String },

    /// Voxel data length does not match the image dimensions
    #[error("Invalid voxel image: expected {expected} values, found {found}")]
    InvalidImage { expected: usize, found: usize },

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Config(#[from] toml::de::Error),
}

impl MeshError {
    /// Creates an invalid axis error.
    pub fn invalid_axis(message: impl Into<String>) -> Self {
        Self::InvalidAxis {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MeshError>;
