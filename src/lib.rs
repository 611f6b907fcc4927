pub mod config;
pub mod error;
pub mod generators;
pub mod mesh;
pub mod refinement;

pub use config::{AxisConfig, MeshConfig, MeshKind};
pub use error::{MeshError, Result};
pub use generators::{
    generate_layered_plate, uniform_axis, voxel_to_tet_mesh, BlockGenerator, Orientation, VoxelImage,
    VoxelLabel,
};
pub use mesh::{
    assess_mesh_quality, check_orientation, label_elements_in_box, select_elements_in_box, signed_volume,
    BoundingBox, Connectivity, EdgeIndex, ElementKind, ElementSet, FaceIndex, FaceRecord, Geometry, Mesh,
    MeshQuality, Tet10Element, Tet4Element,
};
pub use refinement::refine_to_quadratic;
