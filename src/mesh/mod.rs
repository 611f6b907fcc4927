pub mod faces;
pub mod geometry;
pub mod quality;
pub mod selection;
pub mod topology;

pub use faces::{EdgeIndex, FaceIndex, FaceRecord};
pub use geometry::{signed_volume, Geometry, Mesh};
pub use quality::{assess_mesh_quality, check_orientation, element_volumes, MeshQuality};
pub use selection::{label_elements_in_box, select_elements_in_box, BoundingBox};
pub use topology::{Connectivity, ElementKind, ElementSet, Tet10Element, Tet4Element};
