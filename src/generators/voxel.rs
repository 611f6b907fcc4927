/// Labelled voxel image → linear tetrahedral mesh
///
/// Each selected voxel is split into 5 tetrahedra: four corner tetrahedra
/// around a central one. The central tetrahedron alternates between the two
/// inscribed tetrahedra of the cube with the parity of (I + J + K), so all
/// face diagonals of neighbouring voxels coincide.
///
/// Corner vertices are deduplicated with a rolling two-layer buffer over the
/// (N+1)×(P+1) vertex plane: memory stays at two image slices regardless of M.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{MeshError, Result};
use crate::generators::CELL_CORNERS;
use crate::mesh::{check_orientation, Connectivity, Geometry, Mesh, Tet4Element};

type VoxelPattern = [[usize; 4]; 5];

/// Central tetrahedron on corners 1, 3, 4, 6
const VOXEL_EVEN: VoxelPattern = [
    [0, 1, 3, 4],
    [2, 3, 1, 6],
    [5, 1, 4, 6],
    [7, 4, 3, 6],
    [1, 3, 4, 6],
];

/// Central tetrahedron on corners 0, 2, 5, 7
const VOXEL_ODD: VoxelPattern = [
    [1, 2, 0, 5],
    [3, 0, 2, 7],
    [4, 5, 0, 7],
    [6, 2, 5, 7],
    [0, 5, 2, 7],
];

/// Numeric voxel value that can become an element label
pub trait VoxelLabel: Copy + PartialOrd + fmt::Display {
    /// The value as an `i32` element label, if it is integral and in range
    fn to_label(self) -> Option<i32>;
}

macro_rules! impl_voxel_label_int {
    ($($t:ty),*) => {
        $(impl VoxelLabel for $t {
            fn to_label(self) -> Option<i32> {
                i32::try_from(self).ok()
            }
        })*
    };
}

macro_rules! impl_voxel_label_float {
    ($($t:ty),*) => {
        $(impl VoxelLabel for $t {
            fn to_label(self) -> Option<i32> {
                let v = f64::from(self);
                let integral = v.is_finite() && v.fract() == 0.0;
                (integral && v >= i32::MIN as f64 && v <= i32::MAX as f64).then(|| v as i32)
            }
        })*
    };
}

impl_voxel_label_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_voxel_label_float!(f32, f64);

/// Dense 3-D image of voxel labels, dims M×N×P, stored with P fastest
#[derive(Debug, Clone)]
pub struct VoxelImage<T> {
    dims: [usize; 3],
    data: Vec<T>,
}

impl<T: Copy> VoxelImage<T> {
    pub fn new(dims: [usize; 3], data: Vec<T>) -> Result<Self> {
        // A product that overflows can never match an allocated length
        let expected = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(MeshError::InvalidImage {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Image whose voxel (i, j, k) holds `f(i, j, k)`
    pub fn from_fn(dims: [usize; 3], mut f: impl FnMut(usize, usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
        for i in 0..dims[0] {
            for j in 0..dims[1] {
                for k in 0..dims[2] {
                    data.push(f(i, j, k));
                }
            }
        }
        Self { dims, data }
    }

    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    pub fn get(&self, i: usize, j: usize, k: usize) -> T {
        self.data[(i * self.dims[1] + j) * self.dims[2] + k]
    }
}

/// Vertex ids of the current and next M-layer of voxel corners
struct SliceBuffer {
    stride: usize,
    current: Vec<Option<usize>>,
    next: Vec<Option<usize>>,
}

impl SliceBuffer {
    fn new(n: usize, p: usize) -> Self {
        let size = (n + 1) * (p + 1);
        Self {
            stride: p + 1,
            current: vec![None; size],
            next: vec![None; size],
        }
    }

    /// Slot for corner (j, k) in the current (`di == 0`) or next layer
    fn slot(&mut self, di: usize, j: usize, k: usize) -> &mut Option<usize> {
        let layer = if di == 0 { &mut self.current } else { &mut self.next };
        &mut layer[j * self.stride + k]
    }

    /// Drop the current layer; the next layer becomes current
    fn advance(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill(None);
    }
}

/// Mesh every voxel whose label lies in `range` with 5 tetrahedra
///
/// # Arguments
/// * `image` - Voxel labels, scanned with M outermost, then N, then P
/// * `voxel_size` - Physical voxel dimensions along M, N, P
/// * `range` - Inclusive label selection
///
/// Node (i, j, k) of the vertex lattice sits at (i·dx, j·dy, k·dz). Nodes are
/// numbered in first-use order. Each element carries its voxel's label.
/// Fails with `EmptySelection` if no voxel label lies in `range`, and with
/// `InvalidLabel` if a selected value is not an integer that fits an `i32`.
pub fn voxel_to_tet_mesh<T: VoxelLabel>(
    image: &VoxelImage<T>,
    voxel_size: [f64; 3],
    range: RangeInclusive<T>,
) -> Result<Mesh> {
    if let Some(d) = voxel_size.iter().find(|d| !(**d > 0.0) || !d.is_finite()) {
        return Err(MeshError::invalid_axis(format!(
            "voxel size must be positive and finite, got {}",
            d
        )));
    }

    let [m, n, p] = image.dims();
    let [dx, dy, dz] = voxel_size;

    let mut geometry = Geometry::new();
    let mut connectivity = Connectivity::new();
    let mut buffer = SliceBuffer::new(n, p);

    for i in 0..m {
        for j in 0..n {
            for k in 0..p {
                let value = image.get(i, j, k);
                if !range.contains(&value) {
                    continue;
                }
                let label = value.to_label().ok_or_else(|| MeshError::InvalidLabel {
                    value: value.to_string(),
                })?;

                let mut corners = [0usize; 8];
                for (c, &[di, dj, dk]) in CELL_CORNERS.iter().enumerate() {
                    let slot = buffer.slot(di, j + dj, k + dk);
                    corners[c] = *slot.get_or_insert_with(|| {
                        geometry.add_node(
                            (i + di) as f64 * dx,
                            (j + dj) as f64 * dy,
                            (k + dk) as f64 * dz,
                        )
                    });
                }

                let pattern = if (i + j + k) % 2 == 0 { &VOXEL_EVEN } else { &VOXEL_ODD };
                for t in pattern {
                    connectivity.add_tet4(Tet4Element::new(t.map(|local| corners[local])), label)?;
                }
            }
        }
        buffer.advance();
        log::trace!("voxel layer {}/{}: {} nodes so far", i + 1, m, geometry.num_nodes());
    }

    if connectivity.num_elements() == 0 {
        return Err(MeshError::EmptySelection {
            min: range.start().to_string(),
            max: range.end().to_string(),
        });
    }

    let mesh = Mesh::new(geometry, connectivity);
    check_orientation(&mesh)?;

    log::info!(
        "voxel mesh: {} selected voxels, {} nodes, {} Tet4 elements",
        mesh.num_elements() / 5,
        mesh.num_nodes(),
        mesh.num_elements()
    );
    Ok(mesh)
}
