/// Structured tetrahedral block generator
///
/// Splits every hexahedral cell of an axis-aligned (possibly non-uniform)
/// grid into 6 linear tetrahedra. The split pattern of a cell is picked by the
/// parity of i + j + k from two precomputed tables per orientation, which keeps
/// the face diagonals of neighbouring cells identical.

use crate::error::Result;
use crate::generators::{uniform_axis, validate_axis, Orientation, CELL_CORNERS};
use crate::mesh::{check_orientation, Connectivity, Geometry, Mesh, Tet4Element};
use crate::refinement::refine_to_quadratic;

type CellPattern = [[usize; 4]; 6];

/// Around body diagonal 1-7
const T4_A: CellPattern = [
    [1, 3, 0, 7],
    [1, 2, 3, 7],
    [1, 6, 2, 7],
    [1, 5, 6, 7],
    [1, 4, 5, 7],
    [1, 0, 4, 7],
];

/// Around body diagonal 0-6
const T4_B: CellPattern = [
    [0, 1, 2, 6],
    [0, 2, 3, 6],
    [0, 3, 7, 6],
    [0, 7, 4, 6],
    [0, 4, 5, 6],
    [0, 5, 1, 6],
];

/// Two prisms cut by the plane x = y; face diagonals differ on opposite x faces
const T4_PRISM: CellPattern = [
    [0, 1, 2, 6],
    [0, 5, 1, 6],
    [0, 4, 5, 6],
    [3, 7, 4, 6],
    [3, 4, 0, 6],
    [3, 0, 2, 6],
];

/// `T4_PRISM` mirrored through the cell centre (0<->6, 1<->7, 2<->4, 3<->5)
const T4_PRISM_INV: CellPattern = [
    [6, 4, 7, 0],
    [6, 7, 3, 0],
    [6, 3, 2, 0],
    [5, 2, 1, 0],
    [5, 6, 2, 0],
    [5, 4, 6, 0],
];

/// Simple structured block generator
pub struct BlockGenerator;

impl BlockGenerator {
    /// (even, odd) cell patterns for an orientation
    fn patterns(orientation: Orientation) -> (&'static CellPattern, &'static CellPattern) {
        match orientation {
            Orientation::A => (&T4_A, &T4_A),
            Orientation::B => (&T4_B, &T4_B),
            Orientation::Ca => (&T4_PRISM, &T4_PRISM_INV),
            Orientation::Cb => (&T4_PRISM_INV, &T4_PRISM),
        }
    }

    /// Global node index of grid point (i, j, k)
    ///
    /// Nodes are numbered x fastest, then y, then z:
    /// index = i + j*(nl+1) + k*(nl+1)*(nw+1)
    pub fn node_index(i: usize, j: usize, k: usize, nl: usize, nw: usize) -> usize {
        i + j * (nl + 1) + k * (nl + 1) * (nw + 1)
    }

    /// Generate a linear tetrahedral mesh on the grid xs × ys × zs
    ///
    /// # Arguments
    /// * `xs`, `ys`, `zs` - Strictly increasing axis positions
    /// * `orientation` - Diagonal pattern of the cell split
    ///
    /// Produces (nl+1)(nw+1)(nh+1) nodes and 6·nl·nw·nh elements, all labelled 0.
    pub fn generate(xs: &[f64], ys: &[f64], zs: &[f64], orientation: Orientation) -> Result<Mesh> {
        validate_axis("x", xs)?;
        validate_axis("y", ys)?;
        validate_axis("z", zs)?;

        let (nl, nw, nh) = (xs.len() - 1, ys.len() - 1, zs.len() - 1);
        log::debug!(
            "block grid {}x{}x{} cells, orientation '{}'",
            nl,
            nw,
            nh,
            orientation
        );

        let mut geometry = Geometry::with_capacity((nl + 1) * (nw + 1) * (nh + 1));
        for &z in zs {
            for &y in ys {
                for &x in xs {
                    geometry.add_node(x, y, z);
                }
            }
        }

        let (even, odd) = Self::patterns(orientation);
        let mut elements = Vec::with_capacity(6 * nl * nw * nh);

        for k in 0..nh {
            for j in 0..nw {
                for i in 0..nl {
                    let corners = CELL_CORNERS
                        .map(|[di, dj, dk]| Self::node_index(i + di, j + dj, k + dk, nl, nw));
                    let pattern = if (i + j + k) % 2 == 0 { even } else { odd };

                    elements.extend(
                        pattern
                            .iter()
                            .map(|t| Tet4Element::new(t.map(|local| corners[local]))),
                    );
                }
            }
        }

        let mesh = Mesh::new(geometry, Connectivity::from_tet4(elements));
        check_orientation(&mesh)?;

        log::info!(
            "generated block mesh: {} nodes, {} Tet4 elements",
            mesh.num_nodes(),
            mesh.num_elements()
        );
        Ok(mesh)
    }

    /// Generate a block [0,length]×[0,width]×[0,height] with uniform spacing
    ///
    /// # Arguments
    /// * `nl`, `nw`, `nh` - Number of divisions in each direction
    pub fn generate_uniform(
        length: f64,
        width: f64,
        height: f64,
        nl: usize,
        nw: usize,
        nh: usize,
        orientation: Orientation,
    ) -> Result<Mesh> {
        let xs = uniform_axis(length, nl)?;
        let ys = uniform_axis(width, nw)?;
        let zs = uniform_axis(height, nh)?;
        Self::generate(&xs, &ys, &zs, orientation)
    }

    /// Generate the block and refine it to Tet10 elements
    pub fn generate_quadratic(xs: &[f64], ys: &[f64], zs: &[f64], orientation: Orientation) -> Result<Mesh> {
        let linear = Self::generate(xs, ys, zs, orientation)?;
        refine_to_quadratic(&linear)
    }
}
