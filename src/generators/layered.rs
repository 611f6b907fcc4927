//! Layered (composite plate) meshes.
//!
//! Layers are stacked along z. Each layer is split uniformly into its own
//! number of element rows, the whole stack is meshed as one block, and
//! elements are labelled with their 1-based layer index.

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::generators::{validate_axis, BlockGenerator, Orientation};
use crate::mesh::{label_elements_in_box, BoundingBox, Mesh};
use crate::refinement::refine_to_quadratic;

/// Layer-membership tolerance is `min(thickness) / max(count) / LAYER_TOLERANCE_DIVISOR`
pub const LAYER_TOLERANCE_DIVISOR: f64 = 10.0;

/// Through-thickness positions: uniform subdivisions of each layer, concatenated
fn stack_coordinates(thicknesses: &[f64], counts: &[usize]) -> Vec<f64> {
    let mut zs = vec![0.0];
    let mut bottom = 0.0;

    for (&t, &n) in thicknesses.iter().zip(counts) {
        let top = bottom + t;
        zs.extend((1..n).map(|s| bottom + t * s as f64 / n as f64));
        zs.push(top);
        bottom = top;
    }
    zs
}

/// Generate a layered plate on the in-plane grid xs × ys
///
/// # Arguments
/// * `xs`, `ys` - Strictly increasing in-plane positions
/// * `thicknesses` - Layer thicknesses, bottom layer first
/// * `counts` - Element rows per layer; at least as many entries as `thicknesses`
/// * `orientation` - Diagonal pattern of the cell split
/// * `quadratic` - Refine the result to Tet10
///
/// Elements of layer `l` (0-based) carry label `l + 1`.
pub fn generate_layered_plate(
    xs: &[f64],
    ys: &[f64],
    thicknesses: &[f64],
    counts: &[usize],
    orientation: Orientation,
    quadratic: bool,
) -> Result<Mesh> {
    if thicknesses.is_empty() || counts.len() < thicknesses.len() {
        return Err(MeshError::LayerCountMismatch {
            thicknesses: thicknesses.len(),
            counts: counts.len(),
        });
    }
    if counts.len() > thicknesses.len() {
        log::warn!(
            "ignoring {} element count(s) beyond the {} layer(s)",
            counts.len() - thicknesses.len(),
            thicknesses.len()
        );
    }
    let counts = &counts[..thicknesses.len()];

    if let Some(t) = thicknesses.iter().find(|t| !(**t > 0.0) || !t.is_finite()) {
        return Err(MeshError::invalid_axis(format!(
            "layer thickness must be positive and finite, got {}",
            t
        )));
    }
    if counts.contains(&0) {
        return Err(MeshError::invalid_axis("layer element count must be at least 1"));
    }
    validate_axis("x", xs)?;
    validate_axis("y", ys)?;

    let zs = stack_coordinates(thicknesses, counts);
    let mut mesh = BlockGenerator::generate(xs, ys, &zs, orientation)?;

    let min_thickness = thicknesses.iter().copied().fold(f64::INFINITY, f64::min);
    let max_count = counts.iter().copied().max().unwrap_or(1);
    let tolerance = min_thickness / max_count as f64 / LAYER_TOLERANCE_DIVISOR;

    let (x0, x1) = (xs[0], xs[xs.len() - 1]);
    let (y0, y1) = (ys[0], ys[ys.len() - 1]);
    let mut bottom = 0.0;

    for (layer, &t) in thicknesses.iter().enumerate() {
        let top = bottom + t;
        let slab = BoundingBox::new(Point3::new(x0, y0, bottom), Point3::new(x1, y1, top));
        let labelled = label_elements_in_box(&mut mesh, &slab, tolerance, layer as i32 + 1);
        log::debug!("layer {} z=[{}, {}]: {} elements", layer + 1, bottom, top, labelled);
        bottom = top;
    }

    if quadratic {
        refine_to_quadratic(&mesh)
    } else {
        Ok(mesh)
    }
}
