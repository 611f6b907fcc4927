use std::collections::HashSet;
use std::fmt;

use crate::error::{MeshError, Result};

/// A 4-node linear tetrahedral element (Tet4)
///
/// Corners are ordered so that the signed volume is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tet4Element {
    /// Global node indices for this element (4 nodes)
    pub nodes: [usize; 4],
}

impl Tet4Element {
    pub fn new(nodes: [usize; 4]) -> Self {
        Self { nodes }
    }
}

/// A 10-node quadratic tetrahedral element (Tet10)
///
/// Node numbering:
/// Vertices: 0, 1, 2, 3
/// Edge midpoints:
///   4: midpoint of edge 0-1
///   5: midpoint of edge 1-2
///   6: midpoint of edge 2-0
///   7: midpoint of edge 0-3
///   8: midpoint of edge 1-3
///   9: midpoint of edge 2-3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tet10Element {
    /// Global node indices for this element (10 nodes)
    pub nodes: [usize; 10],
}

impl Tet10Element {
    pub fn new(nodes: [usize; 10]) -> Self {
        Self { nodes }
    }

    /// Get the vertex node indices (first 4 nodes)
    pub fn vertices(&self) -> [usize; 4] {
        [self.nodes[0], self.nodes[1], self.nodes[2], self.nodes[3]]
    }

    /// Get edges as pairs of local vertex indices, in mid-node order
    pub fn edges() -> [(usize, usize); 6] {
        [
            (0, 1), // edge 0
            (1, 2), // edge 1
            (2, 0), // edge 2
            (0, 3), // edge 3
            (1, 3), // edge 4
            (2, 3), // edge 5
        ]
    }

    /// Mid-edge node shared by global corner nodes `a` and `b`, if they form an edge
    pub fn mid_node(&self, a: usize, b: usize) -> Option<usize> {
        let v = self.vertices();
        Self::edges()
            .iter()
            .position(|&(i, j)| (v[i] == a && v[j] == b) || (v[i] == b && v[j] == a))
            .map(|slot| self.nodes[4 + slot])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Tet4,
    Tet10,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Tet4 => "Tet4",
            ElementKind::Tet10 => "Tet10",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element connectivity, either all linear or all quadratic
#[derive(Debug, Clone)]
pub enum ElementSet {
    Tet4(Vec<Tet4Element>),
    Tet10(Vec<Tet10Element>),
}

impl ElementSet {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementSet::Tet4(_) => ElementKind::Tet4,
            ElementSet::Tet10(_) => ElementKind::Tet10,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ElementSet::Tet4(elems) => elems.len(),
            ElementSet::Tet10(elems) => elems.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Corner node indices of element `elem`
    pub fn corners(&self, elem: usize) -> [usize; 4] {
        match self {
            ElementSet::Tet4(elems) => elems[elem].nodes,
            ElementSet::Tet10(elems) => elems[elem].vertices(),
        }
    }

    /// All node indices of element `elem` (4 or 10)
    pub fn node_indices(&self, elem: usize) -> &[usize] {
        match self {
            ElementSet::Tet4(elems) => &elems[elem].nodes,
            ElementSet::Tet10(elems) => &elems[elem].nodes,
        }
    }
}

/// Connectivity information for the mesh: elements plus one label per element
#[derive(Debug, Clone)]
pub struct Connectivity {
    pub elements: ElementSet,
    /// Material / layer label per element (default 0)
    pub labels: Vec<i32>,
}

impl Connectivity {
    pub fn new() -> Self {
        Self::from_tet4(Vec::new())
    }

    /// Linear connectivity with every label set to 0
    pub fn from_tet4(elements: Vec<Tet4Element>) -> Self {
        let labels = vec![0; elements.len()];
        Self {
            elements: ElementSet::Tet4(elements),
            labels,
        }
    }

    /// Append a linear element with its label
    pub fn add_tet4(&mut self, element: Tet4Element, label: i32) -> Result<()> {
        match &mut self.elements {
            ElementSet::Tet4(elems) => elems.push(element),
            ElementSet::Tet10(_) => {
                return Err(MeshError::UnexpectedElementKind {
                    expected: ElementKind::Tet4.name(),
                    found: ElementKind::Tet10.name(),
                })
            }
        }
        self.labels.push(label);
        Ok(())
    }

    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    pub fn kind(&self) -> ElementKind {
        self.elements.kind()
    }

    pub fn label(&self, elem: usize) -> i32 {
        self.labels[elem]
    }

    /// Reassign the label of each listed element
    pub fn set_labels(&mut self, elems: &[usize], label: i32) {
        for &e in elems {
            self.labels[e] = label;
        }
    }

    /// Elements carrying `label`
    pub fn elements_with_label(&self, label: i32) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == label)
            .map(|(e, _)| e)
            .collect()
    }

    /// Unique corner-to-corner edges, each as (smaller, larger) node index
    pub fn unique_edges(&self) -> HashSet<(usize, usize)> {
        let mut edges = HashSet::new();
        for elem in 0..self.num_elements() {
            let v = self.elements.corners(elem);
            for (i, j) in Tet10Element::edges() {
                let (a, b) = (v[i], v[j]);
                edges.insert(if a < b { (a, b) } else { (b, a) });
            }
        }
        edges
    }
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::new()
    }
}
