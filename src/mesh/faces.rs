//! Canonical-face index
//!
//! Maps an unordered tuple of vertex indices (a "hyperface": an edge for
//! K = 2, a triangle for K = 3) to exactly one new-node id. Faces are stored
//! in an arena and bucketed by their anchor vertex, the smallest index of the
//! tuple; the remaining vertices distinguish faces within a bucket.

use std::collections::HashMap;

/// One canonical face and the node assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRecord<const K: usize> {
    /// Sorted vertex indices; `vertices[0]` is the anchor
    vertices: [usize; K],
    /// Node id assigned when the face was first seen
    pub node: usize,
}

impl<const K: usize> FaceRecord<K> {
    pub fn anchor(&self) -> usize {
        self.vertices[0]
    }

    /// Vertices other than the anchor, ascending
    pub fn others(&self) -> &[usize] {
        &self.vertices[1..]
    }

    pub fn vertices(&self) -> &[usize; K] {
        &self.vertices
    }
}

/// Set of unordered K-vertex faces with one node id per face
#[derive(Debug, Clone)]
pub struct FaceIndex<const K: usize> {
    /// anchor vertex -> record ids
    buckets: HashMap<usize, Vec<usize>>,
    records: Vec<FaceRecord<K>>,
}

/// Canonical-face index over edges
pub type EdgeIndex = FaceIndex<2>;

impl<const K: usize> FaceIndex<K> {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            records: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: HashMap::with_capacity(capacity),
            records: Vec::with_capacity(capacity),
        }
    }

    fn canonical(mut face: [usize; K]) -> [usize; K] {
        face.sort_unstable();
        face
    }

    /// Node id of `face`, creating it with id `next_id` on first sight
    ///
    /// Vertex order of `face` is irrelevant: `[5, 9]` and `[9, 5]` resolve to
    /// the same record. Callers pass the next free node id (normally the
    /// current node count), so a return value equal to `next_id` means the face
    /// was new and its node must be appended.
    pub fn lookup_or_create(&mut self, face: [usize; K], next_id: usize) -> usize {
        let key = Self::canonical(face);
        let bucket = self.buckets.entry(key[0]).or_default();

        if let Some(&rid) = bucket.iter().find(|&&rid| self.records[rid].vertices == key) {
            return self.records[rid].node;
        }

        bucket.push(self.records.len());
        self.records.push(FaceRecord {
            vertices: key,
            node: next_id,
        });
        next_id
    }

    /// Node id of `face`, if it has been seen
    pub fn get(&self, face: [usize; K]) -> Option<usize> {
        let key = Self::canonical(face);
        self.buckets
            .get(&key[0])?
            .iter()
            .map(|&rid| &self.records[rid])
            .find(|rec| rec.vertices == key)
            .map(|rec| rec.node)
    }

    /// Number of distinct faces
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct anchor vertices
    pub fn num_anchors(&self) -> usize {
        self.buckets.len()
    }

    /// Records in creation order
    pub fn records(&self) -> impl Iterator<Item = &FaceRecord<K>> {
        self.records.iter()
    }
}

impl<const K: usize> Default for FaceIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
