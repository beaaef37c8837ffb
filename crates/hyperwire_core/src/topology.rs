//! Polytope topology
//!
//! A Topology is the immutable connectivity of a polytope: local-space
//! vertices plus edge/face/cell index lists. Built once by the shape
//! constructors and never mutated afterwards.

use hyperwire_math::Vec4;

/// Errors raised by topology and pose construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A size, scale, or index argument was rejected
    InvalidArgument(String),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Immutable polytope connectivity
///
/// Every index referenced by edges, faces, or cells is below the vertex
/// count; edges are stored with ascending indices and contain no duplicate
/// or self pairs. The constructor enforces both.
#[derive(Clone, Debug)]
pub struct Topology {
    vertices: Vec<Vec4>,
    edges: Vec<[usize; 2]>,
    faces: Vec<[usize; 3]>,
    cells: Vec<Vec<usize>>,
}

impl Topology {
    /// Build a topology, validating index bounds and edge well-formedness
    pub fn new(
        vertices: Vec<Vec4>,
        edges: Vec<[usize; 2]>,
        faces: Vec<[usize; 3]>,
        cells: Vec<Vec<usize>>,
    ) -> Result<Self, GeometryError> {
        let n = vertices.len();

        let mut normalized = Vec::with_capacity(edges.len());
        for [a, b] in edges {
            if a == b {
                return Err(GeometryError::InvalidArgument(format!(
                    "edge connects vertex {} to itself",
                    a
                )));
            }
            if a >= n || b >= n {
                return Err(GeometryError::InvalidArgument(format!(
                    "edge ({}, {}) references a vertex >= {}",
                    a, b, n
                )));
            }
            let pair = if a < b { [a, b] } else { [b, a] };
            if normalized.contains(&pair) {
                return Err(GeometryError::InvalidArgument(format!(
                    "duplicate edge ({}, {})",
                    pair[0], pair[1]
                )));
            }
            normalized.push(pair);
        }

        for face in &faces {
            if face.iter().any(|&i| i >= n) {
                return Err(GeometryError::InvalidArgument(format!(
                    "face {:?} references a vertex >= {}",
                    face, n
                )));
            }
        }
        for cell in &cells {
            if cell.iter().any(|&i| i >= n) {
                return Err(GeometryError::InvalidArgument(format!(
                    "cell {:?} references a vertex >= {}",
                    cell, n
                )));
            }
        }

        Ok(Self {
            vertices,
            edges: normalized,
            faces,
            cells,
        })
    }

    /// Local-space vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    /// Edges as ascending vertex index pairs
    #[inline]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Faces as vertex index triples
    #[inline]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Cells as vertex index lists
    #[inline]
    pub fn cells(&self) -> &[Vec<usize>] {
        &self.cells
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec4> {
        vec![
            Vec4::new(0.0, 0.0, 0.0, 0.0),
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(1.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_valid_topology() {
        let t = Topology::new(
            square(),
            vec![[0, 1], [1, 2], [2, 3], [3, 0]],
            vec![[0, 1, 2], [0, 2, 3]],
            vec![vec![0, 1, 2, 3]],
        )
        .unwrap();
        assert_eq!(t.vertex_count(), 4);
        assert_eq!(t.edge_count(), 4);
        assert_eq!(t.face_count(), 2);
        assert_eq!(t.cell_count(), 1);
    }

    #[test]
    fn test_edges_normalized_ascending() {
        let t = Topology::new(square(), vec![[3, 0], [2, 1]], vec![], vec![]).unwrap();
        assert_eq!(t.edges(), &[[0, 3], [1, 2]]);
    }

    #[test]
    fn test_self_edge_rejected() {
        let err = Topology::new(square(), vec![[1, 1]], vec![], vec![]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let err = Topology::new(square(), vec![[0, 1], [1, 0]], vec![], vec![]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn test_out_of_range_edge_rejected() {
        let err = Topology::new(square(), vec![[0, 4]], vec![], vec![]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn test_out_of_range_face_rejected() {
        let err = Topology::new(square(), vec![], vec![[0, 1, 9]], vec![]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }
}
