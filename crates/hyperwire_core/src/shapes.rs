//! Shape catalog
//!
//! The closed set of buildable polytopes. Each template stores its
//! construction parameters and derives the full topology on demand; the
//! catalog is serializable so scene files can name shapes directly.

use serde::{Deserialize, Serialize};

use crate::topology::{GeometryError, Topology};
use hyperwire_math::Vec4;

/// Serializable polytope template
///
/// Shapes are created in local space, centered at the origin. The owning
/// polytope's pose positions them in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeTemplate {
    /// A 4D hypercube (tesseract): 16 vertices, 32 edges, 24 square faces
    /// (stored triangulated), 8 cubic cells.
    Tesseract {
        /// Full side length
        size: f32,
    },
    /// A 4D simplex (5-cell): 5 vertices, 10 edges, 10 triangular faces,
    /// 5 tetrahedral cells.
    FiveCell {
        /// Overall scale
        size: f32,
    },
    /// A 16-cell (4D hyperoctahedron): 8 vertices, 24 edges, 32 triangular
    /// faces, 16 tetrahedral cells.
    SixteenCell {
        /// Distance between opposite vertices
        size: f32,
    },
}

impl ShapeTemplate {
    /// Create a tesseract template
    pub fn tesseract(size: f32) -> Self {
        ShapeTemplate::Tesseract { size }
    }

    /// Create a five-cell template
    pub fn five_cell(size: f32) -> Self {
        ShapeTemplate::FiveCell { size }
    }

    /// Create a sixteen-cell template
    pub fn sixteen_cell(size: f32) -> Self {
        ShapeTemplate::SixteenCell { size }
    }

    /// The size parameter of this template
    pub fn size(&self) -> f32 {
        match *self {
            ShapeTemplate::Tesseract { size }
            | ShapeTemplate::FiveCell { size }
            | ShapeTemplate::SixteenCell { size } => size,
        }
    }

    /// Build the topology for this template.
    ///
    /// Rejects non-positive sizes.
    pub fn build(&self) -> Result<Topology, GeometryError> {
        let size = self.size();
        if size <= 0.0 {
            return Err(GeometryError::InvalidArgument(format!(
                "shape size must be positive, got {}",
                size
            )));
        }
        match *self {
            ShapeTemplate::Tesseract { size } => build_tesseract(size),
            ShapeTemplate::FiveCell { size } => build_five_cell(size),
            ShapeTemplate::SixteenCell { size } => build_sixteen_cell(size),
        }
    }
}

/// Tesseract vertices are binary-counted: vertex `i` sits at +h on axis `a`
/// when bit `a` of `i` is set, -h otherwise. Edges connect Hamming-distance-1
/// pairs; squares vary two axes with the other two fixed.
fn build_tesseract(size: f32) -> Result<Topology, GeometryError> {
    let h = size * 0.5;

    let vertices: Vec<Vec4> = (0u32..16)
        .map(|i| {
            let c = |bit: u32| if i & (1 << bit) != 0 { h } else { -h };
            Vec4::new(c(0), c(1), c(2), c(3))
        })
        .collect();

    let mut edges = Vec::with_capacity(32);
    for i in 0..16usize {
        for j in (i + 1)..16 {
            if (i ^ j).count_ones() == 1 {
                edges.push([i, j]);
            }
        }
    }

    // 24 squares, each stored as two triangles
    let mut faces = Vec::with_capacity(48);
    for a in 0..4u32 {
        for b in (a + 1)..4 {
            let fixed: Vec<u32> = (0..4).filter(|&x| x != a && x != b).collect();
            for bits in 0..4u32 {
                let mut base = 0usize;
                if bits & 1 != 0 {
                    base |= 1 << fixed[0];
                }
                if bits & 2 != 0 {
                    base |= 1 << fixed[1];
                }
                let v00 = base;
                let v10 = base | (1 << a);
                let v01 = base | (1 << b);
                let v11 = base | (1 << a) | (1 << b);
                faces.push([v00, v10, v11]);
                faces.push([v00, v11, v01]);
            }
        }
    }

    // 8 cubic cells: one axis held at each of its two values
    let mut cells = Vec::with_capacity(8);
    for axis in 0..4u32 {
        for value in 0..2usize {
            let cell: Vec<usize> = (0..16usize)
                .filter(|i| (i >> axis) & 1 == value)
                .collect();
            cells.push(cell);
        }
    }

    Topology::new(vertices, edges, faces, cells)
}

/// Regular 4-simplex: four base vertices at (+-1, +-1, +-1, -1/sqrt(5)) with
/// an even number of minus signs among xyz, plus the apex at (0,0,0,4/sqrt(5)).
/// Every vertex pair is an edge, every triple a face, every quadruple a cell.
fn build_five_cell(size: f32) -> Result<Topology, GeometryError> {
    let s5 = 5.0f32.sqrt();
    let base = [
        Vec4::new(1.0, 1.0, 1.0, -1.0 / s5),
        Vec4::new(1.0, -1.0, -1.0, -1.0 / s5),
        Vec4::new(-1.0, 1.0, -1.0, -1.0 / s5),
        Vec4::new(-1.0, -1.0, 1.0, -1.0 / s5),
        Vec4::new(0.0, 0.0, 0.0, 4.0 / s5),
    ];
    let vertices: Vec<Vec4> = base.iter().map(|&v| v * size).collect();

    let mut edges = Vec::with_capacity(10);
    let mut faces = Vec::with_capacity(10);
    let mut cells = Vec::with_capacity(5);
    for i in 0..5usize {
        for j in (i + 1)..5 {
            edges.push([i, j]);
            for k in (j + 1)..5 {
                faces.push([i, j, k]);
                for l in (k + 1)..5 {
                    cells.push(vec![i, j, k, l]);
                }
            }
        }
    }

    Topology::new(vertices, edges, faces, cells)
}

/// 16-cell: one vertex at +-(size/2) on each axis, paired antipodally as
/// (0,1), (2,3), (4,5), (6,7). Vertices connect to every vertex except their
/// antipode; tetrahedral cells take one vertex from each axis pair.
fn build_sixteen_cell(size: f32) -> Result<Topology, GeometryError> {
    let h = size * 0.5;
    let vertices = vec![
        Vec4::new(h, 0.0, 0.0, 0.0),
        Vec4::new(-h, 0.0, 0.0, 0.0),
        Vec4::new(0.0, h, 0.0, 0.0),
        Vec4::new(0.0, -h, 0.0, 0.0),
        Vec4::new(0.0, 0.0, h, 0.0),
        Vec4::new(0.0, 0.0, -h, 0.0),
        Vec4::new(0.0, 0.0, 0.0, h),
        Vec4::new(0.0, 0.0, 0.0, -h),
    ];

    let antipodal = |i: usize, j: usize| i / 2 == j / 2;

    let mut edges = Vec::with_capacity(24);
    let mut faces = Vec::with_capacity(32);
    for i in 0..8usize {
        for j in (i + 1)..8 {
            if antipodal(i, j) {
                continue;
            }
            edges.push([i, j]);
            for k in (j + 1)..8 {
                if antipodal(i, k) || antipodal(j, k) {
                    continue;
                }
                faces.push([i, j, k]);
            }
        }
    }

    // 16 tetrahedra: one sign choice per axis
    let mut cells = Vec::with_capacity(16);
    for bits in 0..16usize {
        let cell: Vec<usize> = (0..4).map(|axis| 2 * axis + ((bits >> axis) & 1)).collect();
        cells.push(cell);
    }

    Topology::new(vertices, edges, faces, cells)
}
