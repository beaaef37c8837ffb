//! Scene container
//!
//! The Scene owns all polytopes in insertion order. Update runs in that
//! order, and renderers draw in that order (painter's order across objects).

use crate::polytope::Polytope;

/// A handle to a polytope in the scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PolytopeHandle(usize);

impl PolytopeHandle {
    /// Get the raw index of this handle
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Insertion-ordered container of polytopes
pub struct Scene {
    objects: Vec<Polytope>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Create a scene with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
        }
    }

    /// Add a polytope, returning its handle
    pub fn add(&mut self, polytope: Polytope) -> PolytopeHandle {
        let handle = PolytopeHandle(self.objects.len());
        self.objects.push(polytope);
        handle
    }

    /// Get a polytope by handle
    pub fn get(&self, handle: PolytopeHandle) -> Option<&Polytope> {
        self.objects.get(handle.0)
    }

    /// Get a mutable polytope by handle
    pub fn get_mut(&mut self, handle: PolytopeHandle) -> Option<&mut Polytope> {
        self.objects.get_mut(handle.0)
    }

    /// Find a polytope by name
    pub fn find(&self, name: &str) -> Option<&Polytope> {
        self.objects
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
    }

    /// Number of polytopes
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove all polytopes
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Polytope> {
        self.objects.iter()
    }

    /// Iterate mutably in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Polytope> {
        self.objects.iter_mut()
    }

    /// Advance every polytope's auto-spin, in insertion order
    pub fn update(&mut self, dt: f32) {
        for polytope in &mut self.objects {
            polytope.update(dt);
        }
    }

    /// Total edge count across all polytopes (for logging)
    pub fn total_edges(&self) -> usize {
        self.objects.iter().map(|p| p.topology().edge_count()).sum()
    }
}
