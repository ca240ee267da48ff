//! Coordinate frames
//!
//! A [`Frame`] holds one coordinate per atom, stored as a flat `Vec<f32>` of
//! xyz triples. Coordinate `i` always belongs to atom `i`; there is no
//! sparse atom-to-coordinate mapping.

use lin_alg::f32::{Mat4, Vec3};

use crate::index::AtomIndex;

/// One coordinate set for a structure
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Flat coordinate storage: [x0, y0, z0, x1, y1, z1, ...]
    coords: Vec<f32>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Frame { coords: Vec::new() }
    }

    /// Create an empty frame with capacity for `n_atoms` atoms
    pub fn with_capacity(n_atoms: usize) -> Self {
        Frame {
            coords: Vec::with_capacity(n_atoms * 3),
        }
    }

    /// Build a frame from a slice of positions
    pub fn from_vec3(positions: &[Vec3]) -> Self {
        let mut coords = Vec::with_capacity(positions.len() * 3);
        for p in positions {
            coords.push(p.x);
            coords.push(p.y);
            coords.push(p.z);
        }
        Frame { coords }
    }

    /// Number of atoms in this frame
    pub fn len(&self) -> usize {
        self.coords.len() / 3
    }

    /// Whether the frame holds no coordinates
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Get the coordinate for an atom
    pub fn get(&self, atom: AtomIndex) -> Option<Vec3> {
        let base = atom.as_usize() * 3;
        if base + 2 < self.coords.len() {
            Some(Vec3::new(
                self.coords[base],
                self.coords[base + 1],
                self.coords[base + 2],
            ))
        } else {
            None
        }
    }

    /// Set the coordinate for an atom; returns false if out of range
    pub fn set(&mut self, atom: AtomIndex, coord: Vec3) -> bool {
        let base = atom.as_usize() * 3;
        if base + 2 < self.coords.len() {
            self.coords[base] = coord.x;
            self.coords[base + 1] = coord.y;
            self.coords[base + 2] = coord.z;
            true
        } else {
            false
        }
    }

    /// Append a coordinate for the next atom
    pub fn push(&mut self, coord: Vec3) {
        self.coords.push(coord.x);
        self.coords.push(coord.y);
        self.coords.push(coord.z);
    }

    /// Iterate over all coordinates in atom order
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.coords
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    /// Raw coordinate slice
    pub fn coords_raw(&self) -> &[f32] {
        &self.coords
    }

    /// Centroid of all coordinates (None when empty)
    pub fn centroid(&self) -> Option<Vec3> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f32;
        let mut sum = Vec3::new(0.0, 0.0, 0.0);
        for p in self.iter() {
            sum = sum + p;
        }
        Some(Vec3::new(sum.x / n, sum.y / n, sum.z / n))
    }

    /// Apply a 4x4 homogeneous transformation matrix to all coordinates
    ///
    /// The matrix is row-major; elements 3, 7 and 11 are the translation.
    pub fn transform(&mut self, matrix: &Mat4) {
        let m = &matrix.data;
        for chunk in self.coords.chunks_exact_mut(3) {
            let x = chunk[0];
            let y = chunk[1];
            let z = chunk[2];
            chunk[0] = m[0] * x + m[1] * y + m[2] * z + m[3];
            chunk[1] = m[4] * x + m[5] * y + m[6] * z + m[7];
            chunk[2] = m[8] * x + m[9] * y + m[10] * z + m[11];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame3() -> Frame {
        Frame::from_vec3(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ])
    }

    #[test]
    fn test_get_set() {
        let mut f = frame3();
        assert_eq!(f.len(), 3);
        let p = f.get(AtomIndex(2)).unwrap();
        assert_eq!(p.y, 2.0);

        assert!(f.set(AtomIndex(0), Vec3::new(9.0, 9.0, 9.0)));
        assert_eq!(f.get(AtomIndex(0)).unwrap().x, 9.0);
        assert!(f.get(AtomIndex(3)).is_none());
        assert!(!f.set(AtomIndex(3), Vec3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_centroid() {
        let f = frame3();
        let c = f.centroid().unwrap();
        assert!((c.x - 1.0 / 3.0).abs() < 1e-6);
        assert!((c.y - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(Frame::new().centroid(), None);
    }

    #[test]
    fn test_transform_translation() {
        let mut f = frame3();
        // Pure translation by (1, 2, 3)
        let m = Mat4::new([
            1.0, 0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, 2.0, //
            0.0, 0.0, 1.0, 3.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        f.transform(&m);
        let p = f.get(AtomIndex(0)).unwrap();
        assert_eq!((p.x, p.y, p.z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_rotation() {
        let mut f = Frame::from_vec3(&[Vec3::new(1.0, 0.0, 0.0)]);
        // 90 degrees around Z: x -> y
        let m = Mat4::new([
            0.0, -1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        f.transform(&m);
        let p = f.get(AtomIndex(0)).unwrap();
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }
}
