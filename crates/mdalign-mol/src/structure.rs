//! Structure container
//!
//! A [`Structure`] is an ordered atom array plus one or more coordinate
//! frames. Atom count is constant across the frames of one structure; the
//! invariant is enforced when frames are added.

use lin_alg::f32::{Mat4, Vec3};

use crate::atom::Atom;
use crate::error::{MolError, MolResult};
use crate::frame::Frame;
use crate::index::AtomIndex;

/// A molecular structure: atoms plus coordinate frames
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// Structure name (usually derived from the file name)
    pub name: String,

    /// Title from the source file, if any
    pub title: String,

    /// Flat atom array; position defines index identity
    atoms: Vec<Atom>,

    /// Coordinate frames; each holds exactly `atoms.len()` coordinates
    frames: Vec<Frame>,
}

impl Structure {
    /// Create an empty structure
    pub fn new(name: impl Into<String>) -> Self {
        Structure {
            name: name.into(),
            title: String::new(),
            atoms: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Create an empty structure with capacity for `n_atoms` atoms
    pub fn with_capacity(name: impl Into<String>, n_atoms: usize) -> Self {
        Structure {
            name: name.into(),
            title: String::new(),
            atoms: Vec::with_capacity(n_atoms),
            frames: Vec::new(),
        }
    }

    // =========================================================================
    // Atoms
    // =========================================================================

    /// Add an atom, returning its index
    ///
    /// Atoms must be added before frames; adding atoms afterwards would break
    /// the frame-length invariant.
    pub fn add_atom(&mut self, atom: Atom) -> AtomIndex {
        let idx = AtomIndex(self.atoms.len() as u32);
        self.atoms.push(atom);
        idx
    }

    /// Get an atom by index
    pub fn get_atom(&self, index: AtomIndex) -> Option<&Atom> {
        self.atoms.get(index.as_usize())
    }

    /// Number of atoms
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Iterate over all atoms
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    /// Iterate over atoms with their indices
    pub fn atoms_indexed(&self) -> impl Iterator<Item = (AtomIndex, &Atom)> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| (AtomIndex(i as u32), atom))
    }

    /// Chain identifiers in order of first appearance
    ///
    /// The position of a chain in this list is its zero-based chain ordinal,
    /// which is what `chainid` selections match against.
    pub fn chain_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for atom in &self.atoms {
            if ids.last() != Some(&atom.residue.chain) && !ids.contains(&atom.residue.chain) {
                ids.push(atom.residue.chain.clone());
            }
        }
        ids
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Add a coordinate frame
    ///
    /// Fails with [`MolError::CoordinateMismatch`] if the frame length does
    /// not match the atom count.
    pub fn add_frame(&mut self, frame: Frame) -> MolResult<usize> {
        if frame.len() != self.atoms.len() {
            return Err(MolError::CoordinateMismatch {
                expected: self.atoms.len(),
                actual: frame.len(),
            });
        }
        self.frames.push(frame);
        Ok(self.frames.len() - 1)
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Get a frame by index
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Get the coordinate of an atom in a frame
    pub fn get_coord(&self, atom: AtomIndex, frame: usize) -> Option<Vec3> {
        self.frames.get(frame)?.get(atom)
    }

    /// Apply a homogeneous transform to every coordinate of every frame
    pub fn transform_all_frames(&mut self, matrix: &Mat4) {
        for frame in &mut self.frames {
            frame.transform(matrix);
        }
    }

    /// Extract the coordinates of the given atoms from one frame as points
    ///
    /// Used to hand atom subsets to the superposition engine. Fails with
    /// [`MolError::AtomIndexOutOfBounds`] on a bad index and
    /// [`MolError::FrameIndexOutOfBounds`] on a bad frame.
    pub fn coords_of(&self, frame: usize, indices: &[AtomIndex]) -> MolResult<Vec<[f32; 3]>> {
        let f = self
            .frames
            .get(frame)
            .ok_or(MolError::FrameIndexOutOfBounds(frame, self.frames.len()))?;
        let mut points = Vec::with_capacity(indices.len());
        for &idx in indices {
            let p = f
                .get(idx)
                .ok_or_else(|| MolError::atom_out_of_bounds(idx.0, self.atoms.len()))?;
            points.push([p.x, p.y, p.z]);
        }
        Ok(points)
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    /// Produce a new, independent structure containing exactly the atoms at
    /// the given indices, in the given order
    ///
    /// Atom metadata and coordinates are copied for every frame; the result
    /// shares no mutable state with `self`. An empty index list yields a
    /// zero-atom structure with the same number of (empty) frames. Fails
    /// with [`MolError::AtomIndexOutOfBounds`] on any out-of-range index.
    pub fn atom_slice(&self, indices: &[AtomIndex]) -> MolResult<Structure> {
        for &idx in indices {
            if idx.as_usize() >= self.atoms.len() {
                return Err(MolError::atom_out_of_bounds(idx.0, self.atoms.len()));
            }
        }

        let mut sliced = Structure::with_capacity(self.name.clone(), indices.len());
        sliced.title = self.title.clone();
        for &idx in indices {
            sliced.atoms.push(self.atoms[idx.as_usize()].clone());
        }

        for frame in &self.frames {
            let mut new_frame = Frame::with_capacity(indices.len());
            for &idx in indices {
                // Bounds were checked above; frames are as long as the atom array.
                if let Some(coord) = frame.get(idx) {
                    new_frame.push(coord);
                }
            }
            sliced.frames.push(new_frame);
        }

        Ok(sliced)
    }
}
