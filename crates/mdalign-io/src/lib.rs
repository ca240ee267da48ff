//! Structure file I/O for mdalign
//!
//! PDB reading and writing, with transparent gzip decompression on load.
//! The convenience functions [`load_structure`] and [`save_structure`] are
//! what the pipeline uses; [`PdbReader`]/[`PdbWriter`] work over any
//! `Read`/`Write` for tests and in-memory use.

mod compress;
mod error;
pub mod pdb;
mod traits;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use mdalign_mol::Structure;

pub use compress::{is_gzip_path, open_file};
pub use error::{IoError, IoResult};
pub use pdb::{PdbReader, PdbWriter};
pub use traits::{StructureReader, StructureWriter};

/// Load a structure from a PDB file (optionally gzip-compressed)
///
/// Fails with [`IoError::FileNotFound`] when the path does not exist and
/// [`IoError::Parse`]/[`IoError::EmptyFile`] on malformed content.
pub fn load_structure(path: impl AsRef<Path>) -> IoResult<Structure> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound(path.to_path_buf()));
    }

    let reader = open_file(path)?;
    let mut structure = PdbReader::new(reader).read()?;
    structure.name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();
    Ok(structure)
}

/// Write a structure to a PDB file, silently overwriting any existing file
pub fn save_structure(structure: &Structure, path: impl AsRef<Path>) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = PdbWriter::new(BufWriter::new(file));
    writer.write(structure)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdalign_mol::AtomIndex;

    const SAMPLE: &str = "\
ATOM      1  N   ALA A   1      11.104   6.134  -6.504  1.00 20.00           N
ATOM      2  CA  ALA A   1      11.639   6.071  -5.147  1.00 20.00           C
ATOM      3  C   ALA A   1      12.697   7.155  -4.974  1.00 20.00           C
HETATM    4  C1  UNK L   1       2.000   3.000   4.000  1.00  0.00           C
END
";

    #[test]
    fn test_missing_file() {
        let err = load_structure("/nonexistent/never.pdb").unwrap_err();
        assert!(matches!(err, IoError::FileNotFound(_)));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let in_path = dir.path().join("sample.pdb");
        std::fs::write(&in_path, SAMPLE).unwrap();

        let structure = load_structure(&in_path).unwrap();
        assert_eq!(structure.atom_count(), 4);
        assert_eq!(structure.name, "sample");

        let out_path = dir.path().join("out.pdb");
        save_structure(&structure, &out_path).unwrap();
        let reloaded = load_structure(&out_path).unwrap();

        assert_eq!(reloaded.atom_count(), structure.atom_count());
        for (idx, atom) in structure.atoms_indexed() {
            let other = reloaded.get_atom(idx).unwrap();
            assert_eq!(atom.name, other.name);
            assert_eq!(atom.residue.resn, other.residue.resn);
            assert_eq!(atom.residue.chain, other.residue.chain);
            assert_eq!(atom.hetatm, other.hetatm);

            let a = structure.get_coord(idx, 0).unwrap();
            let b = reloaded.get_coord(idx, 0).unwrap();
            assert!((a.x - b.x).abs() < 1e-3);
            assert!((a.y - b.y).abs() < 1e-3);
            assert!((a.z - b.z).abs() < 1e-3);
        }
    }

    #[test]
    fn test_zero_atom_roundtrip_write() {
        let dir = tempfile::tempdir().unwrap();
        let structure = mdalign_mol::Structure::new("empty");
        let out_path = dir.path().join("empty.pdb");
        save_structure(&structure, &out_path).unwrap();
        assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "END\n");
    }

    #[test]
    fn test_gzip_load() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let gz_path = dir.path().join("sample.pdb.gz");
        let file = std::fs::File::create(&gz_path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let structure = load_structure(&gz_path).unwrap();
        assert_eq!(structure.atom_count(), 4);
        assert!((structure.get_coord(AtomIndex(3), 0).unwrap().y - 3.0).abs() < 1e-4);
    }
}
