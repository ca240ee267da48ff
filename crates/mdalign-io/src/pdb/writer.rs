//! PDB file writer

use std::io::Write;

use lin_alg::f32::Vec3;
use mdalign_mol::{Atom, AtomIndex, Structure};

use crate::error::{IoError, IoResult};
use crate::traits::StructureWriter;

/// PDB file writer
pub struct PdbWriter<W> {
    writer: W,
}

impl<W: Write> PdbWriter<W> {
    /// Create a new PDB writer
    pub fn new(writer: W) -> Self {
        PdbWriter { writer }
    }

    fn write_title(&mut self, title: &str) -> IoResult<()> {
        if !title.is_empty() {
            for (i, chunk) in title.as_bytes().chunks(70).enumerate() {
                let cont = if i > 0 {
                    format!("{:>2} ", i + 1)
                } else {
                    "   ".to_string()
                };
                writeln!(
                    self.writer,
                    "TITLE  {}{}",
                    cont,
                    String::from_utf8_lossy(chunk)
                )?;
            }
        }
        Ok(())
    }

    fn write_atom(&mut self, serial: i32, atom: &Atom, coord: Vec3) -> IoResult<()> {
        let record_type = if atom.hetatm { "HETATM" } else { "ATOM  " };
        let name = format_atom_name(&atom.name, atom.element.symbol());

        let chain = if atom.residue.chain.is_empty() {
            " "
        } else {
            &atom.residue.chain[..1.min(atom.residue.chain.len())]
        };

        let element = format!("{:>2}", atom.element.symbol());
        let charge = format_charge(atom.formal_charge);

        writeln!(
            self.writer,
            "{}{:5} {:4}{}{:3} {}{:4}{}   {:8.3}{:8.3}{:8.3}{:6.2}{:6.2}          {}{}",
            record_type,
            serial % 100000,
            name,
            atom.alt,
            if atom.residue.resn.len() > 3 {
                &atom.residue.resn[..3]
            } else {
                &atom.residue.resn
            },
            chain,
            atom.residue.resv,
            atom.residue.inscode,
            coord.x,
            coord.y,
            coord.z,
            atom.occupancy,
            atom.b_factor,
            element,
            charge
        )?;

        Ok(())
    }

    fn write_ter(&mut self, serial: i32, atom: &Atom) -> IoResult<()> {
        writeln!(
            self.writer,
            "TER   {:5}      {:3} {}{:4}",
            serial % 100000,
            if atom.residue.resn.len() > 3 {
                &atom.residue.resn[..3]
            } else {
                &atom.residue.resn
            },
            if atom.residue.chain.is_empty() {
                " "
            } else {
                &atom.residue.chain[..1.min(atom.residue.chain.len())]
            },
            atom.residue.resv
        )?;
        Ok(())
    }

    fn write_frame(&mut self, structure: &Structure, frame_idx: usize) -> IoResult<()> {
        let mut serial = 1;
        let mut prev: Option<AtomIndex> = None;

        for (atom_idx, atom) in structure.atoms_indexed() {
            // TER between chains
            if let Some(prev_idx) = prev {
                let prev_atom = structure.get_atom(prev_idx);
                if let Some(prev_atom) = prev_atom {
                    if prev_atom.residue.chain != atom.residue.chain {
                        self.write_ter(serial, prev_atom)?;
                        serial += 1;
                    }
                }
            }
            prev = Some(atom_idx);

            let coord = structure
                .get_coord(atom_idx, frame_idx)
                .unwrap_or(Vec3::new(0.0, 0.0, 0.0));
            self.write_atom(serial, atom, coord)?;
            serial += 1;
        }

        if let Some(last_idx) = prev {
            if let Some(last_atom) = structure.get_atom(last_idx) {
                self.write_ter(serial, last_atom)?;
            }
        }

        Ok(())
    }

    fn write_structure(&mut self, structure: &Structure) -> IoResult<()> {
        self.write_title(&structure.title)?;

        // A zero-atom structure is a valid (if empty) file: END only.
        // Atoms without any frame, however, cannot be serialized.
        if structure.atom_count() > 0 && structure.frame_count() == 0 {
            return Err(IoError::EmptyFile);
        }

        let write_models = structure.frame_count() > 1;
        for frame_idx in 0..structure.frame_count().max(1) {
            if write_models {
                writeln!(self.writer, "MODEL     {:4}", frame_idx + 1)?;
            }
            self.write_frame(structure, frame_idx)?;
            if write_models {
                writeln!(self.writer, "ENDMDL")?;
            }
        }

        writeln!(self.writer, "END")?;
        Ok(())
    }
}

impl<W: Write> StructureWriter for PdbWriter<W> {
    fn write(&mut self, structure: &Structure) -> IoResult<()> {
        self.write_structure(structure)
    }

    fn flush(&mut self) -> IoResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Format an atom name according to PDB conventions
///
/// 1-letter elements start in column 14, 2-letter elements in column 13.
fn format_atom_name(name: &str, element: &str) -> String {
    let name = name.trim();
    if name.len() >= 4 {
        name[..4].to_string()
    } else if element.len() == 1 && !name.starts_with(char::is_numeric) {
        format!(" {:<3}", name)
    } else {
        format!("{:<4}", name)
    }
}

/// Format a formal charge for the PDB charge column (e.g. "2+" or "1-")
fn format_charge(charge: i8) -> String {
    match charge {
        0 => "  ".to_string(),
        c if c > 0 => format!("{}+", c.abs()),
        c => format!("{}-", c.abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lin_alg::f32::Vec3;
    use mdalign_mol::{Atom, Element, Frame};

    fn dipeptide() -> Structure {
        let mut s = Structure::new("test");

        let mut n = Atom::new("N", Element::Nitrogen);
        n.set_residue("ALA", 1, "A");
        n.id = 1;
        s.add_atom(n);

        let mut ca = Atom::new("CA", Element::Carbon);
        ca.set_residue("ALA", 1, "A");
        ca.id = 2;
        s.add_atom(ca);

        s.add_frame(Frame::from_vec3(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.5, 0.0, 0.0),
        ]))
        .unwrap();
        s
    }

    #[test]
    fn test_format_atom_name() {
        assert_eq!(format_atom_name("N", "N"), " N  ");
        assert_eq!(format_atom_name("CA", "C"), " CA ");
        assert_eq!(format_atom_name("FE", "Fe"), "FE  ");
    }

    #[test]
    fn test_format_charge() {
        assert_eq!(format_charge(0), "  ");
        assert_eq!(format_charge(1), "1+");
        assert_eq!(format_charge(-2), "2-");
    }

    #[test]
    fn test_write_pdb() {
        let s = dipeptide();
        let mut output = Vec::new();
        {
            let mut writer = PdbWriter::new(&mut output);
            writer.write(&s).unwrap();
        }
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("ATOM"));
        assert!(text.contains("ALA"));
        assert!(text.contains("TER"));
        assert!(text.ends_with("END\n"));
    }

    #[test]
    fn test_write_zero_atom_structure() {
        let s = Structure::new("empty");
        let mut output = Vec::new();
        {
            let mut writer = PdbWriter::new(&mut output);
            writer.write(&s).unwrap();
        }
        assert_eq!(String::from_utf8(output).unwrap(), "END\n");
    }
}
