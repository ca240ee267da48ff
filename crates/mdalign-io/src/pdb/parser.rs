//! PDB file parser
//!
//! Fixed-column parsing of ATOM/HETATM records, with MODEL/ENDMDL blocks
//! mapped to additional frames.

use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use lin_alg::f32::Vec3;
use mdalign_mol::{Atom, AtomResidue, Frame, Structure};
use nom::IResult;

use crate::error::{IoError, IoResult};
use crate::traits::StructureReader;

use super::records::AtomRecord;

/// PDB file reader
pub struct PdbReader<R> {
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> PdbReader<R> {
    /// Create a new PDB reader
    pub fn new(reader: R) -> Self {
        PdbReader {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    fn read_line(&mut self) -> IoResult<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_number += 1;
                Ok(Some(line))
            }
            Err(e) => Err(IoError::Io(e)),
        }
    }

    fn parse(&mut self) -> IoResult<Structure> {
        let mut atoms: Vec<AtomRecord> = Vec::new();
        let mut coords: Vec<Vec3> = Vec::new();
        let mut extra_models: Vec<Vec<Vec3>> = Vec::new();
        let mut title = String::new();
        let mut current_model = 0;

        while let Some(line) = self.read_line()? {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let record_type = if line.len() >= 6 { &line[0..6] } else { line };

            match record_type {
                "ATOM  " | "HETATM" => {
                    let (_, record) = parse_atom_record(line).map_err(|_| {
                        IoError::parse(self.line_number, format!("malformed atom record: {line}"))
                    })?;
                    let coord = Vec3::new(record.x, record.y, record.z);
                    if current_model > 1 {
                        if let Some(model_coords) = extra_models.last_mut() {
                            model_coords.push(coord);
                        }
                    } else {
                        atoms.push(record);
                        coords.push(coord);
                    }
                }
                "TITLE " => {
                    if line.len() > 10 {
                        if !title.is_empty() {
                            title.push(' ');
                        }
                        title.push_str(line[10..].trim());
                    }
                }
                "MODEL " => {
                    current_model += 1;
                    if current_model > 1 {
                        extra_models.push(Vec::new());
                    }
                }
                "ENDMDL" => {}
                "TER   " | "TER" => {
                    // Chain breaks are implicit in the chain id column
                }
                "END   " | "END" => break,
                _ => {
                    // Other record types carry nothing the pipeline needs
                }
            }
        }

        self.build_structure(atoms, coords, extra_models, title)
    }

    fn build_structure(
        &self,
        atom_records: Vec<AtomRecord>,
        coords: Vec<Vec3>,
        extra_models: Vec<Vec<Vec3>>,
        title: String,
    ) -> IoResult<Structure> {
        if atom_records.is_empty() {
            return Err(IoError::EmptyFile);
        }

        let mut structure = Structure::with_capacity("", atom_records.len());
        structure.title = title;

        for record in &atom_records {
            let element = record.get_element();
            let mut atom = Atom::new(&record.name, element);
            atom.residue = Arc::new(AtomResidue::from_parts(
                record.chain.clone(),
                record.resn.clone(),
                record.resv,
                record.icode,
                record.segi.clone(),
            ));
            atom.alt = record.alt_loc;
            atom.occupancy = record.occupancy;
            atom.b_factor = record.b_factor;
            atom.hetatm = record.hetatm;
            atom.formal_charge = record.get_formal_charge();
            atom.id = record.serial;
            structure.add_atom(atom);
        }

        structure
            .add_frame(Frame::from_vec3(&coords))
            .map_err(|e| IoError::invalid_record(e.to_string()))?;

        // Additional MODEL blocks become frames when complete
        for model_coords in extra_models {
            if model_coords.len() == atom_records.len() {
                structure
                    .add_frame(Frame::from_vec3(&model_coords))
                    .map_err(|e| IoError::invalid_record(e.to_string()))?;
            }
        }

        Ok(structure)
    }
}

impl<R: Read> StructureReader for PdbReader<R> {
    fn read(&mut self) -> IoResult<Structure> {
        self.parse()
    }
}

/// Parse an ATOM or HETATM record
///
/// Fixed column positions (0-indexed):
/// 6-10 serial, 12-15 name, 16 altLoc, 17-19 resName, 21 chainID,
/// 22-25 resSeq, 26 iCode, 30-37 x, 38-45 y, 46-53 z, 54-59 occupancy,
/// 60-65 tempFactor, 72-75 segment, 76-77 element, 78-79 charge.
fn parse_atom_record(input: &str) -> IResult<&str, AtomRecord> {
    // Coordinates end at column 54; anything shorter is malformed
    if input.len() < 54 {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Eof,
        )));
    }

    let hetatm = input.starts_with("HETATM");

    let serial: i32 = input
        .get(6..11)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let name = input.get(12..16).unwrap_or("    ").trim().to_string();
    let alt_loc = input.chars().nth(16).unwrap_or(' ');
    let resn = input.get(17..20).unwrap_or("   ").trim().to_string();
    let chain = input.get(21..22).unwrap_or(" ").trim().to_string();
    let resv: i32 = input
        .get(22..26)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let icode = input.chars().nth(26).unwrap_or(' ');

    // Coordinates are the one field the pipeline cannot default
    let coord = |range: std::ops::Range<usize>| -> Result<f32, nom::Err<nom::error::Error<&str>>> {
        input
            .get(range)
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| {
                nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
            })
    };
    let x = coord(30..38)?;
    let y = coord(38..46)?;
    let z = coord(46..54)?;

    let occupancy: f32 = input
        .get(54..60)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(1.0);
    let b_factor: f32 = input
        .get(60..66)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0.0);

    let segi = input.get(72..76).unwrap_or("    ").trim().to_string();
    let element = input.get(76..78).unwrap_or("  ").trim().to_string();
    let charge = input.get(78..80).unwrap_or("  ").trim().to_string();

    let record = AtomRecord {
        hetatm,
        serial,
        name,
        alt_loc,
        resn,
        chain,
        resv,
        icode,
        x,
        y,
        z,
        occupancy,
        b_factor,
        segi,
        element,
        charge,
    };

    Ok(("", record))
}
