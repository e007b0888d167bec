use crate::chemistry::model::*;
use crate::chemistry::constants::*;

use anyhow::*;
use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Clone, Default, PartialEq, Debug)]
pub struct AtomTable {
    pub atoms: Vec<Atom>,
    pub atom_by_symbol: HashMap<String, Atom>
}

impl AtomTable {
    pub fn new(
        atoms: Vec<Atom>,
    ) -> Result<AtomTable> {

        if atoms.is_empty() { bail!("atoms is empty") }

        let n_atoms = atoms.len();
        let mut atom_by_symbol = HashMap::with_capacity(n_atoms);
        for atom in atoms.to_owned() {
            atom_by_symbol.insert(atom.symbol.to_owned(), atom);
        }

        if atom_by_symbol.len() != n_atoms {
            bail!("atoms contains duplicated entries")
        }

        Ok(AtomTable {
            atoms,
            atom_by_symbol,
        })
    }

    pub fn mono_mass(&self, symbol: &str) -> Result<f64> {
        let atom = self.atom_by_symbol.get(symbol).ok_or_else(
            || anyhow!("can't find atom '{}' in the provided table", symbol)
        )?;

        Ok(atom.mono_mass)
    }
}

lazy_static! {
    pub static ref BIOMOLECULE_ATOM_TABLE: AtomTable = AtomTable::new(
        vec![
            Atom::new(atom::H, "Hydrogen", HYDROGEN_MONO_MASS).unwrap(),
            Atom::new(atom::C, "Carbon", CARBON_MONO_MASS).unwrap(),
            Atom::new(atom::N, "Nitrogen", NITROGEN_MONO_MASS).unwrap(),
            Atom::new(atom::O, "Oxygen", OXYGEN_MONO_MASS).unwrap(),
        ]
    ).unwrap();
}

/// Ordered collection of amino acid residues.
///
/// Each entry carries its own symbol and mass, so the enumeration order of
/// `amino_acids` is the single source for both the sequences and the masses
/// derived from it.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AminoAcidTable {
    pub amino_acids: Vec<AminoAcidResidue>,
    pub aa_by_code1: HashMap<char, AminoAcidResidue>
}

impl AminoAcidTable {
    pub fn new(
        amino_acids: Vec<AminoAcidResidue>,
    ) -> Result<AminoAcidTable> {

        if amino_acids.is_empty() { bail!("amino_acids is empty") }

        let n_aas = amino_acids.len();
        let mut aa_by_code1 = HashMap::with_capacity(n_aas);
        for amino_acid in amino_acids.to_owned() {
            aa_by_code1.insert(amino_acid.code1, amino_acid);
        }

        if aa_by_code1.len() != n_aas {
            bail!("amino_acids contains duplicated entries")
        }

        Ok(AminoAcidTable {
            amino_acids,
            aa_by_code1,
        })
    }

    pub fn len(&self) -> usize {
        self.amino_acids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amino_acids.is_empty()
    }

    pub fn get(&self, code1: char) -> Result<&AminoAcidResidue> {
        self.aa_by_code1.get(&code1).ok_or_else(
            || anyhow!("can't find amino acid '{}' in the provided table", code1)
        )
    }
}

macro_rules! residue {
    ($code1:expr, $code3:expr, $name:expr, $mass:expr) => {
        AminoAcidResidue::new($code1, $code3, $name, $mass).unwrap()
    }
}

// Sources :
// - http://en.wikipedia.org/wiki/Proteinogenic_amino_acid
// - https://proteomicsresource.washington.edu/tools/masses.php
// The entries order defines the canonical order of generated sequences.
lazy_static! {
    pub static ref NATURAL_AMINO_ACID_TABLE: AminoAcidTable = AminoAcidTable::new(
        vec![
            residue!(aa::G, "Gly", "Glycine", 57.02146),
            residue!(aa::A, "Ala", "Alanine", 71.03711),
            residue!(aa::L, "Leu", "Leucine", 113.08406),
            residue!(aa::V, "Val", "Valine", 99.06841),
            residue!(aa::I, "Ile", "Isoleucine", 113.08406),
            residue!(aa::P, "Pro", "Proline", 97.05276),
            residue!(aa::F, "Phe", "Phenylalanine", 147.06841),
            residue!(aa::S, "Ser", "Serine", 87.03203),
            residue!(aa::T, "Thr", "Threonine", 101.04768),
            residue!(aa::C, "Cys", "Cysteine", 103.00919),
            residue!(aa::Y, "Tyr", "Tyrosine", 163.06333),
            residue!(aa::N, "Asn", "Asparagine", 114.04293),
            residue!(aa::Q, "Gln", "Glutamine", 128.05858),
            residue!(aa::D, "Asp", "Aspartic acid", 115.02694),
            residue!(aa::E, "Glu", "Glutamic acid", 129.04259),
            residue!(aa::R, "Arg", "Arginine", 156.10111),
            residue!(aa::K, "Lys", "Lysine", 128.09496),
            residue!(aa::H, "His", "Histidine", 137.05891),
            residue!(aa::W, "Trp", "Tryptophan", 186.07931),
            residue!(aa::M, "Met", "Methionine", 131.04049),
        ]
    ).unwrap();
}
