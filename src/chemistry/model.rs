use anyhow::*;
use serde::Serialize;

use crate::chemistry::constants::SURFACTIN_CORE_RESIDUES;

// The symbol uniquely identifies an element
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Atom {
    pub symbol: String,
    pub name: String,
    pub mono_mass: f64,
}

impl Atom {
    pub fn new(symbol: &str, name: &str, mono_mass: f64) -> anyhow::Result<Atom> {
        if symbol.is_empty() { bail!("symbol is empty") }
        if name.is_empty() { bail!("name is empty") }
        if mono_mass <= 0.0 { bail!("mono_mass must be a strictly positive number") }

        Ok(Atom {
            symbol: symbol.to_string(),
            name: name.to_string(),
            mono_mass,
        })
    }
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct AminoAcidResidue {
    pub code1: char,
    pub code3: String,
    pub name: String,
    pub mono_mass: f64, // residue mass, i.e. the free amino acid minus one water
}

impl AminoAcidResidue {
    pub fn new(code1: char, code3: &str, name: &str, mono_mass: f64) -> anyhow::Result<AminoAcidResidue> {
        if !code1.is_ascii_uppercase() { bail!("code1 must be an upper case ASCII letter") }
        if code3.len() != 3 { bail!("code3 must contain three characters") }
        if name.is_empty() { bail!("name is empty") }
        if mono_mass <= 0.0 { bail!("mono_mass must be a strictly positive number") }

        Ok(AminoAcidResidue {
            code1,
            code3: code3.to_string(),
            name: name.to_string(),
            mono_mass,
        })
    }
}

/// How the residues of a peptide are linked together.
///
/// The topology decides how many condensation waters are removed from the sum
/// of residue masses, and how many residues are actually enumerated.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeptideTopology {
    /// Free N- and C-termini.
    Linear,
    /// Ring-closed peptide, one more condensation than the linear chain.
    Macrocycle,
    /// Surfactin-like lipopeptide: a macrocycle closed by a lactone, whose
    /// invariant tetra-residue block is accounted for outside the enumeration.
    Surfactin,
}

impl PeptideTopology {
    pub fn from_flags(is_macrocycle: bool, is_surfactin: bool) -> PeptideTopology {
        match (is_macrocycle, is_surfactin) {
            (_, true) => PeptideTopology::Surfactin,
            (true, false) => PeptideTopology::Macrocycle,
            (false, false) => PeptideTopology::Linear,
        }
    }

    /// Number of waters lost when assembling a full chain of `chain_length` residues.
    pub fn condensation_water_count(&self, chain_length: usize) -> usize {
        match self {
            PeptideTopology::Linear => chain_length.saturating_sub(1),
            PeptideTopology::Macrocycle => chain_length,
            PeptideTopology::Surfactin => chain_length + 1,
        }
    }

    /// Number of residues fixed by the topology, never enumerated.
    pub fn invariant_length(&self) -> usize {
        match self {
            PeptideTopology::Surfactin => SURFACTIN_CORE_RESIDUES.len(),
            _ => 0,
        }
    }

    /// Number of residues that are left to enumerate for a full chain of `chain_length` residues.
    pub fn enumerated_length(&self, chain_length: usize) -> Option<usize> {
        chain_length.checked_sub(self.invariant_length())
    }
}

impl std::fmt::Display for PeptideTopology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PeptideTopology::*;

        match self {
            Linear     => write!(f, "linear"),
            Macrocycle => write!(f, "macrocycle"),
            Surfactin  => write!(f, "surfactin"),
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum LipidSaturation {
    Saturated,
    MonoUnsaturated,
    DiUnsaturated,
}

impl LipidSaturation {
    pub const ALL: [LipidSaturation; 3] = [
        LipidSaturation::Saturated,
        LipidSaturation::MonoUnsaturated,
        LipidSaturation::DiUnsaturated,
    ];

    /// Number of C=C double bonds in the chain.
    pub fn double_bonds(&self) -> u32 {
        match self {
            LipidSaturation::Saturated => 0,
            LipidSaturation::MonoUnsaturated => 1,
            LipidSaturation::DiUnsaturated => 2,
        }
    }
}

impl std::fmt::Display for LipidSaturation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LipidSaturation::*;

        match self {
            Saturated       => write!(f, "Saturated"),
            MonoUnsaturated => write!(f, "Monounsaturated"),
            DiUnsaturated   => write!(f, "Diunsaturated"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct LipidVariant {
    pub saturation: LipidSaturation,
    pub mono_mass: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct PeptideCandidate {
    pub sequence: String,
    pub mono_mass: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct MatchResult {
    pub sequence: String,
    pub mono_mass: f64,
}

impl From<&PeptideCandidate> for MatchResult {
    fn from(candidate: &PeptideCandidate) -> Self {
        MatchResult {
            sequence: candidate.sequence.clone(),
            mono_mass: candidate.mono_mass,
        }
    }
}
