//! Screening of lipopeptide compositions against observed mass spectrometry peaks.
//!
//! A candidate is a multiset of natural amino acids plus one beta-hydroxy fatty
//! acid chain (saturated, mono- or di-unsaturated). For each lipid variant the
//! fatty acid mass is removed from the observed peak and the residual is matched
//! against every amino acid composition of the requested length.

pub mod chemistry;
pub mod errors;
pub mod io;
pub mod ms;
pub mod search;

use anyhow::Result;

pub use chemistry::model::{LipidSaturation, LipidVariant, MatchResult, PeptideCandidate, PeptideTopology};
pub use chemistry::table::{AminoAcidTable, AtomTable, BIOMOLECULE_ATOM_TABLE, NATURAL_AMINO_ACID_TABLE};
pub use errors::ParameterError;
pub use search::combination::{peptide_candidates, CandidateGenerator};
pub use search::filter::filter_matches;
pub use search::orchestrator::{run_search, SearchReport, VariantMatches};
pub use search::query::SearchQuery;

/// Saturated, mono- and di-unsaturated fatty acid masses for `carbon_count` carbons.
pub fn lipid_masses(carbon_count: u32) -> Result<[LipidVariant; 3]> {
    chemistry::lipid::calc_lipid_variants(carbon_count, &BIOMOLECULE_ATOM_TABLE)
}
