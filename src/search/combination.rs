use anyhow::*;
use itertools::Itertools;

use crate::chemistry::mass_calc::calc_condensation_mass;
use crate::chemistry::model::{AminoAcidResidue, PeptideCandidate, PeptideTopology};
use crate::chemistry::table::AminoAcidTable;
use crate::search::query::effective_chain_length;

/// Number of multisets of size `k` drawn with repetition from `n` categories, C(n+k-1, k).
///
/// Returns `None` when the count does not fit in a `u64`.
pub fn multiset_count(n: usize, k: usize) -> Option<u64> {
    if n == 0 {
        return Some(if k == 0 { 1 } else { 0 });
    }

    // C(n+k-1, k) = prod_{i=1..k} (n-1+i)/i, every partial product is itself a binomial
    let mut count: u64 = 1;
    for i in 1..=k as u64 {
        count = count.checked_mul(n as u64 - 1 + i)? / i;
    }

    Some(count)
}

/// Enumerates order-independent amino acid compositions of a fixed length.
///
/// Each candidate is built from one selection of table entries: its sequence
/// and its mass come from the same residues, in the order of the table.
/// The producer is lazy and restartable, see [`CandidateGenerator::iter`].
#[derive(Clone, Debug)]
pub struct CandidateGenerator<'a> {
    aa_table: &'a AminoAcidTable,
    chain_length: usize,
    enumerated_length: usize,
    condensation_mass: f64,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(
        aa_table: &'a AminoAcidTable,
        chain_length: usize,
        topology: PeptideTopology,
    ) -> Result<CandidateGenerator<'a>> {
        let enumerated_length = effective_chain_length(topology, chain_length)?;

        // The waters are counted on the full chain, before the invariant block is set aside
        let condensation_mass = calc_condensation_mass(topology, chain_length);

        Ok(CandidateGenerator {
            aa_table,
            chain_length,
            enumerated_length,
            condensation_mass,
        })
    }

    pub fn chain_length(&self) -> usize {
        self.chain_length
    }

    pub fn enumerated_length(&self) -> usize {
        self.enumerated_length
    }

    pub fn condensation_mass(&self) -> f64 {
        self.condensation_mass
    }

    /// Expected number of candidates, `None` if it overflows a `u64`.
    pub fn candidate_count(&self) -> Option<u64> {
        multiset_count(self.aa_table.len(), self.enumerated_length)
    }

    /// Lazily produces every candidate. Calling it again restarts the enumeration.
    pub fn iter(&self) -> impl Iterator<Item = PeptideCandidate> + 'a {
        let aa_table = self.aa_table;
        let condensation_mass = self.condensation_mass;

        aa_table
            .amino_acids
            .iter()
            .combinations_with_replacement(self.enumerated_length)
            .map(move |residues| make_candidate(&residues, condensation_mass))
    }

    /// Materializes the full candidate pool.
    pub fn generate(&self) -> Vec<PeptideCandidate> {
        let capacity = self
            .candidate_count()
            .and_then(|count| usize::try_from(count).ok())
            .unwrap_or(0);

        let mut candidates = Vec::with_capacity(capacity);
        candidates.extend(self.iter());
        candidates
    }
}

fn make_candidate(residues: &[&AminoAcidResidue], condensation_mass: f64) -> PeptideCandidate {
    let sequence: String = residues.iter().map(|aa| aa.code1).collect();
    let residues_mass: f64 = residues.iter().map(|aa| aa.mono_mass).sum();

    PeptideCandidate {
        sequence,
        mono_mass: residues_mass - condensation_mass,
    }
}

/// Eagerly enumerates every candidate of `chain_length` residues for the given structural flags.
pub fn peptide_candidates(
    aa_table: &AminoAcidTable,
    chain_length: usize,
    is_macrocycle: bool,
    is_surfactin: bool,
) -> Result<Vec<PeptideCandidate>> {
    let topology = PeptideTopology::from_flags(is_macrocycle, is_surfactin);
    let generator = CandidateGenerator::new(aa_table, chain_length, topology)?;

    Ok(generator.generate())
}
