use anyhow::*;
use serde::Serialize;

use crate::chemistry::lipid::calc_lipid_variants;
use crate::chemistry::mass_calc::calc_surfactin_core_mass;
use crate::chemistry::model::{LipidVariant, MatchResult, PeptideTopology};
use crate::chemistry::table::{AminoAcidTable, AtomTable};
use crate::search::combination::CandidateGenerator;
use crate::search::filter::filter_matches;
use crate::search::query::SearchQuery;

/// Largest candidate pool that is materialized once and shared by the three lipid variants.
/// Bigger pools are streamed again for each variant.
pub const EAGER_CANDIDATE_LIMIT: u64 = 2_000_000;

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct VariantMatches {
    pub lipid: LipidVariant,
    pub residual_mass: f64,
    pub matches: Vec<MatchResult>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SearchReport {
    pub query: SearchQuery,
    /// Mass left for the peptide moiety before any lipid is removed.
    pub peptide_mass: f64,
    pub candidate_count: u64,
    pub variants: Vec<VariantMatches>,
}

impl SearchReport {
    pub fn match_count(&self) -> usize {
        self.variants.iter().map(|v| v.matches.len()).sum()
    }
}

/// Searches the peptide compositions that, combined with one fatty acid variant,
/// explain the query's target mass.
///
/// The invariant surfactin block is removed from the target first, then each lipid
/// variant is subtracted in turn and the residual is matched against the candidate pool.
pub fn run_search(query: &SearchQuery, atom_table: &AtomTable, aa_table: &AminoAcidTable) -> Result<SearchReport> {
    let lipids = calc_lipid_variants(query.lipid_carbon_count(), atom_table)?;
    let generator = CandidateGenerator::new(aa_table, query.chain_length(), query.topology())?;

    let peptide_mass = match query.topology() {
        PeptideTopology::Surfactin => query.target_mass() - calc_surfactin_core_mass(aa_table)?,
        _ => query.target_mass(),
    };

    let candidate_count = generator
        .candidate_count()
        .ok_or_else(|| anyhow!("too many candidates for a chain of {} residues", generator.enumerated_length()))?;

    log::debug!(
        "{} chain of {} residues: enumerating {} residue(s), {} candidates, condensation mass {:.5}",
        query.topology(),
        query.chain_length(),
        generator.enumerated_length(),
        candidate_count,
        generator.condensation_mass()
    );

    let eager_pool = if candidate_count <= EAGER_CANDIDATE_LIMIT {
        Some(generator.generate())
    } else {
        log::debug!("candidate pool above {}, streaming it for each lipid variant", EAGER_CANDIDATE_LIMIT);
        None
    };

    let mut variants = Vec::with_capacity(lipids.len());
    for lipid in lipids {
        let residual_mass = peptide_mass - lipid.mono_mass;
        log::debug!("{} lipid ({:.5} Da): residual mass {:.5}", lipid.saturation, lipid.mono_mass, residual_mass);

        let matches = match &eager_pool {
            Some(pool) => filter_matches(pool, residual_mass, query.tolerance())?,
            None => filter_matches(generator.iter(), residual_mass, query.tolerance())?,
        };
        log::info!("{}: {} result(s)", lipid.saturation, matches.len());

        variants.push(VariantMatches {
            lipid,
            residual_mass,
            matches,
        });
    }

    Ok(SearchReport {
        query: query.clone(),
        peptide_mass,
        candidate_count,
        variants,
    })
}
