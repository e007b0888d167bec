use anyhow::*;
use serde::Serialize;

use crate::chemistry::constants::SURFACTIN_CHAIN_LENGTH;
use crate::chemistry::model::PeptideTopology;
use crate::errors::ParameterError;

/// Tolerance used by the surfactin preset, in Daltons.
pub const SURFACTIN_DEFAULT_TOLERANCE: f64 = 0.5;

/// A validated request for the search core.
///
/// Fields are private so that a `SearchQuery` can only exist once every
/// parameter has been checked; use [`SearchQuery::new`] to build one.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct SearchQuery {
    target_mass: f64,
    tolerance: f64,
    chain_length: usize,
    topology: PeptideTopology,
    lipid_carbon_count: u32,
}

impl SearchQuery {
    pub fn new(
        target_mass: f64,
        tolerance: f64,
        chain_length: usize,
        is_macrocycle: bool,
        is_surfactin: bool,
        lipid_carbon_count: u32,
    ) -> Result<SearchQuery> {
        if !target_mass.is_finite() {
            return Err(ParameterError::mass("target", target_mass).into());
        }
        check_tolerance(tolerance)?;

        if chain_length < 1 {
            return Err(ParameterError::ChainLength { chain_length }.into());
        }
        if lipid_carbon_count < 1 {
            return Err(ParameterError::CarbonCount { carbon_count: lipid_carbon_count }.into());
        }

        if is_surfactin && !is_macrocycle {
            log::warn!("surfactin requested without the macrocycle flag, searching it as a macrocycle anyway");
        }
        let topology = PeptideTopology::from_flags(is_macrocycle, is_surfactin);

        let query = SearchQuery {
            target_mass,
            tolerance,
            chain_length,
            topology,
            lipid_carbon_count,
        };
        query.effective_chain_length()?;

        Ok(query)
    }

    /// Surfactin search with the historic defaults: 7 residues in a lactone ring, 0.5 Da tolerance.
    pub fn surfactin(target_mass: f64, lipid_carbon_count: u32) -> Result<SearchQuery> {
        SearchQuery::new(
            target_mass,
            SURFACTIN_DEFAULT_TOLERANCE,
            SURFACTIN_CHAIN_LENGTH,
            true,
            true,
            lipid_carbon_count,
        )
    }

    pub fn target_mass(&self) -> f64 { self.target_mass }
    pub fn tolerance(&self) -> f64 { self.tolerance }
    pub fn chain_length(&self) -> usize { self.chain_length }
    pub fn topology(&self) -> PeptideTopology { self.topology }
    pub fn lipid_carbon_count(&self) -> u32 { self.lipid_carbon_count }

    /// Number of residues actually enumerated once the invariant block is set aside.
    pub fn effective_chain_length(&self) -> Result<usize> {
        effective_chain_length(self.topology, self.chain_length)
    }
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ParameterError::Tolerance { tolerance }.into());
    }

    Ok(())
}

pub(crate) fn effective_chain_length(topology: PeptideTopology, chain_length: usize) -> Result<usize> {
    if chain_length < 1 {
        return Err(ParameterError::ChainLength { chain_length }.into());
    }

    match topology.enumerated_length(chain_length) {
        Some(effective) if effective >= 1 => Ok(effective),
        _ => Err(ParameterError::EffectiveChainLength {
            topology: topology.to_string(),
            chain_length,
            core_length: topology.invariant_length(),
        }
        .into()),
    }
}
