use thiserror::Error;

/// A search parameter that was rejected before any candidate was generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("the chain length must contain at least one residue (got {chain_length})")]
    ChainLength { chain_length: usize },

    #[error("the lipid chain must contain at least one carbon (got {carbon_count})")]
    CarbonCount { carbon_count: u32 },

    #[error("the tolerance must be a finite, non-negative number (got {tolerance})")]
    Tolerance { tolerance: f64 },

    #[error("the {name} mass must be a finite number (got {mass})")]
    Mass { name: &'static str, mass: f64 },

    #[error(
        "a {topology} chain of {chain_length} residues must be longer than its {core_length}-residue invariant block"
    )]
    EffectiveChainLength {
        topology: String,
        chain_length: usize,
        core_length: usize,
    },
}

impl ParameterError {
    pub(crate) fn mass(name: &'static str, mass: f64) -> Self {
        Self::Mass { name, mass }
    }
}
