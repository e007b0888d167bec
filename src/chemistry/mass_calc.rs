use anyhow::*;
use std::collections::HashMap;

use crate::chemistry::composition::*;
use crate::chemistry::constants::{SURFACTIN_CORE_RESIDUES, WATER_MONO_MASS};
use crate::chemistry::model::PeptideTopology;
use crate::chemistry::table::AminoAcidTable;

/// Mass of the waters lost while assembling `chain_length` residues with the given topology.
pub fn calc_condensation_mass(topology: PeptideTopology, chain_length: usize) -> f64 {
    WATER_MONO_MASS * topology.condensation_water_count(chain_length) as f64
}

/// Condensation-corrected monoisotopic mass of a full sequence.
pub fn calc_aa_seq_mass(aa_seq: &str, aa_table: &AminoAcidTable, topology: PeptideTopology) -> Result<f64> {

    let aa_comp = parse_aa_composition(aa_seq)?;
    if aa_comp.is_empty() { bail!("sequence is empty") }

    let chain_length = aa_comp.values().sum::<u32>() as usize;

    let get_aa_mass = |aa_code1: char| -> Result<f64> {
        Ok(aa_table.get(aa_code1)?.mono_mass)
    };

    let residues_mass = _calc_mass(aa_comp, get_aa_mass)?;

    Ok(residues_mass - calc_condensation_mass(topology, chain_length))
}

/// Summed residue mass of the invariant surfactin block (no condensation correction).
pub fn calc_surfactin_core_mass(aa_table: &AminoAcidTable) -> Result<f64> {
    let core_seq: String = SURFACTIN_CORE_RESIDUES.iter().collect();
    let core_comp = parse_aa_composition(&core_seq)?;

    _calc_mass(core_comp, |aa_code1| Ok(aa_table.get(aa_code1)?.mono_mass))
}

fn _calc_mass<T,F>(abundance_map: HashMap<T, u32>, get_entity_mass: F) -> Result<f64> where F: Fn(T) -> Result<f64> {

    let mut mass: f64 = 0.0;
    for (entity, entity_ab) in abundance_map {
        let entity_mass = get_entity_mass(entity)?;
        mass += entity_ab as f64 * entity_mass;
    }

    Ok(mass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::table::NATURAL_AMINO_ACID_TABLE;
    use float_cmp::assert_approx_eq;

    #[test]
    fn linear_dipeptide() {
        let mass = calc_aa_seq_mass("GG", &NATURAL_AMINO_ACID_TABLE, PeptideTopology::Linear).unwrap();
        assert_approx_eq!(f64, mass, 96.03232, epsilon = 1e-6);
    }

    #[test]
    fn macrocycle_removes_one_more_water() {
        let table = &*NATURAL_AMINO_ACID_TABLE;
        let linear = calc_aa_seq_mass("GAV", table, PeptideTopology::Linear).unwrap();
        let cyclic = calc_aa_seq_mass("GAV", table, PeptideTopology::Macrocycle).unwrap();
        assert_approx_eq!(f64, linear - cyclic, WATER_MONO_MASS, epsilon = 1e-9);
    }

    #[test]
    fn surfactin_core() {
        let mass = calc_surfactin_core_mass(&NATURAL_AMINO_ACID_TABLE).unwrap();
        assert_approx_eq!(f64, mass, 129.04259 + 2.0 * 113.08406 + 115.02694, epsilon = 1e-9);

        // The core is counted as bare residues, a ring of the same block loses one water per residue
        let cyclic = calc_aa_seq_mass("ELLD", &NATURAL_AMINO_ACID_TABLE, PeptideTopology::Macrocycle).unwrap();
        assert_approx_eq!(f64, mass - cyclic, 4.0 * WATER_MONO_MASS, epsilon = 1e-9);
    }

    #[test]
    fn unknown_residue_is_an_error() {
        assert!(calc_aa_seq_mass("GXG", &NATURAL_AMINO_ACID_TABLE, PeptideTopology::Linear).is_err());
        assert!(calc_aa_seq_mass("", &NATURAL_AMINO_ACID_TABLE, PeptideTopology::Linear).is_err());
    }
}
