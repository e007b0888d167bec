use anyhow::*;

use crate::chemistry::constants::atom;
use crate::chemistry::model::{LipidSaturation, LipidVariant};
use crate::chemistry::table::AtomTable;
use crate::errors::ParameterError;

/// Monoisotopic masses of the beta-hydroxy fatty acid with `carbon_count` carbons,
/// in saturated, mono- and di-unsaturated forms (in that order).
///
/// The saturated acid is C(n) H(2n) O(3); each extra C=C double bond removes two hydrogens.
pub fn calc_lipid_variants(carbon_count: u32, atom_table: &AtomTable) -> Result<[LipidVariant; 3]> {
    if carbon_count < 1 {
        return Err(ParameterError::CarbonCount { carbon_count }.into());
    }

    let c_mass = atom_table.mono_mass(atom::C)?;
    let h_mass = atom_table.mono_mass(atom::H)?;
    let o_mass = atom_table.mono_mass(atom::O)?;

    let n = carbon_count as f64;
    let saturated_mass = (c_mass * n) + (h_mass * n * 2.0) + (o_mass * 3.0);

    Ok(LipidSaturation::ALL.map(|saturation| LipidVariant {
        saturation,
        mono_mass: saturated_mass - (2 * saturation.double_bonds()) as f64 * h_mass,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::constants::HYDROGEN_MONO_MASS;
    use crate::chemistry::table::BIOMOLECULE_ATOM_TABLE;
    use float_cmp::assert_approx_eq;

    #[test]
    fn myristic_chain() {
        let [sat, mono, di] = calc_lipid_variants(14, &BIOMOLECULE_ATOM_TABLE).unwrap();

        assert_eq!(sat.saturation, LipidSaturation::Saturated);
        assert_eq!(mono.saturation, LipidSaturation::MonoUnsaturated);
        assert_eq!(di.saturation, LipidSaturation::DiUnsaturated);

        assert_approx_eq!(f64, sat.mono_mass, 244.20372, epsilon = 1e-4);
        assert_approx_eq!(f64, mono.mono_mass, 242.18808, epsilon = 1e-4);
        assert_approx_eq!(f64, di.mono_mass, 240.17244, epsilon = 1e-4);
    }

    #[test]
    fn unsaturation_removes_hydrogen_pairs() {
        for n in 1..=30 {
            let [sat, mono, di] = calc_lipid_variants(n, &BIOMOLECULE_ATOM_TABLE).unwrap();
            assert_approx_eq!(f64, sat.mono_mass - mono.mono_mass, 2.0 * HYDROGEN_MONO_MASS, epsilon = 1e-9);
            assert_approx_eq!(f64, sat.mono_mass - di.mono_mass, 4.0 * HYDROGEN_MONO_MASS, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_carbons_is_rejected() {
        let err = calc_lipid_variants(0, &BIOMOLECULE_ATOM_TABLE).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParameterError>(),
            Some(&ParameterError::CarbonCount { carbon_count: 0 })
        );
    }
}
