use crate::chemistry::constants::PROTON_MASS;

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum MassTolUnit {
    Da,
    mmu,
    ppm
}

impl MassTolUnit {
    pub fn new(unit: &str) -> Option<MassTolUnit> {
        match unit {
            "Da" | "da"   => Some(MassTolUnit::Da),
            "mmu" | "mDa" => Some(MassTolUnit::mmu),
            "ppm"         => Some(MassTolUnit::ppm),
            _             => None
        }
    }
}

impl std::str::FromStr for MassTolUnit {
    type Err = String;

    fn from_str(unit: &str) -> Result<Self, Self::Err> {
        MassTolUnit::new(unit).ok_or_else(|| format!("unknown tolerance unit '{}' (expected Da, mmu or ppm)", unit))
    }
}

impl std::fmt::Display for MassTolUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn calc_mz_tol_in_daltons(mz: f64, mz_tol: f64, tol_unit: MassTolUnit) -> f64 {
    match tol_unit {
        MassTolUnit::Da => mz_tol,
        MassTolUnit::mmu => mz_tol / 1000.0,
        MassTolUnit::ppm => mz_tol * mz / 1000000.0
    }
}

/// Neutral mass of an ion observed at `mz` with the given charge state.
pub fn mz_to_mass( mz: f64, charge: i32 ) -> f64 {
    let z = charge as f64;
    mz * z.abs() - z * PROTON_MASS
}
