// Monoisotopic masses rounded to five decimals
pub const WATER_MONO_MASS: f64 = 18.0106;

pub const CARBON_MONO_MASS: f64 = 12.0000;
pub const HYDROGEN_MONO_MASS: f64 = 1.00782;
pub const OXYGEN_MONO_MASS: f64 = 15.99492;
pub const NITROGEN_MONO_MASS: f64 = 14.00307;

pub const PROTON_MASS: f64 = 1.007276466812; // Source: NIST 2010 CODATA

// Surfactin carries an invariant Glu-Leu-Leu-Asp block next to its variable positions
pub const SURFACTIN_CORE_RESIDUES: [char; 4] = [aa::E, aa::L, aa::L, aa::D];
pub const SURFACTIN_CHAIN_LENGTH: usize = 7;

#[allow(dead_code)]
pub mod aa {
    pub const A: char = 'A';
    pub const C: char = 'C';
    pub const D: char = 'D';
    pub const E: char = 'E';
    pub const F: char = 'F';
    pub const G: char = 'G';
    pub const H: char = 'H';
    pub const I: char = 'I';
    pub const K: char = 'K';
    pub const L: char = 'L';
    pub const M: char = 'M';
    pub const N: char = 'N';
    pub const P: char = 'P';
    pub const Q: char = 'Q';
    pub const R: char = 'R';
    pub const S: char = 'S';
    pub const T: char = 'T';
    pub const V: char = 'V';
    pub const W: char = 'W';
    pub const Y: char = 'Y';
}

#[allow(dead_code)]
pub mod atom {
    pub const C: &'static str = "C";
    pub const H: &'static str = "H";
    pub const O: &'static str = "O";
    pub const N: &'static str = "N";
}
