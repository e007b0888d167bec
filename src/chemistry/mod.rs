pub mod composition;
pub mod constants;
pub mod lipid;
pub mod mass_calc;
pub mod model;
pub mod table;
