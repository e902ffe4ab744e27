//! Database table names.

pub const TABLE_SPECIES: &str = "fish_species";
pub const TABLE_SITES: &str = "fish_sites";
pub const TABLE_SURVEYS: &str = "fish_survey";
