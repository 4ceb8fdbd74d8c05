//! Conventional field names used by the filters

/// Incident year (integer), present in both collections
pub const YEAR: &str = "año";

/// Incident cause (free text), regional collection
pub const CAUSE: &str = "causa";

/// Federal entity / state name (free text), national collection
pub const ENTITY: &str = "entidad";
