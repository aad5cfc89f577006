//! Checker configuration: every numeric threshold the rules consult.

/// Tunable thresholds for the validation rules.
///
/// All values are configuration, not hard constants; construct with
/// `CheckConfig::default()` and override fields per invocation. Units match
/// the grid's length units.
#[derive(Clone, Debug)]
pub struct CheckConfig {
    /// Cells thinner than this (but still positive) are flagged as thin.
    /// Default: 1.0.
    pub thin_cell_threshold: f64,
    /// Hydraulic-property values below this are flagged as suspiciously
    /// low. Default: 1e-11.
    pub property_lo: f64,
    /// Hydraulic-property values above this are flagged as suspiciously
    /// high. Default: 1e5.
    pub property_hi: f64,
    /// Mean recharge divided by mean transmissivity at or above this ratio
    /// is flagged. Default: 2e-8.
    pub recharge_ratio_threshold: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            thin_cell_threshold: 1.0,
            property_lo: 1e-11,
            property_hi: 1e5,
            recharge_ratio_threshold: 2e-8,
        }
    }
}
