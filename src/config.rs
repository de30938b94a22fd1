use std::fs;
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::Deserialize;

use crate::error::GaugeError;
use crate::units::UnitFamily;

/// Display configuration: which unit family each kind of value uses.
///
/// Two independent keys — one for rates, one for cumulative totals — so
/// e.g. rates can show as bits while totals stay in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DisplayConfig {
    pub rate_units: UnitFamily,
    pub total_units: UnitFamily,
}

/// Shared config handle. A `store` from anywhere in the process is visible
/// to the next `load`, so every tick formats with a fresh value.
pub type SharedDisplayConfig = Arc<ArcSwap<DisplayConfig>>;

pub fn new_shared_config(cfg: DisplayConfig) -> SharedDisplayConfig {
    Arc::new(ArcSwap::from_pointee(cfg))
}

/// Load display configuration from a JSON file.
///
/// Unknown keys and unit-family spellings outside the closed set are
/// rejected here, at the boundary, never at formatting time.
pub fn load_config(path: &Path) -> Result<DisplayConfig, GaugeError> {
    let text = fs::read_to_string(path)
        .map_err(|e| GaugeError::Config(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text).map_err(|e| GaugeError::Config(format!("{}: {e}", path.display())))
}
