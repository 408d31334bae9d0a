//! Rules configuration.
//!
//! The engine reads its rule constants from a `RulesConfig` supplied at
//! startup. `RulesConfig::standard()` is the published rule set; hosts may
//! load an override from any serde format, with missing fields falling back
//! to the standard values.
//!
//! ```
//! use homeworlds::core::RulesConfig;
//!
//! let config = RulesConfig::standard();
//! assert_eq!(config.home_star_count, 2);
//! assert_eq!(config.overpopulation_threshold, 4);
//! ```

use serde::{Deserialize, Serialize};

use super::system::OVERPOPULATION_THRESHOLD;

/// Rule constants consulted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Stars each player claims for their home during setup.
    pub home_star_count: usize,

    /// Pieces of one color that make a system overpopulated.
    pub overpopulation_threshold: usize,
}

impl RulesConfig {
    /// The standard rule set.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            home_star_count: 2,
            overpopulation_threshold: OVERPOPULATION_THRESHOLD,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::standard()
    }
}
