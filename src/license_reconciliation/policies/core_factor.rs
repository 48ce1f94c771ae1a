use crate::shared::error::ReconcileError;
use crate::shared::Result;
use std::collections::HashMap;

/// CoreFactorPolicy maps a host's hardware-abstraction technology onto the
/// multiplier applied to its physical core count.
///
/// The table is configuration data. Technologies without an entry use
/// `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreFactorPolicy {
    default: f64,
    by_technology: HashMap<String, f64>,
}

impl CoreFactorPolicy {
    /// Creates a validated policy
    ///
    /// # Errors
    /// Returns an error if any factor is not a finite number within `[0, 1]`
    pub fn new(default: f64, by_technology: HashMap<String, f64>) -> Result<Self> {
        Self::validate_factor("default", default)?;
        for (technology, factor) in &by_technology {
            Self::validate_factor(technology, *factor)?;
        }

        Ok(Self {
            default,
            by_technology,
        })
    }

    /// Core factor for `technology` (exact match)
    pub fn core_factor(&self, technology: &str) -> f64 {
        self.by_technology
            .get(technology)
            .copied()
            .unwrap_or(self.default)
    }

    fn validate_factor(key: &str, factor: f64) -> Result<()> {
        if !factor.is_finite() || !(0.0..=1.0).contains(&factor) {
            return Err(ReconcileError::InvalidConfig {
                message: format!(
                    "core factor for '{}' must be between 0 and 1, got {}",
                    key, factor
                ),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for CoreFactorPolicy {
    fn default() -> Self {
        Self {
            default: 1.0,
            by_technology: HashMap::new(),
        }
    }
}
