//! Scheduler configuration.
//!
//! [`SwrrConfig`] holds the few knobs that control pool bookkeeping.
//! The selection rule itself has no parameters.

/// Configuration for [`SmoothWeightedRoundRobin`](super::SmoothWeightedRoundRobin).
///
/// # Defaults
///
/// ```
/// use u_balance::swrr::SwrrConfig;
///
/// let config = SwrrConfig::default();
/// assert_eq!(config.initial_capacity, 0);
/// assert!(!config.reset_on_membership_change);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_balance::swrr::SwrrConfig;
///
/// let config = SwrrConfig::default()
///     .with_initial_capacity(64)
///     .with_reset_on_membership_change(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwrrConfig {
    /// Number of pool slots to reserve up front.
    pub initial_capacity: usize,

    /// Zero every current weight whenever a member is added or removed.
    ///
    /// When disabled (the default), a newly added member joins with its
    /// own current weight and the first partial cycle after a change may
    /// be mildly skewed.
    pub reset_on_membership_change: bool,

    /// Upper bound on the sum of all member weights.
    ///
    /// An `add` that would exceed it is ignored, like any other
    /// ineligible candidate.
    pub max_total_weight: i64,
}

impl Default for SwrrConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            reset_on_membership_change: false,
            max_total_weight: i64::MAX / 2,
        }
    }
}

impl SwrrConfig {
    /// Sets the number of pool slots to reserve.
    pub fn with_initial_capacity(mut self, n: usize) -> Self {
        self.initial_capacity = n;
        self
    }

    /// Enables or disables ledger reset on membership change.
    pub fn with_reset_on_membership_change(mut self, reset: bool) -> Self {
        self.reset_on_membership_change = reset;
        self
    }

    /// Sets the upper bound on total pool weight.
    pub fn with_max_total_weight(mut self, max: i64) -> Self {
        self.max_total_weight = max;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_total_weight <= 0 {
            return Err(format!(
                "max_total_weight must be positive, got {}",
                self.max_total_weight
            ));
        }
        if self.max_total_weight > i64::MAX / 2 {
            return Err(format!(
                "max_total_weight must not exceed {}, got {}",
                i64::MAX / 2,
                self.max_total_weight
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwrrConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert!(!config.reset_on_membership_change);
        assert_eq!(config.max_total_weight, i64::MAX / 2);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SwrrConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_non_positive_max() {
        let config = SwrrConfig::default().with_max_total_weight(0);
        assert!(config.validate().is_err());

        let config = SwrrConfig::default().with_max_total_weight(-10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_max_too_large() {
        let config = SwrrConfig::default().with_max_total_weight(i64::MAX);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder() {
        let config = SwrrConfig::default()
            .with_initial_capacity(16)
            .with_reset_on_membership_change(true)
            .with_max_total_weight(1_000);
        assert_eq!(config.initial_capacity, 16);
        assert!(config.reset_on_membership_change);
        assert_eq!(config.max_total_weight, 1_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial() {
        let config: SwrrConfig =
            serde_json::from_str(r#"{"reset_on_membership_change":true}"#).unwrap();
        assert!(config.reset_on_membership_change);
        assert_eq!(config.max_total_weight, i64::MAX / 2);
    }
}
