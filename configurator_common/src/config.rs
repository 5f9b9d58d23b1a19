//! Wizard configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Route the guard redirects to when session data is missing.
pub const LANDING_ROUTE: &str = "/";
/// Route of the configure (components) step.
pub const CONFIGURE_ROUTE: &str = "/configure";
/// Route the Continue button leads to.
pub const REVIEW_ROUTE: &str = "/review";

/// Local storage key holding the analysis summary from the use-case step.
pub const REQUIREMENT_ANALYSIS_KEY: &str = "requirementAnalysis";
/// Local storage key holding the user's free-text request.
pub const USER_INPUT_KEY: &str = "userInput";

/// Step shown when the query string carries no usable `step`.
pub const DEFAULT_STEP: u8 = 2;

/// Store keys and routes used by the wizard.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardConfig {
    pub requirement_analysis_key: String,
    pub user_input_key: String,
    pub default_step: u8,
    pub landing_route: String,
    pub configure_route: String,
    pub next_route: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            requirement_analysis_key: REQUIREMENT_ANALYSIS_KEY.to_string(),
            user_input_key: USER_INPUT_KEY.to_string(),
            default_step: DEFAULT_STEP,
            landing_route: LANDING_ROUTE.to_string(),
            configure_route: CONFIGURE_ROUTE.to_string(),
            next_route: REVIEW_ROUTE.to_string(),
        }
    }
}

impl WizardConfig {
    /// Parse a JSON override document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WizardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_step == 0 {
            return Err(ConfigError::InvalidDefaultStep(self.default_step));
        }
        if self.requirement_analysis_key.is_empty() {
            return Err(ConfigError::EmptyStoreKey("requirement analysis"));
        }
        if self.user_input_key.is_empty() {
            return Err(ConfigError::EmptyStoreKey("user input"));
        }
        for route in [&self.landing_route, &self.configure_route, &self.next_route] {
            if !route.starts_with('/') {
                return Err(ConfigError::InvalidRoute(route.clone()));
            }
        }
        Ok(())
    }

    /// Link to the configure step with the given step highlighted.
    pub fn configure_href(&self, step: u8) -> String {
        format!("{}?step={}", self.configure_route, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = WizardConfig::from_json(r#"{ "nextRoute": "/quote" }"#).unwrap();
        assert_eq!(config.next_route, "/quote");
        assert_eq!(config.landing_route, "/");
        assert_eq!(config.user_input_key, "userInput");
        assert_eq!(config.default_step, 2);
    }

    #[test]
    fn rejects_relative_routes() {
        let err = WizardConfig::from_json(r#"{ "landingRoute": "home" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRoute(ref r) if r == "home"));
    }

    #[test]
    fn rejects_empty_store_key() {
        let err = WizardConfig::from_json(r#"{ "userInputKey": "" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStoreKey(_)));
    }

    #[test]
    fn rejects_zero_default_step() {
        let err = WizardConfig::from_json(r#"{ "defaultStep": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaultStep(0)));
    }

    #[test]
    fn configure_href_carries_step() {
        assert_eq!(WizardConfig::default().configure_href(2), "/configure?step=2");
    }
}
