use serde::{Deserialize, Serialize};

/// Who decides a record's level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Level follows the observed skill estimate
    #[default]
    Auto,
    /// Level fixed by an administrator
    Manual,
    /// No scaling; level is always neutral
    Disabled,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Manual => "manual",
            Mode::Disabled => "disabled",
        }
    }

    /// Only AUTO records accumulate observations and get re-estimated
    pub fn is_observed(&self) -> bool {
        matches!(self, Mode::Auto)
    }
}
