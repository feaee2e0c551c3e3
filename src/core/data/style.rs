use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::issues::Severity;

/// How strictly message definitions are held to the `goog.getMsg` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    /// Legacy definitions (plain strings, function wrappers) are accepted silently.
    Legacy,
    /// Legacy definitions are extracted but reported with a warning.
    Relax,
    /// Only `goog.getMsg` definitions are extracted; legacy ones are errors.
    #[default]
    Closure,
}

impl MessageStyle {
    pub fn is_strict(self) -> bool {
        self == MessageStyle::Closure
    }

    /// Severity for diagnostics whose level follows the style strictness.
    pub fn check_level(self) -> Severity {
        if self.is_strict() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

impl fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageStyle::Legacy => write!(f, "legacy"),
            MessageStyle::Relax => write!(f, "relax"),
            MessageStyle::Closure => write!(f, "closure"),
        }
    }
}
