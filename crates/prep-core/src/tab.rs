use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four fixed content views.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Roadmap,
    Projects,
    Coding,
    Strategy,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Roadmap, Tab::Projects, Tab::Coding, Tab::Strategy];

    /// Wire name, as accepted by `select_tab`.
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Roadmap => "roadmap",
            Tab::Projects => "projects",
            Tab::Coding => "coding",
            Tab::Strategy => "strategy",
        }
    }

    /// Heading shown on the tab selector.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Roadmap => "Complete Roadmap",
            Tab::Projects => "Project Mastery",
            Tab::Coding => "Code Patterns",
            Tab::Strategy => "Interview Strategy",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
