//! Wizard step catalog.

use serde::{Deserialize, Serialize};

/// Steps of the configurator wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    UseCase,
    Components,
    Review,
    Quote,
}

impl WizardStep {
    pub fn all() -> [WizardStep; 4] {
        [
            WizardStep::UseCase,
            WizardStep::Components,
            WizardStep::Review,
            WizardStep::Quote,
        ]
    }

    pub fn number(&self) -> i32 {
        match self {
            WizardStep::UseCase => 1,
            WizardStep::Components => 2,
            WizardStep::Review => 3,
            WizardStep::Quote => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::UseCase => "Use Case",
            WizardStep::Components => "Components",
            WizardStep::Review => "Review",
            WizardStep::Quote => "Quote",
        }
    }

    pub fn from_number(number: i32) -> Option<WizardStep> {
        Self::all().into_iter().find(|s| s.number() == number)
    }

    /// Whether the progress indicator for this step is lit at `current_step`.
    pub fn is_active(&self, current_step: i32) -> bool {
        current_step >= self.number()
    }

    /// Like [`is_active`](Self::is_active), but steps numbered below
    /// `highlight_from` are never lit.
    pub fn is_lit(&self, current_step: i32, highlight_from: i32) -> bool {
        self.number() >= highlight_from && self.is_active(current_step)
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
