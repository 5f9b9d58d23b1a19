//! Static analysis data shown by the wizard.
//!
//! These are fixed display values, not results computed from a model.

use serde::{Deserialize, Serialize};

/// One labelled bar in the analysis results card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisMetric {
    pub label: &'static str,
    pub value: &'static str,
    /// Bar fill, 0-100.
    pub percent: u8,
}

/// A line in the real-time processing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessingItem {
    pub label: &'static str,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentSuggestion {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Use-case families offered on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCaseKind {
    Warehouse,
    Assembly,
    Quality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseCaseExample {
    pub kind: UseCaseKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub example: &'static str,
}

pub const ANALYSIS_METRICS: [AnalysisMetric; 4] = [
    AnalysisMetric { label: "Weight Capacity", value: "150kg", percent: 80 },
    AnalysisMetric { label: "Reach Distance", value: "2.5m", percent: 70 },
    AnalysisMetric { label: "Speed", value: "1.2m/s", percent: 60 },
    AnalysisMetric { label: "Precision", value: "±0.1mm", percent: 90 },
];

pub const PROCESSING_ITEMS: [ProcessingItem; 3] = [
    ProcessingItem { label: "Analyzing workspace requirements...", done: false },
    ProcessingItem { label: "Load capacity calculation complete", done: true },
    ProcessingItem { label: "Movement patterns optimized", done: true },
];

pub const SUGGESTED_COMPONENTS: [ComponentSuggestion; 2] = [
    ComponentSuggestion {
        icon: "🤖",
        name: "RT-2000 Arm",
        description: "High precision, medium payload",
    },
    ComponentSuggestion {
        icon: "🎮",
        name: "Smart Controller X1",
        description: "Advanced path planning",
    },
];

pub const USE_CASE_EXAMPLES: [UseCaseExample; 3] = [
    UseCaseExample {
        kind: UseCaseKind::Warehouse,
        icon: "🏭",
        title: "Warehouse Automation",
        example: "I need a robot to pick and pack items from shelves in my warehouse",
    },
    UseCaseExample {
        kind: UseCaseKind::Assembly,
        icon: "⚙️",
        title: "Assembly Line",
        example: "Looking for a robot to assist with circuit board assembly and soldering",
    },
    UseCaseExample {
        kind: UseCaseKind::Quality,
        icon: "🔍",
        title: "Quality Control",
        example: "Need automated visual inspection for product defects on our production line",
    },
];

impl UseCaseKind {
    pub fn example(&self) -> &'static UseCaseExample {
        match self {
            UseCaseKind::Warehouse => &USE_CASE_EXAMPLES[0],
            UseCaseKind::Assembly => &USE_CASE_EXAMPLES[1],
            UseCaseKind::Quality => &USE_CASE_EXAMPLES[2],
        }
    }
}

/// Summary stored as `requirementAnalysis` once the user submits a request.
///
/// Serialized as JSON so later steps can read it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementAnalysis {
    pub use_case: Option<UseCaseKind>,
    pub request: String,
    pub suggested_components: Vec<String>,
}

impl RequirementAnalysis {
    pub fn for_request(request: &str, use_case: Option<UseCaseKind>) -> Self {
        Self {
            use_case,
            request: request.trim().to_string(),
            suggested_components: SUGGESTED_COMPONENTS.iter().map(|c| c.name.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored summary. Upstream may store free text, so this is lenient.
    pub fn from_stored(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}
