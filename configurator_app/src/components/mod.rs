mod analysis;
mod metric_bar;
mod navigation_buttons;
mod progress_steps;
mod visualization;

pub use analysis::{AnalysisResults, ProcessingStatus, SuggestedComponents};
pub use metric_bar::MetricBar;
pub use navigation_buttons::NavigationButtons;
pub use progress_steps::ProgressSteps;
pub use visualization::{DisplayCapability, VisualizationPanel};
