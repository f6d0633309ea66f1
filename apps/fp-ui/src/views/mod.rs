pub mod chart_view;
pub mod input_view;
pub mod results_view;

pub use chart_view::ChartView;
pub use input_view::{FormState, InputView};
pub use results_view::ResultsView;
