mod app;
pub mod selector;
pub mod theme;

pub use app::state::{ConversionResult, ConverterState, Tab};
pub use app::ConverterApp;
