//! UI layer for the estimator: app shell, panels, chart, and theme.

pub mod app;
pub mod chart;
pub mod panels;
pub mod theme;

pub use app::EstimatorApp;
