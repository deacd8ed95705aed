//! Report pipelines and the dashboard facade.
//!
//! [`select_report`] turns a filtered [`bikeshare_model::Table`] into the
//! data behind one chart. [`Dashboard`] strings dataset selection, the season
//! filter, report selection and summary statistics into one interaction.

pub mod dashboard;
pub mod pipelines;

pub use dashboard::{Dashboard, DashboardView};
pub use pipelines::select_report;
