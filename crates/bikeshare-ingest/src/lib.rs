//! Dataset loading for the bike sharing analytics engine.

pub mod error;
pub mod loader;

pub use error::{LoadError, Result};
pub use bikeshare_model::DATE_FORMAT;
pub use loader::{DatasetPaths, conform_schema, count_total_mismatches, load_table};

use bikeshare_model::{DatasetKind, Datasets};
use tracing::info_span;

/// Load both datasets. Either one failing aborts startup.
pub fn load_datasets(paths: &DatasetPaths) -> Result<Datasets> {
    let span = info_span!("load_datasets");
    let _guard = span.enter();
    let daily = load_table(paths.get(DatasetKind::Daily), DatasetKind::Daily)?;
    let hourly = load_table(paths.get(DatasetKind::Hourly), DatasetKind::Hourly)?;
    Ok(Datasets { daily, hourly })
}
