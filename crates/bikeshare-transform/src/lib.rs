//! Table transformations behind every report.
//!
//! All functions take a [`bikeshare_model::Table`] by reference and return a
//! new table or result; the input is never modified.

pub mod aggregate;
pub mod columns;
pub mod derive;
pub mod describe;
pub mod filter;
pub mod labels;

pub use aggregate::{group_mean, group_values};
pub use derive::{RatioOutput, derive_day_type, derive_ratio, derive_sum};
pub use describe::{box_summary, describe, quantile, sample_std};
pub use filter::{SeasonFilter, apply_season_filter, distinct_codes, filter};
pub use labels::{label_column_name, map_labels};
