//! Derived columns: day type, rider totals and ratios.

use polars::prelude::{BooleanChunked, IntoColumn, NamedFrom, NewChunkedArray, Series};
use tracing::{debug, warn};

use bikeshare_model::{
    DAY_TYPE, DashboardError, Field, RatioPolicy, Result, Table, WEEKEND_LABEL,
    WORKING_DAY_LABEL, day_type_label,
};

use crate::columns::{column_codes, column_f64};

/// Add `day_type`: "Working Day" when `workingday == 1`, otherwise "Weekend".
/// A row without a flag fails with [`DashboardError::MissingCode`].
pub fn derive_day_type(table: &Table) -> Result<Table> {
    let flags = column_codes(table, Field::WorkingDay.name())?;
    let missing = flags.iter().filter(|flag| flag.is_none()).count();
    if missing > 0 {
        return Err(DashboardError::MissingCode {
            column: Field::WorkingDay.name().to_string(),
            rows: missing,
        });
    }
    let labels: Vec<&str> = flags.into_iter().flatten().map(day_type_label).collect();
    let mut frame = table.frame().clone();
    frame.with_column(Series::new(DAY_TYPE.into(), labels).into_column())?;
    Ok(table.with_frame(frame).with_declared_order(
        DAY_TYPE,
        vec![WORKING_DAY_LABEL.to_string(), WEEKEND_LABEL.to_string()],
    ))
}

/// Add `output = left + right` for two integer columns.
pub fn derive_sum(table: &Table, left: &str, right: &str, output: &str) -> Result<Table> {
    let left_values = column_codes(table, left)?;
    let right_values = column_codes(table, right)?;
    let sums: Vec<Option<i64>> = left_values
        .into_iter()
        .zip(right_values)
        .map(|(left, right)| Some(left? + right?))
        .collect();
    let mut frame = table.frame().clone();
    frame.with_column(Series::new(output.into(), sums).into_column())?;
    Ok(table.with_frame(frame))
}

/// A derived ratio table and how many rows had a zero denominator.
#[derive(Debug, Clone)]
pub struct RatioOutput {
    pub table: Table,
    pub zero_denominators: usize,
}

/// Add `output = numerator / denominator`.
///
/// Rows with a zero denominator are handled per `policy`: NaN, 0.0, dropped,
/// or the whole derivation fails with [`DashboardError::UndefinedRatio`].
/// Null inputs give a null ratio.
pub fn derive_ratio(
    table: &Table,
    numerator: &str,
    denominator: &str,
    output: &str,
    policy: RatioPolicy,
) -> Result<RatioOutput> {
    let numerators = column_f64(table, numerator)?;
    let denominators = column_f64(table, denominator)?;
    let mut ratios: Vec<Option<f64>> = Vec::with_capacity(numerators.len());
    let mut keep: Vec<bool> = Vec::with_capacity(numerators.len());
    let mut zero_denominators = 0usize;
    for (num, den) in numerators.into_iter().zip(denominators) {
        match (num, den) {
            (Some(num), Some(den)) if den != 0.0 => {
                ratios.push(Some(num / den));
                keep.push(true);
            }
            (Some(_), Some(_)) => {
                zero_denominators += 1;
                let value = match policy {
                    RatioPolicy::Zero => 0.0,
                    RatioPolicy::Nan | RatioPolicy::Exclude | RatioPolicy::Reject => f64::NAN,
                };
                ratios.push(Some(value));
                keep.push(policy != RatioPolicy::Exclude);
            }
            _ => {
                ratios.push(None);
                keep.push(true);
            }
        }
    }

    if zero_denominators > 0 {
        if policy == RatioPolicy::Reject {
            return Err(DashboardError::UndefinedRatio {
                column: output.to_string(),
                rows: zero_denominators,
            });
        }
        warn!(
            column = output,
            rows = zero_denominators,
            policy = %policy,
            "zero denominator in derived ratio"
        );
    }

    let mut frame = table.frame().clone();
    frame.with_column(Series::new(output.into(), ratios).into_column())?;
    if policy == RatioPolicy::Exclude && zero_denominators > 0 {
        let mask = BooleanChunked::from_slice("ratio_defined".into(), &keep);
        frame = frame.filter(&mask)?;
    }
    debug!(column = output, rows = frame.height(), "derived ratio");
    Ok(RatioOutput {
        table: table.with_frame(frame),
        zero_denominators,
    })
}
