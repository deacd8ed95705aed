//! Static code-to-label lookups for categorical columns.

use crate::schema::Field;

/// Immutable mapping from integer codes to display strings.
///
/// Entries are kept in declared order, which is also the order groups are
/// presented in once a column has been labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelLookup {
    field: Field,
    entries: &'static [(i64, &'static str)],
}

impl LabelLookup {
    pub const fn new(field: Field, entries: &'static [(i64, &'static str)]) -> Self {
        Self { field, entries }
    }

    /// The column whose codes this lookup translates.
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, label)| *label)
    }

    /// Code for a label, the reverse of [`LabelLookup::label`].
    pub fn code(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == label)
            .map(|(code, _)| *code)
    }

    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    /// Labels in declared order.
    pub fn labels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(_, label)| (*label).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const SEASON_LABELS: LabelLookup = LabelLookup::new(
    Field::Season,
    &[(1, "Winter"), (2, "Spring"), (3, "Summer"), (4, "Fall")],
);

pub const WEEKDAY_LABELS: LabelLookup = LabelLookup::new(
    Field::Weekday,
    &[
        (0, "Sunday"),
        (1, "Monday"),
        (2, "Tuesday"),
        (3, "Wednesday"),
        (4, "Thursday"),
        (5, "Friday"),
        (6, "Saturday"),
    ],
);

pub const WEATHER_LABELS: LabelLookup = LabelLookup::new(
    Field::WeatherSituation,
    &[
        (1, "Clear"),
        (2, "Mist"),
        (3, "Light Snow/Rain"),
        (4, "Heavy Rain"),
    ],
);

pub const WORKING_DAY_LABEL: &str = "Working Day";
pub const WEEKEND_LABEL: &str = "Weekend";

/// Day type for a `workingday` flag: `1` is a working day, anything else
/// (including holidays coded `0`) counts as weekend.
pub fn day_type_label(working_day: i64) -> &'static str {
    if working_day == 1 {
        WORKING_DAY_LABEL
    } else {
        WEEKEND_LABEL
    }
}
