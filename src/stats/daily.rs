use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use indexmap::IndexMap;

use crate::workouts::repo::Workout;

/// Per-exercise totals for one local calendar day. The backing map keeps
/// first-seen order over the entries in chronological order, which is what the
/// chart consumes; the table view sorts a copy by name.
#[derive(Debug, Default)]
pub struct DailySummary {
    totals: IndexMap<String, i64>,
}

impl DailySummary {
    /// Folds every entry whose calendar date in `tz` matches `now`'s calendar
    /// date in `tz`. Each entry contributes sets × reps.
    pub fn for_today(entries: &[Workout], tz: Tz, now: DateTime<Utc>) -> Self {
        let today = now.with_timezone(&tz).date_naive();

        let mut todays: Vec<&Workout> = entries
            .iter()
            .filter(|w| w.created_at.with_timezone(&tz).date_naive() == today)
            .collect();
        todays.sort_by_key(|w| w.created_at);

        let mut totals: IndexMap<String, i64> = IndexMap::new();
        for w in todays {
            *totals.entry(w.exercise_name.clone()).or_insert(0) +=
                i64::from(w.sets) * i64::from(w.reps);
        }
        Self { totals }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Rows for the summary table, sorted lexicographically by exercise name.
    pub fn sorted_rows(&self) -> Vec<(String, i64)> {
        let mut rows: Vec<(String, i64)> = self
            .totals
            .iter()
            .map(|(name, total)| (name.clone(), *total))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }

    /// Parallel label/value arrays in first-seen order for the chart.
    pub fn chart_series(&self) -> (Vec<String>, Vec<i64>) {
        let labels = self.totals.keys().cloned().collect();
        let values = self.totals.values().copied().collect();
        (labels, values)
    }
}
