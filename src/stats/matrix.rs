use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use indexmap::IndexMap;
use serde::Serialize;

use crate::workouts::repo::Workout;

/// One Chart.js series: total sets × reps per date label, aligned to the
/// global label list with 0 where the exercise was not logged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<i64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

// (fill, border) pairs cycled by exercise encounter order.
const PALETTE: [(&str, &str); 6] = [
    ("rgba(255, 99, 132, 0.5)", "rgba(255, 99, 132, 1)"),
    ("rgba(54, 162, 235, 0.5)", "rgba(54, 162, 235, 1)"),
    ("rgba(255, 206, 86, 0.5)", "rgba(255, 206, 86, 1)"),
    ("rgba(75, 192, 192, 0.5)", "rgba(75, 192, 192, 1)"),
    ("rgba(153, 102, 255, 0.5)", "rgba(153, 102, 255, 1)"),
    ("rgba(255, 159, 64, 0.5)", "rgba(255, 159, 64, 1)"),
];

fn date_label(ts: DateTime<Utc>, bucket_tz: Option<Tz>) -> String {
    match bucket_tz {
        Some(tz) => ts.with_timezone(&tz).format("%b %d").to_string(),
        None => ts.format("%b %d").to_string(),
    }
}

/// Builds the date × exercise matrix over all entries. Dates are bucketed on
/// the stored UTC timestamp unless `bucket_tz` is set. Labels are sorted as
/// strings; on the fixed-width `%b %d` format that matches chronology only
/// within a single year.
pub fn grouped_by_date(entries: &[Workout], bucket_tz: Option<Tz>) -> ChartData {
    // Scan in chronological order so series order is first-logged first.
    let mut ordered: Vec<&Workout> = entries.iter().collect();
    ordered.sort_by_key(|w| w.created_at);

    let mut by_exercise: IndexMap<String, BTreeMap<String, i64>> = IndexMap::new();
    for w in ordered {
        let label = date_label(w.created_at, bucket_tz);
        *by_exercise
            .entry(w.exercise_name.clone())
            .or_default()
            .entry(label)
            .or_insert(0) += i64::from(w.sets) * i64::from(w.reps);
    }

    let mut labels: Vec<String> = by_exercise
        .values()
        .flat_map(|per_date| per_date.keys().cloned())
        .collect();
    labels.sort();
    labels.dedup();

    let datasets = by_exercise
        .iter()
        .enumerate()
        .map(|(i, (exercise, per_date))| {
            let (fill, border) = PALETTE[i % PALETTE.len()];
            ChartDataset {
                label: exercise.clone(),
                data: labels
                    .iter()
                    .map(|l| per_date.get(l).copied().unwrap_or(0))
                    .collect(),
                background_color: fill.to_string(),
                border_color: border.to_string(),
                border_width: 1,
            }
        })
        .collect();

    ChartData { labels, datasets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn workout(exercise: &str, sets: i32, reps: i32, created_at: DateTime<Utc>) -> Workout {
        Workout {
            id: Uuid::new_v4(),
            exercise_name: exercise.into(),
            sets,
            reps,
            created_at,
        }
    }

    fn at(mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn series_align_to_sorted_labels_with_zero_fill() {
        let entries = vec![
            workout("Squat", 5, 10, at(1, 5, 9)),
            workout("Row", 4, 12, at(1, 7, 9)),
            workout("Squat", 3, 8, at(1, 7, 18)),
        ];
        let chart = grouped_by_date(&entries, None);

        assert_eq!(chart.labels, vec!["Jan 05", "Jan 07"]);
        assert_eq!(chart.datasets.len(), 2);

        let squat = &chart.datasets[0];
        assert_eq!(squat.label, "Squat");
        assert_eq!(squat.data, vec![50, 24]);

        let row = &chart.datasets[1];
        assert_eq!(row.label, "Row");
        // Row was never logged on Jan 05.
        assert_eq!(row.data, vec![0, 48]);
    }

    #[test]
    fn series_sum_matches_entry_total() {
        let entries = vec![
            workout("Dip", 2, 10, at(2, 1, 8)),
            workout("Dip", 3, 10, at(2, 3, 8)),
            workout("Dip", 1, 7, at(2, 3, 20)),
        ];
        let chart = grouped_by_date(&entries, None);
        let total: i64 = chart.datasets[0].data.iter().sum();
        assert_eq!(total, 2 * 10 + 3 * 10 + 7);
    }

    #[test]
    fn same_day_entries_accumulate_into_one_label() {
        let entries = vec![
            workout("Squat", 1, 10, at(3, 10, 6)),
            workout("Squat", 1, 12, at(3, 10, 19)),
        ];
        let chart = grouped_by_date(&entries, None);
        assert_eq!(chart.labels, vec!["Mar 10"]);
        assert_eq!(chart.datasets[0].data, vec![22]);
    }

    #[test]
    fn palette_cycles_after_six_series() {
        let entries: Vec<Workout> = (0..7)
            .map(|i| workout(&format!("ex{i}"), 1, 1, at(1, 1, i)))
            .collect();
        let chart = grouped_by_date(&entries, None);
        assert_eq!(chart.datasets.len(), 7);
        assert_eq!(
            chart.datasets[6].background_color,
            chart.datasets[0].background_color
        );
        assert_ne!(
            chart.datasets[5].background_color,
            chart.datasets[0].background_color
        );
    }

    #[test]
    fn utc_and_local_bucketing_split_around_midnight() {
        // 02:00 UTC on Jan 6 is Jan 5 in New York.
        let entries = vec![workout("Bench", 2, 5, at(1, 6, 2))];

        let utc = grouped_by_date(&entries, None);
        assert_eq!(utc.labels, vec!["Jan 06"]);

        let local = grouped_by_date(&entries, Some(chrono_tz::America::New_York));
        assert_eq!(local.labels, vec!["Jan 05"]);
    }

    #[test]
    fn empty_input_yields_empty_chart() {
        let chart = grouped_by_date(&[], None);
        assert!(chart.labels.is_empty());
        assert!(chart.datasets.is_empty());
    }

    #[test]
    fn serializes_in_chart_js_shape() {
        let entries = vec![workout("Squat", 1, 10, at(1, 5, 9))];
        let json = serde_json::to_value(grouped_by_date(&entries, None)).unwrap();
        assert_eq!(json["labels"][0], "Jan 05");
        assert_eq!(json["datasets"][0]["label"], "Squat");
        assert_eq!(json["datasets"][0]["data"][0], 10);
        assert!(json["datasets"][0]["backgroundColor"].is_string());
        assert!(json["datasets"][0]["borderColor"].is_string());
        assert_eq!(json["datasets"][0]["borderWidth"], 1);
    }
}
