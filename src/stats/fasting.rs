use chrono::Duration;

use crate::meals::repo::Meal;

/// A meal plus the formatted gap since the chronologically previous meal.
/// `since_previous` is `None` for the earliest meal on record.
#[derive(Debug)]
pub struct FastingEntry {
    pub meal: Meal,
    pub since_previous: Option<String>,
}

/// Annotates each meal with the fasting gap before it and returns the list
/// newest-first. Safe on zero or one meal.
pub fn annotate(mut meals: Vec<Meal>) -> Vec<FastingEntry> {
    meals.sort_by_key(|m| m.created_at);

    let mut annotated = Vec::with_capacity(meals.len());
    let mut prev = None;
    for meal in meals {
        let since_previous = prev.map(|p| format_gap(meal.created_at - p));
        prev = Some(meal.created_at);
        annotated.push(FastingEntry {
            meal,
            since_previous,
        });
    }
    annotated.reverse();
    annotated
}

/// `{d}d {h}h {m}m` when the gap spans whole days, else `{h}h {m}m`.
/// Sub-minute remainder is floored, never rounded up.
pub fn format_gap(gap: Duration) -> String {
    let total_minutes = gap.num_minutes();
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else {
        format!("{hours}h {minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    fn meal(name: &str, created_at: DateTime<Utc>) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            name: name.into(),
            components: vec![],
            calories: None,
            created_at,
        }
    }

    fn at(d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, h, mi, s).unwrap()
    }

    #[test]
    fn gaps_run_between_consecutive_meals_newest_first() {
        let meals = vec![
            meal("breakfast", at(1, 8, 0, 0)),
            meal("dinner", at(1, 22, 32, 29)),
            meal("next breakfast", at(2, 9, 15, 0)),
        ];
        let annotated = annotate(meals);

        assert_eq!(annotated.len(), 3);
        assert_eq!(annotated[0].meal.name, "next breakfast");
        assert_eq!(annotated[0].since_previous.as_deref(), Some("10h 42m"));
        assert_eq!(annotated[1].meal.name, "dinner");
        // 14h 32m 29s floors to whole minutes.
        assert_eq!(annotated[1].since_previous.as_deref(), Some("14h 32m"));
        assert_eq!(annotated[2].meal.name, "breakfast");
        assert_eq!(annotated[2].since_previous, None);
    }

    #[test]
    fn input_order_does_not_matter() {
        let shuffled = vec![
            meal("b", at(1, 12, 0, 0)),
            meal("a", at(1, 8, 0, 0)),
            meal("c", at(1, 19, 30, 0)),
        ];
        let annotated = annotate(shuffled);
        let names: Vec<&str> = annotated.iter().map(|e| e.meal.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
        assert_eq!(annotated[0].since_previous.as_deref(), Some("7h 30m"));
        assert_eq!(annotated[1].since_previous.as_deref(), Some("4h 0m"));
    }

    #[test]
    fn zero_and_one_meal_are_fine() {
        assert!(annotate(vec![]).is_empty());

        let annotated = annotate(vec![meal("only", at(1, 8, 0, 0))]);
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].since_previous, None);
    }

    #[test]
    fn day_component_appears_only_past_whole_days() {
        assert_eq!(format_gap(Duration::minutes(26 * 60 + 3)), "1d 2h 3m");
        assert_eq!(format_gap(Duration::hours(23)), "23h 0m");
        assert_eq!(format_gap(Duration::days(2)), "2d 0h 0m");
        assert_eq!(format_gap(Duration::zero()), "0h 0m");
    }

    #[test]
    fn sub_minute_remainder_is_floored() {
        assert_eq!(format_gap(Duration::seconds(59)), "0h 0m");
        assert_eq!(
            format_gap(Duration::seconds(14 * 3600 + 32 * 60 + 29)),
            "14h 32m"
        );
    }
}
