//! Minimal server-side HTML. The pages carry no styling framework; the index
//! embeds its chart data as JSON for Chart.js.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::meals::repo::Meal;
use crate::stats::daily::DailySummary;
use crate::stats::fasting::FastingEntry;
use crate::workouts::repo::Workout;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON safe to inline inside a `<script>` block: `<` is escaped so user
/// content can never close the tag.
fn json_embed<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".into())
        .replace('<', "\\u003c")
}

fn fmt_local(ts: DateTime<Utc>, tz: Tz) -> String {
    ts.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string()
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn index_page(
    summary: &DailySummary,
    workouts: &[Workout],
    meals: &[FastingEntry],
    tz: Tz,
) -> String {
    let mut body = String::new();
    body.push_str("<h1>Fitness Log</h1>\n");

    // Today's summary: alphabetical table plus a first-seen-order chart.
    body.push_str("<h2>Today</h2>\n");
    if summary.is_empty() {
        body.push_str("<p>No workouts logged today.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Exercise</th><th>Total reps</th></tr>\n");
        for (name, total) in summary.sorted_rows() {
            let _ = writeln!(body, "<tr><td>{}</td><td>{}</td></tr>", escape(&name), total);
        }
        body.push_str("</table>\n");

        let (labels, values) = summary.chart_series();
        body.push_str("<canvas id=\"daily-chart\" width=\"400\" height=\"200\"></canvas>\n");
        body.push_str("<script src=\"https://cdn.jsdelivr.net/npm/chart.js\"></script>\n");
        let _ = writeln!(
            body,
            "<script>\nnew Chart(document.getElementById('daily-chart'), {{\n  type: 'bar',\n  data: {{ labels: {}, datasets: [{{ label: 'Reps today', data: {} }}] }}\n}});\n</script>",
            json_embed(&labels),
            json_embed(&values)
        );
    }

    body.push_str("<h2>Add workout</h2>\n");
    body.push_str(concat!(
        "<form method=\"post\" action=\"/add_workout\">\n",
        "<input name=\"exercise_name\" placeholder=\"Exercise\" required>\n",
        "<input name=\"sets\" placeholder=\"Sets (default 1)\">\n",
        "<input name=\"reps\" placeholder=\"Reps\" required>\n",
        "<button type=\"submit\">Add</button>\n",
        "</form>\n",
    ));

    body.push_str("<h2>Workouts</h2>\n");
    body.push_str("<table>\n<tr><th>When</th><th>Exercise</th><th>Sets</th><th>Reps</th><th></th></tr>\n");
    for w in workouts {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/edit_workout/{}\">edit</a> <a href=\"/delete_workout/{}\">delete</a></td></tr>",
            fmt_local(w.created_at, tz),
            escape(&w.exercise_name),
            w.sets,
            w.reps,
            w.id,
            w.id
        );
    }
    body.push_str("</table>\n");

    body.push_str("<h2>Add meal</h2>\n");
    body.push_str("<form method=\"post\" action=\"/add_meal\">\n<input name=\"meal_name\" placeholder=\"Meal\" required>\n");
    for i in 1..=5 {
        let _ = writeln!(
            body,
            "<input name=\"component{i}\" placeholder=\"Component {i}\">"
        );
    }
    body.push_str("<input name=\"calories\" placeholder=\"Calories\">\n<button type=\"submit\">Add</button>\n</form>\n");

    body.push_str("<h2>Meals</h2>\n");
    body.push_str(
        "<table>\n<tr><th>When</th><th>Meal</th><th>Components</th><th>Calories</th><th>Fasted</th><th></th></tr>\n",
    );
    for entry in meals {
        let m = &entry.meal;
        let components = m
            .components
            .iter()
            .map(|c| escape(c))
            .collect::<Vec<_>>()
            .join(", ");
        let calories = m
            .calories
            .map(|c| c.to_string())
            .unwrap_or_else(|| "—".into());
        let fasted = entry.since_previous.as_deref().unwrap_or("—");
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/edit_meal/{}\">edit</a> <a href=\"/delete_meal/{}\">delete</a></td></tr>",
            fmt_local(m.created_at, tz),
            escape(&m.name),
            components,
            calories,
            fasted,
            m.id,
            m.id
        );
    }
    body.push_str("</table>\n");

    page("Fitness Log", &body)
}

pub fn workout_edit_page(workout: &Workout) -> String {
    let body = format!(
        "<h1>Edit workout</h1>\n\
         <form method=\"post\" action=\"/update_workout/{}\">\n\
         <input name=\"exercise_name\" value=\"{}\" required>\n\
         <input name=\"sets\" value=\"{}\">\n\
         <input name=\"reps\" value=\"{}\" required>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <a href=\"/\">Back</a>\n",
        workout.id,
        escape(&workout.exercise_name),
        workout.sets,
        workout.reps
    );
    page("Edit workout", &body)
}

pub fn meal_edit_page(meal: &Meal) -> String {
    let mut body = format!(
        "<h1>Edit meal</h1>\n\
         <form method=\"post\" action=\"/update_meal/{}\">\n\
         <input name=\"meal_name\" value=\"{}\" required>\n",
        meal.id,
        escape(&meal.name)
    );
    for i in 1..=5usize {
        let value = meal.components.get(i - 1).map(String::as_str).unwrap_or("");
        let _ = writeln!(
            body,
            "<input name=\"component{i}\" value=\"{}\">",
            escape(value)
        );
    }
    let calories = meal.calories.map(|c| c.to_string()).unwrap_or_default();
    let _ = writeln!(
        body,
        "<input name=\"calories\" value=\"{calories}\">\n<button type=\"submit\">Save</button>\n</form>\n<a href=\"/\">Back</a>"
    );
    page("Edit meal", &body)
}
