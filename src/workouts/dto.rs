use serde::Deserialize;

use crate::error::ValidationErrors;
use crate::workouts::repo::NewWorkout;

/// Raw form fields as submitted. Everything arrives as text; all coercion
/// happens in [`WorkoutForm::validate`] so no handler parses fields inline.
#[derive(Debug, Deserialize)]
pub struct WorkoutForm {
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub sets: String,
    #[serde(default)]
    pub reps: String,
}

impl WorkoutForm {
    pub fn validate(self) -> Result<NewWorkout, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let exercise_name = self.exercise_name.trim().to_string();
        if exercise_name.is_empty() {
            errors.push("exercise_name", "must not be empty");
        }

        // Unusable sets input silently falls back to 1; the field is optional.
        let sets = match self.sets.trim().parse::<i32>() {
            Ok(n) if n >= 1 => n,
            _ => 1,
        };

        let reps = match self.reps.trim().parse::<i32>() {
            Ok(n) if n > 0 => n,
            _ => {
                errors.push("reps", "must be a positive integer");
                0
            }
        };

        errors.into_result(NewWorkout {
            exercise_name,
            sets,
            reps,
        })
    }
}
