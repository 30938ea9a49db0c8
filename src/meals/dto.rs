use serde::Deserialize;

use crate::error::ValidationErrors;
use crate::meals::repo::NewMeal;

/// Raw meal form. The five fixed component fields are a form-layout artifact;
/// validation collapses them into one ordered list with blanks dropped.
#[derive(Debug, Default, Deserialize)]
pub struct MealForm {
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub component1: String,
    #[serde(default)]
    pub component2: String,
    #[serde(default)]
    pub component3: String,
    #[serde(default)]
    pub component4: String,
    #[serde(default)]
    pub component5: String,
    #[serde(default)]
    pub calories: String,
}

impl MealForm {
    pub fn validate(self) -> Result<NewMeal, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.meal_name.trim().to_string();
        if name.is_empty() {
            errors.push("meal_name", "must not be empty");
        }

        let components: Vec<String> = [
            self.component1,
            self.component2,
            self.component3,
            self.component4,
            self.component5,
        ]
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();

        // Non-numeric calories are stored as absent rather than rejected;
        // negative values cannot come out of a pure-digit parse.
        let calories = match self.calories.trim() {
            "" => None,
            s => s.parse::<i32>().ok().filter(|n| *n >= 0),
        };

        errors.into_result(NewMeal {
            name,
            components,
            calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_meal() {
        let new = MealForm {
            meal_name: "Lunch".into(),
            component1: "Rice".into(),
            component2: "Chicken".into(),
            calories: "650".into(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(
            new,
            NewMeal {
                name: "Lunch".into(),
                components: vec!["Rice".into(), "Chicken".into()],
                calories: Some(650),
            }
        );
    }

    #[test]
    fn blank_components_are_dropped_keeping_order() {
        let new = MealForm {
            meal_name: "Dinner".into(),
            component1: "".into(),
            component2: "Soup".into(),
            component3: "   ".into(),
            component4: "Bread".into(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(new.components, vec!["Soup".to_string(), "Bread".to_string()]);
    }

    #[test]
    fn non_numeric_calories_stored_as_absent() {
        for bad in ["abc", "12kcal", "-50", "1.5"] {
            let new = MealForm {
                meal_name: "Snack".into(),
                calories: bad.into(),
                ..Default::default()
            }
            .validate()
            .unwrap();
            assert_eq!(new.calories, None, "calories input {bad:?}");
        }
    }

    #[test]
    fn missing_calories_stored_as_absent() {
        let new = MealForm {
            meal_name: "Snack".into(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(new.calories, None);
        assert!(new.components.is_empty());
    }

    #[test]
    fn zero_calories_is_valid() {
        let new = MealForm {
            meal_name: "Water".into(),
            calories: "0".into(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(new.calories, Some(0));
    }

    #[test]
    fn rejects_blank_name() {
        let errs = MealForm::default().validate().unwrap_err();
        assert_eq!(errs.errors.len(), 1);
        assert_eq!(errs.errors[0].field, "meal_name");
    }
}
