use crate::model::NutritionResult;

/// Stand-in favorites list until persisted favorites exist.
pub fn placeholder_favorites() -> Vec<NutritionResult> {
    [
        ("Chicken Tikka Masala", 6, 2450.0, 408.0),
        ("Spaghetti Bolognese", 4, 1800.0, 450.0),
        ("Pad Thai", 4, 2100.0, 525.0),
    ]
    .into_iter()
    .map(|(title, servings, total_kcal, per_serving)| NutritionResult {
        title: Some(title.to_string()),
        servings: Some(servings),
        total_kcal,
        per_serving: Some(per_serving),
        ingredients: Vec::new(),
    })
    .collect()
}
