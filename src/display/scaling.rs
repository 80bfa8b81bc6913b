//! Serving-size scaling of nutrition results.
//!
//! Scaling always starts from the unscaled record and produces a borrowed
//! projection, so applying a factor twice can never compound.
//!
//! Two rounding rules coexist: totals and per-ingredient figures keep one
//! decimal place, the summary stat box shows whole numbers.

use crate::model::{IngredientRecord, NutritionResult, ScaleFactor};

/// A nutrition result as displayed at a given scale.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecipe<'a> {
    pub recipe: &'a NutritionResult,
    pub factor: ScaleFactor,
    /// Total kcal, one decimal place
    pub total_kcal: f64,
    /// Per-serving kcal, whole number
    pub per_serving: Option<i64>,
    /// Serving count of the ingredient detail view; never scaled
    pub servings: Option<u32>,
    pub summary: SummaryStats,
    pub ingredients: Vec<DisplayIngredient<'a>>,
}

/// Whole-number figures for the summary stat box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    pub servings: Option<u32>,
    pub total_kcal: i64,
    pub per_serving: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayIngredient<'a> {
    pub record: &'a IngredientRecord,
    /// Scaled grams, one decimal place
    pub grams: Option<f64>,
    /// Scaled kcal, one decimal place
    pub total_kcal: Option<f64>,
}

impl DisplayIngredient<'_> {
    /// Energy density does not change with quantity.
    pub fn kcal_per_100g(&self) -> Option<f64> {
        self.record.kcal_per_100g
    }
}

pub fn scale(recipe: &NutritionResult, factor: ScaleFactor) -> DisplayRecipe<'_> {
    let f = factor.value();
    let per_serving = recipe.per_serving.map(|p| round_whole(p * f));

    DisplayRecipe {
        recipe,
        factor,
        total_kcal: round_tenth(recipe.total_kcal * f),
        per_serving,
        servings: recipe.servings,
        summary: SummaryStats {
            servings: recipe
                .servings
                .map(|s| round_whole(f64::from(s) * f).max(0) as u32),
            total_kcal: round_whole(recipe.total_kcal * f),
            per_serving,
        },
        ingredients: recipe
            .ingredients
            .iter()
            .map(|record| scale_ingredient(record, factor))
            .collect(),
    }
}

pub fn scale_ingredient(record: &IngredientRecord, factor: ScaleFactor) -> DisplayIngredient<'_> {
    let f = factor.value();
    DisplayIngredient {
        record,
        grams: record.grams.map(|g| round_tenth(g * f)),
        total_kcal: record.total_kcal.map(|k| round_tenth(k * f)),
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_whole(value: f64) -> i64 {
    value.round() as i64
}
