mod classifier;
mod scaling;

pub use classifier::{classify, Classification, StatusColor};
pub use scaling::{scale, scale_ingredient, DisplayIngredient, DisplayRecipe, SummaryStats};
