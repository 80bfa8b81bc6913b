use log::info;
use std::env;

use recipe_calories::display::{classify, scale, StatusColor};
use recipe_calories::{
    AppViewModel, Controller, ControllerConfig, ControllerError, Mode, ModeResult, ScaleFactor,
    Severity,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // recipe-calories <url> [cook|nutrition] [scale]
    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or_else(|| {
        ControllerError::UsageError("Please provide a recipe URL as an argument".to_string())
    })?;
    let mode = match args.get(2) {
        Some(raw) => raw.parse::<Mode>()?,
        None => Mode::Cook,
    };
    let factor = match args.get(3) {
        Some(raw) => raw.parse::<ScaleFactor>()?,
        None => ScaleFactor::One,
    };

    let config = ControllerConfig::load()?;
    info!("Using analysis backend at {}", config.api_base_url);

    let mut controller = Controller::from_config(config)?;
    controller.select_mode(mode);
    controller.analyze(url);
    controller.select_scale(factor);
    controller.settle().await;

    print_view(&controller.view());
    Ok(())
}

fn print_view(view: &AppViewModel) {
    println!("{}", view.title);

    if let Some(error) = &view.projected.error {
        let label = match error.severity() {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        println!("{}: {}", label, error.user_message);
        if let Some(report) = view.debug_report() {
            println!("\n{}", report);
        }
        return;
    }

    match &view.projected.data {
        Some(ModeResult::Cook(cook)) => {
            for (label, minutes) in [
                ("prep", cook.prep_time),
                ("cook", cook.cook_time),
                ("total", cook.total_time),
            ] {
                if let Some(minutes) = minutes {
                    println!("{}: {}m", label, minutes);
                }
            }
            println!("\nIngredients");
            for ingredient in &cook.ingredients {
                println!("  - {}", ingredient);
            }
            println!("\nPreparation");
            for (i, step) in cook.instructions.iter().enumerate() {
                println!("  Step {}: {}", i + 1, step);
            }
        }
        Some(ModeResult::Nutrition(recipe)) => {
            let scaled = scale(recipe, view.scale);
            println!("Scale: {}", view.scale.label());
            if let Some(servings) = scaled.summary.servings {
                println!("{} servings", servings);
            }
            println!("{} total kcal", scaled.summary.total_kcal);
            if let Some(per_serving) = scaled.summary.per_serving {
                println!("{} kcal per serving", per_serving);
            }
            println!("\nIngredient Breakdown");
            for ingredient in &scaled.ingredients {
                let class = classify(ingredient.record);
                let marker = match class.status_color {
                    StatusColor::Success => "+",
                    StatusColor::Warning => "~",
                    StatusColor::Error => "x",
                };
                println!("  [{}] {}", marker, ingredient.record.raw);
                if class.show_details {
                    let mut chips = Vec::new();
                    if let Some(grams) = ingredient.grams {
                        chips.push(format!("{}g", grams));
                    }
                    if let Some(density) = ingredient.kcal_per_100g() {
                        chips.push(format!("{} kcal/100g", density));
                    }
                    if let Some(kcal) = ingredient.total_kcal {
                        chips.push(format!("{} kcal", kcal));
                    }
                    println!("      {}", chips.join(" | "));
                    if let Some(usda_match) = class.usda_match {
                        println!("      {}", usda_match);
                    }
                } else if let Some(note) = class.note {
                    println!("      {}", note);
                }
            }
        }
        None => println!("No result."),
    }
}
