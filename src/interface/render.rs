use crate::models::{EnergyResult, MealPlan, MealSuggestion, Profile};
use crate::planner::MealCatalog;

/// Closing advice printed under every plan.
pub const RECOMMENDATIONS: [&str; 5] = [
    "Drink at least 2-3 liters of water per day",
    "Spread meals across the day at 3-4 hour intervals",
    "Adjust portions to your hunger and satiety",
    "Include vegetables and fruit in every meal",
    "For a more specific plan, book a personalized consultation",
];

/// One-line summary of the input record.
pub fn profile_summary(profile: &Profile) -> String {
    format!(
        "{} y, {} kg, {} cm, {}, activity: {}, goal: {}",
        profile.age,
        profile.weight,
        profile.height,
        profile.gender,
        profile.activity_level,
        profile.goal
    )
}

/// Display the energy targets and macronutrient split.
pub fn display_energy(energy: &EnergyResult) {
    let split = energy.macro_split();

    println!();
    println!("=== Energy ===");
    println!();
    println!("Basal metabolic rate:    {:>6} kcal", energy.bmr);
    println!("Daily energy expenditure:{:>6} kcal", energy.tdee);
    println!("Daily calorie target:    {:>6} kcal", energy.target_calories);
    println!();
    println!("--- Macronutrients ---");
    println!(
        "Protein: {:>4} g  {:>5} kcal  {:>3}%",
        energy.protein, energy.protein_calories, split.protein
    );
    println!(
        "Carbs:   {:>4} g  {:>5} kcal  {:>3}%",
        energy.carbs, energy.carbs_calories, split.carbs
    );
    println!(
        "Fat:     {:>4} g  {:>5} kcal  {:>3}%",
        energy.fat, energy.fat_calories, split.fat
    );

    if energy.has_negative_carbs() {
        println!();
        println!("Warning: protein and fat already exceed the calorie target; carbs are negative.");
    }
}

fn format_meal(meal: &MealSuggestion) -> String {
    format!(
        "{:>5} kcal | P {:>3}g  C {:>3}g  F {:>3}g",
        meal.calories, meal.protein, meal.carbs, meal.fat
    )
}

/// Display a meal plan slot by slot.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!("No meal suggestions.");
        return;
    }

    println!();
    println!("=== Meal Suggestions ===");

    let max_name_len = plan
        .slots()
        .flat_map(|(_, meals)| meals.iter().map(|m| m.name.chars().count()))
        .max()
        .unwrap_or(10);

    for (slot, meals) in plan.slots() {
        if meals.is_empty() {
            continue;
        }
        println!();
        println!("--- {} ---", slot.title());
        for meal in meals {
            let pad = max_name_len.saturating_sub(meal.name.chars().count());
            println!("  {}{}  {}", meal.name, " ".repeat(pad), format_meal(meal));
            if !meal.description.is_empty() {
                println!("    {}", meal.description);
            }
        }
    }
    println!();
}

pub fn display_recommendations() {
    println!("--- Recommendations ---");
    for tip in RECOMMENDATIONS {
        println!("  * {}", tip);
    }
    println!();
}

/// Display the template table of a catalog.
pub fn display_catalog(catalog: &MealCatalog) {
    println!();
    println!("=== Meal Catalog ({} templates) ===", catalog.templates.len());
    println!();
    println!(
        "{:<10} {:<36} {:>5} {:>5} {:>5} {:>5}",
        "slot", "name", "cal", "prot", "carb", "fat"
    );
    for t in &catalog.templates {
        println!(
            "{:<10} {:<36} {:>5.2} {:>5.2} {:>5.2} {:>5.2}",
            t.slot.as_str(),
            t.name,
            t.fractions.calories,
            t.fractions.protein,
            t.fractions.carbs,
            t.fractions.fat
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_summary() {
        let summary = profile_summary(&Profile::default());
        assert_eq!(
            summary,
            "25 y, 70 kg, 170 cm, male, activity: moderate, goal: maintain"
        );
    }

    #[test]
    fn test_format_meal() {
        let meal = MealSuggestion {
            name: "Shake".to_string(),
            calories: 255,
            protein: 31,
            carbs: 31,
            fat: 8,
            description: String::new(),
        };
        assert_eq!(format_meal(&meal), "  255 kcal | P  31g  C  31g  F   8g");
    }
}
