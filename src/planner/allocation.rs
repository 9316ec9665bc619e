use crate::models::{EnergyResult, MealPlan, MealSuggestion};
use crate::planner::catalog::{DEFAULT_CATALOG, MealCatalog, MealTemplate};
use crate::planner::energy::round_kcal;

/// Scale one template against the energy targets.
///
/// Each dimension is scaled and rounded on its own.
pub fn scale_template(template: &MealTemplate, energy: &EnergyResult) -> MealSuggestion {
    let scale = |value: i64, fraction: f64| round_kcal(value as f64 * fraction);
    let f = &template.fractions;

    MealSuggestion {
        name: template.name.clone(),
        calories: scale(energy.target_calories, f.calories),
        protein: scale(energy.protein, f.protein),
        carbs: scale(energy.carbs, f.carbs),
        fat: scale(energy.fat, f.fat),
        description: template.description.clone(),
    }
}

/// Build a meal plan from the built-in catalog.
pub fn allocate(energy: &EnergyResult) -> MealPlan {
    allocate_with(energy, &DEFAULT_CATALOG)
}

/// Build a meal plan from a custom catalog.
pub fn allocate_with(energy: &EnergyResult, catalog: &MealCatalog) -> MealPlan {
    let mut plan = MealPlan::default();
    for template in &catalog.templates {
        plan.slot_mut(template.slot)
            .push(scale_template(template, energy));
    }

    tracing::debug!(
        meals = plan.len(),
        target_calories = energy.target_calories,
        "allocated meal plan"
    );
    plan
}
