use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{FitCalError, Result};
use crate::models::MealSlot;

/// Share of each energy dimension a template takes.
///
/// Fractions are independent per dimension and are not normalized within a
/// slot or across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fractions {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Fractions {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|f| f.is_finite() && f >= 0.0)
    }
}

/// A fixed meal entry that gets scaled against the energy targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    pub slot: MealSlot,
    pub name: String,
    pub description: String,
    pub fractions: Fractions,
}

/// Ordered table of meal templates. Order within a slot is preserved in
/// the generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCatalog {
    pub templates: Vec<MealTemplate>,
}

impl MealCatalog {
    pub fn new(templates: Vec<MealTemplate>) -> Self {
        Self { templates }
    }

    /// Templates belonging to one slot, in catalog order.
    pub fn for_slot(&self, slot: MealSlot) -> impl Iterator<Item = &MealTemplate> {
        self.templates.iter().filter(move |t| t.slot == slot)
    }

    /// Every slot needs at least one template and every fraction must be a
    /// finite non-negative number.
    pub fn validate(&self) -> Result<()> {
        for slot in MealSlot::ALL {
            if self.for_slot(slot).next().is_none() {
                return Err(FitCalError::InvalidCatalog(format!(
                    "no templates for slot '{}'",
                    slot
                )));
            }
        }

        if let Some(bad) = self.templates.iter().find(|t| !t.fractions.is_valid()) {
            return Err(FitCalError::InvalidCatalog(format!(
                "template '{}' has a negative or non-finite fraction",
                bad.name
            )));
        }

        if let Some(unnamed) = self.templates.iter().find(|t| t.name.trim().is_empty()) {
            return Err(FitCalError::InvalidCatalog(format!(
                "a {} template has an empty name",
                unnamed.slot
            )));
        }

        Ok(())
    }
}

impl Default for MealCatalog {
    fn default() -> Self {
        DEFAULT_CATALOG.clone()
    }
}

/// (slot, name, description, calories, protein, carbs, fat)
type TemplateRow = (MealSlot, &'static str, &'static str, f64, f64, f64, f64);

const BUILTIN_TEMPLATES: [TemplateRow; 8] = [
    (
        MealSlot::Breakfast,
        "Aveia com Frutas e Whey",
        "50g de aveia, 1 banana, 30g whey protein, 10g mel",
        0.25, 0.30, 0.30, 0.20,
    ),
    (
        MealSlot::Breakfast,
        "Ovos Mexidos com Torrada",
        "3 ovos, 2 fatias de pão integral, 1 col. sopa azeite",
        0.25, 0.25, 0.25, 0.25,
    ),
    (
        MealSlot::Lunch,
        "Frango Grelhado com Arroz e Legumes",
        "150g peito de frango, 80g arroz integral, salada mista",
        0.35, 0.40, 0.40, 0.30,
    ),
    (
        MealSlot::Lunch,
        "Salmão com Batata Doce",
        "120g salmão grelhado, 150g batata doce, brócolis",
        0.35, 0.35, 0.35, 0.40,
    ),
    (
        MealSlot::Dinner,
        "Carne Magra com Quinoa",
        "120g carne magra, 60g quinoa, vegetais refogados",
        0.30, 0.25, 0.25, 0.25,
    ),
    (
        MealSlot::Dinner,
        "Peixe com Legumes Assados",
        "150g peixe branco, abobrinha, berinjela, pimentão",
        0.30, 0.30, 0.20, 0.30,
    ),
    (
        MealSlot::Snacks,
        "Iogurte com Oleaginosas",
        "150g iogurte grego, 20g mix de castanhas",
        0.10, 0.15, 0.15, 0.25,
    ),
    (
        MealSlot::Snacks,
        "Shake Proteico",
        "30g whey protein, 200ml leite desnatado, 1 fruta",
        0.10, 0.20, 0.10, 0.10,
    ),
];

/// Built-in catalog: two templates per slot.
pub static DEFAULT_CATALOG: LazyLock<MealCatalog> = LazyLock::new(|| {
    MealCatalog::new(
        BUILTIN_TEMPLATES
            .iter()
            .map(|&(slot, name, description, cal, p, c, f)| MealTemplate {
                slot,
                name: name.to_string(),
                description: description.to_string(),
                fractions: Fractions::new(cal, p, c, f),
            })
            .collect(),
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = MealCatalog::default();
        assert_eq!(catalog.templates.len(), 8);
        for slot in MealSlot::ALL {
            assert_eq!(catalog.for_slot(slot).count(), 2);
        }
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_slot_calorie_shares_are_not_normalized() {
        let catalog = MealCatalog::default();
        let breakfast: f64 = catalog
            .for_slot(MealSlot::Breakfast)
            .map(|t| t.fractions.calories)
            .sum();
        assert!((breakfast - 0.5).abs() < 1e-9);

        let total: f64 = catalog.templates.iter().map(|t| t.fractions.calories).sum();
        assert!((total - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_missing_slot() {
        let mut catalog = MealCatalog::default();
        catalog.templates.retain(|t| t.slot != MealSlot::Dinner);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("dinner"));
    }

    #[test]
    fn test_validate_rejects_bad_fraction() {
        let mut catalog = MealCatalog::default();
        catalog.templates[3].fractions.fat = -0.1;
        assert!(matches!(
            catalog.validate(),
            Err(FitCalError::InvalidCatalog(_))
        ));

        let mut catalog = MealCatalog::default();
        catalog.templates[0].fractions.calories = f64::INFINITY;
        assert!(catalog.validate().is_err());
    }
}
