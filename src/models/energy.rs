use serde::{Deserialize, Serialize};

/// Daily energy and macronutrient targets, all rounded to whole units.
///
/// Grams and calories are rounded independently, so
/// `protein_calories + carbs_calories + fat_calories` may differ from
/// `target_calories` by a few kcal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    /// Grams.
    pub protein: i64,
    /// Grams. Negative when protein and fat already exceed the target.
    pub carbs: i64,
    /// Grams.
    pub fat: i64,
    pub protein_calories: i64,
    pub carbs_calories: i64,
    pub fat_calories: i64,
}

/// Share of target calories per macronutrient, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MacroSplit {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl EnergyResult {
    /// Sum of the rounded macronutrient calories.
    ///
    /// Saturates: non-finite inputs round to `i64::MAX`/`i64::MIN`.
    pub fn macro_calories_total(&self) -> i64 {
        self.protein_calories
            .saturating_add(self.carbs_calories)
            .saturating_add(self.fat_calories)
    }

    /// True when the carbohydrate residual went below zero.
    pub fn has_negative_carbs(&self) -> bool {
        self.carbs < 0 || self.carbs_calories < 0
    }

    /// Percentage of target calories coming from each macronutrient.
    pub fn macro_split(&self) -> MacroSplit {
        if self.target_calories == 0 {
            return MacroSplit::default();
        }
        let pct = |kcal: i64| (kcal as f64 / self.target_calories as f64 * 100.0).round() as i64;
        MacroSplit {
            protein: pct(self.protein_calories),
            carbs: pct(self.carbs_calories),
            fat: pct(self.fat_calories),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnergyResult {
        EnergyResult {
            bmr: 1643,
            tdee: 2546,
            target_calories: 2546,
            protein: 154,
            carbs: 311,
            fat: 76,
            protein_calories: 616,
            carbs_calories: 1242,
            fat_calories: 687,
        }
    }

    #[test]
    fn test_macro_split() {
        let split = sample().macro_split();
        assert_eq!(split.protein, 24);
        assert_eq!(split.carbs, 49);
        assert_eq!(split.fat, 27);
    }

    #[test]
    fn test_macro_split_zero_target() {
        let energy = EnergyResult::default();
        assert_eq!(energy.macro_split(), MacroSplit::default());
    }

    #[test]
    fn test_negative_carbs_flag() {
        assert!(!sample().has_negative_carbs());
        let starved = EnergyResult {
            carbs: -12,
            carbs_calories: -48,
            ..sample()
        };
        assert!(starved.has_negative_carbs());
    }

    #[test]
    fn test_macro_calories_total_saturates() {
        let energy = EnergyResult {
            protein_calories: i64::MAX,
            fat_calories: i64::MAX,
            carbs_calories: 0,
            ..sample()
        };
        assert_eq!(energy.macro_calories_total(), i64::MAX);
    }

    #[test]
    fn test_macro_calories_total_drift() {
        let energy = sample();
        assert!((energy.macro_calories_total() - energy.target_calories).abs() <= 3);
    }
}
