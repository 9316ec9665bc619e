use crate::models::{EnergyResult, Gender, Profile};
use crate::planner::constants::*;

/// Basal metabolic rate (Mifflin-St Jeor), unrounded.
pub fn calculate_bmr(profile: &Profile) -> f64 {
    let base = BMR_WEIGHT_COEF * profile.weight + BMR_HEIGHT_COEF * profile.height
        - BMR_AGE_COEF * profile.age as f64;

    match profile.gender {
        Gender::Male => base + BMR_MALE_OFFSET,
        Gender::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Round to the nearest whole unit, halves toward positive infinity
/// (`-2.5` becomes `-2`, `2.5` becomes `3`).
///
/// Non-finite values saturate through the `as` cast (NaN becomes 0).
#[inline]
pub fn round_kcal(value: f64) -> i64 {
    let r = value.round();
    // f64::round sends negative halves away from zero; pull them back up.
    let r = if value - r == 0.5 { r + 1.0 } else { r };
    r as i64
}

/// Estimate daily energy expenditure and macronutrient targets.
///
/// Total for any finite profile. Inputs are not validated here.
pub fn estimate(profile: &Profile) -> EnergyResult {
    let bmr = calculate_bmr(profile);
    let tdee = bmr * activity_factor(profile.activity_level);
    let target_calories = tdee + goal_offset(profile.goal);

    let protein_grams = profile.weight * PROTEIN_G_PER_KG;
    let protein_calories = protein_grams * KCAL_PER_G_PROTEIN;

    let fat_calories = target_calories * FAT_CALORIE_SHARE;
    let fat_grams = fat_calories / KCAL_PER_G_FAT;

    // Residual; may go negative for heavy profiles on a deficit.
    let carbs_calories = target_calories - protein_calories - fat_calories;
    let carbs_grams = carbs_calories / KCAL_PER_G_CARBS;

    tracing::debug!(
        bmr,
        tdee,
        target_calories,
        protein_calories,
        fat_calories,
        carbs_calories,
        "estimated energy targets"
    );

    if carbs_calories < 0.0 {
        tracing::warn!(
            "Protein and fat exceed the calorie target by {:.0} kcal; carbs are negative",
            -carbs_calories
        );
    }

    EnergyResult {
        bmr: round_kcal(bmr),
        tdee: round_kcal(tdee),
        target_calories: round_kcal(target_calories),
        protein: round_kcal(protein_grams),
        carbs: round_kcal(carbs_grams),
        fat: round_kcal(fat_grams),
        protein_calories: round_kcal(protein_calories),
        carbs_calories: round_kcal(carbs_calories),
        fat_calories: round_kcal(fat_calories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal};

    #[test]
    fn test_bmr_male_and_female() {
        let male = Profile::default();
        assert!((calculate_bmr(&male) - 1642.5).abs() < 1e-9);

        let female = Profile {
            gender: Gender::Female,
            ..Default::default()
        };
        assert!((calculate_bmr(&female) - 1476.5).abs() < 1e-9);

        // Formula offsets differ by exactly 166 kcal.
        assert!((calculate_bmr(&male) - calculate_bmr(&female) - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_kcal_halves_toward_positive_infinity() {
        assert_eq!(round_kcal(1642.5), 1643);
        assert_eq!(round_kcal(2.5), 3);
        assert_eq!(round_kcal(2.4), 2);
        assert_eq!(round_kcal(-2.5), -2);
        assert_eq!(round_kcal(-2.4), -2);
        assert_eq!(round_kcal(-2.6), -3);
        assert_eq!(round_kcal(-0.5), 0);
    }

    #[test]
    fn test_round_kcal_non_finite_saturates() {
        assert_eq!(round_kcal(f64::NAN), 0);
        assert_eq!(round_kcal(f64::INFINITY), i64::MAX);
        assert_eq!(round_kcal(f64::NEG_INFINITY), i64::MIN);
    }

    #[test]
    fn test_default_profile_estimate() {
        let energy = estimate(&Profile::default());
        assert_eq!(energy.bmr, 1643);
        assert_eq!(energy.tdee, 2546);
        assert_eq!(energy.target_calories, 2546);
        assert_eq!(energy.protein, 154);
        assert_eq!(energy.protein_calories, 616);
        assert_eq!(energy.fat_calories, 687);
        assert_eq!(energy.fat, 76);
        assert_eq!(energy.carbs_calories, 1242);
        assert_eq!(energy.carbs, 311);
    }

    #[test]
    fn test_negative_carbs_are_not_clamped() {
        let profile = Profile {
            age: 80,
            weight: 200.0,
            height: 120.0,
            gender: Gender::Female,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Lose,
        };
        let energy = estimate(&profile);
        // bmr = 2000 + 750 - 400 - 161 = 2189; target = 2189 * 1.2 - 500 = 2126.8
        assert_eq!(energy.bmr, 2189);
        assert_eq!(energy.target_calories, 2127);
        assert_eq!(energy.protein_calories, 1760);
        assert!(energy.carbs < 0);
        assert!(energy.carbs_calories < 0);
        assert!(energy.has_negative_carbs());
    }
}
