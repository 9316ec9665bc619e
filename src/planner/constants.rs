use crate::models::{ActivityLevel, Goal};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kg of body weight.
pub const BMR_WEIGHT_COEF: f64 = 10.0;

/// kcal per cm of height.
pub const BMR_HEIGHT_COEF: f64 = 6.25;

/// kcal per year of age (subtracted).
pub const BMR_AGE_COEF: f64 = 5.0;

pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal offsets and macronutrient rules
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit for weight loss.
pub const LOSE_OFFSET_KCAL: f64 = -500.0;

/// Daily surplus for mass gain.
pub const GAIN_OFFSET_KCAL: f64 = 300.0;

/// Protein grams per kg of body weight.
pub const PROTEIN_G_PER_KG: f64 = 2.2;

/// Share of target calories assigned to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.27;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Input bounds enforced by the front end (inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const AGE_RANGE: (f64, f64) = (15.0, 80.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 220.0);

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
pub const SUGGESTION_MIN_SCORE: f64 = 0.7;

/// TDEE multiplier for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Caloric offset applied to TDEE for a goal.
pub fn goal_offset(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => LOSE_OFFSET_KCAL,
        Goal::Maintain => 0.0,
        Goal::Gain => GAIN_OFFSET_KCAL,
    }
}
