use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{FitCalError, Result};
use crate::planner::constants::{
    AGE_RANGE, HEIGHT_RANGE_CM, SUGGESTION_MIN_SCORE, WEIGHT_RANGE_KG,
};

/// Biological sex, selects the BMR formula branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FitCalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(FitCalError::UnknownGender {
                value: s.to_string(),
                suggestion: closest_label(other, Gender::ALL.iter().map(|g| g.as_str())),
            }),
        }
    }
}

/// Weekly exercise habit, selects the TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active.
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        }
    }

    /// Short description shown next to the level in the form.
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise every day",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = FitCalError;

    /// Unknown levels are rejected rather than mapped to a default multiplier.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == needle)
            .ok_or_else(|| FitCalError::UnknownActivityLevel {
                value: s.to_string(),
                suggestion: closest_label(&needle, ActivityLevel::ALL.iter().map(|l| l.as_str())),
            })
    }
}

/// Body-weight goal, selects the caloric offset applied to TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight (caloric deficit)",
            Goal::Maintain => "Maintain weight",
            Goal::Gain => "Gain mass (caloric surplus)",
        }
    }

    /// Parse a goal label. Anything unrecognized means "maintain".
    pub fn from_label(label: &str) -> Goal {
        match label.trim().to_lowercase().as_str() {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            "maintain" => Goal::Maintain,
            other => {
                tracing::warn!("Unrecognized goal '{}', using maintain", other);
                Goal::Maintain
            }
        }
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Goal::from_label(&label)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller-supplied input record.
///
/// The engine trusts these values; call [`Profile::validate`] before
/// handing a profile built from user input to the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Years.
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: 25,
            weight: 70.0,
            height: 170.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }
}

impl Profile {
    /// Check finiteness and the form bounds for age, weight and height.
    pub fn validate(&self) -> Result<()> {
        check_range("age", self.age as f64, AGE_RANGE)?;
        check_range("weight", self.weight, WEIGHT_RANGE_KG)?;
        check_range("height", self.height, HEIGHT_RANGE_CM)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(FitCalError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Best fuzzy match for a mistyped label, if any is close enough.
pub fn closest_label<'a>(input: &str, labels: impl Iterator<Item = &'a str>) -> Option<String> {
    let input = input.to_lowercase();
    labels
        .map(|label| (label, jaro_winkler(label, &input)))
        .filter(|(_, score)| *score > SUGGESTION_MIN_SCORE)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(label, _)| label.to_string())
}
