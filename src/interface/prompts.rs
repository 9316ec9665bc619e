use dialoguer::{Confirm, Input, Select};

use crate::error::{FitCalError, Result};
use crate::models::{ActivityLevel, Gender, Goal, Profile};
use crate::planner::constants::{AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

/// Prompt for a number within an inclusive range.
fn prompt_bounded(prompt: &str, default: f64, (min, max): (f64, f64)) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} [{}-{}]", prompt, min, max))
        .default(default.to_string())
        .validate_with(move |text: &String| -> std::result::Result<(), String> {
            match text.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= min && v <= max => Ok(()),
                Ok(_) => Err(format!("Enter a value between {} and {}", min, max)),
                Err(_) => Err("Invalid number".to_string()),
            }
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| FitCalError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for weight in kilograms.
pub fn prompt_weight(default: f64) -> Result<f64> {
    prompt_bounded("Weight (kg)", default, WEIGHT_RANGE_KG)
}

/// Prompt for height in centimeters.
pub fn prompt_height(default: f64) -> Result<f64> {
    prompt_bounded("Height (cm)", default, HEIGHT_RANGE_CM)
}

/// Prompt for age in whole years.
pub fn prompt_age(default: u32) -> Result<u32> {
    let age = prompt_bounded("Age (years)", default as f64, AGE_RANGE)?;
    if age.fract() != 0.0 {
        return Err(FitCalError::InvalidInput(
            "Age must be a whole number of years".to_string(),
        ));
    }
    Ok(age as u32)
}

pub fn prompt_gender(default: Gender) -> Result<Gender> {
    let options = ["Male", "Female"];
    let start = Gender::ALL.iter().position(|g| *g == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(start)
        .interact()?;

    Ok(Gender::ALL[selection])
}

pub fn prompt_activity_level(default: ActivityLevel) -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{:<12} {}", level.as_str(), level.description()))
        .collect();
    let start = ActivityLevel::ALL
        .iter()
        .position(|l| *l == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Physical activity level")
        .items(&options)
        .default(start)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_goal(default: Goal) -> Result<Goal> {
    let options: Vec<&str> = Goal::ALL.iter().map(|g| g.description()).collect();
    let start = Goal::ALL.iter().position(|g| *g == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(start)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full input record, pre-filled with `defaults`.
pub fn collect_profile(defaults: &Profile) -> Result<Profile> {
    let weight = prompt_weight(defaults.weight)?;
    let height = prompt_height(defaults.height)?;
    let age = prompt_age(defaults.age)?;
    let gender = prompt_gender(defaults.gender)?;
    let activity_level = prompt_activity_level(defaults.activity_level)?;
    let goal = prompt_goal(defaults.goal)?;

    let profile = Profile {
        age,
        weight,
        height,
        gender,
        activity_level,
        goal,
    };
    profile.validate()?;
    Ok(profile)
}
