use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::models::{Goal, Profile};
use crate::state::load_profile;

/// FitCal: daily calorie and macronutrient targets with an illustrative meal plan.
#[derive(Parser, Debug)]
#[command(name = "fitcal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON meal catalog replacing the built-in templates.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Fill in the form interactively and show the plan.
    #[default]
    Plan,

    /// Compute targets and a meal plan from flags or a profile file.
    Calc(CalcArgs),

    /// Show the active meal catalog.
    Catalog {
        /// Write the catalog as JSON to this path instead of printing it.
        #[arg(long)]
        dump: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct CalcArgs {
    /// JSON input record; individual flags override its fields.
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Age in years (15-80).
    #[arg(long)]
    pub age: Option<u32>,

    /// Weight in kilograms (30-200).
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimeters (120-220).
    #[arg(long)]
    pub height: Option<f64>,

    /// male or female.
    #[arg(long)]
    pub gender: Option<String>,

    /// sedentary, light, moderate, active or very-active.
    #[arg(long)]
    pub activity: Option<String>,

    /// lose, maintain or gain. Anything else means maintain.
    #[arg(long)]
    pub goal: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write json/csv output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CalcArgs {
    /// Build the input record: profile file (or the form defaults), then
    /// flag overrides, then range validation.
    pub fn to_profile(&self) -> Result<Profile> {
        let mut profile = match &self.profile {
            Some(path) => load_profile(path)?,
            None => Profile::default(),
        };

        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(weight) = self.weight {
            profile.weight = weight;
        }
        if let Some(height) = self.height {
            profile.height = height;
        }
        if let Some(gender) = &self.gender {
            profile.gender = gender.parse()?;
        }
        if let Some(activity) = &self.activity {
            profile.activity_level = activity.parse()?;
        }
        if let Some(goal) = &self.goal {
            profile.goal = Goal::from_label(goal);
        }

        profile.validate()?;
        Ok(profile)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_plan() {
        let cli = Cli::parse_from(["fitcal"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Plan));
    }

    #[test]
    fn test_calc_flags() {
        let cli = Cli::parse_from([
            "fitcal", "calc", "--age", "30", "--weight", "82.5", "--activity", "very-active",
            "--format", "json", "--catalog", "meals.json",
        ]);
        let Some(Command::Calc(args)) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.age, Some(30));
        assert_eq!(args.weight, Some(82.5));
        assert_eq!(args.activity.as_deref(), Some("very-active"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(cli.catalog, Some(PathBuf::from("meals.json")));
    }

    #[test]
    fn test_to_profile_overrides_defaults() {
        let args = CalcArgs {
            weight: Some(90.0),
            gender: Some("female".to_string()),
            goal: Some("gain".to_string()),
            ..Default::default()
        };
        let profile = args.to_profile().unwrap();
        assert_eq!(profile.weight, 90.0);
        assert_eq!(profile.age, 25);
        assert_eq!(profile.gender, crate::models::Gender::Female);
        assert_eq!(profile.goal, Goal::Gain);
    }

    #[test]
    fn test_to_profile_rejects_unknown_activity() {
        let args = CalcArgs {
            activity: Some("extreme".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            args.to_profile(),
            Err(crate::error::FitCalError::UnknownActivityLevel { .. })
        ));
    }

    #[test]
    fn test_to_profile_rejects_out_of_range() {
        let args = CalcArgs {
            height: Some(250.0),
            ..Default::default()
        };
        assert!(args.to_profile().is_err());
    }
}
