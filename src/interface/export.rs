use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::models::{EnergyResult, MacroSplit, MealPlan, Profile};
use crate::state::Computation;

/// JSON shape of an exported computation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub profile: &'a Profile,
    pub energy: &'a EnergyResult,
    pub macro_split: MacroSplit,
    pub meal_plan: &'a MealPlan,
}

impl<'a> From<&'a Computation> for Report<'a> {
    fn from(c: &'a Computation) -> Self {
        Self {
            profile: &c.profile,
            energy: &c.energy,
            macro_split: c.energy.macro_split(),
            meal_plan: &c.plan,
        }
    }
}

/// Write the computation as pretty-printed JSON.
pub fn write_json<W: Write>(computation: &Computation, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &Report::from(computation))?;
    writeln!(out)?;
    Ok(())
}

/// Write the meal plan as CSV, one row per suggestion.
pub fn write_csv<W: Write>(plan: &MealPlan, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record([
        "slot",
        "name",
        "calories",
        "protein_g",
        "carbs_g",
        "fat_g",
        "description",
    ])?;

    for (slot, meals) in plan.slots() {
        for meal in meals {
            wtr.write_record([
                slot.as_str().to_string(),
                meal.name.clone(),
                meal.calories.to_string(),
                meal.protein.to_string(),
                meal.carbs.to_string(),
                meal.fat.to_string(),
                meal.description.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::MealCatalog;
    use crate::state::Session;

    fn computed() -> Computation {
        let mut session = Session::new();
        session.submit(Profile::default(), &MealCatalog::default()).clone()
    }

    #[test]
    fn test_json_report_fields() {
        let mut buf = Vec::new();
        write_json(&computed(), &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["energy"]["targetCalories"], 2546);
        assert_eq!(value["macroSplit"]["fat"], 27);
        assert_eq!(value["profile"]["activityLevel"], "moderate");
        assert_eq!(value["mealPlan"]["snacks"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        write_csv(&computed().plan, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("slot,name,calories"));
        assert!(lines[1].starts_with("breakfast,Aveia com Frutas e Whey,637,46,93,15,"));
        assert!(lines[8].starts_with("snacks,Shake Proteico,255,31,31,8,"));
    }
}
