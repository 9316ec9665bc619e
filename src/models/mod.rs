pub mod energy;
pub mod plan;
pub mod profile;

pub use energy::{EnergyResult, MacroSplit};
pub use plan::{MealPlan, MealSlot, MealSuggestion};
pub use profile::{ActivityLevel, Gender, Goal, Profile};
