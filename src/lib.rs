pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{FitCalError, Result};
pub use models::{EnergyResult, MealPlan, MealSuggestion, Profile};
pub use planner::{allocate, estimate};
