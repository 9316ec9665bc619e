pub mod allocation;
pub mod catalog;
pub mod constants;
pub mod energy;

pub use allocation::{allocate, allocate_with, scale_template};
pub use catalog::{Fractions, MealCatalog, MealTemplate, DEFAULT_CATALOG};
pub use constants::*;
pub use energy::{calculate_bmr, estimate, round_kcal};
