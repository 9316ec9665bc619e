use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Profile;
use crate::planner::MealCatalog;

/// Load an input record from a JSON file.
///
/// The profile is parsed but not range-checked.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a meal catalog from a JSON file and validate it.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path)?;
    let catalog: MealCatalog = serde_json::from_str(&content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Save a meal catalog as pretty-printed JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &MealCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
