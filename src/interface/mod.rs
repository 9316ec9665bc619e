pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_csv, write_json, Report};
pub use prompts::{
    collect_profile, prompt_activity_level, prompt_age, prompt_gender, prompt_goal,
    prompt_height, prompt_weight, prompt_yes_no,
};
pub use render::{
    display_catalog, display_energy, display_meal_plan, display_recommendations,
    profile_summary,
};
