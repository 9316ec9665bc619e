use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four daily meal slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// Slots in display order.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snacks => "snacks",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scaled meal entry in a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub name: String,
    pub calories: i64,
    /// Grams.
    pub protein: i64,
    /// Grams.
    pub carbs: i64,
    /// Grams.
    pub fat: i64,
    pub description: String,
}

/// Meal suggestions grouped by slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Vec<MealSuggestion>,
    pub lunch: Vec<MealSuggestion>,
    pub dinner: Vec<MealSuggestion>,
    pub snacks: Vec<MealSuggestion>,
}

impl MealPlan {
    pub fn slot(&self, slot: MealSlot) -> &[MealSuggestion] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<MealSuggestion> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    /// Iterate `(slot, suggestions)` in display order.
    pub fn slots(&self) -> impl Iterator<Item = (MealSlot, &[MealSuggestion])> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.slot(slot)))
    }

    /// Total number of suggestions across all slots.
    pub fn len(&self) -> usize {
        self.slots().map(|(_, meals)| meals.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
