use crate::models::{EnergyResult, MealPlan, Profile};
use crate::planner::{allocate_with, estimate, MealCatalog};

/// Results of one submission. All three parts are produced together.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    pub profile: Profile,
    pub energy: EnergyResult,
    pub plan: MealPlan,
}

/// Front-end state: either waiting for input or holding one computation.
///
/// `submit` fills every slot at once and `reset` clears every slot, so a
/// plan can never be observed next to a stale profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    current: Option<Computation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the estimator and allocator for `profile`, replacing any
    /// previous results.
    pub fn submit(&mut self, profile: Profile, catalog: &MealCatalog) -> &Computation {
        let energy = estimate(&profile);
        let plan = allocate_with(&energy, catalog);
        self.current.insert(Computation {
            profile,
            energy,
            plan,
        })
    }

    /// Discard all results.
    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn computation(&self) -> Option<&Computation> {
        self.current.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.computation().map(|c| &c.profile)
    }

    pub fn energy(&self) -> Option<&EnergyResult> {
        self.computation().map(|c| &c.energy)
    }

    pub fn plan(&self) -> Option<&MealPlan> {
        self.computation().map(|c| &c.plan)
    }
}
