use serde::{Deserialize, Serialize};

/// One ingredient line used for dish costing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItemCalculation {
    pub unit_cost: f64,

    pub quantity: f64,

    /// Informational only; never part of the computed cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_percentage: Option<f64>,
}

impl RecipeItemCalculation {
    pub fn new(unit_cost: f64, quantity: f64) -> Self {
        Self {
            unit_cost,
            quantity,
            waste_percentage: None,
        }
    }

    /// Cost contributed by this line.
    #[inline]
    pub fn line_cost(&self) -> f64 {
        self.unit_cost * self.quantity
    }
}

/// A dish with the number of portions its ingredient list yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    pub portions: f64,

    #[serde(default)]
    pub items: Vec<RecipeItemCalculation>,
}
