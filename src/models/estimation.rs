use serde::{Deserialize, Serialize};

/// Inputs for beverage estimation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationParams {
    pub total_guests: u32,

    pub bar_hours: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl EstimationParams {
    pub fn new(total_guests: u32, bar_hours: f64) -> Self {
        Self {
            total_guests,
            bar_hours,
            preferences: None,
        }
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }
}

/// Optional overrides of the default drink split. All values are fractions in `[0, 1]`.
///
/// `beer_percentage` and `wine_percentage` are shares of the alcoholic drinks;
/// `water_percentage` is a share of the non-alcoholic ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub alcohol_percentage: Option<f64>,
    pub beer_percentage: Option<f64>,
    pub wine_percentage: Option<f64>,
    pub water_percentage: Option<f64>,
}

impl Preferences {
    pub fn is_empty(&self) -> bool {
        self.alcohol_percentage.is_none()
            && self.beer_percentage.is_none()
            && self.wine_percentage.is_none()
            && self.water_percentage.is_none()
    }
}
