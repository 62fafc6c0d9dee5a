use serde::{Deserialize, Serialize};

/// An event record as consumed from the event store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,

    pub total_guests: u32,

    #[serde(default)]
    pub adults: u32,

    #[serde(default)]
    pub children: u32,

    #[serde(default)]
    pub venue: String,

    /// ISO date as stored upstream (`YYYY-MM-DD`).
    #[serde(default)]
    pub event_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_hours: Option<f64>,

    #[serde(default)]
    pub features: EventFeatures,

    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// Optional services booked for an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventFeatures {
    pub open_bar: bool,
    pub cocktail_hour: bool,
    pub welcome_cava: bool,
    pub candy_corner: bool,
    pub cheese_corner: bool,
    pub dj: bool,
}

/// Stable identifier for each flag in [`EventFeatures`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKey {
    OpenBar,
    CocktailHour,
    WelcomeCava,
    CandyCorner,
    CheeseCorner,
    Dj,
}

/// Display order and labels for event features.
pub const FEATURE_LABELS: [(FeatureKey, &str); 6] = [
    (FeatureKey::OpenBar, "Barra libre"),
    (FeatureKey::CocktailHour, "Cóctel de bienvenida"),
    (FeatureKey::WelcomeCava, "Cava de bienvenida"),
    (FeatureKey::CandyCorner, "Corner de chuches"),
    (FeatureKey::CheeseCorner, "Corner de quesos"),
    (FeatureKey::Dj, "DJ"),
];

impl EventFeatures {
    pub fn is_enabled(&self, key: FeatureKey) -> bool {
        match key {
            FeatureKey::OpenBar => self.open_bar,
            FeatureKey::CocktailHour => self.cocktail_hour,
            FeatureKey::WelcomeCava => self.welcome_cava,
            FeatureKey::CandyCorner => self.candy_corner,
            FeatureKey::CheeseCorner => self.cheese_corner,
            FeatureKey::Dj => self.dj,
        }
    }

    /// Labels of enabled features, in display order.
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        FEATURE_LABELS
            .iter()
            .filter(|(key, _)| self.is_enabled(*key))
            .map(|(_, label)| *label)
            .collect()
    }
}

/// A special requirement attached to an event, one shape per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Requirement {
    Allergy {
        guest: String,
        allergen: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    Furniture {
        item: String,
        quantity: u32,
    },
    Other {
        description: String,
    },
}

impl Requirement {
    /// One-line description for listings.
    pub fn summary(&self) -> String {
        match self {
            Requirement::Allergy {
                guest,
                allergen,
                notes,
            } => match notes {
                Some(n) => format!("Alergia: {} ({}) - {}", guest, allergen, n),
                None => format!("Alergia: {} ({})", guest, allergen),
            },
            Requirement::Furniture { item, quantity } => {
                format!("Mobiliario: {} x{}", item, quantity)
            }
            Requirement::Other { description } => format!("Otro: {}", description),
        }
    }
}
