mod beverage;
mod estimation;
mod event;
mod recipe;

pub use beverage::{round_cents, BeverageDraft, BeverageLine};
pub use estimation::{EstimationParams, Preferences};
pub use event::{Event, EventFeatures, FeatureKey, Requirement, FEATURE_LABELS};
pub use recipe::{Recipe, RecipeItemCalculation};
