pub mod classifier;
pub mod constants;
pub mod quantity;

pub use classifier::{classify, BeverageCategory, ClassificationRule, CLASSIFICATION_RULES};
pub use constants::*;
pub use quantity::{
    calculate_total_drinks, generate_default_beverages, split_drinks, DrinkShares, DrinkSplit,
};
