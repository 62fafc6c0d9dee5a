#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod cli;
pub mod error;
pub mod estimator;
pub mod export;
pub mod interface;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod state;
pub mod validation;

pub use error::{CateringError, Result};
pub use estimator::{calculate_total_drinks, classify, generate_default_beverages};
pub use models::{BeverageLine, EstimationParams, RecipeItemCalculation};
pub use pricing::{
    calculate_dish_cost, calculate_price_with_margin, calculate_total_cost, calculate_vat,
    scale_to_pax,
};
pub use validation::validate_beverage;
