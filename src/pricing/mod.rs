pub mod aggregate;
pub mod calculations;

pub use aggregate::{calculate_total_cost, totals_by_category, CategoryTotal};
pub use calculations::{
    calculate_dish_cost, calculate_margin, calculate_price_with_margin, calculate_vat,
    calculate_vat_default, scale_to_pax, DishCosting, DEFAULT_MARGIN, DEFAULT_VAT_RATE,
};
