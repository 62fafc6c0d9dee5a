use crate::models::{Recipe, RecipeItemCalculation};

/// Spanish reduced VAT rate applied to catering services.
pub const DEFAULT_VAT_RATE: f64 = 0.10;

/// Default target margin over sale price.
pub const DEFAULT_MARGIN: f64 = 0.30;

/// Sum of `unit_cost * quantity` over all ingredient lines.
///
/// Waste percentages are informational and do not change the cost.
pub fn calculate_dish_cost(items: &[RecipeItemCalculation]) -> f64 {
    items.iter().map(RecipeItemCalculation::line_cost).sum()
}

/// Sale price such that `margin` is the profit share of the price.
///
/// Returns 0.0 when `margin >= 1.0`, where no finite positive price exists.
pub fn calculate_price_with_margin(cost: f64, margin: f64) -> f64 {
    if margin >= 1.0 {
        return 0.0;
    }
    cost / (1.0 - margin)
}

/// Margin actually obtained when selling at `price`.
///
/// Returns 0.0 for a non-positive price.
pub fn calculate_margin(cost: f64, price: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    (price - cost) / price
}

/// VAT amount for `price` at `rate`.
pub fn calculate_vat(price: f64, rate: f64) -> f64 {
    price * rate
}

/// VAT amount at [`DEFAULT_VAT_RATE`].
pub fn calculate_vat_default(price: f64) -> f64 {
    calculate_vat(price, DEFAULT_VAT_RATE)
}

/// Linear scaling of a per-batch value to a different number of guests.
///
/// Returns 0.0 when `base_portions <= 0`.
pub fn scale_to_pax(base_value: f64, base_portions: f64, target_pax: f64) -> f64 {
    if base_portions <= 0.0 {
        return 0.0;
    }
    (base_value / base_portions) * target_pax
}

/// Full cost and price breakdown for a dish.
#[derive(Debug, Clone, PartialEq)]
pub struct DishCosting {
    pub cost: f64,
    pub cost_per_portion: f64,
    pub sale_price: f64,
    pub vat: f64,
    pub price_with_vat: f64,
    pub margin: f64,
    /// Target PAX and the batch cost scaled to it, when requested.
    pub scaled: Option<(f64, f64)>,
}

impl DishCosting {
    pub fn compute(recipe: &Recipe, margin: f64, vat_rate: f64, target_pax: Option<f64>) -> Self {
        let cost = calculate_dish_cost(&recipe.items);
        let sale_price = calculate_price_with_margin(cost, margin);
        let vat = calculate_vat(sale_price, vat_rate);

        Self {
            cost,
            cost_per_portion: scale_to_pax(cost, recipe.portions, 1.0),
            sale_price,
            vat,
            price_with_vat: sale_price + vat,
            margin: calculate_margin(cost, sale_price),
            scaled: target_pax.map(|pax| (pax, scale_to_pax(cost, recipe.portions, pax))),
        }
    }
}
