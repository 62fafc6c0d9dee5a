use crate::estimator::classifier::classify;
use crate::estimator::constants::*;
use crate::models::{BeverageLine, EstimationParams, Preferences};

/// Total drink units for an open bar, safety margin included.
///
/// Formula: ceil(guests * hours * 1.5 * 1.15). Inputs are not validated, but
/// the result is never negative.
pub fn calculate_total_drinks(total_guests: u32, bar_hours: f64) -> u32 {
    let base = total_guests as f64 * bar_hours * DRINKS_PER_GUEST_HOUR;
    // Float-to-int casts saturate: negatives and NaN become 0.
    (base * SAFETY_MARGIN).ceil() as u32
}

/// Resolved fractions after applying defaults and clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkShares {
    pub alcohol: f64,
    pub beer: f64,
    pub wine: f64,
    pub spirits: f64,
    pub water: f64,
}

impl DrinkShares {
    /// Resolve preferences, falling back to the defaults for missing fields.
    ///
    /// Beer and wine are scaled down together when they exceed the whole
    /// alcoholic share; spirits take whatever is left.
    pub fn resolve(preferences: Option<&Preferences>) -> Self {
        let prefs = preferences.copied().unwrap_or_default();

        let alcohol = fraction_or(prefs.alcohol_percentage, DEFAULT_ALCOHOL_PERCENTAGE);
        let mut beer = fraction_or(prefs.beer_percentage, DEFAULT_BEER_PERCENTAGE);
        let mut wine = fraction_or(prefs.wine_percentage, DEFAULT_WINE_PERCENTAGE);
        let water = fraction_or(prefs.water_percentage, DEFAULT_WATER_PERCENTAGE);

        let fermented = beer + wine;
        if fermented > 1.0 {
            beer /= fermented;
            wine /= fermented;
        }
        let spirits = (1.0 - beer - wine).max(0.0);

        Self {
            alcohol,
            beer,
            wine,
            spirits,
            water,
        }
    }
}

impl Default for DrinkShares {
    fn default() -> Self {
        Self::resolve(None)
    }
}

fn fraction_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => default,
    }
}

/// Drinks assigned to each pool for an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkSplit {
    pub total: u32,
    pub beer: f64,
    pub wine: f64,
    pub spirits: f64,
    pub water: f64,
    pub soft_drinks: f64,
}

impl DrinkSplit {
    pub fn alcoholic(&self) -> f64 {
        self.beer + self.wine + self.spirits
    }

    pub fn non_alcoholic(&self) -> f64 {
        self.water + self.soft_drinks
    }

    fn pool(&self, pool: DrinkPool) -> f64 {
        match pool {
            DrinkPool::Beer => self.beer,
            DrinkPool::Wine => self.wine,
            DrinkPool::Spirits | DrinkPool::Mixers => self.spirits,
            DrinkPool::Water => self.water,
            DrinkPool::SoftDrinks => self.soft_drinks,
            DrinkPool::Ice => self.total as f64,
        }
    }
}

/// Split the total drink count according to the event's preferences.
pub fn split_drinks(params: &EstimationParams) -> DrinkSplit {
    let total = calculate_total_drinks(params.total_guests, params.bar_hours);
    let shares = DrinkShares::resolve(params.preferences.as_ref());

    let alcoholic = total as f64 * shares.alcohol;
    let non_alcoholic = total as f64 - alcoholic;

    DrinkSplit {
        total,
        beer: alcoholic * shares.beer,
        wine: alcoholic * shares.wine,
        spirits: alcoholic * shares.spirits,
        water: non_alcoholic * shares.water,
        soft_drinks: non_alcoholic * (1.0 - shares.water),
    }
}

/// Units to buy so that `drinks` servings are covered.
fn units_needed(drinks: f64, servings_per_unit: f64) -> u32 {
    if drinks <= 0.0 || servings_per_unit <= 0.0 {
        return 0;
    }
    // Tolerance absorbs float noise such as 100.00000000000001.
    (drinks / servings_per_unit - 1e-9).ceil().max(0.0) as u32
}

/// Default beverage purchase list for an event.
///
/// Lines follow [`DEFAULT_CATALOG`] order; products with nothing to buy are
/// left out. Each line is categorised by name and priced at catalog cost.
pub fn generate_default_beverages(params: &EstimationParams) -> Vec<BeverageLine> {
    let split = split_drinks(params);

    DEFAULT_CATALOG
        .iter()
        .filter_map(|entry| {
            let drinks = split.pool(entry.pool) * entry.weight;
            let quantity = units_needed(drinks, entry.servings_per_unit);
            if quantity == 0 {
                return None;
            }
            let category = classify(entry.item);
            Some(
                BeverageLine::new(category.label(), entry.item, quantity, entry.unit)
                    .with_unit_cost(entry.unit_cost),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(lines: &'a [BeverageLine], item: &str) -> Option<&'a BeverageLine> {
        lines.iter().find(|l| l.item == item)
    }

    #[test]
    fn test_total_drinks_reference_value() {
        assert_eq!(calculate_total_drinks(100, 4.0), 690);
    }

    #[test]
    fn test_total_drinks_rounds_up() {
        // 1 * 1 * 1.5 * 1.15 = 1.725
        assert_eq!(calculate_total_drinks(1, 1.0), 2);
        // 10 * 2.5 * 1.5 = 37.5 -> 43.125
        assert_eq!(calculate_total_drinks(10, 2.5), 44);
    }

    #[test]
    fn test_total_drinks_never_negative() {
        assert_eq!(calculate_total_drinks(0, 5.0), 0);
        assert_eq!(calculate_total_drinks(10, -3.0), 0);
        assert_eq!(calculate_total_drinks(10, f64::NAN), 0);
    }

    #[test]
    fn test_shares_defaults() {
        let shares = DrinkShares::default();
        assert_eq!(shares.alcohol, DEFAULT_ALCOHOL_PERCENTAGE);
        assert_eq!(shares.beer, DEFAULT_BEER_PERCENTAGE);
        assert!((shares.spirits - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_partial_preferences_keep_defaults() {
        let prefs = Preferences {
            beer_percentage: Some(0.6),
            ..Default::default()
        };
        let shares = DrinkShares::resolve(Some(&prefs));
        assert_eq!(shares.beer, 0.6);
        assert_eq!(shares.alcohol, DEFAULT_ALCOHOL_PERCENTAGE);
        assert_eq!(shares.wine, DEFAULT_WINE_PERCENTAGE);
        assert_eq!(shares.water, DEFAULT_WATER_PERCENTAGE);
    }

    #[test]
    fn test_out_of_range_preferences_are_clamped() {
        let prefs = Preferences {
            alcohol_percentage: Some(1.7),
            beer_percentage: Some(0.8),
            wine_percentage: Some(0.8),
            water_percentage: Some(-0.2),
        };
        let shares = DrinkShares::resolve(Some(&prefs));
        assert_eq!(shares.alcohol, 1.0);
        assert_eq!(shares.water, 0.0);
        assert!((shares.beer - 0.5).abs() < 1e-9);
        assert!((shares.wine - 0.5).abs() < 1e-9);
        assert_eq!(shares.spirits, 0.0);
    }

    #[test]
    fn test_split_adds_up_to_total() {
        let split = split_drinks(&EstimationParams::new(100, 4.0));
        let sum = split.alcoholic() + split.non_alcoholic();
        assert!((sum - 690.0).abs() < 1e-6);
    }

    #[test]
    fn test_units_needed() {
        assert_eq!(units_needed(0.0, 5.0), 0);
        assert_eq!(units_needed(10.0, 5.0), 2);
        assert_eq!(units_needed(10.000000000001, 5.0), 2);
        assert_eq!(units_needed(10.5, 5.0), 3);
        assert_eq!(units_needed(3.0, 0.0), 0);
    }

    #[test]
    fn test_beer_preference_shifts_beer_quantity() {
        let base = generate_default_beverages(&EstimationParams::new(100, 4.0));
        let params = EstimationParams::new(100, 4.0).with_preferences(Preferences {
            beer_percentage: Some(0.7),
            ..Default::default()
        });
        let beer_lover = generate_default_beverages(&params);

        let beer = "Botellín cerveza Mahou 25cl";
        let gin = "Ginebra Puerto de Indias 70cl";
        assert!(find(&beer_lover, beer).unwrap().quantity > find(&base, beer).unwrap().quantity);
        assert!(find(&beer_lover, gin).unwrap().quantity < find(&base, gin).unwrap().quantity);
    }

    #[test]
    fn test_no_alcohol_drops_alcoholic_lines() {
        let params = EstimationParams::new(50, 3.0).with_preferences(Preferences {
            alcohol_percentage: Some(0.0),
            ..Default::default()
        });
        let lines = generate_default_beverages(&params);
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|l| l.category != "Cervezas" && l.category != "Vinos"));
        assert!(lines.iter().all(|l| l.quantity > 0));
    }

    #[test]
    fn test_lines_are_priced_and_categorised() {
        let lines = generate_default_beverages(&EstimationParams::new(100, 4.0));
        for line in &lines {
            assert!(line.unit_cost.is_some());
            assert!(line.estimated_cost.unwrap() >= 0.0);
        }
        let category = |item: &str| find(&lines, item).unwrap().category.as_str();
        assert_eq!(category("Botellín cerveza Mahou 25cl"), "Cervezas");
        assert_eq!(category("Cava Brut Nature"), "Vinos");
        assert_eq!(category("Vodka Absolut 70cl"), "Vodka");
        assert_eq!(category("Licor 43 70cl"), "Otros Licores");
        assert_eq!(category("Tónica Schweppes 20cl"), "Mixers");
        // Categories come from the name, not the pool: mixer cola is a soft drink.
        assert_eq!(category("Refresco de cola para combinados 2L"), "Refrescos");

        let ice = find(&lines, "Hielo en cubitos 2kg").unwrap();
        // 690 drinks / 25 per bag
        assert_eq!(ice.quantity, 28);
        assert_eq!(ice.category, "Mixers");
    }
}
