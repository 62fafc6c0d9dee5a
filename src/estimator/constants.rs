/// Drinks served per guest per bar hour.
pub const DRINKS_PER_GUEST_HOUR: f64 = 1.5;

/// Safety margin applied on top of the base drink count (+15%).
pub const SAFETY_MARGIN: f64 = 1.15;

// ─────────────────────────────────────────────────────────────────────────────
// Default drink split (used when a preference is not supplied)
// ─────────────────────────────────────────────────────────────────────────────

/// Share of all drinks that are alcoholic.
pub const DEFAULT_ALCOHOL_PERCENTAGE: f64 = 0.65;

/// Share of alcoholic drinks served as beer.
pub const DEFAULT_BEER_PERCENTAGE: f64 = 0.45;

/// Share of alcoholic drinks served as wine or cava.
pub const DEFAULT_WINE_PERCENTAGE: f64 = 0.25;

/// Share of non-alcoholic drinks served as water.
pub const DEFAULT_WATER_PERCENTAGE: f64 = 0.35;

// ─────────────────────────────────────────────────────────────────────────────
// Default catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Which slice of the total drink count a catalog entry draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkPool {
    Beer,
    Wine,
    Spirits,
    Water,
    SoftDrinks,
    /// Mixers follow the spirits servings.
    Mixers,
    /// Ice follows every drink served.
    Ice,
}

/// A default purchasable product and how it converts drinks into units.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub item: &'static str,
    pub unit: &'static str,
    pub pool: DrinkPool,
    /// Fraction of the pool served with this product.
    pub weight: f64,
    /// Drinks obtained from one purchased unit.
    pub servings_per_unit: f64,
    pub unit_cost: f64,
}

const fn entry(
    item: &'static str,
    unit: &'static str,
    pool: DrinkPool,
    weight: f64,
    servings_per_unit: f64,
    unit_cost: f64,
) -> CatalogEntry {
    CatalogEntry {
        item,
        unit,
        pool,
        weight,
        servings_per_unit,
        unit_cost,
    }
}

/// Products proposed by the estimator, in output order.
///
/// Weights inside a pool add up to 1.0 except for mixers, where the weight is
/// the share of spirits servings that need that mixer.
#[rustfmt::skip]
pub const DEFAULT_CATALOG: [CatalogEntry; 18] = [
    entry("Botellín cerveza Mahou 25cl", "botellines", DrinkPool::Beer, 1.0, 1.0, 0.65),
    entry("Nebla Verdejo", "botellas", DrinkPool::Wine, 0.45, 5.0, 6.50),
    entry("Rioja Crianza", "botellas", DrinkPool::Wine, 0.40, 5.0, 8.90),
    entry("Cava Brut Nature", "botellas", DrinkPool::Wine, 0.15, 6.0, 7.50),
    entry("Ginebra Puerto de Indias 70cl", "botellas", DrinkPool::Spirits, 0.40, 14.0, 17.50),
    entry("Ron Barceló Añejo 70cl", "botellas", DrinkPool::Spirits, 0.25, 14.0, 14.90),
    entry("Whisky Ballantine's 70cl", "botellas", DrinkPool::Spirits, 0.20, 14.0, 15.50),
    entry("Vodka Absolut 70cl", "botellas", DrinkPool::Spirits, 0.10, 14.0, 16.00),
    entry("Licor 43 70cl", "botellas", DrinkPool::Spirits, 0.05, 14.0, 18.00),
    entry("Agua Solán de Cabras 1,5L", "botellas", DrinkPool::Water, 1.0, 6.0, 0.95),
    entry("Coca-Cola 33cl", "latas", DrinkPool::SoftDrinks, 0.40, 1.0, 0.55),
    entry("Coca-Cola Zero 33cl", "latas", DrinkPool::SoftDrinks, 0.20, 1.0, 0.55),
    entry("Fanta Naranja 33cl", "latas", DrinkPool::SoftDrinks, 0.15, 1.0, 0.50),
    entry("Aquarius Limón 33cl", "latas", DrinkPool::SoftDrinks, 0.15, 1.0, 0.60),
    entry("Nestea 33cl", "latas", DrinkPool::SoftDrinks, 0.10, 1.0, 0.55),
    entry("Tónica Schweppes 20cl", "botellines", DrinkPool::Mixers, 0.40, 1.0, 0.60),
    entry("Refresco de cola para combinados 2L", "botellas", DrinkPool::Mixers, 0.45, 8.0, 1.40),
    entry("Hielo en cubitos 2kg", "bolsas", DrinkPool::Ice, 1.0, 25.0, 1.80),
];
