use std::fmt;

use serde::{Deserialize, Serialize};

/// Beverage category used to group purchase lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeverageCategory {
    Wine,
    Water,
    Beer,
    Vermouth,
    Gin,
    Rum,
    Whisky,
    Vodka,
    Tequila,
    OtherSpirits,
    Mixers,
    SoftDrinks,
    Other,
}

impl BeverageCategory {
    /// Display label, as stored on beverage lines.
    pub fn label(&self) -> &'static str {
        match self {
            BeverageCategory::Wine => "Vinos",
            BeverageCategory::Water => "Agua",
            BeverageCategory::Beer => "Cervezas",
            BeverageCategory::Vermouth => "Vermut",
            BeverageCategory::Gin => "Ginebra",
            BeverageCategory::Rum => "Ron",
            BeverageCategory::Whisky => "Whisky",
            BeverageCategory::Vodka => "Vodka",
            BeverageCategory::Tequila => "Tequila",
            BeverageCategory::OtherSpirits => "Otros Licores",
            BeverageCategory::Mixers => "Mixers",
            BeverageCategory::SoftDrinks => "Refrescos",
            BeverageCategory::Other => "Otros",
        }
    }

    /// Whether the category holds alcoholic products.
    pub fn is_alcoholic(&self) -> bool {
        matches!(
            self,
            BeverageCategory::Wine
                | BeverageCategory::Beer
                | BeverageCategory::Vermouth
                | BeverageCategory::Gin
                | BeverageCategory::Rum
                | BeverageCategory::Whisky
                | BeverageCategory::Vodka
                | BeverageCategory::Tequila
                | BeverageCategory::OtherSpirits
        )
    }
}

impl fmt::Display for BeverageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classification rule: any marker contained in the lowercased name selects the category.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub markers: &'static [&'static str],
    pub category: BeverageCategory,
}

impl ClassificationRule {
    /// `name` must already be lowercased.
    pub fn matches(&self, name: &str) -> bool {
        self.markers.iter().any(|marker| name.contains(marker))
    }
}

/// Rules in priority order. The first matching rule wins, so overlapping
/// names (e.g. a beer sold in a wine pack) resolve by position only.
pub const CLASSIFICATION_RULES: [ClassificationRule; 12] = [
    ClassificationRule {
        markers: &["verdejo", "rioja", "cava"],
        category: BeverageCategory::Wine,
    },
    ClassificationRule {
        markers: &["agua", "solán"],
        category: BeverageCategory::Water,
    },
    ClassificationRule {
        markers: &["cerveza", "botellín"],
        category: BeverageCategory::Beer,
    },
    ClassificationRule {
        markers: &["vermut"],
        category: BeverageCategory::Vermouth,
    },
    ClassificationRule {
        markers: &["ginebra", "puerto de indias"],
        category: BeverageCategory::Gin,
    },
    // Trailing space keeps words like "limón" or "turrón" from matching.
    ClassificationRule {
        markers: &["ron "],
        category: BeverageCategory::Rum,
    },
    ClassificationRule {
        markers: &["ballantine", "whisky"],
        category: BeverageCategory::Whisky,
    },
    ClassificationRule {
        markers: &["vodka"],
        category: BeverageCategory::Vodka,
    },
    ClassificationRule {
        markers: &["tequila"],
        category: BeverageCategory::Tequila,
    },
    ClassificationRule {
        markers: &["licor 43", "baileys", "jägermeister"],
        category: BeverageCategory::OtherSpirits,
    },
    ClassificationRule {
        markers: &["tónica", "hielo"],
        category: BeverageCategory::Mixers,
    },
    ClassificationRule {
        markers: &["cola", "fanta", "aquarius", "nestea", "seven", "limones"],
        category: BeverageCategory::SoftDrinks,
    },
];

/// Classify a beverage by its free-text name (case-insensitive).
pub fn classify(item_name: &str) -> BeverageCategory {
    let name = item_name.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(&name))
        .map(|rule| rule.category)
        .unwrap_or(BeverageCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_products() {
        assert_eq!(classify("Nebla Verdejo"), BeverageCategory::Wine);
        assert_eq!(classify("Botellín cerveza"), BeverageCategory::Beer);
        assert_eq!(classify("Ron Barceló"), BeverageCategory::Rum);
        assert_eq!(classify("Agua Solán de Cabras"), BeverageCategory::Water);
        assert_eq!(classify("Vermut Yzaguirre"), BeverageCategory::Vermouth);
        assert_eq!(classify("Puerto de Indias Strawberry"), BeverageCategory::Gin);
        assert_eq!(classify("Ballantine's"), BeverageCategory::Whisky);
        assert_eq!(classify("Tequila José Cuervo"), BeverageCategory::Tequila);
        assert_eq!(classify("Baileys"), BeverageCategory::OtherSpirits);
        assert_eq!(classify("Hielo 2kg"), BeverageCategory::Mixers);
        assert_eq!(classify("Seven Up"), BeverageCategory::SoftDrinks);
    }

    #[test]
    fn test_every_marker_matches_its_category() {
        for rule in &CLASSIFICATION_RULES {
            for marker in rule.markers {
                assert_eq!(classify(marker), rule.category, "marker {:?}", marker);
            }
        }
    }

    #[test]
    fn test_classify_catalog_style_names() {
        assert_eq!(classify("Vodka Absolut"), BeverageCategory::Vodka);
        assert_eq!(classify("Licor 43"), BeverageCategory::OtherSpirits);
        assert_eq!(classify("Jägermeister"), BeverageCategory::OtherSpirits);
        assert_eq!(classify("Tónica Schweppes"), BeverageCategory::Mixers);
        assert_eq!(classify("Fanta Limón"), BeverageCategory::SoftDrinks);
        assert_eq!(classify("Aquarius Limón"), BeverageCategory::SoftDrinks);
        assert_eq!(classify("Nestea"), BeverageCategory::SoftDrinks);
        assert_eq!(classify("Bolsa de limones"), BeverageCategory::SoftDrinks);
        assert_eq!(classify("Whisky DYC"), BeverageCategory::Whisky);
        assert_eq!(classify("Ginebra Larios"), BeverageCategory::Gin);
    }

    #[test]
    fn test_classify_uppercase_accented_names() {
        assert_eq!(classify("JÄGERMEISTER"), BeverageCategory::OtherSpirits);
        assert_eq!(classify("TÓNICA"), BeverageCategory::Mixers);
        assert_eq!(classify("AGUA SOLÁN"), BeverageCategory::Water);
        assert_eq!(classify("BOTELLÍN"), BeverageCategory::Beer);
    }

    #[test]
    fn test_classify_unknown_falls_back_to_other() {
        assert_eq!(classify("Bebida Desconocida"), BeverageCategory::Other);
        assert_eq!(classify(""), BeverageCategory::Other);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("COCA-COLA"), classify("coca-cola"));
        assert_eq!(classify("COCA-COLA").label(), "Refrescos");
        assert_eq!(classify("NEBLA VERDEJO"), BeverageCategory::Wine);
    }

    #[test]
    fn test_rum_marker_needs_trailing_space() {
        assert_eq!(classify("Ron"), BeverageCategory::Other);
        assert_eq!(classify("Turrón de limón"), BeverageCategory::Other);
    }

    #[test]
    fn test_earliest_rule_wins_on_overlap() {
        // Wine outranks beer; water outranks soft drinks.
        assert_eq!(classify("Cerveza y cava"), BeverageCategory::Wine);
        assert_eq!(classify("Agua con limones"), BeverageCategory::Water);
        // Tonic water: "agua" comes before "tónica".
        assert_eq!(classify("Agua tónica"), BeverageCategory::Water);
    }

    #[test]
    fn test_labels() {
        assert_eq!(BeverageCategory::OtherSpirits.to_string(), "Otros Licores");
        assert!(BeverageCategory::Gin.is_alcoholic());
        assert!(!BeverageCategory::Mixers.is_alcoholic());
    }
}
