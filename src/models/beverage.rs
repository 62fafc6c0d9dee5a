use serde::{Deserialize, Serialize};

use crate::validation::validate_beverage;

/// One purchasable beverage line for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeverageLine {
    pub category: String,

    pub item: String,

    pub quantity: u32,

    pub unit: String,

    /// Cost of one unit, when known (estimator lines always carry it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}

impl BeverageLine {
    pub fn new(category: &str, item: &str, quantity: u32, unit: &str) -> Self {
        Self {
            category: category.to_string(),
            item: item.to_string(),
            quantity,
            unit: unit.to_string(),
            unit_cost: None,
            estimated_cost: None,
        }
    }

    /// Attach a unit cost and derive the line's estimated cost from it.
    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        let unit_cost = unit_cost.max(0.0);
        self.unit_cost = Some(unit_cost);
        self.estimated_cost = Some(round_cents(unit_cost * self.quantity as f64));
        self
    }

    /// Canonical key for lookups (lowercase item name).
    pub fn key(&self) -> String {
        self.item.to_lowercase()
    }
}

/// A beverage record as typed by a user, before validation.
///
/// Every field is optional and the quantity is signed so that bad input can
/// be represented and reported instead of rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeverageDraft {
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub item: Option<String>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub unit_cost: Option<f64>,

    #[serde(default)]
    pub estimated_cost: Option<f64>,
}

impl From<&BeverageLine> for BeverageDraft {
    fn from(line: &BeverageLine) -> Self {
        Self {
            category: Some(line.category.clone()),
            item: Some(line.item.clone()),
            quantity: Some(i64::from(line.quantity)),
            unit: Some(line.unit.clone()),
            unit_cost: line.unit_cost,
            estimated_cost: line.estimated_cost,
        }
    }
}

impl TryFrom<BeverageDraft> for BeverageLine {
    type Error = Vec<String>;

    fn try_from(draft: BeverageDraft) -> std::result::Result<Self, Self::Error> {
        let mut errors = validate_beverage(&draft);

        // Negative quantities are already reported by the validator.
        let quantity = match draft.quantity {
            Some(q) if q > i64::from(u32::MAX) => {
                errors.push("Quantity is too large".to_string());
                0
            }
            Some(q) => u32::try_from(q).unwrap_or(0),
            None => 0,
        };

        if draft.unit_cost.is_some_and(|c| c < 0.0) {
            errors.push("Unit cost must not be negative".to_string());
        }
        if draft.estimated_cost.is_some_and(|c| c < 0.0) {
            errors.push("Estimated cost must not be negative".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            category: draft.category.unwrap_or_default().trim().to_string(),
            item: draft.item.unwrap_or_default().trim().to_string(),
            quantity,
            unit: draft.unit.unwrap_or_default().trim().to_string(),
            unit_cost: draft.unit_cost,
            estimated_cost: draft.estimated_cost,
        })
    }
}

/// Round a money amount to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> BeverageDraft {
        BeverageDraft {
            category: Some("Cervezas".to_string()),
            item: Some("  Cerveza Nacional ".to_string()),
            quantity: Some(100),
            unit: Some("botellines".to_string()),
            unit_cost: None,
            estimated_cost: Some(65.0),
        }
    }

    #[test]
    fn test_with_unit_cost_rounds_to_cents() {
        let line = BeverageLine::new("Vinos", "Nebla Verdejo", 3, "botellas").with_unit_cost(6.333);
        assert_eq!(line.unit_cost, Some(6.333));
        assert_eq!(line.estimated_cost, Some(19.0));
    }

    #[test]
    fn test_draft_converts_and_trims() {
        let line = BeverageLine::try_from(sample_draft()).unwrap();
        assert_eq!(line.item, "Cerveza Nacional");
        assert_eq!(line.quantity, 100);
        assert_eq!(line.estimated_cost, Some(65.0));
    }

    #[test]
    fn test_draft_conversion_reports_all_errors() {
        let draft = BeverageDraft {
            category: Some(String::new()),
            item: None,
            quantity: Some(-5),
            ..Default::default()
        };
        let errors = BeverageLine::try_from(draft).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut draft = sample_draft();
        draft.estimated_cost = Some(-1.0);
        assert!(BeverageLine::try_from(draft).is_err());
    }

    #[test]
    fn test_negative_unit_cost_rejected() {
        let mut draft = sample_draft();
        draft.unit_cost = Some(-3.0);
        let errors = BeverageLine::try_from(draft).unwrap_err();
        assert_eq!(errors, vec!["Unit cost must not be negative".to_string()]);
    }

    #[test]
    fn test_json_uses_camel_case_and_omits_missing_cost() {
        let line = BeverageLine::new("Agua", "Agua Solán de Cabras", 10, "botellas");
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("estimatedCost"));

        let costed = line.with_unit_cost(1.0);
        let json = serde_json::to_string(&costed).unwrap();
        assert!(json.contains("\"estimatedCost\":10.0"));
        assert!(json.contains("\"unitCost\":1.0"));
    }
}
