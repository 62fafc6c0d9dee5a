use crate::models::BeverageDraft;

/// Check a beverage record, reporting every problem found.
///
/// Returns an empty list when the record is valid.
pub fn validate_beverage(beverage: &BeverageDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(beverage.category.as_deref()) {
        errors.push("Category is required".to_string());
    }

    if is_blank(beverage.item.as_deref()) {
        errors.push("Item name is required".to_string());
    }

    match beverage.quantity {
        None => errors.push("Quantity is required".to_string()),
        Some(q) if q < 0 => errors.push("Quantity must not be negative".to_string()),
        Some(_) => {}
    }

    errors
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
