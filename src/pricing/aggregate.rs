use crate::models::BeverageLine;

/// Sum of estimated costs; lines without a cost count as zero.
pub fn calculate_total_cost(beverages: &[BeverageLine]) -> f64 {
    beverages
        .iter()
        .map(|b| b.estimated_cost.unwrap_or(0.0))
        .sum()
}

/// Per-category subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub lines: usize,
    pub quantity: u64,
    pub cost: f64,
}

/// Subtotals per category, ordered by first appearance in `beverages`.
pub fn totals_by_category(beverages: &[BeverageLine]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for line in beverages {
        let idx = match totals.iter().position(|t| t.category == line.category) {
            Some(idx) => idx,
            None => {
                totals.push(CategoryTotal {
                    category: line.category.clone(),
                    lines: 0,
                    quantity: 0,
                    cost: 0.0,
                });
                totals.len() - 1
            }
        };

        let total = &mut totals[idx];
        total.lines += 1;
        total.quantity += u64::from(line.quantity);
        total.cost += line.estimated_cost.unwrap_or(0.0);
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(category: &str, item: &str, quantity: u32, cost: Option<f64>) -> BeverageLine {
        let mut l = BeverageLine::new(category, item, quantity, "uds");
        l.estimated_cost = cost;
        l
    }

    #[test]
    fn test_total_cost_empty() {
        assert_eq!(calculate_total_cost(&[]), 0.0);
    }

    #[test]
    fn test_total_cost_sums_lines() {
        let lines = vec![
            line("Cervezas", "Cerveza Nacional", 100, Some(250.0)),
            line("Vinos", "Rioja", 30, Some(300.0)),
        ];
        assert_eq!(calculate_total_cost(&lines), 550.0);
    }

    #[test]
    fn test_missing_cost_counts_as_zero() {
        let lines = vec![
            line("Cervezas", "Cerveza Nacional", 100, Some(250.0)),
            line("Agua", "Agua mineral", 40, None),
        ];
        assert_eq!(calculate_total_cost(&lines), 250.0);
    }

    #[test]
    fn test_totals_by_category_keeps_first_appearance_order() {
        let lines = vec![
            line("Vinos", "Verdejo", 10, Some(65.0)),
            line("Agua", "Agua", 20, None),
            line("Vinos", "Rioja", 5, Some(44.5)),
        ];
        let totals = totals_by_category(&lines);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Vinos");
        assert_eq!(totals[0].lines, 2);
        assert_eq!(totals[0].quantity, 15);
        assert_eq!(totals[0].cost, 109.5);
        assert_eq!(totals[1].cost, 0.0);
    }
}
