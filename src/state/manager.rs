use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{CateringError, Result};
use crate::models::{round_cents, BeverageLine};
use crate::pricing;

/// Minimum Jaro-Winkler similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions returned for a mistyped name.
const MAX_SUGGESTIONS: usize = 5;

/// Working list of beverage lines for one event.
///
/// Lines keep their insertion order; item names are unique case-insensitively.
#[derive(Debug, Default)]
pub struct BeverageListManager {
    lines: Vec<BeverageLine>,
}

impl BeverageListManager {
    /// Create a manager from a list of lines; later duplicates replace earlier ones.
    pub fn new(lines: Vec<BeverageLine>) -> Self {
        let mut manager = Self::default();
        for line in lines {
            manager.upsert(line);
        }
        manager
    }

    fn position(&self, item: &str) -> Option<usize> {
        let key = item.trim().to_lowercase();
        self.lines.iter().position(|l| l.key() == key)
    }

    /// Get a line by item name (case-insensitive).
    pub fn get(&self, item: &str) -> Option<&BeverageLine> {
        self.position(item).map(|idx| &self.lines[idx])
    }

    /// Get a mutable reference to a line by item name (case-insensitive).
    pub fn get_mut(&mut self, item: &str) -> Option<&mut BeverageLine> {
        self.position(item).map(|idx| &mut self.lines[idx])
    }

    /// Insert a line, replacing any line with the same item name in place.
    ///
    /// Returns `true` if an existing line was replaced.
    pub fn upsert(&mut self, line: BeverageLine) -> bool {
        match self.position(&line.item) {
            Some(idx) => {
                debug!(item = %line.item, "replacing beverage line");
                self.lines[idx] = line;
                true
            }
            None => {
                debug!(item = %line.item, category = %line.category, "adding beverage line");
                self.lines.push(line);
                false
            }
        }
    }

    /// Change a line's quantity and keep its cost in step.
    ///
    /// With a unit cost the estimate is recomputed. Without one, an existing
    /// estimate is scaled by the quantity ratio, or cleared when the old
    /// quantity was zero.
    pub fn set_quantity(&mut self, item: &str, quantity: u32) -> Result<()> {
        let line = self
            .get_mut(item)
            .ok_or_else(|| CateringError::BeverageNotFound(item.to_string()))?;

        let previous = line.quantity;
        line.quantity = quantity;
        line.estimated_cost = match (line.unit_cost, line.estimated_cost) {
            (Some(unit_cost), _) => Some(round_cents(unit_cost * quantity as f64)),
            (None, Some(_)) if previous == 0 => None,
            (None, Some(cost)) => Some(round_cents(cost * quantity as f64 / previous as f64)),
            (None, None) => None,
        };
        debug!(item = %line.item, quantity, "updated beverage quantity");
        Ok(())
    }

    /// Remove a line by item name.
    pub fn remove(&mut self, item: &str) -> Result<BeverageLine> {
        let idx = self
            .position(item)
            .ok_or_else(|| CateringError::BeverageNotFound(item.to_string()))?;
        let removed = self.lines.remove(idx);
        debug!(item = %removed.item, "removed beverage line");
        Ok(removed)
    }

    /// Item names close to `query`, best match first.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&str, f64)> = self
            .lines
            .iter()
            .map(|l| (l.item.as_str(), jaro_winkler(&l.key(), &query)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn lines(&self) -> &[BeverageLine] {
        &self.lines
    }

    pub fn total_cost(&self) -> f64 {
        pricing::calculate_total_cost(&self.lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lines() -> Vec<BeverageLine> {
        vec![
            BeverageLine::new("Vinos", "Nebla Verdejo", 12, "botellas").with_unit_cost(6.5),
            BeverageLine::new("Cervezas", "Botellín Mahou", 200, "botellines"),
        ]
    }

    #[test]
    fn test_get_case_insensitive() {
        let manager = BeverageListManager::new(sample_lines());
        assert!(manager.get("nebla verdejo").is_some());
        assert!(manager.get("NEBLA VERDEJO").is_some());
        assert!(manager.get(" Nebla Verdejo ").is_some());
        assert!(manager.get("Rioja").is_none());
    }

    #[test]
    fn test_new_deduplicates_keeping_last() {
        let mut lines = sample_lines();
        lines.push(BeverageLine::new("Vinos", "NEBLA VERDEJO", 3, "botellas"));
        let manager = BeverageListManager::new(lines);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.lines()[0].quantity, 3);
    }

    #[test]
    fn test_set_quantity_recomputes_cost() {
        let mut manager = BeverageListManager::new(sample_lines());
        manager.set_quantity("nebla verdejo", 20).unwrap();
        let line = manager.get("Nebla Verdejo").unwrap();
        assert_eq!(line.quantity, 20);
        assert_eq!(line.estimated_cost, Some(130.0));

        // No unit cost: quantity changes, cost stays missing.
        manager.set_quantity("botellín mahou", 50).unwrap();
        assert_eq!(manager.get("botellín mahou").unwrap().estimated_cost, None);
    }

    #[test]
    fn test_set_quantity_scales_cost_without_unit_cost() {
        let mut line = BeverageLine::new("Cervezas", "Cerveza Nacional", 100, "botellines");
        line.estimated_cost = Some(250.0);
        let mut empty = BeverageLine::new("Agua", "Agua", 0, "botellas");
        empty.estimated_cost = Some(5.0);
        let mut manager = BeverageListManager::new(vec![line, empty]);

        manager.set_quantity("cerveza nacional", 10).unwrap();
        assert_eq!(manager.get("cerveza nacional").unwrap().estimated_cost, Some(25.0));

        manager.set_quantity("agua", 12).unwrap();
        assert_eq!(manager.get("agua").unwrap().estimated_cost, None);
    }

    #[test]
    fn test_remove() {
        let mut manager = BeverageListManager::new(sample_lines());
        let removed = manager.remove("botellín mahou").unwrap();
        assert_eq!(removed.category, "Cervezas");
        assert_eq!(manager.len(), 1);
        assert!(matches!(
            manager.remove("botellín mahou"),
            Err(CateringError::BeverageNotFound(_))
        ));
    }

    #[test]
    fn test_suggest_finds_close_names() {
        let manager = BeverageListManager::new(sample_lines());
        let suggestions = manager.suggest("nebla verdjo");
        assert_eq!(suggestions.first(), Some(&"Nebla Verdejo"));
        assert!(manager.suggest("xyz").is_empty());
    }

    #[test]
    fn test_total_cost_tolerates_missing() {
        let manager = BeverageListManager::new(sample_lines());
        assert_eq!(manager.total_cost(), 78.0);
    }
}
