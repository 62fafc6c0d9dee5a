use crate::estimator::{BeverageCategory, DrinkSplit};
use crate::models::{BeverageLine, Event};
use crate::pricing::{calculate_total_cost, totals_by_category, DishCosting};

fn money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:>9.2} €", v),
        None => format!("{:>11}", "-"),
    }
}

/// Display a beverage list as a table with a cost summary.
pub fn display_beverages(lines: &[BeverageLine]) {
    if lines.is_empty() {
        println!("No beverages in the list.");
        return;
    }

    println!();
    println!("=== Beverages ===");
    println!();

    let cat_width = lines.iter().map(|l| l.category.chars().count()).max().unwrap_or(8);
    let item_width = lines.iter().map(|l| l.item.chars().count()).max().unwrap_or(10);

    for (i, line) in lines.iter().enumerate() {
        println!(
            "{:>3}. {:<cw$}  {:<iw$}  {:>6} {:<10} {}",
            i + 1,
            line.category,
            line.item,
            line.quantity,
            line.unit,
            money(line.estimated_cost),
            cw = cat_width,
            iw = item_width,
        );
    }

    println!();
    println!("--- By category ---");
    for total in totals_by_category(lines) {
        println!(
            "  {:<cw$}  {:>3} lines {:>7} units {}",
            total.category,
            total.lines,
            total.quantity,
            money(Some(total.cost)),
            cw = cat_width,
        );
    }

    println!();
    println!("Total estimated cost: {:.2} €", calculate_total_cost(lines));
    println!();
}

/// Display how total drinks were split between pools.
pub fn display_drink_split(split: &DrinkSplit) {
    println!();
    println!("Total drinks (incl. 15% margin): {}", split.total);
    println!(
        "  Alcoholic: {:.0}  (beer {:.0}, wine {:.0}, spirits {:.0})",
        split.alcoholic(),
        split.beer,
        split.wine,
        split.spirits
    );
    println!(
        "  Non-alcoholic: {:.0}  (water {:.0}, soft drinks {:.0})",
        split.non_alcoholic(),
        split.water,
        split.soft_drinks
    );
}

/// Display the header of an event.
pub fn display_event(event: &Event) {
    println!();
    println!("=== {} ===", event.name);
    if !event.event_date.is_empty() || !event.venue.is_empty() {
        println!("{} @ {}", event.event_date, event.venue);
    }
    println!(
        "Guests: {} ({} adults, {} children)",
        event.total_guests, event.adults, event.children
    );

    let features = event.features.enabled_labels();
    if !features.is_empty() {
        println!("Services: {}", features.join(", "));
    }

    for requirement in &event.requirements {
        println!("  * {}", requirement.summary());
    }
}

/// Display classification results, one name per line.
pub fn display_classification(results: &[(String, BeverageCategory)]) {
    let width = results.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(10);
    for (name, category) in results {
        println!("{:<width$}  ->  {}", name, category, width = width);
    }
}

/// Display validation issues found in a list of records.
pub fn display_validation_issues(issues: &[(usize, Vec<String>)]) {
    if issues.is_empty() {
        println!("All records are valid.");
        return;
    }

    println!("{} invalid record(s):", issues.len());
    for (index, errors) in issues {
        println!("  #{}: {}", index, errors.join("; "));
    }
}

/// Display a dish cost and price breakdown.
pub fn display_dish_costing(name: &str, portions: f64, costing: &DishCosting) {
    println!();
    println!("=== {} ({} portions) ===", name, portions);
    println!("Cost:              {:>10.2} €", costing.cost);
    println!("Cost per portion:  {:>10.2} €", costing.cost_per_portion);
    println!(
        "Sale price:        {:>10.2} €  (margin {:.1}%)",
        costing.sale_price,
        costing.margin * 100.0
    );
    println!("VAT:               {:>10.2} €", costing.vat);
    println!("Price incl. VAT:   {:>10.2} €", costing.price_with_vat);
    if let Some((pax, scaled)) = costing.scaled {
        println!("Cost for {:>5} PAX: {:>9.2} €", pax, scaled);
    }
    println!();
}
