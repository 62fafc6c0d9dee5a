use std::path::Path;

use clap::Parser;
use tracing::{info, warn};

use catering_calc_rs::cli::{Cli, Command, EstimateArgs};
use catering_calc_rs::error::{CateringError, Result};
use catering_calc_rs::estimator::{classify, generate_default_beverages, split_drinks};
use catering_calc_rs::export::write_csv;
use catering_calc_rs::interface::{
    display_beverages, display_classification, display_dish_costing, display_drink_split,
    display_event, display_validation_issues, prompt_bar_hours, prompt_guests,
    prompt_pick_suggestion, prompt_yes_no, validate_hours,
};
use catering_calc_rs::logging::init_logging;
use catering_calc_rs::models::{BeverageDraft, BeverageLine, EstimationParams};
use catering_calc_rs::pricing::{scale_to_pax, DishCosting};
use catering_calc_rs::state::{
    load_beverages, load_drafts, load_event, load_recipe, save_beverages, BeverageListManager,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_config());

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Estimate(args) => cmd_estimate(&cli.file, &args),
        Command::Classify { names } => cmd_classify(&names),
        Command::Summary => cmd_summary(&cli.file),
        Command::Add {
            item,
            quantity,
            unit,
            category,
            cost,
        } => cmd_add(&cli.file, item, quantity, unit, category, cost),
        Command::Set { item, quantity } => cmd_set(&cli.file, &item, quantity),
        Command::Remove { item } => cmd_remove(&cli.file, &item),
        Command::Dish {
            recipe,
            margin,
            vat,
            pax,
        } => cmd_dish(&recipe, margin, vat, pax),
        Command::Scale {
            value,
            portions,
            pax,
        } => cmd_scale(value, portions, pax),
        Command::Export { csv } => cmd_export(&cli.file, &csv),
    }
}

/// Load the working list, or start an empty one if the file does not exist yet.
fn load_manager(path: &Path) -> Result<BeverageListManager> {
    if !path.exists() {
        info!(path = %path.display(), "no beverage list yet, starting empty");
        return Ok(BeverageListManager::default());
    }
    Ok(BeverageListManager::new(load_beverages(path)?))
}

/// Estimate beverages for an event from flags, an event file, or prompts.
fn cmd_estimate(file_path: &str, args: &EstimateArgs) -> Result<()> {
    let event = args.event.as_deref().map(load_event).transpose()?;
    if let Some(event) = &event {
        display_event(event);
    }

    let guests = match (args.guests, &event) {
        (Some(g), _) => g,
        (None, Some(event)) => event.total_guests,
        (None, None) => prompt_guests()?,
    };
    if guests == 0 {
        return Err(CateringError::InvalidInput(
            "Guest count must be at least 1".to_string(),
        ));
    }

    let hours = match (args.hours, event.as_ref().and_then(|e| e.bar_hours)) {
        (Some(h), _) | (None, Some(h)) => validate_hours(h)?,
        (None, None) => prompt_bar_hours()?,
    };

    let mut params = EstimationParams::new(guests, hours);
    let preferences = args.preferences();
    if !preferences.is_empty() {
        params = params.with_preferences(preferences);
    }
    info!(guests, hours, "estimating beverages");

    display_drink_split(&split_drinks(&params));

    let lines = generate_default_beverages(&params);
    display_beverages(&lines);

    if let Some(csv_path) = &args.csv {
        write_csv(&lines, csv_path)?;
        println!("Exported estimate to {}", csv_path.display());
    }

    if args.save {
        if Path::new(file_path).exists() {
            let prompt = format!("Overwrite the beverage list in {}?", file_path);
            if !prompt_yes_no(&prompt, true)? {
                println!("Estimate not saved.");
                return Ok(());
            }
        }
        let manager = BeverageListManager::new(lines);
        save_beverages(file_path, manager.lines())?;
        println!("Saved {} lines to {}.", manager.len(), file_path);
    }

    Ok(())
}

fn cmd_classify(names: &[String]) -> Result<()> {
    let results: Vec<_> = names
        .iter()
        .map(|name| (name.clone(), classify(name)))
        .collect();
    display_classification(&results);
    Ok(())
}

/// Validate every record of the working list and show the valid ones.
fn cmd_summary(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Beverage list not found: {}", file_path);
        eprintln!("Run 'estimate --save' or 'add' to create one.");
        return Ok(());
    }

    let drafts = load_drafts(path)?;
    println!("Loaded {} records", drafts.len());

    let mut valid = Vec::new();
    let mut issues = Vec::new();

    for (i, draft) in drafts.into_iter().enumerate() {
        match BeverageLine::try_from(draft) {
            Ok(line) => valid.push(line),
            Err(errors) => issues.push((i + 1, errors)),
        }
    }

    display_beverages(&valid);
    display_validation_issues(&issues);

    Ok(())
}

fn cmd_add(
    file_path: &str,
    item: String,
    quantity: i64,
    unit: String,
    category: Option<String>,
    cost: Option<f64>,
) -> Result<()> {
    let path = Path::new(file_path);
    let mut manager = load_manager(path)?;

    let category = category.unwrap_or_else(|| classify(&item).label().to_string());
    let draft = BeverageDraft {
        category: Some(category),
        item: Some(item),
        quantity: Some(quantity),
        unit: Some(unit),
        unit_cost: cost,
        ..Default::default()
    };

    let mut line = BeverageLine::try_from(draft)
        .map_err(|errors| CateringError::InvalidInput(errors.join("; ")))?;
    if let Some(cost) = cost {
        line = line.with_unit_cost(cost);
    }

    let summary = format!("{} x{} {} [{}]", line.item, line.quantity, line.unit, line.category);
    let replaced = manager.upsert(line);
    save_beverages(path, manager.lines())?;

    if replaced {
        println!("Replaced: {}", summary);
    } else {
        println!("Added: {}", summary);
    }
    Ok(())
}

fn cmd_set(file_path: &str, item: &str, quantity: u32) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Beverage list not found: {}", file_path);
        return Ok(());
    }

    let mut manager = BeverageListManager::new(load_beverages(path)?);
    manager.set_quantity(item, quantity)?;
    save_beverages(path, manager.lines())?;

    if let Some(line) = manager.get(item) {
        match line.estimated_cost {
            Some(cost) => println!(
                "{}: {} {} ({:.2} €)",
                line.item, line.quantity, line.unit, cost
            ),
            None => println!("{}: {} {}", line.item, line.quantity, line.unit),
        }
    }
    Ok(())
}

fn cmd_remove(file_path: &str, item: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Beverage list not found: {}", file_path);
        return Ok(());
    }

    let mut manager = BeverageListManager::new(load_beverages(path)?);

    let target = if manager.get(item).is_some() {
        item.to_string()
    } else {
        let suggestions = manager.suggest(item);
        match prompt_pick_suggestion(item, &suggestions)? {
            Some(name) => name,
            None => {
                println!("No matching beverage for '{}'", item);
                return Ok(());
            }
        }
    };

    let removed = manager.remove(&target)?;
    save_beverages(path, manager.lines())?;
    println!("Removed: {}", removed.item);
    Ok(())
}

fn cmd_dish(recipe_path: &Path, margin: f64, vat: f64, pax: Option<f64>) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;

    if margin >= 1.0 {
        warn!(margin, "margin of 100% or more cannot be priced; sale price is 0");
    }
    if recipe.portions <= 0.0 {
        warn!(portions = recipe.portions, "recipe has no portions; per-portion values are 0");
    }

    let costing = DishCosting::compute(&recipe, margin, vat, pax);
    display_dish_costing(&recipe.name, recipe.portions, &costing);
    Ok(())
}

fn cmd_scale(value: f64, portions: f64, pax: f64) -> Result<()> {
    if portions <= 0.0 {
        warn!(portions, "base portions must be positive; result is 0");
    }
    let scaled = scale_to_pax(value, portions, pax);
    println!("{:.2} for {} portions -> {:.2} for {} PAX", value, portions, scaled, pax);
    Ok(())
}

fn cmd_export(file_path: &str, csv_path: &Path) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Beverage list not found: {}", file_path);
        return Ok(());
    }

    let lines = load_beverages(path)?;
    write_csv(&lines, csv_path)?;
    println!("Exported {} lines to {}", lines.len(), csv_path.display());
    Ok(())
}
