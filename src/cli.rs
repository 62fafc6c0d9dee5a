use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::{LogConfig, LogFormat};
use crate::models::Preferences;
use crate::pricing::{DEFAULT_MARGIN, DEFAULT_VAT_RATE};

/// catering_calc — beverage estimation and dish costing for catering events.
#[derive(Parser, Debug)]
#[command(name = "catering_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the beverage list JSON file.
    #[arg(short, long, default_value = "beverages.json", global = true)]
    pub file: String,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "catering_calc_rs=debug").
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(self.log_level.clone(), self.log_format)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate the beverages needed for an event.
    Estimate(EstimateArgs),

    /// Show the category assigned to each beverage name.
    Classify {
        /// Beverage names to classify.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Validate the beverage list and show costs by category.
    Summary,

    /// Add a beverage line, or replace the line with the same name.
    Add {
        /// Item name.
        #[arg(long)]
        item: String,

        /// Number of units.
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,

        /// Unit of purchase.
        #[arg(long, default_value = "uds")]
        unit: String,

        /// Category; derived from the item name when omitted.
        #[arg(long)]
        category: Option<String>,

        /// Cost of one unit.
        #[arg(long)]
        cost: Option<f64>,
    },

    /// Change the quantity of an existing line.
    Set {
        /// Item name (case-insensitive).
        item: String,

        /// New number of units.
        #[arg(long)]
        quantity: u32,
    },

    /// Remove a beverage line by name.
    Remove {
        /// Item name (case-insensitive).
        item: String,
    },

    /// Compute cost, sale price and VAT for a recipe file.
    Dish {
        /// Path to the recipe JSON file.
        #[arg(long)]
        recipe: PathBuf,

        /// Target margin as a fraction of the sale price.
        #[arg(long, default_value_t = DEFAULT_MARGIN, value_parser = parse_fraction)]
        margin: f64,

        /// VAT rate.
        #[arg(long, default_value_t = DEFAULT_VAT_RATE, value_parser = parse_fraction)]
        vat: f64,

        /// Scale the batch cost to this many guests.
        #[arg(long)]
        pax: Option<f64>,
    },

    /// Scale a per-batch value to a number of guests.
    Scale {
        #[arg(long)]
        value: f64,

        /// Portions the value was computed for.
        #[arg(long, allow_negative_numbers = true)]
        portions: f64,

        #[arg(long)]
        pax: f64,
    },

    /// Export the beverage list as a CSV spreadsheet.
    Export {
        /// Output CSV file.
        #[arg(long, default_value = "beverages.csv")]
        csv: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct EstimateArgs {
    /// Number of guests; prompted when omitted.
    #[arg(long)]
    pub guests: Option<u32>,

    /// Open bar duration in hours; prompted when omitted.
    #[arg(long)]
    pub hours: Option<f64>,

    /// Event JSON file providing guests and bar hours.
    #[arg(long)]
    pub event: Option<PathBuf>,

    /// Share of drinks that are alcoholic (0-1 or "65%").
    #[arg(long, value_parser = parse_fraction)]
    pub alcohol: Option<f64>,

    /// Share of alcoholic drinks that are beer.
    #[arg(long, value_parser = parse_fraction)]
    pub beer: Option<f64>,

    /// Share of alcoholic drinks that are wine or cava.
    #[arg(long, value_parser = parse_fraction)]
    pub wine: Option<f64>,

    /// Share of non-alcoholic drinks that are water.
    #[arg(long, value_parser = parse_fraction)]
    pub water: Option<f64>,

    /// Save the estimate as the working beverage list.
    #[arg(long)]
    pub save: bool,

    /// Also export the estimate to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl EstimateArgs {
    pub fn preferences(&self) -> Preferences {
        Preferences {
            alcohol_percentage: self.alcohol,
            beer_percentage: self.beer,
            wine_percentage: self.wine,
            water_percentage: self.water,
        }
    }
}

/// Parse a fraction in `[0, 1]`, also accepting a percentage such as "21%".
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let value = match s.strip_suffix('%') {
        Some(pct) => pct
            .trim()
            .parse::<f64>()
            .map(|v| v / 100.0)
            .map_err(|_| format!("invalid percentage: {}", s))?,
        None => s.parse::<f64>().map_err(|_| format!("invalid number: {}", s))?,
    };

    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{} is outside 0-1 (0%-100%)", s));
    }
    Ok(value)
}
