use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{CateringError, Result};
use crate::models::{BeverageDraft, BeverageLine, Event, Recipe};

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading JSON file");
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load beverage records without validating them.
pub fn load_drafts<P: AsRef<Path>>(path: P) -> Result<Vec<BeverageDraft>> {
    read_json(path)
}

/// Load a beverage list, rejecting the first invalid record.
pub fn load_beverages<P: AsRef<Path>>(path: P) -> Result<Vec<BeverageLine>> {
    load_drafts(path)?
        .into_iter()
        .enumerate()
        .map(|(i, draft)| {
            BeverageLine::try_from(draft)
                .map_err(|errors| CateringError::InvalidBeverage { index: i + 1, errors })
        })
        .collect()
}

/// Save a beverage list as pretty-printed JSON.
pub fn save_beverages<P: AsRef<Path>>(path: P, lines: &[BeverageLine]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(lines)?;
    fs::write(path, json)?;
    info!(path = %path.display(), lines = lines.len(), "saved beverage list");
    Ok(())
}

pub fn load_event<P: AsRef<Path>>(path: P) -> Result<Event> {
    let event: Event = read_json(path)?;
    if event.total_guests == 0 {
        return Err(CateringError::InvalidInput(format!(
            "event '{}' has no guests",
            event.name
        )));
    }
    Ok(event)
}

pub fn load_recipe<P: AsRef<Path>>(path: P) -> Result<Recipe> {
    read_json(path)
}
