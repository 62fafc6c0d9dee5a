use dialoguer::{Confirm, Input, Select};

use crate::error::{CateringError, Result};

/// Prompt for the number of guests.
pub fn prompt_guests() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many guests (PAX) will attend?")
        .default("100".to_string())
        .interact_text()?;

    let guests: u32 = input
        .trim()
        .parse()
        .map_err(|_| CateringError::InvalidInput("Invalid guest count".to_string()))?;

    if guests == 0 {
        return Err(CateringError::InvalidInput(
            "Guest count must be at least 1".to_string(),
        ));
    }

    Ok(guests)
}

/// Prompt for the open bar duration in hours.
pub fn prompt_bar_hours() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("How many hours will the bar be open?")
        .default("4".to_string())
        .interact_text()?;

    parse_hours(&input)
}

/// Parse a positive number of hours; accepts a decimal comma ("3,5").
pub fn parse_hours(input: &str) -> Result<f64> {
    let hours: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| CateringError::InvalidInput("Invalid number of hours".to_string()))?;

    validate_hours(hours)
}

/// Reject non-finite or non-positive bar hours.
pub fn validate_hours(hours: f64) -> Result<f64> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(CateringError::InvalidInput(
            "Bar hours must be greater than 0".to_string(),
        ));
    }

    Ok(hours)
}

/// Let the user pick one of several suggested item names.
///
/// Returns `None` when the user rejects all of them.
pub fn prompt_pick_suggestion(query: &str, suggestions: &[&str]) -> Result<Option<String>> {
    if suggestions.is_empty() {
        return Ok(None);
    }

    if suggestions.len() == 1 {
        let confirm = Confirm::new()
            .with_prompt(format!("No line named '{}'. Did you mean '{}'?", query, suggestions[0]))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| suggestions[0].to_string()));
    }

    let mut options: Vec<String> = suggestions.iter().map(|s| s.to_string()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt(format!("No line named '{}'. Which did you mean?", query))
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < suggestions.len()).then(|| options[selection].clone()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
