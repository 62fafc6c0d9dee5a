pub mod prompts;
pub mod render;

pub use prompts::{
    parse_hours, prompt_bar_hours, prompt_guests, prompt_pick_suggestion, prompt_yes_no,
    validate_hours,
};
pub use render::{
    display_beverages, display_classification, display_dish_costing, display_drink_split,
    display_event, display_validation_issues,
};
