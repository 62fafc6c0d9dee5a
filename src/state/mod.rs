mod manager;
mod persistence;

pub use manager::BeverageListManager;
pub use persistence::{load_beverages, load_drafts, load_event, load_recipe, save_beverages};
