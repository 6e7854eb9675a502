pub mod constants;
pub mod data;
pub mod error;
pub mod fetch;
pub mod mastodon;
pub mod report;
pub mod state;

pub use crate::data::{VaccinationDay, Vaccinations};
pub use crate::error::Error;
