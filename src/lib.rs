pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod export;
pub mod forum;

pub use forum_locations_common::{extract, normalize, parse_coordinate, SiteRecord};
