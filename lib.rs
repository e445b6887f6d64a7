pub mod airtable_api;
pub mod config;
pub mod digest;
pub mod errors;
pub mod fetchers;
pub mod models;
pub mod slack;
pub mod telemetry;

pub const PAGE_SIZE: u32 = 100;
pub const MAX_PAGES_PER_RUN: u32 = 1000; // Safety break for pagination loops
