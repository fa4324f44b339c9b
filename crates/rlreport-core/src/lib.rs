pub mod config;
pub mod logging;

pub mod facility;
pub mod fetcher;
pub mod link;
pub mod sheet;
pub mod week;
