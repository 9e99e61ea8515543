pub mod brightness;
pub mod config;
pub mod detection;
pub mod output;
pub mod plugin;
pub mod shared;
