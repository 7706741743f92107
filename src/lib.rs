pub mod amap;
pub mod config;
pub mod format;
pub mod resolver;
pub mod service;

pub use service::AmapService;

// Re-export types needed for testing
pub use service::{GetRouteRequest, GetWeatherRequest};
