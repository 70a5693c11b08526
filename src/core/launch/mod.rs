pub mod config;
pub mod request;

pub use config::{LaunchConfig, LaunchVersion};
pub use request::LaunchRequest;
