pub mod bootstrap;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod topic;
pub mod tracing;
pub mod validation;
pub mod word;

pub use config::{ApiConfig, Environment};
pub use state::ApiState;
