pub mod auth;
pub mod backend;
pub mod bridge;
pub mod config;
pub mod error;
pub mod models;

pub use auth::TokenMinter;
pub use backend::BackendClient;
pub use bridge::SessionBridge;
pub use config::{Config, DomainSource};
pub use error::{BridgeError, Result};
