//! Database schema, models and initialisation

pub mod init;
pub mod migrations;
pub mod models;
pub mod seed;

pub use init::*;
pub use migrations::*;
pub use models::*;
pub use seed::*;
