//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking site:
//! - Database initialisation, migrations and row models
//! - Configuration loading
//! - Show date handling and display formatting
//! - Genre lists and name search matching

pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod genres;
pub mod search;

pub use error::{Error, Result};
