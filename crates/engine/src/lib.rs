//! Roster engine library.
//!
//! Server-side half of the character roster.
//!
//! ## Structure
//!
//! - `use_cases/` - Commands, queries, fight checks and statistics
//! - `infrastructure/` - Repository port and in-memory adapter
//! - `config` - Environment-driven settings
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
