//! Staticize Engine
//!
//! Rewrite pass: non-overridable methods not accessing instance variables
//! should be static.
//!
//! A method that is `private` or `final` cannot be replaced through virtual
//! dispatch, so if it never touches instance state it can be declared
//! `static` without changing behavior. The pass runs in two phases over one
//! compilation unit:
//!
//! 1. **Analyze**: [`collect`] gathers the unit's instance field signatures,
//!    [`usage`] finds every method whose body reads one of them (or otherwise
//!    needs `this`).
//! 2. **Rewrite**: [`classify`] judges each method against the finished sets,
//!    [`rewrite`] inserts the `static` modifier and [`format`] fixes the
//!    modifier layout.
//!
//! [`orchestrator`] sequences the phases; [`StaticMethods`] is the entry point.
//!
//! # Example
//!
//! ```ignore
//! use staticize_engine::StaticMethods;
//!
//! let pass = StaticMethods::new();
//! let outcome = pass.run(unit);
//! for change in &outcome.report.changes {
//!     println!("{}: {} -> {}", change.method, change.before, change.after);
//! }
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod collect;
pub mod config;
pub mod error;
pub mod format;
pub mod orchestrator;
pub mod recipe;
pub mod report;
pub mod rewrite;
pub mod usage;

pub use classify::Verdict;
pub use config::PassConfig;
pub use error::ConfigError;
pub use orchestrator::{analyze_unit, Analysis, Orchestrator, PassOutcome};
pub use recipe::{Recipe, RecipeMeta, StaticMethods};
pub use report::{PassReport, StaticChange};
