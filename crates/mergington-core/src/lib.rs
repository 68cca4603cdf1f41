//! # Mergington Core
//!
//! Domain model for the Mergington High School activity service.
//!
//! ## Components
//!
//! - [`Activity`] - An extracurricular activity and its participant roster
//! - [`ActivityRegistry`] - Concurrent store of activities keyed by name
//! - [`RegistryError`] - Enrollment and lookup failures
//!
//! The registry owns all mutable state. Callers share it behind an
//! `Arc` and drive it through its async methods; there is no global
//! instance.

pub mod activity;
pub mod error;
pub mod registry;
pub mod seed;

pub use activity::Activity;
pub use error::RegistryError;
pub use registry::ActivityRegistry;
pub use seed::default_activities;
