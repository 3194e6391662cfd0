//! Lumen data layer
//!
//! HTTP access to the portfolio backend and the state machinery around it:
//!
//! - [`ApiClient`] - reqwest-backed client with a typed error taxonomy
//!   (transport vs HTTP status), JSON headers, and the canonical
//!   collection-envelope decoding
//! - [`ResourceLoader`] - per-key memoization with at most one in-flight
//!   request per key, surfacing [`FetchState`] to frame-driven consumers
//! - [`reconcile`] - the pure fallback decision: loading indicator,
//!   backend items, static fallback, or an explicit unavailable state
//!
//! Errors are never swallowed here: transport failures are logged once
//! with their endpoint and propagated; substituting fallback content is
//! the consumer's decision, made through `reconcile`.

pub mod client;
pub mod error;
pub mod loader;
pub mod models;
pub mod reconcile;

pub use client::{ApiClient, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use loader::{FetchState, LoaderOptions, ResourceLoader};
pub use models::{
    Bio, ContactMessage, EducationEntry, ExperienceEntry, Project, SkillGroup,
};
pub use reconcile::{reconcile, Reconciled};
