//! Lumen application shell
//!
//! Ties the pieces together: configuration from the environment, tracing
//! setup, and the frame-driven [`PortfolioApp`] that owns the layout
//! tree, the animation scheduler, the page scroll, and the section
//! lifecycle. A platform embedding drives it with input events and a
//! `frame(dt)` call per display frame; tests drive it the same way.

pub mod app;
pub mod config;
pub mod error;

pub use app::PortfolioApp;
pub use config::AppConfig;
pub use error::{AppError, Result};

/// Initialize tracing from `RUST_LOG`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
