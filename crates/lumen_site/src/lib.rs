//! Lumen portfolio content
//!
//! The seven page sections plus the fixed header, each a declarative
//! element tree paired with a motion plan, the static fallback datasets,
//! and the theme palette. Sections are pure presentation: data comes in
//! (static or reconciled from the loader), an element tree and a
//! [`lumen_ui::MotionPlan`] come out. All motion is delegated to the
//! orchestrator and all fetching to the data layer.

pub mod fallback;
pub mod page;
pub mod section;
pub mod sections;
pub mod theme;

pub use page::Page;
pub use section::{Section, SectionView};
pub use theme::Theme;
