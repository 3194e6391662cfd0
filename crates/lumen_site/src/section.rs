//! Section abstraction
//!
//! A section turns its data into a [`SectionView`]: a root element (with
//! the section's anchor id and section-local tags) and the motion plan
//! the orchestrator wires up at attach time. The lifecycle lives in the
//! app shell - sections never register anything themselves.

use lumen_ui::{Div, MotionPlan};

use crate::theme::Theme;

/// One renderable page section
pub trait Section {
    /// Unique section id; doubles as the scroll anchor
    fn id(&self) -> &'static str;

    /// Build the element tree and motion plan for the current data
    fn build(&self, theme: &Theme) -> SectionView;
}

/// A built section: element tree plus motion plan
pub struct SectionView {
    pub element: Div,
    pub plan: MotionPlan,
}

impl SectionView {
    pub fn new(element: Div, plan: MotionPlan) -> Self {
        Self { element, plan }
    }
}
