//! Scroll trigger geometry
//!
//! A [`Landmark`] names the scroll position at which an element edge meets
//! a horizontal line across the viewport ("top of the element reaches 80%
//! down the viewport"). Landmarks resolve against layout rects into plain
//! scroll offsets; a [`ScrubRange`] maps the live offset between two
//! resolved landmarks onto clamped 0-to-1 progress.

use crate::tree::Rect;

/// Which edge of the target element a landmark tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementEdge {
    Top,
    Center,
    Bottom,
}

/// An element edge meeting a viewport line
///
/// `viewport_fraction` is measured from the top of the viewport: 0.0 is the
/// top edge, 0.5 the center, 1.0 the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub edge: ElementEdge,
    pub viewport_fraction: f32,
}

impl Landmark {
    pub fn new(edge: ElementEdge, viewport_fraction: f32) -> Self {
        Self {
            edge,
            viewport_fraction,
        }
    }

    /// "top 80%": element top reaches 80% down the viewport
    ///
    /// The default entrance trigger.
    pub fn top_at(viewport_fraction: f32) -> Self {
        Self::new(ElementEdge::Top, viewport_fraction)
    }

    /// "top center"
    pub fn top_center() -> Self {
        Self::new(ElementEdge::Top, 0.5)
    }

    /// "center center"
    pub fn center_center() -> Self {
        Self::new(ElementEdge::Center, 0.5)
    }

    /// "bottom center"
    pub fn bottom_center() -> Self {
        Self::new(ElementEdge::Bottom, 0.5)
    }

    /// The scroll offset at which this landmark is met for `rect`
    pub fn resolve(&self, rect: Rect, viewport_height: f32) -> f32 {
        let edge_y = match self.edge {
            ElementEdge::Top => rect.top(),
            ElementEdge::Center => rect.center_y(),
            ElementEdge::Bottom => rect.bottom(),
        };
        edge_y - viewport_height * self.viewport_fraction
    }
}

/// A resolved scrub window over scroll offsets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubRange {
    start: f32,
    end: f32,
}

impl ScrubRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Resolve a start/end landmark pair against a layout rect
    pub fn resolve(start: Landmark, end: Landmark, rect: Rect, viewport_height: f32) -> Self {
        Self {
            start: start.resolve(rect, viewport_height),
            end: end.resolve(rect, viewport_height),
        }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Progress at a scroll offset: 0.0 at start, 1.0 at end, clamped
    /// outside, linear and monotonic in between
    pub fn progress(&self, offset: f32) -> f32 {
        let span = self.end - self.start;
        if span.abs() < f32::EPSILON {
            // Degenerate window: step at the landmark
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(y: f32, height: f32) -> Rect {
        Rect {
            x: 0.0,
            y,
            width: 100.0,
            height,
        }
    }

    #[test]
    fn test_landmark_resolution() {
        let r = rect(2000.0, 400.0);
        let vh = 800.0;

        // Element top meets 80% line when offset = 2000 - 640
        assert_eq!(Landmark::top_at(0.8).resolve(r, vh), 1360.0);
        assert_eq!(Landmark::top_center().resolve(r, vh), 1600.0);
        assert_eq!(Landmark::center_center().resolve(r, vh), 1800.0);
        assert_eq!(Landmark::bottom_center().resolve(r, vh), 2000.0);
    }

    #[test]
    fn test_progress_endpoints_and_clamp() {
        let range = ScrubRange::new(1000.0, 2000.0);
        assert_eq!(range.progress(1000.0), 0.0);
        assert_eq!(range.progress(2000.0), 1.0);
        assert_eq!(range.progress(500.0), 0.0);
        assert_eq!(range.progress(9000.0), 1.0);
        assert_eq!(range.progress(1500.0), 0.5);
    }

    #[test]
    fn test_progress_is_monotonic_and_continuous() {
        let range = ScrubRange::resolve(
            Landmark::top_center(),
            Landmark::center_center(),
            rect(2000.0, 400.0),
            800.0,
        );
        let mut last = -1.0;
        let mut prev = range.progress(range.start() - 10.0);
        for i in 0..400 {
            let offset = range.start() - 10.0 + i as f32 * 2.0;
            let p = range.progress(offset);
            assert!(p >= last, "monotonic");
            // No jumps bigger than the step allows
            assert!((p - prev).abs() <= 0.05, "continuous");
            last = p;
            prev = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_degenerate_range_steps() {
        let range = ScrubRange::new(500.0, 500.0);
        assert_eq!(range.progress(499.0), 0.0);
        assert_eq!(range.progress(500.0), 1.0);
    }
}
