//! Page scroll state and physics
//!
//! The page is one vertical document. Scroll input applies directly and
//! leaves residual momentum that decays with friction; anchor navigation
//! glides on a critically damped spring. Offset is clamped to the content
//! range - the document does not bounce.

use lumen_animation::{Spring, SpringConfig};

/// Viewport dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Direction of the most recent scroll movement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
}

/// Scroll offset, physics, and animated anchor navigation for the page
pub struct PageScroll {
    /// Current offset in pixels; 0 = top, grows downward
    offset_y: f32,
    /// Residual velocity from the last input (px/s)
    velocity_y: f32,
    viewport: Viewport,
    content_height: f32,
    direction: ScrollDirection,
    /// Glide spring for scroll_to; None when not gliding
    glide: Option<Spring>,
    friction: f32,
}

impl PageScroll {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            offset_y: 0.0,
            velocity_y: 0.0,
            viewport,
            content_height: 0.0,
            direction: ScrollDirection::Down,
            glide: None,
            friction: 0.92,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset_y
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.offset_y = self.offset_y.clamp(0.0, self.max_offset());
    }

    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        self.offset_y = self.offset_y.clamp(0.0, self.max_offset());
    }

    /// Largest reachable offset (bottom of the document)
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport.height).max(0.0)
    }

    /// Apply a scroll input delta (positive = down)
    pub fn apply_delta(&mut self, delta_y: f32) {
        // Direct input cancels any in-flight glide
        self.glide = None;
        if delta_y != 0.0 {
            self.direction = if delta_y > 0.0 {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
        }
        self.offset_y = (self.offset_y + delta_y).clamp(0.0, self.max_offset());
        // Velocity estimate assuming one 60Hz frame per input event
        self.velocity_y = delta_y * 60.0;
    }

    /// Glide to an absolute offset (anchor navigation, scroll-to-top)
    pub fn scroll_to(&mut self, target_y: f32) {
        let target = target_y.clamp(0.0, self.max_offset());
        self.direction = if target >= self.offset_y {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        let mut spring = Spring::new(SpringConfig::glide(), self.offset_y);
        spring.set_target(target);
        self.glide = Some(spring);
        self.velocity_y = 0.0;
    }

    /// Advance physics by `dt` seconds; true while still moving
    pub fn tick(&mut self, dt: f32) -> bool {
        let max = self.max_offset();
        if let Some(ref mut spring) = self.glide {
            spring.step(dt);
            self.offset_y = spring.value().clamp(0.0, max);
            if spring.is_settled() {
                self.offset_y = spring.target().clamp(0.0, max);
                self.glide = None;
                return false;
            }
            return true;
        }

        if self.velocity_y.abs() < 1.0 {
            self.velocity_y = 0.0;
            return false;
        }
        self.velocity_y *= self.friction;
        self.offset_y = (self.offset_y + self.velocity_y * dt).clamp(0.0, self.max_offset());
        true
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }
}
