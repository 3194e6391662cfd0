//! Theme palette
//!
//! One static palette. Theme switching is out of scope; sections take the
//! palette as a parameter so nothing reads global state.

use lumen_ui::Color;

/// Color tokens for the site
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
}

impl Theme {
    /// The dark palette the site ships with
    pub fn midnight() -> Self {
        Self {
            background: Color::rgb8(10, 10, 15),
            surface: Color::rgb8(20, 21, 30),
            border: Color::rgb8(42, 44, 60),
            primary: Color::rgb8(99, 102, 241),
            accent: Color::rgb8(192, 132, 252),
            text: Color::rgb8(235, 236, 245),
            muted: Color::rgb8(140, 144, 165),
        }
    }

    /// Translucent primary for badges and chips
    pub fn primary_soft(&self) -> Color {
        self.primary.with_alpha(0.1)
    }

    /// Low-alpha border tint for outlined chips
    pub fn primary_border(&self) -> Color {
        self.primary.with_alpha(0.3)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}
