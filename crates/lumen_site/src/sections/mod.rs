//! The page sections

pub mod about;
pub mod education;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::AboutSection;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use footer::FooterSection;
pub use header::HeaderSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

use lumen_ui::prelude::*;
use lumen_ui::Div;

use crate::theme::Theme;

/// Pill badge that opens most section headers
pub(crate) fn badge(theme: &Theme, label: &str) -> Div {
    div()
        .flex_row()
        .items_center()
        .gap(8.0)
        .px_pad(16.0)
        .py_pad(8.0)
        .rounded(999.0)
        .bg(theme.primary_soft())
        .border(1.0, theme.primary_border())
        .child(text(label).size(14.0).color(theme.primary))
}

/// Large two-line section heading; the second line carries the accent
pub(crate) fn heading(theme: &Theme, line1: &str, line2: &str) -> Div {
    div()
        .gap(4.0)
        .child(text(line1).size(48.0).bold().color(theme.text))
        .child(text(line2).size(48.0).bold().color(theme.accent))
}

/// Small outlined chip (tags, highlights)
pub(crate) fn chip(theme: &Theme, label: &str) -> Div {
    div()
        .px_pad(12.0)
        .py_pad(6.0)
        .rounded(8.0)
        .bg(theme.primary_soft())
        .border(1.0, theme.primary_border())
        .child(text(label).size(12.0).color(theme.primary))
}

/// Card shell shared by education/experience/skills entries
pub(crate) fn card(theme: &Theme) -> Div {
    div()
        .p(24.0)
        .rounded(12.0)
        .bg(theme.surface)
        .border(1.0, theme.border)
}
