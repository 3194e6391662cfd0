//! Projects section
//!
//! The one live-data section. Renders exactly one of: the loading
//! spinner, the project grid (backend results or the single static
//! fallback, per [`lumen_data::reconcile`]), or an explicit
//! "unable to load" block when there is nothing to show.
//!
//! Cards pop in on entry with a `(index % 3) * 150 ms` stagger - one
//! wave per grid row - and tilt toward the cursor while hovered.

use lumen_data::{Project, Reconciled};
use lumen_ui::prelude::*;
use lumen_ui::{Div, MotionPlan, TriggerKind};

use super::{badge, chip, heading};
use crate::section::{Section, SectionView};
use crate::theme::Theme;

/// Stagger step between cards in one wave, ms
const CARD_STAGGER_MS: u32 = 150;
/// Cards per grid row; the stagger wave restarts each row
const GRID_COLUMNS: usize = 3;

pub struct ProjectsSection {
    content: Reconciled<Project>,
}

impl ProjectsSection {
    pub fn new(content: Reconciled<Project>) -> Self {
        Self { content }
    }

    /// Initial state, before the loader settles
    pub fn loading() -> Self {
        Self::new(Reconciled::Loading)
    }
}

impl Section for ProjectsSection {
    fn id(&self) -> &'static str {
        "projects"
    }

    fn build(&self, theme: &Theme) -> SectionView {
        let header = div()
            .gap(16.0)
            .child(badge(theme, "Featured Work"))
            .child(heading(theme, "Crafted Projects That", "Drive Real Impact"))
            .child(
                div().max_w(640.0).child(
                    text(
                        "A selection of my recent work showcasing expertise in full-stack \
                         development, modern design patterns, and scalable architecture.",
                    )
                    .size(18.0)
                    .color(theme.muted),
                ),
            );

        let (body, plan) = match &self.content {
            Reconciled::Loading => (spinner(theme), Self::spinner_plan()),
            Reconciled::Items(projects) => {
                let mut grid = div().flex_row().flex_wrap().gap(32.0);
                for (i, project) in projects.iter().enumerate() {
                    grid = grid.child(project_card(theme, i, project));
                }
                (grid, Self::grid_plan(projects.len()))
            }
            Reconciled::Unavailable { error } => (unavailable(theme, error), MotionPlan::new()),
        };

        let element = div()
            .anchor("projects")
            .w_full()
            .px_pad(24.0)
            .py_pad(128.0)
            .child(
                div()
                    .max_w(1280.0)
                    .mx_auto()
                    .gap(64.0)
                    .child(header)
                    .child(body)
                    .child(cta_block(theme)),
            );

        SectionView::new(element, plan)
    }
}

impl ProjectsSection {
    fn grid_plan(card_count: usize) -> MotionPlan {
        let mut plan = MotionPlan::new();
        for i in 0..card_count {
            plan.push(
                AnimationDescriptor::new(Target::Tag(format!("projects.card.{i}")), 800)
                    .track(Property::Opacity, 0.0, 1.0)
                    .track(Property::TranslateY, 50.0, 0.0)
                    .track(Property::Scale, 0.9, 1.0)
                    .easing(Easing::BackOut)
                    .delay((i % GRID_COLUMNS) as u32 * CARD_STAGGER_MS)
                    .on_enter(),
            );
        }
        if card_count > 0 {
            plan.pointer(PointerInteraction::Tilt {
                target: Target::TagPrefix("projects.card.".into()),
                max_degrees: 5.0,
            });
        }
        plan
    }

    fn spinner_plan() -> MotionPlan {
        let mut plan = MotionPlan::new();
        plan.push(
            AnimationDescriptor::new(Target::Tag("projects.spinner".into()), 1000)
                .track(Property::Rotate, 0.0, 360.0)
                .easing(Easing::Linear)
                .trigger(TriggerKind::Ambient)
                .repeat(lumen_ui::Repeat {
                    count: -1,
                    yoyo: false,
                }),
        );
        plan
    }
}

fn project_card(theme: &Theme, index: usize, project: &Project) -> Div {
    let mut tags = div().flex_row().flex_wrap().gap(8.0);
    for tag in &project.tags {
        tags = tags.child(chip(theme, tag));
    }

    div()
        .tag(format!("projects.card.{index}"))
        .w(380.0)
        .rounded(16.0)
        .bg(theme.surface.with_alpha(0.5))
        .border(1.0, theme.border)
        .child(
            div()
                .h(224.0)
                .bg(theme.background)
                .child(image(&project.image, &project.title).h(224.0)),
        )
        .child(
            div()
                .p(24.0)
                .gap(16.0)
                .child(text(&project.title).size(24.0).bold().color(theme.text))
                .child(text(&project.description).size(14.0).color(theme.muted))
                .child(tags)
                .child(
                    div()
                        .flex_row()
                        .gap(12.0)
                        .child(
                            div()
                                .link(&project.link)
                                .flex_grow()
                                .py_pad(12.0)
                                .rounded(12.0)
                                .bg(theme.primary)
                                .items_center()
                                .child(text("Live Demo").size(14.0).bold().color(Color::WHITE)),
                        )
                        .child(
                            div()
                                .link(&project.github)
                                .flex_grow()
                                .py_pad(12.0)
                                .rounded(12.0)
                                .border(2.0, theme.primary)
                                .items_center()
                                .child(text("Code").size(14.0).bold().color(theme.primary)),
                        ),
                ),
        )
}

fn spinner(theme: &Theme) -> Div {
    div().items_center().py_pad(80.0).child(
        div()
            .tag("projects.spinner")
            .square(48.0)
            .rounded(999.0)
            .border(4.0, theme.primary),
    )
}

fn unavailable(theme: &Theme, error: &str) -> Div {
    div()
        .items_center()
        .gap(16.0)
        .py_pad(40.0)
        .child(text("Unable to load projects").size(24.0).bold().color(theme.text))
        .child(
            text("Please check your API connection")
                .size(16.0)
                .color(theme.muted),
        )
        .child(text(error).size(14.0).color(Color::rgb8(239, 68, 68)))
}

fn cta_block(theme: &Theme) -> Div {
    div()
        .mt(80.0)
        .p(48.0)
        .rounded(16.0)
        .border(1.0, theme.border)
        .items_center()
        .gap(24.0)
        .child(text("Want to see more?").size(30.0).bold().color(theme.text))
        .child(
            text("Explore my complete portfolio and contributions on GitHub")
                .size(16.0)
                .color(theme.muted),
        )
        .child(
            div()
                .link("#")
                .px_pad(32.0)
                .py_pad(16.0)
                .rounded(12.0)
                .bg(theme.primary)
                .child(
                    text("View All Projects on GitHub")
                        .size(16.0)
                        .bold()
                        .color(Color::WHITE),
                ),
        )
}
