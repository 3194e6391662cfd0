//! Experience section
//!
//! A center timeline whose line grows with scroll (scrubbed between the
//! timeline's top and bottom meeting viewport center), with entries
//! sliding in from alternating sides as they enter.

use lumen_ui::prelude::*;
use lumen_ui::{MotionPlan, TriggerKind};

use super::{card, chip, heading};
use crate::fallback;
use crate::section::{Section, SectionView};
use crate::theme::Theme;

pub struct ExperienceSection;

impl Section for ExperienceSection {
    fn id(&self) -> &'static str {
        "experience"
    }

    fn build(&self, theme: &Theme) -> SectionView {
        let entries = fallback::experience();

        let mut rows = div().gap(48.0);
        for (i, entry) in entries.iter().enumerate() {
            let mut highlights = div().flex_row().flex_wrap().gap(8.0);
            for highlight in &entry.highlights {
                highlights = highlights.child(chip(theme, highlight));
            }
            let entry_card = card(theme)
                .gap(12.0)
                .child(text(&entry.title).size(20.0).bold().color(theme.text))
                .child(text(&entry.company).size(16.0).bold().color(theme.primary))
                .child(text(&entry.period).size(14.0).color(theme.muted))
                .child(text(&entry.description).size(15.0).color(theme.muted))
                .child(highlights);

            // Alternate sides around the center line
            let row = if i % 2 == 0 {
                div()
                    .flex_row()
                    .child(div().w(420.0).tag(format!("experience.item.{i}")).child(entry_card))
                    .child(timeline_dot(theme))
                    .child(div().w(420.0))
            } else {
                div()
                    .flex_row()
                    .child(div().w(420.0))
                    .child(timeline_dot(theme))
                    .child(div().w(420.0).tag(format!("experience.item.{i}")).child(entry_card))
            };
            rows = rows.child(row);
        }

        let timeline = div()
            .tag("experience.timeline")
            .child(
                // Full-height rule down the center; its rect spans the
                // timeline block, so the scrub landmarks resolve on it
                div()
                    .tag("experience.line")
                    .absolute()
                    .left(444.0)
                    .top(0.0)
                    .w(4.0)
                    .h_full()
                    .rounded(999.0)
                    .bg(theme.primary),
            )
            .child(rows);

        let element = div()
            .anchor("experience")
            .w_full()
            .px_pad(24.0)
            .py_pad(80.0)
            .bg(theme.surface.with_alpha(0.3))
            .child(
                div()
                    .max_w(900.0)
                    .mx_auto()
                    .gap(48.0)
                    .child(heading(theme, "Experience", ""))
                    .child(timeline),
            );

        SectionView::new(element, Self::plan(entries.len()))
    }
}

impl ExperienceSection {
    fn plan(count: usize) -> MotionPlan {
        let mut plan = MotionPlan::new();

        // The line grows with scroll across the whole timeline block,
        // reversing as the user scrolls back up
        plan.push(
            AnimationDescriptor::new(Target::Tag("experience.line".into()), 1500)
                .track(Property::Grow, 0.0, 1.0)
                .easing(Easing::Linear)
                .trigger(TriggerKind::ScrubLinked {
                    start: Landmark::top_center(),
                    end: Landmark::bottom_center(),
                }),
        );

        for i in 0..count as u32 {
            let from_x = if i % 2 == 0 { -50.0 } else { 50.0 };
            plan.push(
                AnimationDescriptor::new(Target::Tag(format!("experience.item.{i}")), 800)
                    .track(Property::Opacity, 0.0, 1.0)
                    .track(Property::TranslateX, from_x, 0.0)
                    .easing(Easing::QuadOut)
                    .on_enter(),
            );
        }

        plan
    }
}

fn timeline_dot(theme: &Theme) -> lumen_ui::Div {
    div()
        .w(48.0)
        .items_center()
        .child(
            div()
                .square(24.0)
                .rounded(999.0)
                .bg(theme.primary)
                .border(4.0, theme.background),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_ui::{ElementBuilder, HandlerRegistry, LayoutTree};

    #[test]
    fn test_entries_alternate_sides() {
        let plan = ExperienceSection::plan(3);
        let items: Vec<_> = plan
            .descriptors
            .iter()
            .filter(|d| matches!(&d.target, Target::Tag(t) if t.starts_with("experience.item.")))
            .collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].tracks[1].from, -50.0);
        assert_eq!(items[1].tracks[1].from, 50.0);
        assert_eq!(items[2].tracks[1].from, -50.0);
    }

    #[test]
    fn test_line_scrub_spans_timeline_block() {
        let view = ExperienceSection.build(&Theme::default());
        let scrub = view
            .plan
            .descriptors
            .iter()
            .find(|d| matches!(d.trigger, TriggerKind::ScrubLinked { .. }))
            .unwrap();
        match scrub.trigger {
            TriggerKind::ScrubLinked { start, end } => {
                assert_eq!(start, Landmark::top_center());
                assert_eq!(end, Landmark::bottom_center());
            }
            _ => unreachable!(),
        }

        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let root = view.element.build(&mut tree, &mut registry);
        tree.set_root(root);
        assert!(tree.node_by_tag("experience.timeline").is_some());
        assert!(tree.node_by_tag("experience.line").is_some());
    }
}
