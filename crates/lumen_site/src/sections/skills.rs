//! Skills section
//!
//! Category cards pop in staggered; individual skill items lift on hover;
//! the proficiency bars grow to their percentage once the row enters.

use lumen_ui::prelude::*;
use lumen_ui::MotionPlan;

use super::{card, heading};
use crate::fallback;
use crate::section::{Section, SectionView};
use crate::theme::Theme;

pub struct SkillsSection;

impl Section for SkillsSection {
    fn id(&self) -> &'static str {
        "skills"
    }

    fn build(&self, theme: &Theme) -> SectionView {
        let groups = fallback::skills();
        let proficiencies = fallback::proficiencies();

        let mut grid = div().flex_row().flex_wrap().gap(32.0);
        for (i, group) in groups.iter().enumerate() {
            let mut items = div().flex_row().flex_wrap().gap(12.0);
            for (j, skill) in group.skills.iter().enumerate() {
                items = items.child(
                    div()
                        .tag(format!("skills.item.{i}.{j}"))
                        .px_pad(16.0)
                        .py_pad(12.0)
                        .rounded(8.0)
                        .bg(theme.background)
                        .border(1.0, theme.border)
                        .child(text(skill).size(14.0).bold().color(theme.text)),
                );
            }
            grid = grid.child(
                card(theme)
                    .tag(format!("skills.card.{i}"))
                    .w(560.0)
                    .gap(24.0)
                    .child(text(&group.category).size(24.0).bold().color(theme.primary))
                    .child(items),
            );
        }

        let mut bars = div().flex_row().gap(32.0).mt(64.0);
        for (i, (label, percentage)) in proficiencies.iter().enumerate() {
            bars = bars.child(
                div()
                    .gap(12.0)
                    .flex_grow()
                    .child(
                        div()
                            .flex_row()
                            .justify_between()
                            .child(text(*label).size(15.0).bold().color(theme.text))
                            .child(
                                text(format!("{percentage}%"))
                                    .size(15.0)
                                    .bold()
                                    .color(theme.primary),
                            ),
                    )
                    .child(
                        div().w_full().h(8.0).rounded(999.0).bg(theme.surface).child(
                            div()
                                .tag(format!("skills.bar.{i}"))
                                .w_full()
                                .h(8.0)
                                .rounded(999.0)
                                .bg(theme.primary),
                        ),
                    ),
            );
        }

        let element = div()
            .anchor("skills")
            .w_full()
            .px_pad(24.0)
            .py_pad(80.0)
            .child(
                div()
                    .max_w(1200.0)
                    .mx_auto()
                    .gap(48.0)
                    .child(heading(theme, "Skills & Expertise", ""))
                    .child(grid)
                    .child(bars),
            );

        SectionView::new(element, Self::plan(&groups, &proficiencies))
    }
}

impl SkillsSection {
    fn plan(groups: &[lumen_data::SkillGroup], proficiencies: &[(&str, u32)]) -> MotionPlan {
        let mut plan = MotionPlan::new();

        for i in 0..groups.len() as u32 {
            plan.push(
                AnimationDescriptor::new(Target::Tag(format!("skills.card.{i}")), 600)
                    .track(Property::Opacity, 0.0, 1.0)
                    .track(Property::TranslateY, 30.0, 0.0)
                    .track(Property::Scale, 0.95, 1.0)
                    .easing(Easing::BackOut)
                    .delay(i * 150)
                    .on_enter(),
            );
        }

        // Bars grow from zero to their fraction on entry
        for (i, (_, percentage)) in proficiencies.iter().enumerate() {
            plan.push(
                AnimationDescriptor::new(Target::Tag(format!("skills.bar.{i}")), 1000)
                    .track(Property::Grow, 0.0, *percentage as f32 / 100.0)
                    .easing(Easing::QuadOut)
                    .delay(i as u32 * 200)
                    .on_enter(),
            );
        }

        plan.pointer(PointerInteraction::HoverLift {
            target: Target::TagPrefix("skills.item.".into()),
            lift_px: 8.0,
        });

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_ui::{ElementBuilder, HandlerRegistry, LayoutTree};

    #[test]
    fn test_cards_bars_and_hover_targets() {
        let view = SkillsSection.build(&Theme::default());
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let root = view.element.build(&mut tree, &mut registry);
        tree.set_root(root);

        assert_eq!(tree.nodes_by_tag_prefix("skills.card.").len(), 4);
        assert_eq!(tree.nodes_by_tag_prefix("skills.bar.").len(), 3);
        // 4 groups x 6 skills
        assert_eq!(tree.nodes_by_tag_prefix("skills.item.").len(), 24);

        assert_eq!(view.plan.descriptors.len(), 7);
        assert_eq!(view.plan.pointer.len(), 1);
    }

    #[test]
    fn test_bar_growth_matches_percentage() {
        let view = SkillsSection.build(&Theme::default());
        let bar0 = view
            .plan
            .descriptors
            .iter()
            .find(|d| matches!(&d.target, Target::Tag(t) if t == "skills.bar.0"))
            .unwrap();
        let track = &bar0.tracks[0];
        assert_eq!(track.property, Property::Grow);
        assert_eq!(track.from, 0.0);
        assert!((track.to - 0.95).abs() < 1e-6);
    }
}
