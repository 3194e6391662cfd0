//! Hero section
//!
//! The intro choreography: title, subtitle, and portrait image chain with
//! 600 ms overlaps, the stats row staggers in behind them, and the
//! floating ornaments, portrait float, and scroll indicator oscillate
//! until the section unmounts.

use lumen_ui::prelude::*;
use lumen_ui::{MotionPlan, TriggerKind};

use super::badge;
use crate::fallback;
use crate::section::{Section, SectionView};
use crate::theme::Theme;

pub struct HeroSection;

impl Section for HeroSection {
    fn id(&self) -> &'static str {
        "hero"
    }

    fn build(&self, theme: &Theme) -> SectionView {
        let stats = fallback::hero_stats();

        let mut stats_row = div().flex_row().gap(24.0).mt(32.0);
        for (i, (value, label)) in stats.iter().enumerate() {
            stats_row = stats_row.child(
                div()
                    .tag(format!("hero.stat.{i}"))
                    .gap(4.0)
                    .child(text(*value).size(30.0).bold().color(theme.primary))
                    .child(text(*label).size(14.0).color(theme.muted)),
            );
        }

        let left = div()
            .gap(24.0)
            .flex_grow()
            .child(badge(theme, "Full-Stack Developer & Designer"))
            .child(
                div()
                    .tag("hero.title")
                    .gap(4.0)
                    .child(text("Building Digital").size(64.0).bold().color(theme.text))
                    .child(
                        text("Experiences That Matter")
                            .size(64.0)
                            .bold()
                            .color(theme.accent),
                    ),
            )
            .child(
                div().tag("hero.subtitle").max_w(580.0).child(
                    text(
                        "I craft beautiful, high-performance web applications using modern \
                         technologies. Combining stunning design with powerful functionality \
                         to create unforgettable user experiences.",
                    )
                    .size(18.0)
                    .color(theme.muted),
                ),
            )
            .child(
                div()
                    .flex_row()
                    .gap(16.0)
                    .child(cta_button(theme, "View My Work", "projects"))
                    .child(outline_button(theme, "Learn More", "about")),
            )
            .child(stats_row);

        let showcase = div()
            .tag("hero.image")
            .w(420.0)
            .rounded(16.0)
            .border(1.0, theme.primary_border())
            .child(
                image(
                    "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=600&h=600&fit=crop",
                    "Developer workspace",
                )
                .size(420.0, 420.0),
            );

        let element = div()
            .anchor("hero")
            .w_full()
            .min_h(900.0)
            .px_pad(24.0)
            .py_pad(120.0)
            .child(ornament(theme, 0, 64.0))
            .child(ornament(theme, 1, 48.0))
            .child(ornament(theme, 2, 56.0))
            .child(
                div()
                    .flex_row()
                    .gap(48.0)
                    .max_w(1280.0)
                    .mx_auto()
                    .child(left)
                    .child(showcase),
            )
            .child(
                div()
                    .tag("hero.scroll-indicator")
                    .items_center()
                    .gap(8.0)
                    .mt(48.0)
                    .mx_auto()
                    .child(text("SCROLL TO EXPLORE").size(12.0).color(theme.muted)),
            );

        SectionView::new(element, self.plan())
    }
}

impl HeroSection {
    fn plan(&self) -> MotionPlan {
        let mut plan = MotionPlan::new();

        // Intro chain: title -> subtitle -> image, each overlapping the
        // previous step by 600ms
        plan.push(
            AnimationDescriptor::new(Target::Tag("hero.title".into()), 1000)
                .track(Property::Opacity, 0.0, 1.0)
                .track(Property::TranslateY, 60.0, 0.0)
                .track(Property::Scale, 0.95, 1.0)
                .easing(Easing::CubicOut)
                .trigger(TriggerKind::Immediate { overlap_ms: 0 }),
        );
        plan.push(
            AnimationDescriptor::new(Target::Tag("hero.subtitle".into()), 800)
                .track(Property::Opacity, 0.0, 1.0)
                .track(Property::TranslateY, 40.0, 0.0)
                .easing(Easing::QuadOut)
                .trigger(TriggerKind::Immediate { overlap_ms: 600 }),
        );
        plan.push(
            AnimationDescriptor::new(Target::Tag("hero.image".into()), 1000)
                .track(Property::Opacity, 0.0, 1.0)
                .track(Property::Scale, 0.9, 1.0)
                .track(Property::RotateY, 20.0, 0.0)
                .easing(Easing::BackOut)
                .trigger(TriggerKind::Immediate { overlap_ms: 600 }),
        );
        // Stats row: same chain position, 150ms apart
        for i in 0..3 {
            let overlap = if i == 0 { 400 } else { 600 };
            let delay = if i == 0 { 0 } else { 150 };
            plan.push(
                AnimationDescriptor::new(Target::Tag(format!("hero.stat.{i}")), 600)
                    .track(Property::Opacity, 0.0, 1.0)
                    .track(Property::TranslateX, -30.0, 0.0)
                    .easing(Easing::QuadOut)
                    .delay(delay)
                    .trigger(TriggerKind::Immediate {
                        overlap_ms: overlap,
                    }),
            );
        }

        // Ambient float on the portrait
        plan.push(
            AnimationDescriptor::new(Target::Tag("hero.image".into()), 3000)
                .track(Property::TranslateY, 0.0, -15.0)
                .easing(Easing::SineInOut)
                .trigger(TriggerKind::Ambient)
                .repeat(Repeat::infinite_yoyo()),
        );
        // Floating ornaments drift on alternating diagonals, each slightly
        // slower and later than the last
        for i in 0..3u32 {
            let (dy, dx) = if i % 2 == 0 { (-30.0, 20.0) } else { (30.0, -20.0) };
            plan.push(
                AnimationDescriptor::new(Target::Tag(format!("hero.float.{i}")), 4000 + i * 500)
                    .track(Property::TranslateY, 0.0, dy)
                    .track(Property::TranslateX, 0.0, dx)
                    .easing(Easing::SineInOut)
                    .delay(i * 100)
                    .trigger(TriggerKind::Ambient)
                    .repeat(Repeat::infinite_yoyo()),
            );
        }
        // Pulsing scroll indicator
        plan.push(
            AnimationDescriptor::new(Target::Tag("hero.scroll-indicator".into()), 1500)
                .track(Property::TranslateY, 0.0, 12.0)
                .easing(Easing::SineInOut)
                .trigger(TriggerKind::Ambient)
                .repeat(Repeat::infinite_yoyo()),
        );

        plan
    }
}

fn cta_button(theme: &Theme, label: &str, target: &str) -> lumen_ui::Div {
    div()
        .nav(target)
        .px_pad(32.0)
        .py_pad(16.0)
        .rounded(12.0)
        .bg(theme.primary)
        .child(text(label).size(16.0).bold().color(Color::WHITE))
}

fn outline_button(theme: &Theme, label: &str, target: &str) -> lumen_ui::Div {
    div()
        .nav(target)
        .px_pad(32.0)
        .py_pad(16.0)
        .rounded(12.0)
        .border(2.0, theme.primary)
        .child(text(label).size(16.0).bold().color(theme.primary))
}

fn ornament(theme: &Theme, index: u32, size: f32) -> lumen_ui::Div {
    let positions = [(80.0, 1100.0), (320.0, 40.0), (640.0, 900.0)];
    let (top, left) = positions[index as usize % positions.len()];
    div()
        .tag(format!("hero.float.{index}"))
        .absolute()
        .top(top)
        .left(left)
        .square(size)
        .rounded(if index % 2 == 0 { 12.0 } else { 999.0 })
        .border(1.0, theme.primary_border())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_ui::{ElementBuilder, HandlerRegistry, LayoutTree};

    #[test]
    fn test_builds_all_motion_targets() {
        let view = HeroSection.build(&Theme::default());
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let root = view.element.build(&mut tree, &mut registry);
        tree.set_root(root);

        for tag in [
            "hero.title",
            "hero.subtitle",
            "hero.image",
            "hero.stat.0",
            "hero.stat.2",
            "hero.float.0",
            "hero.float.2",
            "hero.scroll-indicator",
        ] {
            assert!(tree.node_by_tag(tag).is_some(), "missing {tag}");
        }
        assert!(tree.node_by_anchor("hero").is_some());
    }

    #[test]
    fn test_plan_has_intro_chain_and_ambient_loops() {
        let plan = HeroSection.plan();
        let immediates = plan
            .descriptors
            .iter()
            .filter(|d| matches!(d.trigger, TriggerKind::Immediate { .. }))
            .count();
        let ambients = plan
            .descriptors
            .iter()
            .filter(|d| matches!(d.trigger, TriggerKind::Ambient))
            .count();
        assert_eq!(immediates, 6); // title, subtitle, image, 3 stats
        assert_eq!(ambients, 5); // portrait float, 3 ornaments, indicator

        // Every ambient loop oscillates forever
        for descriptor in plan
            .descriptors
            .iter()
            .filter(|d| matches!(d.trigger, TriggerKind::Ambient))
        {
            assert_eq!(descriptor.repeat.count, -1);
            assert!(descriptor.repeat.yoyo);
        }
    }
}
