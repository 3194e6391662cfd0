//! About section
//!
//! Portrait and copy slide in from opposite sides, scrubbed to scroll
//! between "section top meets viewport center" and "section center meets
//! viewport center"; the paragraphs then reveal individually on entry.

use lumen_ui::prelude::*;
use lumen_ui::{MotionPlan, TriggerKind};

use super::{badge, chip, heading};
use crate::section::{Section, SectionView};
use crate::theme::Theme;

const PARAGRAPHS: [&str; 3] = [
    "I'm a Full-Stack Web Developer with a passion for creating exceptional digital \
     experiences. With 5+ years of experience in modern web technologies, I specialize in \
     building scalable, high-performance applications that solve real-world problems.",
    "My approach combines clean code architecture with thoughtful UX design. I'm proficient \
     in React and Next.js for frontend development, with solid backend expertise in Django, \
     Node.js, and database management. I believe in writing maintainable code and creating \
     intuitive user experiences.",
    "Beyond coding, I'm passionate about exploring emerging technologies, contributing to \
     open-source projects, and sharing knowledge with the developer community. When I'm not \
     coding, you'll find me exploring design trends, experimenting with new frameworks, or \
     working on innovative side projects.",
];

const TECH: [&str; 9] = [
    "React",
    "Next.js",
    "Django",
    "TypeScript",
    "Python",
    "PostgreSQL",
    "Node.js",
    "AWS",
    "GraphQL",
];

pub struct AboutSection;

impl Section for AboutSection {
    fn id(&self) -> &'static str {
        "about"
    }

    fn build(&self, theme: &Theme) -> SectionView {
        let portrait = div()
            .tag("about.image")
            .w(480.0)
            .min_h(500.0)
            .rounded(24.0)
            .border(1.0, theme.border)
            .child(
                image(
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600&h=600&fit=crop",
                    "Profile",
                )
                .size(480.0, 500.0),
            );

        let mut content = div().tag("about.content").gap(16.0).flex_grow();
        for (i, paragraph) in PARAGRAPHS.iter().enumerate() {
            content = content.child(
                div()
                    .tag(format!("about.paragraph.{i}"))
                    .child(text(*paragraph).size(17.0).color(theme.muted)),
            );
        }

        let mut tech_grid = div().flex_row().flex_wrap().gap(12.0).mt(16.0);
        for skill in TECH {
            tech_grid = tech_grid.child(chip(theme, skill));
        }
        content = content
            .child(
                div()
                    .mt(16.0)
                    .child(text("TECHNICAL SKILLS").size(13.0).bold().color(theme.primary)),
            )
            .child(tech_grid)
            .child(
                div().mt(16.0).child(
                    div()
                        .nav("projects")
                        .px_pad(32.0)
                        .py_pad(16.0)
                        .rounded(12.0)
                        .bg(theme.primary)
                        .child(text("View My Work").size(16.0).bold().color(Color::WHITE)),
                ),
            );

        let element = div()
            .anchor("about")
            .w_full()
            .px_pad(24.0)
            .py_pad(128.0)
            .child(
                div()
                    .max_w(1280.0)
                    .mx_auto()
                    .gap(64.0)
                    .child(
                        div()
                            .gap(16.0)
                            .child(badge(theme, "About Me"))
                            .child(heading(theme, "Passionate Developer,", "Lifelong Learner")),
                    )
                    .child(div().flex_row().gap(64.0).child(portrait).child(content)),
            );

        SectionView::new(element, self.plan())
    }
}

impl AboutSection {
    fn plan(&self) -> MotionPlan {
        let mut plan = MotionPlan::new();

        let scrub = TriggerKind::ScrubLinked {
            start: Landmark::top_center(),
            end: Landmark::center_center(),
        };
        plan.push(
            AnimationDescriptor::new(Target::Tag("about.image".into()), 1000)
                .track(Property::Opacity, 0.0, 1.0)
                .track(Property::TranslateX, -50.0, 0.0)
                .easing(Easing::Linear)
                .trigger(scrub),
        );
        plan.push(
            AnimationDescriptor::new(Target::Tag("about.content".into()), 1000)
                .track(Property::Opacity, 0.0, 1.0)
                .track(Property::TranslateX, 50.0, 0.0)
                .easing(Easing::Linear)
                .trigger(scrub),
        );

        for i in 0..PARAGRAPHS.len() as u32 {
            plan.push(
                AnimationDescriptor::new(Target::Tag(format!("about.paragraph.{i}")), 800)
                    .track(Property::Opacity, 0.0, 1.0)
                    .track(Property::TranslateY, 20.0, 0.0)
                    .easing(Easing::QuadOut)
                    .delay(i * 200)
                    .on_enter(),
            );
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_ui::{ElementBuilder, HandlerRegistry, LayoutTree};

    #[test]
    fn test_scrub_targets_and_paragraph_stagger() {
        let plan = AboutSection.plan();

        let scrubs: Vec<_> = plan
            .descriptors
            .iter()
            .filter(|d| matches!(d.trigger, TriggerKind::ScrubLinked { .. }))
            .collect();
        assert_eq!(scrubs.len(), 2);

        let paragraphs: Vec<_> = plan
            .descriptors
            .iter()
            .filter(|d| matches!(d.trigger, TriggerKind::OnScrollEnter { .. }))
            .collect();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0].delay_ms, 0);
        assert_eq!(paragraphs[1].delay_ms, 200);
        assert_eq!(paragraphs[2].delay_ms, 400);
    }

    #[test]
    fn test_build_resolves_every_plan_target() {
        let view = AboutSection.build(&Theme::default());
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let root = view.element.build(&mut tree, &mut registry);
        tree.set_root(root);

        for descriptor in &view.plan.descriptors {
            match &descriptor.target {
                Target::Tag(tag) => {
                    assert!(tree.node_by_tag(tag).is_some(), "missing {tag}")
                }
                Target::TagPrefix(prefix) => {
                    assert!(!tree.nodes_by_tag_prefix(prefix).is_empty())
                }
            }
        }
    }
}
