//! Education section
//!
//! Card list; each card rises in when it reaches the 80% line, 200 ms
//! after the previous one.

use lumen_ui::prelude::*;
use lumen_ui::MotionPlan;

use super::{card, heading};
use crate::fallback;
use crate::section::{Section, SectionView};
use crate::theme::Theme;

pub struct EducationSection;

impl Section for EducationSection {
    fn id(&self) -> &'static str {
        "education"
    }

    fn build(&self, theme: &Theme) -> SectionView {
        let entries = fallback::education();

        let mut list = div().gap(24.0);
        for (i, entry) in entries.iter().enumerate() {
            list = list.child(
                card(theme)
                    .tag(format!("education.item.{i}"))
                    .gap(8.0)
                    .child(
                        div()
                            .flex_row()
                            .justify_between()
                            .child(text(&entry.degree).size(20.0).bold().color(theme.text))
                            .child(
                                div()
                                    .px_pad(12.0)
                                    .py_pad(4.0)
                                    .rounded(999.0)
                                    .bg(theme.primary_soft())
                                    .child(text(&entry.year).size(13.0).color(theme.primary)),
                            ),
                    )
                    .child(text(&entry.institution).size(16.0).bold().color(theme.primary))
                    .child(text(&entry.description).size(15.0).color(theme.muted))
                    .child(
                        div()
                            .px_pad(12.0)
                            .py_pad(4.0)
                            .rounded(8.0)
                            .bg(theme.accent.with_alpha(0.1))
                            .child(text(&entry.gpa).size(13.0).color(theme.accent)),
                    ),
            );
        }

        let element = div()
            .anchor("education")
            .w_full()
            .px_pad(24.0)
            .py_pad(80.0)
            .bg(theme.surface.with_alpha(0.3))
            .child(
                div()
                    .max_w(900.0)
                    .mx_auto()
                    .gap(48.0)
                    .child(heading(theme, "Education", ""))
                    .child(list),
            );

        SectionView::new(element, Self::plan(entries.len()))
    }
}

impl EducationSection {
    fn plan(count: usize) -> MotionPlan {
        let mut plan = MotionPlan::new();
        for i in 0..count as u32 {
            plan.push(
                AnimationDescriptor::new(Target::Tag(format!("education.item.{i}")), 800)
                    .track(Property::Opacity, 0.0, 1.0)
                    .track(Property::TranslateY, 50.0, 0.0)
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
    fn test_one_enter_descriptor_per_entry() {
        let view = EducationSection.build(&Theme::default());
        assert_eq!(view.plan.descriptors.len(), 3);
        assert_eq!(view.plan.descriptors[2].delay_ms, 400);

        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let root = view.element.build(&mut tree, &mut registry);
        tree.set_root(root);
        assert_eq!(tree.nodes_by_tag_prefix("education.item.").len(), 3);
    }
}
