//! Header bar
//!
//! Logo and anchor navigation. Rendered as the first section; pinning it
//! over the page while scrolling is the renderer's concern.

use lumen_ui::prelude::*;
use lumen_ui::MotionPlan;

use crate::section::{Section, SectionView};
use crate::theme::Theme;

const LINKS: [(&str, &str); 5] = [
    ("About", "about"),
    ("Education", "education"),
    ("Skills", "skills"),
    ("Experience", "experience"),
    ("Projects", "projects"),
];

pub struct HeaderSection;

impl Section for HeaderSection {
    fn id(&self) -> &'static str {
        "header"
    }

    fn build(&self, theme: &Theme) -> SectionView {
        let logo = div()
            .flex_row()
            .items_center()
            .gap(8.0)
            .child(
                div()
                    .p(8.0)
                    .rounded(8.0)
                    .bg(theme.primary)
                    .child(text("{ }").size(14.0).bold().color(Color::WHITE)),
            )
            .child(text("Portfolio").size(18.0).bold().color(theme.primary));

        let mut nav = div().flex_row().gap(4.0);
        for (label, target) in LINKS {
            nav = nav.child(
                div()
                    .nav(target)
                    .px_pad(16.0)
                    .py_pad(8.0)
                    .child(text(label).size(14.0).color(theme.text)),
            );
        }

        let element = div()
            .anchor("header")
            .w_full()
            .px_pad(24.0)
            .py_pad(16.0)
            .bg(theme.background.with_alpha(0.7))
            .border(1.0, theme.border.with_alpha(0.5))
            .child(
                div()
                    .max_w(1280.0)
                    .mx_auto()
                    .w_full()
                    .flex_row()
                    .justify_between()
                    .items_center()
                    .child(logo)
                    .child(nav),
            );

        SectionView::new(element, MotionPlan::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_ui::{ElementBuilder, HandlerRegistry, LayoutTree};

    #[test]
    fn test_nav_links_cover_all_sections() {
        let view = HeaderSection.build(&Theme::default());
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let root = view.element.build(&mut tree, &mut registry);
        tree.set_root(root);

        let targets: Vec<String> = tree
            .nav_sources()
            .into_iter()
            .map(|(_, target)| target)
            .collect();
        for expected in ["about", "education", "skills", "experience", "projects"] {
            assert!(targets.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(view.plan.is_empty());
    }
}
