//! Footer section
//!
//! Navigation and social links plus the scroll-to-top control. Social
//! icons lift on hover; the top button glides the page back to the hero.

use lumen_ui::prelude::*;
use lumen_ui::{Div, MotionPlan};

use crate::section::{Section, SectionView};
use crate::theme::Theme;

const NAVIGATION: [(&str, &str); 4] = [
    ("About", "about"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Contact", "contact"),
];

const SOCIAL: [(&str, &str); 4] = [
    ("GitHub", "#"),
    ("LinkedIn", "#"),
    ("Twitter", "#"),
    ("Email", "mailto:hello@example.com"),
];

pub struct FooterSection;

impl Section for FooterSection {
    fn id(&self) -> &'static str {
        "footer"
    }

    fn build(&self, theme: &Theme) -> SectionView {
        let brand = div()
            .gap(16.0)
            .max_w(300.0)
            .child(
                div()
                    .flex_row()
                    .items_center()
                    .gap(8.0)
                    .child(
                        div()
                            .p(8.0)
                            .rounded(8.0)
                            .bg(theme.primary)
                            .child(text("DEV").size(14.0).bold().color(Color::WHITE)),
                    )
                    .child(text("Portfolio").size(18.0).bold().color(theme.text)),
            )
            .child(
                text(
                    "Full-stack developer crafting beautiful, high-performance web \
                     experiences with modern technologies.",
                )
                .size(14.0)
                .color(theme.muted),
            );

        let mut nav_links = div().gap(12.0);
        for (label, target) in NAVIGATION {
            nav_links = nav_links.child(
                div()
                    .nav(target)
                    .child(text(label).size(14.0).color(theme.muted)),
            );
        }
        let navigation = div()
            .gap(24.0)
            .child(text("Navigation").size(16.0).bold().color(theme.text))
            .child(nav_links);

        let mut socials = div().flex_row().gap(16.0);
        for (i, (label, url)) in SOCIAL.iter().enumerate() {
            socials = socials.child(
                div()
                    .tag(format!("footer.social.{i}"))
                    .link(*url)
                    .p(12.0)
                    .rounded(8.0)
                    .bg(theme.surface)
                    .border(1.0, theme.border)
                    .child(text(*label).size(14.0).color(theme.text)),
            );
        }

        let bottom = div()
            .flex_row()
            .justify_between()
            .items_center()
            .mt(48.0)
            .child(socials)
            .child(
                text("© 2026 Portfolio. Built with Rust.")
                    .size(13.0)
                    .color(theme.muted),
            )
            .child(scroll_top_button(theme));

        let element = div()
            .anchor("footer")
            .w_full()
            .px_pad(24.0)
            .py_pad(80.0)
            .border(1.0, theme.border)
            .child(
                div()
                    .max_w(1280.0)
                    .mx_auto()
                    .gap(48.0)
                    .child(div().flex_row().gap(48.0).child(brand).child(navigation))
                    .child(bottom),
            );

        SectionView::new(element, Self::plan())
    }
}

impl FooterSection {
    fn plan() -> MotionPlan {
        let mut plan = MotionPlan::new();
        plan.pointer(PointerInteraction::HoverLift {
            target: Target::TagPrefix("footer.social.".into()),
            lift_px: 5.0,
        });
        plan
    }
}

fn scroll_top_button(theme: &Theme) -> Div {
    div()
        .tag("footer.top")
        .nav("hero")
        .p(12.0)
        .rounded(8.0)
        .bg(theme.surface)
        .border(1.0, theme.border)
        .child(text("Top").size(14.0).bold().color(theme.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_ui::{ElementBuilder, HandlerRegistry, LayoutTree};

    #[test]
    fn test_social_lift_and_scroll_top_nav() {
        let view = FooterSection.build(&Theme::default());
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let root = view.element.build(&mut tree, &mut registry);
        tree.set_root(root);

        assert_eq!(tree.nodes_by_tag_prefix("footer.social.").len(), 4);
        assert_eq!(view.plan.pointer.len(), 1);

        // The top button navigates back to the hero anchor
        let top = tree.node_by_tag("footer.top").unwrap();
        assert_eq!(tree.props(top).unwrap().nav_target.as_deref(), Some("hero"));
        assert!(tree
            .nav_sources()
            .iter()
            .any(|(_, target)| target == "projects"));
    }
}
