//! Container element builder
//!
//! Tailwind-flavored builder over a taffy flexbox style, in the shape the
//! section renderers compose: `div().flex_col().gap(24.0).child(...)`.

use std::rc::Rc;

use taffy::{
    AlignItems, Dimension, Display, FlexDirection, FlexWrap, JustifyContent, LengthPercentage,
    LengthPercentageAuto, Position, Size, Style,
};

use crate::color::Color;
use crate::element::{ElementBuilder, RenderProps};
use crate::event_handler::{event_types, EventCallback, EventContext, EventType, HandlerRegistry};
use crate::tree::{LayoutNodeId, LayoutTree};

/// Create a container element
pub fn div() -> Div {
    Div::new()
}

/// A flexbox container
pub struct Div {
    style: Style,
    props: RenderProps,
    tag: Option<String>,
    children: Vec<Box<dyn ElementBuilder>>,
    handlers: Vec<(EventType, EventCallback)>,
}

impl Default for Div {
    fn default() -> Self {
        Self::new()
    }
}

impl Div {
    pub fn new() -> Self {
        Self {
            style: Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..Style::default()
            },
            props: RenderProps {
                opacity: 1.0,
                ..RenderProps::default()
            },
            tag: None,
            children: Vec::new(),
            handlers: Vec::new(),
        }
    }

    // =========================================================================
    // Flex layout
    // =========================================================================

    pub fn flex_row(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Row;
        self
    }

    pub fn flex_col(mut self) -> Self {
        self.style.flex_direction = FlexDirection::Column;
        self
    }

    pub fn flex_wrap(mut self) -> Self {
        self.style.flex_wrap = FlexWrap::Wrap;
        self
    }

    pub fn flex_grow(mut self) -> Self {
        self.style.flex_grow = 1.0;
        self
    }

    pub fn items_center(mut self) -> Self {
        self.style.align_items = Some(AlignItems::Center);
        self
    }

    pub fn items_start(mut self) -> Self {
        self.style.align_items = Some(AlignItems::FlexStart);
        self
    }

    pub fn justify_center(mut self) -> Self {
        self.style.justify_content = Some(JustifyContent::Center);
        self
    }

    pub fn justify_between(mut self) -> Self {
        self.style.justify_content = Some(JustifyContent::SpaceBetween);
        self
    }

    /// Gap between children in pixels
    pub fn gap(mut self, px: f32) -> Self {
        self.style.gap = Size {
            width: LengthPercentage::Length(px),
            height: LengthPercentage::Length(px),
        };
        self
    }

    // =========================================================================
    // Size
    // =========================================================================

    pub fn w(mut self, px: f32) -> Self {
        self.style.size.width = Dimension::Length(px);
        self
    }

    pub fn h(mut self, px: f32) -> Self {
        self.style.size.height = Dimension::Length(px);
        self
    }

    pub fn w_full(mut self) -> Self {
        self.style.size.width = Dimension::Percent(1.0);
        self
    }

    pub fn h_full(mut self) -> Self {
        self.style.size.height = Dimension::Percent(1.0);
        self
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.style.size = Size {
            width: Dimension::Length(w),
            height: Dimension::Length(h),
        };
        self
    }

    pub fn square(self, px: f32) -> Self {
        self.size(px, px)
    }

    pub fn min_h(mut self, px: f32) -> Self {
        self.style.min_size.height = Dimension::Length(px);
        self
    }

    pub fn max_w(mut self, px: f32) -> Self {
        self.style.max_size.width = Dimension::Length(px);
        self
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    /// Padding on all sides, in pixels
    pub fn p(mut self, px: f32) -> Self {
        self.style.padding = taffy::Rect {
            left: LengthPercentage::Length(px),
            right: LengthPercentage::Length(px),
            top: LengthPercentage::Length(px),
            bottom: LengthPercentage::Length(px),
        };
        self
    }

    /// Horizontal padding
    pub fn px_pad(mut self, px: f32) -> Self {
        self.style.padding.left = LengthPercentage::Length(px);
        self.style.padding.right = LengthPercentage::Length(px);
        self
    }

    /// Vertical padding
    pub fn py_pad(mut self, px: f32) -> Self {
        self.style.padding.top = LengthPercentage::Length(px);
        self.style.padding.bottom = LengthPercentage::Length(px);
        self
    }

    /// Center horizontally with auto margins
    pub fn mx_auto(mut self) -> Self {
        self.style.margin.left = LengthPercentageAuto::Auto;
        self.style.margin.right = LengthPercentageAuto::Auto;
        self
    }

    pub fn mt(mut self, px: f32) -> Self {
        self.style.margin.top = LengthPercentageAuto::Length(px);
        self
    }

    pub fn mb(mut self, px: f32) -> Self {
        self.style.margin.bottom = LengthPercentageAuto::Length(px);
        self
    }

    // =========================================================================
    // Position
    // =========================================================================

    pub fn absolute(mut self) -> Self {
        self.style.position = Position::Absolute;
        self
    }

    pub fn top(mut self, px: f32) -> Self {
        self.style.inset.top = LengthPercentageAuto::Length(px);
        self
    }

    pub fn bottom(mut self, px: f32) -> Self {
        self.style.inset.bottom = LengthPercentageAuto::Length(px);
        self
    }

    pub fn left(mut self, px: f32) -> Self {
        self.style.inset.left = LengthPercentageAuto::Length(px);
        self
    }

    pub fn right(mut self, px: f32) -> Self {
        self.style.inset.right = LengthPercentageAuto::Length(px);
        self
    }

    // =========================================================================
    // Visual
    // =========================================================================

    pub fn bg(mut self, color: Color) -> Self {
        self.props.background = Some(color);
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.props.corner_radius = radius;
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.props.border = Some((width, color));
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.props.opacity = opacity;
        self
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Anchor id for in-page navigation
    pub fn anchor(mut self, id: impl Into<String>) -> Self {
        self.props.anchor = Some(id.into());
        self
    }

    /// Navigate to an in-page anchor when clicked
    pub fn nav(mut self, anchor: impl Into<String>) -> Self {
        self.props.nav_target = Some(anchor.into());
        self
    }

    /// External link target
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.props.link = Some(url.into());
        self
    }

    /// Tag for motion-plan targeting (section-local)
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers.push((event_types::CLICK, Rc::new(handler)));
        self
    }

    pub fn on_pointer_enter<F>(mut self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers
            .push((event_types::POINTER_ENTER, Rc::new(handler)));
        self
    }

    pub fn on_pointer_leave<F>(mut self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers
            .push((event_types::POINTER_LEAVE, Rc::new(handler)));
        self
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: ElementBuilder + 'static,
    {
        self.children
            .extend(children.into_iter().map(|c| Box::new(c) as Box<dyn ElementBuilder>));
        self
    }
}

impl ElementBuilder for Div {
    fn build(&self, tree: &mut LayoutTree, handlers: &mut HandlerRegistry) -> LayoutNodeId {
        let node = tree.create_node(self.style.clone(), self.props.clone());
        if let Some(ref tag) = self.tag {
            tree.set_tag(node, tag.clone());
        }
        for (event_type, callback) in &self.handlers {
            let callback = Rc::clone(callback);
            handlers.register(node, *event_type, move |ctx| callback(ctx));
        }
        for child in &self.children {
            let child_node = child.build(tree, handlers);
            tree.add_child(node, child_node);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_handler::event_types;
    use std::cell::Cell;

    #[test]
    fn test_build_registers_tags_and_handlers() {
        let clicked = Rc::new(Cell::new(false));
        let c = Rc::clone(&clicked);
        let ui = div()
            .tag("outer")
            .on_click(move |_| c.set(true))
            .child(div().tag("inner").h(10.0));

        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let node = ui.build(&mut tree, &mut registry);

        assert_eq!(tree.node_by_tag("outer"), Some(node));
        assert!(tree.node_by_tag("inner").is_some());
        assert_eq!(tree.children(node).len(), 1);
        assert!(registry.has_handler(node, event_types::CLICK));

        registry.dispatch(&EventContext::new(event_types::CLICK, node));
        assert!(clicked.get());
    }

    #[test]
    fn test_layout_props_carry_through() {
        let ui = div()
            .w(200.0)
            .h(100.0)
            .bg(Color::BLACK)
            .rounded(8.0)
            .anchor("projects");

        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let node = ui.build(&mut tree, &mut registry);
        tree.set_root(node);
        tree.compute_layout(1280.0);

        let rect = tree.rect(node).unwrap();
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 100.0);

        let props = tree.props(node).unwrap();
        assert_eq!(props.background, Some(Color::BLACK));
        assert_eq!(props.corner_radius, 8.0);
        assert_eq!(props.anchor.as_deref(), Some("projects"));
    }
}
