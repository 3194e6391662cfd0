//! Text element builder

use taffy::Style;

use crate::color::Color;
use crate::element::{ElementBuilder, RenderProps, TextProps};
use crate::event_handler::HandlerRegistry;
use crate::tree::{LayoutNodeId, LayoutTree};

/// Create a text element
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

/// A text leaf
pub struct Text {
    content: String,
    size: f32,
    bold: bool,
    color: Option<Color>,
    tag: Option<String>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: 16.0,
            bold: false,
            color: None,
            tag: None,
        }
    }

    pub fn size(mut self, px: f32) -> Self {
        self.size = px;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

impl ElementBuilder for Text {
    fn build(&self, tree: &mut LayoutTree, _handlers: &mut HandlerRegistry) -> LayoutNodeId {
        // Line-height sizing keeps scroll-trigger geometry sane without a
        // text measurer in the loop
        let style = Style {
            size: taffy::Size {
                width: taffy::Dimension::Auto,
                height: taffy::Dimension::Length(self.size * 1.4),
            },
            ..Style::default()
        };
        let props = RenderProps {
            opacity: 1.0,
            text: Some(TextProps {
                content: self.content.clone(),
                size: self.size,
                bold: self.bold,
                color: self.color,
            }),
            ..RenderProps::default()
        };
        let node = tree.create_node(style, props);
        if let Some(ref tag) = self.tag {
            tree.set_tag(node, tag.clone());
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_props_carry_content() {
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let node = text("Building Digital")
            .size(48.0)
            .bold()
            .build(&mut tree, &mut registry);

        let props = tree.props(node).unwrap().text.clone().unwrap();
        assert_eq!(props.content, "Building Digital");
        assert_eq!(props.size, 48.0);
        assert!(props.bold);
    }
}
