//! Image element builder
//!
//! Images are references: only the source URL and alt text travel through
//! the tree. Hosting and decoding are a platform concern.

use taffy::{Dimension, Size, Style};

use crate::element::{ElementBuilder, ImageProps, RenderProps};
use crate::event_handler::HandlerRegistry;
use crate::tree::{LayoutNodeId, LayoutTree};

/// Create an image element
pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Image {
    Image::new(url, alt)
}

/// An image leaf
pub struct Image {
    url: String,
    alt: String,
    width: Option<f32>,
    height: Option<f32>,
    tag: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            width: None,
            height: None,
            tag: None,
        }
    }

    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.width = Some(w);
        self.height = Some(h);
        self
    }

    pub fn h(mut self, px: f32) -> Self {
        self.height = Some(px);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

impl ElementBuilder for Image {
    fn build(&self, tree: &mut LayoutTree, _handlers: &mut HandlerRegistry) -> LayoutNodeId {
        let style = Style {
            size: Size {
                width: self.width.map(Dimension::Length).unwrap_or(Dimension::Percent(1.0)),
                height: self.height.map(Dimension::Length).unwrap_or(Dimension::Auto),
            },
            ..Style::default()
        };
        let props = RenderProps {
            opacity: 1.0,
            image: Some(ImageProps {
                url: self.url.clone(),
                alt: self.alt.clone(),
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
    fn test_image_props_carry_source() {
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let node = image("https://example.com/a.jpg", "workspace")
            .size(600.0, 600.0)
            .build(&mut tree, &mut registry);

        let props = tree.props(node).unwrap().image.clone().unwrap();
        assert_eq!(props.url, "https://example.com/a.jpg");
        assert_eq!(props.alt, "workspace");
    }
}
