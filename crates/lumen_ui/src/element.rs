//! Element builder trait and render props

use crate::color::Color;
use crate::event_handler::HandlerRegistry;
use crate::tree::{LayoutNodeId, LayoutTree};

/// Visual properties carried by a node into the render tree
///
/// The runtime does not rasterize; props are the declarative surface a
/// platform renderer (or a test) reads back.
#[derive(Clone, Debug, Default)]
pub struct RenderProps {
    pub background: Option<Color>,
    pub border: Option<(f32, Color)>,
    pub corner_radius: f32,
    pub opacity: f32,
    pub text: Option<TextProps>,
    pub image: Option<ImageProps>,
    /// Anchor id for in-page navigation (`#projects` etc.)
    pub anchor: Option<String>,
    /// Anchor this element navigates to when clicked
    pub nav_target: Option<String>,
    /// External link this element points at
    pub link: Option<String>,
}

/// Text content and styling
#[derive(Clone, Debug)]
pub struct TextProps {
    pub content: String,
    pub size: f32,
    pub bold: bool,
    pub color: Option<Color>,
}

/// A referenced image (hosting is external; only the source travels)
#[derive(Clone, Debug)]
pub struct ImageProps {
    pub url: String,
    pub alt: String,
}

/// Anything that can build itself into the layout tree
///
/// `build` creates this element's node (registering any event handlers),
/// builds its children, and returns the node id.
pub trait ElementBuilder {
    fn build(&self, tree: &mut LayoutTree, handlers: &mut HandlerRegistry) -> LayoutNodeId;
}

impl ElementBuilder for Box<dyn ElementBuilder> {
    fn build(&self, tree: &mut LayoutTree, handlers: &mut HandlerRegistry) -> LayoutNodeId {
        self.as_ref().build(tree, handlers)
    }
}
