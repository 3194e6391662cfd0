//! Lumen UI layer
//!
//! Declarative element builders over a taffy flexbox tree, event handler
//! storage and pointer routing, page scroll physics, and the scroll-driven
//! animation orchestration that ties them together.
//!
//! The orchestration model is deliberately framework-agnostic: a section
//! describes its motion as data (a [`MotionPlan`] of
//! [`AnimationDescriptor`]s), and attaching the section turns that plan
//! into live animations and listeners registered under one
//! [`AnimationScope`]. Detaching ends the scope, which cancels every
//! animation and removes every listener it registered - mounting then
//! unmounting leaves nothing behind.

pub mod color;
pub mod div;
pub mod element;
pub mod event_handler;
pub mod image;
pub mod orchestrator;
pub mod scope;
pub mod scroll;
pub mod text;
pub mod tree;
pub mod trigger;

pub use color::Color;
pub use div::{div, Div};
pub use element::{ElementBuilder, ImageProps, RenderProps, TextProps};
pub use event_handler::{
    event_types, EventContext, EventHandlers, EventType, HandlerId, HandlerRegistry,
    PointerRouter,
};
pub use image::{image, Image};
pub use orchestrator::{
    AnimationDescriptor, MotionPlan, NodeMotion, PointerInteraction, Property, PropertyTrack,
    Repeat, SectionMotion, Target, TriggerKind,
};
pub use scope::AnimationScope;
pub use scroll::{PageScroll, ScrollDirection, Viewport};
pub use text::{text, Text};
pub use tree::{LayoutNodeId, LayoutTree, Rect};
pub use trigger::{ElementEdge, Landmark, ScrubRange};

/// Common imports for building sections
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::div::{div, Div};
    pub use crate::element::ElementBuilder;
    pub use crate::image::image;
    pub use crate::orchestrator::{
        AnimationDescriptor, MotionPlan, PointerInteraction, Property, PropertyTrack, Repeat,
        Target, TriggerKind,
    };
    pub use crate::text::text;
    pub use crate::trigger::Landmark;
    pub use lumen_animation::Easing;
}
