//! Lumen Animation System
//!
//! Keyframe animations, timeline orchestration, and spring physics for the
//! portfolio runtime.
//!
//! # Features
//!
//! - **Keyframe Animations**: Timed sequences with per-segment easing,
//!   optional delay, finite or infinite iteration, and yoyo playback
//! - **Timelines**: Orchestrate multiple value tracks with offsets,
//!   including negative overlaps for staggered intro chains
//! - **Spring Physics**: Damped springs for pointer micro-interactions and
//!   smooth anchor scrolling
//! - **Frame-Driven Scheduler**: All animations advance only when the
//!   application frame loop calls `tick` - there is no background thread
//! - **RAII Wrappers**: `AnimatedValue`, `AnimatedKeyframe`, and
//!   `AnimatedTimeline` unregister themselves from the scheduler on drop

pub mod easing;
pub mod keyframe;
pub mod scheduler;
pub mod spring;
pub mod timeline;

pub use easing::Easing;
pub use keyframe::{Keyframe, KeyframeAnimation};
pub use scheduler::{
    AnimatedKeyframe, AnimatedTimeline, AnimatedValue, AnimationScheduler, KeyframeId,
    SchedulerHandle, SpringId, TimelineId,
};
pub use spring::{Spring, SpringConfig};
pub use timeline::{Timeline, TimelineEntryId};
