//! Scroll-driven animation orchestration
//!
//! A section describes its motion as a [`MotionPlan`]: a list of
//! [`AnimationDescriptor`]s (what moves, how, and on which trigger) plus
//! pointer micro-interactions. Attaching a plan resolves its targets
//! against the section's built subtree and registers everything under one
//! [`AnimationScope`]:
//!
//! - **Immediate** descriptors chain onto the section's intro timeline,
//!   each optionally overlapping the previous step by a fixed negative
//!   offset; the chain plays once at attach.
//! - **OnScrollEnter** descriptors register dormant keyframes that start
//!   the first time the target's top edge crosses its landmark while
//!   scrolling down, and never replay.
//! - **ScrubLinked** descriptors register never-started timelines whose
//!   clock is driven directly from scroll progress, so they reverse
//!   exactly as the user scrolls back up.
//! - **Ambient** descriptors start looping immediately and oscillate until
//!   the scope ends.
//!
//! Detaching ends the scope: every animation is cancelled and every
//! listener removed. When a section's data changes shape (projects
//! settling over a fallback render), the caller detaches and re-attaches
//! rather than patching bindings - rebuilding the scope is what guarantees
//! no duplicate bindings.

use std::collections::HashMap;

use lumen_animation::{
    Easing, KeyframeAnimation, KeyframeId, SchedulerHandle, Spring, SpringConfig, SpringId,
    Timeline, TimelineEntryId, TimelineId,
};

use crate::event_handler::{event_types, HandlerRegistry};
use crate::scope::AnimationScope;
use crate::scroll::{ScrollDirection, Viewport};
use crate::tree::{LayoutNodeId, LayoutTree};
use crate::trigger::{Landmark, ScrubRange};

// ============================================================================
// Descriptor model
// ============================================================================

/// Which elements a descriptor animates, by section-local tag
#[derive(Clone, Debug)]
pub enum Target {
    /// A single tagged element
    Tag(String),
    /// Every element whose tag starts with the prefix, in document order
    TagPrefix(String),
}

/// An animatable property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    /// In-plane rotation, degrees (spinners)
    Rotate,
    RotateX,
    RotateY,
    /// Vertical growth factor, 0.0 collapsed to 1.0 full (timeline rule)
    Grow,
}

/// One property's from/to values within a descriptor
#[derive(Clone, Copy, Debug)]
pub struct PropertyTrack {
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

/// Repeat behavior
#[derive(Clone, Copy, Debug)]
pub struct Repeat {
    /// Iteration count; -1 is infinite
    pub count: i32,
    /// Reverse direction each iteration
    pub yoyo: bool,
}

impl Default for Repeat {
    fn default() -> Self {
        Self {
            count: 1,
            yoyo: false,
        }
    }
}

impl Repeat {
    pub fn infinite_yoyo() -> Self {
        Self {
            count: -1,
            yoyo: true,
        }
    }
}

/// When a descriptor's animation runs
#[derive(Clone, Copy, Debug)]
pub enum TriggerKind {
    /// Plays once at attach, chained after the previous immediate step,
    /// starting `overlap_ms` before that step finishes
    Immediate { overlap_ms: u32 },
    /// Plays once when the target's landmark is crossed scrolling down
    OnScrollEnter { landmark: Landmark },
    /// Progress is the clamped linear function of scroll offset between
    /// the two landmarks; reversible
    ScrubLinked { start: Landmark, end: Landmark },
    /// Starts at attach and runs per `repeat` until scope teardown
    Ambient,
}

/// A complete animation declaration bound to a target
#[derive(Clone, Debug)]
pub struct AnimationDescriptor {
    pub target: Target,
    pub tracks: Vec<PropertyTrack>,
    pub duration_ms: u32,
    pub easing: Easing,
    pub delay_ms: u32,
    pub trigger: TriggerKind,
    pub repeat: Repeat,
}

impl AnimationDescriptor {
    pub fn new(target: Target, duration_ms: u32) -> Self {
        Self {
            target,
            tracks: Vec::new(),
            duration_ms,
            easing: Easing::QuadOut,
            delay_ms: 0,
            trigger: TriggerKind::Immediate { overlap_ms: 0 },
            repeat: Repeat::default(),
        }
    }

    pub fn track(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(PropertyTrack { property, from, to });
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn trigger(mut self, trigger: TriggerKind) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Shorthand for the default entrance trigger ("top 80%")
    pub fn on_enter(self) -> Self {
        self.trigger(TriggerKind::OnScrollEnter {
            landmark: Landmark::top_at(0.8),
        })
    }
}

/// Pointer-driven micro-interactions, scoped like everything else
#[derive(Clone, Debug)]
pub enum PointerInteraction {
    /// Rotate toward the cursor, proportional to its offset from the
    /// element center, clamped to `max_degrees`
    Tilt { target: Target, max_degrees: f32 },
    /// Lift (negative y translation) while hovered
    HoverLift { target: Target, lift_px: f32 },
}

/// Everything a section wants animated
#[derive(Clone, Debug, Default)]
pub struct MotionPlan {
    pub descriptors: Vec<AnimationDescriptor>,
    pub pointer: Vec<PointerInteraction>,
}

impl MotionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: AnimationDescriptor) {
        self.descriptors.push(descriptor);
    }

    pub fn pointer(&mut self, interaction: PointerInteraction) {
        self.pointer.push(interaction);
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty() && self.pointer.is_empty()
    }
}

// ============================================================================
// Live bindings
// ============================================================================

struct IntroBinding {
    timeline: TimelineId,
    entries: Vec<(LayoutNodeId, Property, TimelineEntryId)>,
}

struct EnterBinding {
    node: LayoutNodeId,
    landmark: Landmark,
    trigger_offset: f32,
    fired: bool,
    keyframes: Vec<(Property, KeyframeId)>,
}

struct ScrubBinding {
    node: LayoutNodeId,
    timeline: TimelineId,
    entries: Vec<(Property, TimelineEntryId)>,
    start: Landmark,
    end: Landmark,
    range: ScrubRange,
}

struct TiltBinding {
    node: LayoutNodeId,
    x_spring: SpringId,
    y_spring: SpringId,
}

struct LiftBinding {
    node: LayoutNodeId,
    spring: SpringId,
}

/// Current animated values for one node
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeMotion {
    pub opacity: Option<f32>,
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    pub scale: Option<f32>,
    pub rotate: Option<f32>,
    pub rotate_x: Option<f32>,
    pub rotate_y: Option<f32>,
    pub grow: Option<f32>,
}

impl NodeMotion {
    fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Opacity => self.opacity = Some(value),
            Property::TranslateX => self.translate_x = Some(value),
            Property::TranslateY => self.translate_y = Some(value),
            Property::Scale => self.scale = Some(value),
            Property::Rotate => self.rotate = Some(value),
            Property::RotateX => self.rotate_x = Some(value),
            Property::RotateY => self.rotate_y = Some(value),
            Property::Grow => self.grow = Some(value),
        }
    }
}

// ============================================================================
// Section motion controller
// ============================================================================

/// A mounted section's live animation state
///
/// Created by [`SectionMotion::attach`]; torn down by
/// [`SectionMotion::detach`]. The entrance guarantee holds by
/// construction: attach resolves targets against the already-built tree,
/// so no animation can exist before its subtree does.
pub struct SectionMotion {
    scope: AnimationScope,
    intro: Option<IntroBinding>,
    enters: Vec<EnterBinding>,
    scrubs: Vec<ScrubBinding>,
    ambients: Vec<(LayoutNodeId, Property, KeyframeId)>,
    tilts: Vec<TiltBinding>,
    lifts: Vec<LiftBinding>,
}

impl SectionMotion {
    /// Wire a motion plan to the built tree
    ///
    /// Targets that resolve to nothing are skipped with a warning rather
    /// than failing the attach; a data-driven section may legitimately
    /// have zero cards.
    pub fn attach(
        plan: &MotionPlan,
        tree: &LayoutTree,
        registry: &mut HandlerRegistry,
        scheduler: SchedulerHandle,
        viewport: Viewport,
        scroll_offset: f32,
    ) -> Self {
        let mut scope = AnimationScope::new(scheduler);
        let mut intro_timeline = Timeline::new();
        let mut intro_entries = Vec::new();
        let mut enters = Vec::new();
        let mut scrubs = Vec::new();
        let mut ambients = Vec::new();

        for descriptor in &plan.descriptors {
            let nodes = resolve_target(tree, &descriptor.target);
            if nodes.is_empty() {
                tracing::warn!(target = ?descriptor.target, "motion target resolved to no nodes");
                continue;
            }
            match descriptor.trigger {
                TriggerKind::Immediate { overlap_ms } => {
                    // All tracks and nodes of one step share a window on
                    // the chain; the cursor advances once per descriptor
                    let cursor = intro_timeline.total_duration_ms();
                    let offset =
                        (cursor - overlap_ms as f32).max(0.0) + descriptor.delay_ms as f32;
                    for node in &nodes {
                        for track in &descriptor.tracks {
                            let entry = intro_timeline.add_with_easing(
                                offset,
                                descriptor.duration_ms,
                                track.from,
                                track.to,
                                descriptor.easing,
                            );
                            intro_entries.push((*node, track.property, entry));
                        }
                    }
                }
                TriggerKind::OnScrollEnter { landmark } => {
                    for node in nodes {
                        let mut keyframes = Vec::new();
                        for track in &descriptor.tracks {
                            let animation = KeyframeAnimation::tween(
                                descriptor.duration_ms,
                                track.from,
                                track.to,
                                descriptor.easing,
                            )
                            .delay(descriptor.delay_ms)
                            .iterations(descriptor.repeat.count)
                            .yoyo(descriptor.repeat.yoyo);
                            if let Some(id) = scope.add_keyframe(animation) {
                                keyframes.push((track.property, id));
                            }
                        }
                        let trigger_offset = tree
                            .rect(node)
                            .map(|rect| landmark.resolve(rect, viewport.height))
                            .unwrap_or(f32::MAX);
                        let mut binding = EnterBinding {
                            node,
                            landmark,
                            trigger_offset,
                            fired: false,
                            keyframes,
                        };
                        // Content already past its landmark at attach time
                        // (above the fold) plays immediately
                        if scroll_offset >= binding.trigger_offset {
                            binding.fire(scope.scheduler());
                        }
                        enters.push(binding);
                    }
                }
                TriggerKind::ScrubLinked { start, end } => {
                    for node in nodes {
                        let mut timeline = Timeline::new();
                        let mut entries = Vec::new();
                        for track in &descriptor.tracks {
                            let entry = timeline.add_with_easing(
                                0.0,
                                descriptor.duration_ms,
                                track.from,
                                track.to,
                                descriptor.easing,
                            );
                            entries.push((track.property, entry));
                        }
                        let range = tree
                            .rect(node)
                            .map(|rect| ScrubRange::resolve(start, end, rect, viewport.height))
                            .unwrap_or(ScrubRange::new(f32::MAX, f32::MAX));
                        timeline.seek_progress(range.progress(scroll_offset));
                        if let Some(id) = scope.add_timeline(timeline) {
                            scrubs.push(ScrubBinding {
                                node,
                                timeline: id,
                                entries,
                                start,
                                end,
                                range,
                            });
                        }
                    }
                }
                TriggerKind::Ambient => {
                    for node in nodes {
                        for track in &descriptor.tracks {
                            let mut animation = KeyframeAnimation::tween(
                                descriptor.duration_ms,
                                track.from,
                                track.to,
                                descriptor.easing,
                            )
                            .delay(descriptor.delay_ms)
                            .iterations(descriptor.repeat.count)
                            .yoyo(descriptor.repeat.yoyo);
                            animation.start();
                            if let Some(id) = scope.add_keyframe(animation) {
                                ambients.push((node, track.property, id));
                            }
                        }
                    }
                }
            }
        }

        let intro = if intro_entries.is_empty() {
            None
        } else {
            intro_timeline.start();
            scope.add_timeline(intro_timeline).map(|timeline| IntroBinding {
                timeline,
                entries: intro_entries,
            })
        };

        let mut motion = Self {
            scope,
            intro,
            enters,
            scrubs,
            ambients,
            tilts: Vec::new(),
            lifts: Vec::new(),
        };
        motion.attach_pointer(plan, tree, registry);
        motion
    }

    fn attach_pointer(
        &mut self,
        plan: &MotionPlan,
        tree: &LayoutTree,
        registry: &mut HandlerRegistry,
    ) {
        for interaction in &plan.pointer {
            match interaction {
                PointerInteraction::Tilt {
                    target,
                    max_degrees,
                } => {
                    let max_degrees = *max_degrees;
                    for node in resolve_target(tree, target) {
                        let Some(rect) = tree.rect(node) else { continue };
                        let (Some(x_spring), Some(y_spring)) = (
                            self.scope.add_spring(Spring::new(SpringConfig::hover(), 0.0)),
                            self.scope.add_spring(Spring::new(SpringConfig::hover(), 0.0)),
                        ) else {
                            continue;
                        };

                        let scheduler = self.scope.scheduler().clone();
                        let (w, h) = (rect.width.max(1.0), rect.height.max(1.0));
                        self.scope.add_listener(
                            registry,
                            node,
                            event_types::POINTER_MOVE,
                            move |ctx| {
                                let x_ratio = (ctx.local_x / w - 0.5).clamp(-0.5, 0.5);
                                let y_ratio = (ctx.local_y / h - 0.5).clamp(-0.5, 0.5);
                                scheduler
                                    .set_spring_target(y_spring, x_ratio * 2.0 * max_degrees);
                                scheduler
                                    .set_spring_target(x_spring, -y_ratio * 2.0 * max_degrees);
                            },
                        );
                        let scheduler = self.scope.scheduler().clone();
                        self.scope.add_listener(
                            registry,
                            node,
                            event_types::POINTER_LEAVE,
                            move |_| {
                                scheduler.set_spring_target(x_spring, 0.0);
                                scheduler.set_spring_target(y_spring, 0.0);
                            },
                        );
                        self.tilts.push(TiltBinding {
                            node,
                            x_spring,
                            y_spring,
                        });
                    }
                }
                PointerInteraction::HoverLift { target, lift_px } => {
                    let lift = *lift_px;
                    for node in resolve_target(tree, target) {
                        let Some(spring) =
                            self.scope.add_spring(Spring::new(SpringConfig::hover(), 0.0))
                        else {
                            continue;
                        };
                        let scheduler = self.scope.scheduler().clone();
                        self.scope.add_listener(
                            registry,
                            node,
                            event_types::POINTER_ENTER,
                            move |_| scheduler.set_spring_target(spring, -lift),
                        );
                        let scheduler = self.scope.scheduler().clone();
                        self.scope.add_listener(
                            registry,
                            node,
                            event_types::POINTER_LEAVE,
                            move |_| scheduler.set_spring_target(spring, 0.0),
                        );
                        self.lifts.push(LiftBinding { node, spring });
                    }
                }
            }
        }
    }

    /// Evaluate triggers for the current scroll position
    ///
    /// Entrance triggers fire once, on downward crossings only; scrub
    /// timelines are seeked to their mapped progress every call.
    pub fn update(&mut self, scroll_offset: f32, direction: ScrollDirection) {
        let scheduler = self.scope.scheduler().clone();
        for enter in &mut self.enters {
            if !enter.fired
                && direction == ScrollDirection::Down
                && scroll_offset >= enter.trigger_offset
            {
                enter.fire(&scheduler);
            }
        }
        for scrub in &self.scrubs {
            let progress = scrub.range.progress(scroll_offset);
            scheduler.with_timeline(scrub.timeline, |t| t.seek_progress(progress));
        }
    }

    /// Re-resolve trigger geometry after layout or viewport changes
    pub fn relayout(&mut self, tree: &LayoutTree, viewport: Viewport) {
        for enter in &mut self.enters {
            if let Some(rect) = tree.rect(enter.node) {
                enter.trigger_offset = enter.landmark.resolve(rect, viewport.height);
            }
        }
        for scrub in &mut self.scrubs {
            if let Some(rect) = tree.rect(scrub.node) {
                scrub.range = ScrubRange::resolve(scrub.start, scrub.end, rect, viewport.height);
            }
        }
    }

    /// Sample every binding into per-node motion values
    pub fn motion_state(&self) -> HashMap<LayoutNodeId, NodeMotion> {
        let scheduler = self.scope.scheduler();
        let mut state: HashMap<LayoutNodeId, NodeMotion> = HashMap::new();

        if let Some(ref intro) = self.intro {
            for (node, property, entry) in &intro.entries {
                let value = scheduler
                    .with_timeline(intro.timeline, |t| t.value(*entry))
                    .flatten();
                if let Some(value) = value {
                    state.entry(*node).or_default().set(*property, value);
                }
            }
        }
        for enter in &self.enters {
            for (property, id) in &enter.keyframes {
                if let Some(value) = scheduler.get_keyframe_value(*id) {
                    state.entry(enter.node).or_default().set(*property, value);
                }
            }
        }
        for scrub in &self.scrubs {
            for (property, entry) in &scrub.entries {
                let value = scheduler
                    .with_timeline(scrub.timeline, |t| t.value(*entry))
                    .flatten();
                if let Some(value) = value {
                    state.entry(scrub.node).or_default().set(*property, value);
                }
            }
        }
        for (node, property, id) in &self.ambients {
            if let Some(value) = scheduler.get_keyframe_value(*id) {
                state.entry(*node).or_default().set(*property, value);
            }
        }
        for tilt in &self.tilts {
            let motion = state.entry(tilt.node).or_default();
            if let Some(x) = scheduler.get_spring_value(tilt.x_spring) {
                motion.rotate_x = Some(x);
            }
            if let Some(y) = scheduler.get_spring_value(tilt.y_spring) {
                motion.rotate_y = Some(y);
            }
        }
        for lift in &self.lifts {
            if let Some(y) = scheduler.get_spring_value(lift.spring) {
                state.entry(lift.node).or_default().translate_y = Some(y);
            }
        }

        state
    }

    /// Number of disposables registered under the scope
    pub fn registered_count(&self) -> usize {
        self.scope.len()
    }

    /// Tear down everything this attach registered; idempotent
    pub fn detach(&mut self, registry: &mut HandlerRegistry) {
        self.scope.end(registry);
    }

    pub fn is_detached(&self) -> bool {
        self.scope.is_disposed()
    }
}

impl EnterBinding {
    fn fire(&mut self, scheduler: &SchedulerHandle) {
        for (_, id) in &self.keyframes {
            scheduler.start_keyframe(*id);
        }
        self.fired = true;
    }
}

fn resolve_target(tree: &LayoutTree, target: &Target) -> Vec<LayoutNodeId> {
    match target {
        Target::Tag(tag) => tree.node_by_tag(tag).into_iter().collect(),
        Target::TagPrefix(prefix) => tree.nodes_by_tag_prefix(prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::div::div;
    use crate::element::ElementBuilder;
    use lumen_animation::AnimationScheduler;

    struct Fixture {
        scheduler: AnimationScheduler,
        tree: LayoutTree,
        registry: HandlerRegistry,
        viewport: Viewport,
    }

    /// A tall page: a spacer, then three tagged cards far below the fold
    fn fixture() -> Fixture {
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let page = div()
            .w_full()
            .child(div().tag("spacer").w_full().h(2000.0))
            .child(div().tag("card.0").w_full().h(300.0))
            .child(div().tag("card.1").w_full().h(300.0))
            .child(div().tag("card.2").w_full().h(300.0));
        let root = page.build(&mut tree, &mut registry);
        tree.set_root(root);
        tree.compute_layout(1280.0);
        Fixture {
            scheduler: AnimationScheduler::new(),
            tree,
            registry,
            viewport: Viewport::new(1280.0, 800.0),
        }
    }

    fn enter_plan() -> MotionPlan {
        let mut plan = MotionPlan::new();
        plan.push(
            AnimationDescriptor::new(Target::TagPrefix("card.".into()), 800)
                .track(Property::Opacity, 0.0, 1.0)
                .track(Property::TranslateY, 50.0, 0.0)
                .easing(Easing::BackOut)
                .on_enter(),
        );
        plan
    }

    #[test]
    fn test_enter_fires_once_downward_only() {
        let mut fx = fixture();
        let mut motion = SectionMotion::attach(
            &enter_plan(),
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );

        // card.0 top = 2000; trigger offset = 2000 - 640 = 1360
        assert_eq!(motion.enters[0].trigger_offset, 1360.0);
        assert!(!motion.enters[0].fired);

        // Scrolling up past the offset must not fire
        motion.update(1500.0, ScrollDirection::Up);
        assert!(!motion.enters[0].fired);

        motion.update(1500.0, ScrollDirection::Down);
        assert!(motion.enters[0].fired);
        assert!(fx.scheduler.has_active_animations());

        // Finish the animation, scroll away and back: no replay
        for _ in 0..120 {
            fx.scheduler.tick(1.0 / 60.0);
        }
        assert!(!fx.scheduler.has_active_animations());
        motion.update(0.0, ScrollDirection::Up);
        motion.update(1500.0, ScrollDirection::Down);
        assert!(!fx.scheduler.has_active_animations());
    }

    #[test]
    fn test_enter_above_fold_plays_at_attach() {
        let mut fx = fixture();
        let mut plan = MotionPlan::new();
        plan.push(
            AnimationDescriptor::new(Target::Tag("spacer".into()), 500)
                .track(Property::Opacity, 0.0, 1.0)
                .on_enter(),
        );
        let motion = SectionMotion::attach(
            &plan,
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );
        // spacer top = 0, landmark offset = -640: already past at offset 0
        assert!(motion.enters[0].fired);
    }

    #[test]
    fn test_unresolved_target_yields_no_bindings() {
        let mut fx = fixture();
        let mut plan = MotionPlan::new();
        plan.push(
            AnimationDescriptor::new(Target::TagPrefix("ghost.".into()), 500)
                .track(Property::Opacity, 0.0, 1.0)
                .on_enter(),
        );
        let motion = SectionMotion::attach(
            &plan,
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );
        assert_eq!(motion.registered_count(), 0);
        assert_eq!(fx.scheduler.animation_count(), 0);
    }

    #[test]
    fn test_scrub_follows_and_reverses() {
        let mut fx = fixture();
        let mut plan = MotionPlan::new();
        plan.push(
            AnimationDescriptor::new(Target::Tag("card.0".into()), 1000)
                .track(Property::TranslateX, -50.0, 0.0)
                .easing(Easing::Linear)
                .trigger(TriggerKind::ScrubLinked {
                    start: Landmark::top_center(),
                    end: Landmark::center_center(),
                }),
        );
        let mut motion = SectionMotion::attach(
            &plan,
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );
        let node = fx.tree.node_by_tag("card.0").unwrap();
        // start = 2000 - 400 = 1600; end = 2150 - 400 = 1750
        let at = |motion: &mut SectionMotion, offset: f32| {
            motion.update(offset, ScrollDirection::Down);
            motion.motion_state()[&node].translate_x.unwrap()
        };

        assert_eq!(at(&mut motion, 0.0), -50.0);
        assert!((at(&mut motion, 1675.0) - (-25.0)).abs() < 0.1);
        assert_eq!(at(&mut motion, 3000.0), 0.0);
        // Reverses on the way back up
        assert!((at(&mut motion, 1675.0) - (-25.0)).abs() < 0.1);
        assert_eq!(at(&mut motion, 0.0), -50.0);
    }

    #[test]
    fn test_immediate_chain_overlap() {
        let mut fx = fixture();
        let mut plan = MotionPlan::new();
        plan.push(
            AnimationDescriptor::new(Target::Tag("card.0".into()), 1000)
                .track(Property::Opacity, 0.0, 1.0)
                .trigger(TriggerKind::Immediate { overlap_ms: 0 }),
        );
        plan.push(
            AnimationDescriptor::new(Target::Tag("card.1".into()), 800)
                .track(Property::Opacity, 0.0, 1.0)
                .trigger(TriggerKind::Immediate { overlap_ms: 600 }),
        );
        let motion = SectionMotion::attach(
            &plan,
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );
        let intro = motion.intro.as_ref().unwrap();
        // Second step starts at 400ms; chain ends at 1200ms
        let total = fx
            .scheduler
            .handle()
            .with_timeline(intro.timeline, |t| t.total_duration_ms())
            .unwrap();
        assert_eq!(total, 1200.0);
        assert!(fx.scheduler.has_active_animations());
    }

    #[test]
    fn test_ambient_loops_until_detach() {
        let mut fx = fixture();
        let mut plan = MotionPlan::new();
        plan.push(
            AnimationDescriptor::new(Target::Tag("card.2".into()), 3000)
                .track(Property::TranslateY, 0.0, -15.0)
                .easing(Easing::SineInOut)
                .trigger(TriggerKind::Ambient)
                .repeat(Repeat::infinite_yoyo()),
        );
        let mut motion = SectionMotion::attach(
            &plan,
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );

        // Runs well past one period without stopping
        for _ in 0..600 {
            fx.scheduler.tick(1.0 / 60.0);
        }
        assert!(fx.scheduler.has_active_animations());

        motion.detach(&mut fx.registry);
        assert_eq!(fx.scheduler.animation_count(), 0);
        assert!(!fx.scheduler.has_active_animations());
    }

    #[test]
    fn test_tilt_clamps_and_resets() {
        let mut fx = fixture();
        let mut plan = MotionPlan::new();
        plan.pointer(PointerInteraction::Tilt {
            target: Target::Tag("card.0".into()),
            max_degrees: 5.0,
        });
        let motion = SectionMotion::attach(
            &plan,
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );
        let node = fx.tree.node_by_tag("card.0").unwrap();

        // Pointer far right of center: rotate-y spring targets +5 (clamped)
        let ctx = crate::event_handler::EventContext::new(event_types::POINTER_MOVE, node)
            .with_pointer(5000.0, 2100.0, 5000.0, 100.0);
        fx.registry.dispatch(&ctx);
        for _ in 0..240 {
            fx.scheduler.tick(1.0 / 60.0);
        }
        let state = motion.motion_state();
        assert!((state[&node].rotate_y.unwrap() - 5.0).abs() < 0.3);

        // Leave resets to zero
        fx.registry
            .dispatch(&crate::event_handler::EventContext::new(
                event_types::POINTER_LEAVE,
                node,
            ));
        for _ in 0..240 {
            fx.scheduler.tick(1.0 / 60.0);
        }
        let state = motion.motion_state();
        assert!(state[&node].rotate_y.unwrap().abs() < 0.3);
    }

    #[test]
    fn test_detach_is_idempotent_and_leak_free() {
        let mut fx = fixture();
        let mut plan = enter_plan();
        plan.pointer(PointerInteraction::HoverLift {
            target: Target::TagPrefix("card.".into()),
            lift_px: 8.0,
        });
        let mut motion = SectionMotion::attach(
            &plan,
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );
        assert!(motion.registered_count() > 0);
        assert!(fx.registry.handler_count() > 0);

        motion.detach(&mut fx.registry);
        assert_eq!(fx.scheduler.animation_count(), 0);
        assert_eq!(fx.registry.handler_count(), 0);
        assert!(motion.is_detached());

        motion.detach(&mut fx.registry);
        assert_eq!(fx.scheduler.animation_count(), 0);
    }

    #[test]
    fn test_relayout_rebinds_trigger_geometry() {
        let mut fx = fixture();
        let mut motion = SectionMotion::attach(
            &enter_plan(),
            &fx.tree,
            &mut fx.registry,
            fx.scheduler.handle(),
            fx.viewport,
            0.0,
        );
        assert_eq!(motion.enters[0].trigger_offset, 1360.0);

        let taller = Viewport::new(1280.0, 1000.0);
        motion.relayout(&fx.tree, taller);
        assert_eq!(motion.enters[0].trigger_offset, 2000.0 - 800.0);
    }
}
