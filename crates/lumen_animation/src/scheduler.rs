//! Animation scheduler
//!
//! Owns every live animation and advances them when the application frame
//! loop calls `tick`. There is no background thread: scroll evaluation,
//! ambient loops, and entrance chains all run on the one cooperative
//! frame-driven path, so a scheduler that only moves when ticked is exactly
//! the required execution model.
//!
//! Animations register through a `SchedulerHandle` (a weak reference, so
//! handles held by UI scopes never keep a torn-down scheduler alive) and
//! are owned by RAII wrappers:
//!
//! - `AnimatedValue` - spring-driven scalar (hover lift, card tilt)
//! - `AnimatedKeyframe` - timed keyframe track (entrances, ambient loops)
//! - `AnimatedTimeline` - multi-track clock (intro chains, scrubbing)
//!
//! Dropping a wrapper removes its animation from the scheduler.

use crate::keyframe::KeyframeAnimation;
use crate::spring::{Spring, SpringConfig};
use crate::timeline::Timeline;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

new_key_type! {
    /// Handle to a registered spring
    pub struct SpringId;
    /// Handle to a registered keyframe animation
    pub struct KeyframeId;
    /// Handle to a registered timeline
    pub struct TimelineId;
}

struct SchedulerInner {
    springs: SlotMap<SpringId, Spring>,
    keyframes: SlotMap<KeyframeId, KeyframeAnimation>,
    timelines: SlotMap<TimelineId, Timeline>,
}

/// The frame-driven animation scheduler
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                springs: SlotMap::with_key(),
                keyframes: SlotMap::with_key(),
                timelines: SlotMap::with_key(),
            })),
        }
    }

    /// Get a weak handle for registering animations
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all animations by `dt` seconds
    ///
    /// Returns true if anything is still in motion (another frame is needed).
    pub fn tick(&self, dt: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let dt_ms = dt * 1000.0;

        for (_, spring) in inner.springs.iter_mut() {
            spring.step(dt);
        }
        for (_, keyframe) in inner.keyframes.iter_mut() {
            keyframe.tick(dt_ms);
        }
        for (_, timeline) in inner.timelines.iter_mut() {
            timeline.tick(dt_ms);
        }

        // Animations are removed only when their owning wrapper drops, so a
        // finished entrance can be restarted by a later trigger pass.
        inner.springs.iter().any(|(_, s)| !s.is_settled())
            || inner.keyframes.iter().any(|(_, k)| k.is_playing())
            || inner.timelines.iter().any(|(_, t)| t.is_playing())
    }

    /// Whether anything is currently in motion
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.springs.iter().any(|(_, s)| !s.is_settled())
            || inner.keyframes.iter().any(|(_, k)| k.is_playing())
            || inner.timelines.iter().any(|(_, t)| t.is_playing())
    }

    /// Total registered animations of every kind
    ///
    /// Zero after every owning scope has been torn down; the leak tests
    /// assert on this.
    pub fn animation_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.springs.len() + inner.keyframes.len() + inner.timelines.len()
    }

    pub fn spring_count(&self) -> usize {
        self.inner.lock().unwrap().springs.len()
    }

    pub fn keyframe_count(&self) -> usize {
        self.inner.lock().unwrap().keyframes.len()
    }

    pub fn timeline_count(&self) -> usize {
        self.inner.lock().unwrap().timelines.len()
    }
}

/// A weak handle to the scheduler
///
/// Held by scopes and wrappers that need to register animations. It won't
/// keep the scheduler alive; every operation is a no-op once the scheduler
/// is gone.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    // =========================================================================
    // Springs
    // =========================================================================

    pub fn register_spring(&self, spring: Spring) -> Option<SpringId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().springs.insert(spring))
    }

    pub fn remove_spring(&self, id: SpringId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().springs.remove(id);
        }
    }

    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(spring) = inner.lock().unwrap().springs.get_mut(id) {
                spring.set_target(target);
            }
        }
    }

    pub fn get_spring_value(&self, id: SpringId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get(id).map(|s| s.value()))
    }

    /// Returns true if the spring has settled, or no longer exists
    pub fn is_spring_settled(&self, id: SpringId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().springs.get(id).map(|s| s.is_settled()))
            .unwrap_or(true)
    }

    // =========================================================================
    // Keyframes
    // =========================================================================

    pub fn register_keyframe(&self, keyframe: KeyframeAnimation) -> Option<KeyframeId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().keyframes.insert(keyframe))
    }

    pub fn remove_keyframe(&self, id: KeyframeId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().keyframes.remove(id);
        }
    }

    pub fn start_keyframe(&self, id: KeyframeId) {
        self.with_keyframe(id, KeyframeAnimation::start);
    }

    pub fn stop_keyframe(&self, id: KeyframeId) {
        self.with_keyframe(id, KeyframeAnimation::stop);
    }

    pub fn get_keyframe_value(&self, id: KeyframeId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().keyframes.get(id).map(|k| k.value()))
    }

    pub fn is_keyframe_playing(&self, id: KeyframeId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .keyframes
                    .get(id)
                    .map(|k| k.is_playing())
            })
            .unwrap_or(false)
    }

    /// Apply a closure to a keyframe animation if it exists
    pub fn with_keyframe<F, R>(&self, id: KeyframeId, f: F) -> Option<R>
    where
        F: FnOnce(&mut KeyframeAnimation) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().keyframes.get_mut(id).map(f))
    }

    // =========================================================================
    // Timelines
    // =========================================================================

    pub fn register_timeline(&self, timeline: Timeline) -> Option<TimelineId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().timelines.insert(timeline))
    }

    pub fn remove_timeline(&self, id: TimelineId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().timelines.remove(id);
        }
    }

    /// Apply a closure to a timeline if it exists
    pub fn with_timeline<F, R>(&self, id: TimelineId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Timeline) -> R,
    {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().timelines.get_mut(id).map(f))
    }
}

// ============================================================================
// RAII wrappers
// ============================================================================

/// A spring-animated scalar registered with the scheduler
///
/// Setting a target starts motion; the scheduler ticks it each frame; drop
/// removes it.
pub struct AnimatedValue {
    handle: SchedulerHandle,
    spring_id: Option<SpringId>,
    config: SpringConfig,
    current: f32,
    target: f32,
}

impl AnimatedValue {
    pub fn new(handle: SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        Self {
            handle,
            spring_id: None,
            config,
            current: initial,
            target: initial,
        }
    }

    /// Animate toward a new target
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        match self.spring_id {
            Some(id) => self.handle.set_spring_target(id, target),
            None => {
                if (target - self.current).abs() > 0.001 {
                    let spring = Spring::new(self.config, self.current);
                    if let Some(id) = self.handle.register_spring(spring) {
                        self.handle.set_spring_target(id, target);
                        self.spring_id = Some(id);
                    }
                }
            }
        }
    }

    /// Current animated value
    pub fn get(&self) -> f32 {
        match self.spring_id {
            Some(id) => self.handle.get_spring_value(id).unwrap_or(self.target),
            None => self.current,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.spring_id
            .map(|id| !self.handle.is_spring_settled(id))
            .unwrap_or(false)
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.spring_id {
            self.handle.remove_spring(id);
        }
    }
}

/// A keyframe animation registered with the scheduler
pub struct AnimatedKeyframe {
    handle: SchedulerHandle,
    keyframe_id: Option<KeyframeId>,
}

impl AnimatedKeyframe {
    /// Register an animation; it does not play until `start` is called
    pub fn register(handle: SchedulerHandle, animation: KeyframeAnimation) -> Self {
        let keyframe_id = handle.register_keyframe(animation);
        if keyframe_id.is_none() {
            tracing::warn!("scheduler gone; keyframe animation is inert");
        }
        Self {
            handle,
            keyframe_id,
        }
    }

    pub fn start(&self) {
        if let Some(id) = self.keyframe_id {
            self.handle.start_keyframe(id);
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.keyframe_id {
            self.handle.stop_keyframe(id);
        }
    }

    pub fn get(&self) -> f32 {
        self.keyframe_id
            .and_then(|id| self.handle.get_keyframe_value(id))
            .unwrap_or(0.0)
    }

    pub fn is_playing(&self) -> bool {
        self.keyframe_id
            .map(|id| self.handle.is_keyframe_playing(id))
            .unwrap_or(false)
    }
}

impl Drop for AnimatedKeyframe {
    fn drop(&mut self) {
        if let Some(id) = self.keyframe_id {
            self.handle.remove_keyframe(id);
        }
    }
}

/// A timeline registered with the scheduler
pub struct AnimatedTimeline {
    handle: SchedulerHandle,
    timeline_id: Option<TimelineId>,
}

impl AnimatedTimeline {
    /// Register a pre-built timeline
    pub fn register(handle: SchedulerHandle, timeline: Timeline) -> Self {
        let timeline_id = handle.register_timeline(timeline);
        if timeline_id.is_none() {
            tracing::warn!("scheduler gone; timeline is inert");
        }
        Self {
            handle,
            timeline_id,
        }
    }

    pub fn start(&self) {
        self.with(Timeline::start);
    }

    pub fn stop(&self) {
        self.with(Timeline::stop);
    }

    /// Drive the clock directly from an external progress source (scrub)
    pub fn seek_progress(&self, progress: f32) {
        self.with(|t| t.seek_progress(progress));
    }

    pub fn value(&self, entry: crate::timeline::TimelineEntryId) -> Option<f32> {
        self.with(|t| t.value(entry)).flatten()
    }

    pub fn progress(&self) -> f32 {
        self.with(|t| t.progress()).unwrap_or(0.0)
    }

    pub fn is_playing(&self) -> bool {
        self.with(|t| t.is_playing()).unwrap_or(false)
    }

    /// Apply a closure to the underlying timeline
    pub fn with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Timeline) -> R,
    {
        self.timeline_id.and_then(|id| self.handle.with_timeline(id, f))
    }
}

impl Drop for AnimatedTimeline {
    fn drop(&mut self) {
        if let Some(id) = self.timeline_id {
            self.handle.remove_timeline(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    #[test]
    fn test_tick_advances_registered_animations() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let anim = AnimatedKeyframe::register(
            handle,
            KeyframeAnimation::tween(1000, 0.0, 100.0, Easing::Linear),
        );
        anim.start();

        assert!(scheduler.tick(0.5));
        assert!((anim.get() - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_wrapper_drop_unregisters() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        {
            let _anim = AnimatedKeyframe::register(
                handle.clone(),
                KeyframeAnimation::tween(1000, 0.0, 1.0, Easing::Linear),
            );
            let _tl = AnimatedTimeline::register(handle.clone(), Timeline::new());
            let mut value = AnimatedValue::new(handle, 0.0, SpringConfig::hover());
            value.set_target(10.0);
            assert_eq!(scheduler.animation_count(), 3);
        }

        assert_eq!(scheduler.animation_count(), 0);
    }

    #[test]
    fn test_handle_outlives_scheduler_safely() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle
            .register_keyframe(KeyframeAnimation::tween(100, 0.0, 1.0, Easing::Linear))
            .is_none());
        assert!(handle
            .register_spring(Spring::new(SpringConfig::hover(), 0.0))
            .is_none());
    }

    #[test]
    fn test_animated_value_springs_toward_target() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0, SpringConfig::stiff());

        assert!(!value.is_animating());
        value.set_target(100.0);
        assert!(value.is_animating());

        for _ in 0..180 {
            scheduler.tick(1.0 / 60.0);
        }
        assert!((value.get() - 100.0).abs() < 1.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_idle_scheduler_reports_inactive() {
        let scheduler = AnimationScheduler::new();
        assert!(!scheduler.tick(1.0 / 60.0));
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_finished_animation_stays_registered_for_restart() {
        let scheduler = AnimationScheduler::new();
        let anim = AnimatedKeyframe::register(
            scheduler.handle(),
            KeyframeAnimation::tween(100, 0.0, 1.0, Easing::Linear),
        );
        anim.start();
        scheduler.tick(0.5);
        assert!(!anim.is_playing());
        assert_eq!(scheduler.keyframe_count(), 1);

        anim.start();
        assert!(anim.is_playing());
    }
}
