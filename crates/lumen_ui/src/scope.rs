//! Animation scopes
//!
//! A scope is the unit of teardown for one mounted section: every
//! animation and listener created while wiring the section up is recorded
//! here, and `end` disposes all of it in one pass. Ending is idempotent
//! (a disposed flag guards the second call) and safe on the unmount path.

use lumen_animation::{
    KeyframeAnimation, KeyframeId, SchedulerHandle, Spring, SpringId, Timeline, TimelineId,
};

use crate::event_handler::{EventContext, EventType, HandlerId, HandlerRegistry};
use crate::tree::LayoutNodeId;

enum Disposable {
    Keyframe(KeyframeId),
    Timeline(TimelineId),
    Spring(SpringId),
    Listener {
        node: LayoutNodeId,
        event_type: EventType,
        handler: HandlerId,
    },
}

/// Owns every animation and listener registered for one mounted section
pub struct AnimationScope {
    scheduler: SchedulerHandle,
    disposables: Vec<Disposable>,
    disposed: bool,
}

impl AnimationScope {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self {
            scheduler,
            disposables: Vec::new(),
            disposed: false,
        }
    }

    pub fn scheduler(&self) -> &SchedulerHandle {
        &self.scheduler
    }

    /// Register a keyframe animation under this scope
    pub fn add_keyframe(&mut self, animation: KeyframeAnimation) -> Option<KeyframeId> {
        debug_assert!(!self.disposed, "registering into a disposed scope");
        let id = self.scheduler.register_keyframe(animation)?;
        self.disposables.push(Disposable::Keyframe(id));
        Some(id)
    }

    /// Register a timeline under this scope
    pub fn add_timeline(&mut self, timeline: Timeline) -> Option<TimelineId> {
        debug_assert!(!self.disposed, "registering into a disposed scope");
        let id = self.scheduler.register_timeline(timeline)?;
        self.disposables.push(Disposable::Timeline(id));
        Some(id)
    }

    /// Register a spring under this scope
    pub fn add_spring(&mut self, spring: Spring) -> Option<SpringId> {
        debug_assert!(!self.disposed, "registering into a disposed scope");
        let id = self.scheduler.register_spring(spring)?;
        self.disposables.push(Disposable::Spring(id));
        Some(id)
    }

    /// Register an event listener under this scope
    ///
    /// The listener is removed (precisely, by id) when the scope ends.
    pub fn add_listener<F>(
        &mut self,
        registry: &mut HandlerRegistry,
        node: LayoutNodeId,
        event_type: EventType,
        handler: F,
    ) -> HandlerId
    where
        F: Fn(&EventContext) + 'static,
    {
        debug_assert!(!self.disposed, "registering into a disposed scope");
        let id = registry.register(node, event_type, handler);
        self.disposables.push(Disposable::Listener {
            node,
            event_type,
            handler: id,
        });
        id
    }

    /// Number of live disposables in the registry
    pub fn len(&self) -> usize {
        self.disposables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disposables.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Dispose everything registered under this scope
    ///
    /// Cancels and removes all animations, removes all listeners, clears
    /// the registry. Calling again is a no-op.
    pub fn end(&mut self, registry: &mut HandlerRegistry) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for disposable in self.disposables.drain(..) {
            match disposable {
                Disposable::Keyframe(id) => self.scheduler.remove_keyframe(id),
                Disposable::Timeline(id) => self.scheduler.remove_timeline(id),
                Disposable::Spring(id) => self.scheduler.remove_spring(id),
                Disposable::Listener {
                    node,
                    event_type,
                    handler,
                } => {
                    registry.unregister(node, event_type, handler);
                }
            }
        }
    }
}

impl Drop for AnimationScope {
    fn drop(&mut self) {
        if self.disposed {
            return;
        }
        // Last-resort cleanup: animations can be removed without the
        // handler registry, listeners cannot
        let mut leaked_listeners = 0usize;
        for disposable in self.disposables.drain(..) {
            match disposable {
                Disposable::Keyframe(id) => self.scheduler.remove_keyframe(id),
                Disposable::Timeline(id) => self.scheduler.remove_timeline(id),
                Disposable::Spring(id) => self.scheduler.remove_spring(id),
                Disposable::Listener { .. } => leaked_listeners += 1,
            }
        }
        if leaked_listeners > 0 {
            tracing::warn!(
                leaked_listeners,
                "animation scope dropped without end(); listeners not removed"
            );
        }
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::RenderProps;
    use crate::event_handler::event_types;
    use crate::tree::LayoutTree;
    use lumen_animation::{AnimationScheduler, Easing, SpringConfig};

    fn scope_fixture() -> (AnimationScheduler, LayoutTree, HandlerRegistry, LayoutNodeId) {
        let scheduler = AnimationScheduler::new();
        let mut tree = LayoutTree::new();
        let node = tree.create_node(taffy::Style::default(), RenderProps::default());
        (scheduler, tree, HandlerRegistry::new(), node)
    }

    #[test]
    fn test_end_disposes_everything() {
        let (scheduler, _tree, mut registry, node) = scope_fixture();
        let mut scope = AnimationScope::new(scheduler.handle());

        scope.add_keyframe(KeyframeAnimation::tween(300, 0.0, 1.0, Easing::QuadOut));
        scope.add_timeline(Timeline::new());
        scope.add_spring(Spring::new(SpringConfig::hover(), 0.0));
        scope.add_listener(&mut registry, node, event_types::POINTER_ENTER, |_| {});

        assert_eq!(scope.len(), 4);
        assert_eq!(scheduler.animation_count(), 3);
        assert_eq!(registry.handler_count(), 1);

        scope.end(&mut registry);

        assert!(scope.is_disposed());
        assert!(scope.is_empty());
        assert_eq!(scheduler.animation_count(), 0);
        assert_eq!(registry.handler_count(), 0);
    }

    #[test]
    fn test_end_is_idempotent() {
        let (scheduler, _tree, mut registry, node) = scope_fixture();
        let mut scope = AnimationScope::new(scheduler.handle());
        scope.add_keyframe(KeyframeAnimation::tween(300, 0.0, 1.0, Easing::QuadOut));
        let id = scope.add_listener(&mut registry, node, event_types::CLICK, |_| {});

        scope.end(&mut registry);

        // A handler registered after teardown by someone else must survive
        // a second end() - the scope no longer owns anything
        let replacement = registry.register(node, event_types::CLICK, |_| {});
        assert_ne!(replacement, id);
        scope.end(&mut registry);
        assert_eq!(registry.handler_count(), 1);
        assert_eq!(scheduler.animation_count(), 0);
    }

    #[test]
    fn test_drop_removes_animations() {
        let (scheduler, _tree, _registry, _node) = scope_fixture();
        {
            let mut scope = AnimationScope::new(scheduler.handle());
            scope.add_keyframe(KeyframeAnimation::tween(300, 0.0, 1.0, Easing::QuadOut));
            assert_eq!(scheduler.animation_count(), 1);
        }
        assert_eq!(scheduler.animation_count(), 0);
    }
}
