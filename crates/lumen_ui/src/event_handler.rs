//! Event handler storage and pointer routing
//!
//! Elements declare handlers at build time; the orchestrator adds more at
//! attach time (pointer micro-interactions). Every registration returns a
//! [`HandlerId`] so a teardown path can remove exactly the listeners it
//! added - an animation scope must never detach handlers it does not own.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::tree::{LayoutNodeId, LayoutTree};

/// Event discriminant
pub type EventType = u32;

/// Event type constants
pub mod event_types {
    use super::EventType;

    pub const POINTER_ENTER: EventType = 1;
    pub const POINTER_LEAVE: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const CLICK: EventType = 4;
    pub const SCROLL: EventType = 5;
    pub const RESIZE: EventType = 6;
}

/// Identifies one registered handler for precise removal
pub type HandlerId = u64;

/// Callback for handling events; Rc because the UI is single-threaded
pub type EventCallback = Rc<dyn Fn(&EventContext)>;

/// Context passed to event handlers
#[derive(Clone, Debug)]
pub struct EventContext {
    pub event_type: EventType,
    pub node_id: LayoutNodeId,
    /// Pointer position in page coordinates
    pub page_x: f32,
    pub page_y: f32,
    /// Pointer position relative to the element's rect
    pub local_x: f32,
    pub local_y: f32,
    /// Scroll delta for SCROLL events
    pub scroll_delta_y: f32,
}

impl EventContext {
    pub fn new(event_type: EventType, node_id: LayoutNodeId) -> Self {
        Self {
            event_type,
            node_id,
            page_x: 0.0,
            page_y: 0.0,
            local_x: 0.0,
            local_y: 0.0,
            scroll_delta_y: 0.0,
        }
    }

    pub fn with_pointer(mut self, page_x: f32, page_y: f32, local_x: f32, local_y: f32) -> Self {
        self.page_x = page_x;
        self.page_y = page_y;
        self.local_x = local_x;
        self.local_y = local_y;
        self
    }
}

/// Handlers attached to a single element
#[derive(Default, Clone)]
pub struct EventHandlers {
    handlers: HashMap<EventType, Vec<(HandlerId, EventCallback)>>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    fn insert<F>(&mut self, event_type: EventType, id: HandlerId, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push((id, Rc::new(handler)));
    }

    fn remove(&mut self, event_type: EventType, id: HandlerId) -> bool {
        let Some(list) = self.handlers.get_mut(&event_type) else {
            return false;
        };
        let before = list.len();
        list.retain(|(hid, _)| *hid != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.handlers.remove(&event_type);
        }
        removed
    }

    pub fn has_handler(&self, event_type: EventType) -> bool {
        self.handlers.contains_key(&event_type)
    }

    /// Invoke all handlers registered for the context's event type
    pub fn dispatch(&self, ctx: &EventContext) {
        if let Some(list) = self.handlers.get(&ctx.event_type) {
            for (_, handler) in list {
                handler(ctx);
            }
        }
    }
}

/// Handlers for the whole tree, indexed by node
#[derive(Default)]
pub struct HandlerRegistry {
    nodes: HashMap<LayoutNodeId, EventHandlers>,
    next_id: HandlerId,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; the returned id removes exactly this handler
    pub fn register<F>(
        &mut self,
        node: LayoutNodeId,
        event_type: EventType,
        handler: F,
    ) -> HandlerId
    where
        F: Fn(&EventContext) + 'static,
    {
        self.next_id += 1;
        let id = self.next_id;
        self.nodes
            .entry(node)
            .or_default()
            .insert(event_type, id, handler);
        id
    }

    /// Remove one handler by id; false if it was already gone
    pub fn unregister(&mut self, node: LayoutNodeId, event_type: EventType, id: HandlerId) -> bool {
        let Some(handlers) = self.nodes.get_mut(&node) else {
            return false;
        };
        let removed = handlers.remove(event_type, id);
        if handlers.is_empty() {
            self.nodes.remove(&node);
        }
        removed
    }

    /// Remove every handler attached to a node (subtree removal path)
    pub fn remove_node(&mut self, node: LayoutNodeId) {
        self.nodes.remove(&node);
    }

    pub fn get(&self, node: LayoutNodeId) -> Option<&EventHandlers> {
        self.nodes.get(&node)
    }

    pub fn has_handler(&self, node: LayoutNodeId, event_type: EventType) -> bool {
        self.nodes
            .get(&node)
            .map(|h| h.has_handler(event_type))
            .unwrap_or(false)
    }

    /// Total registered handlers across all nodes
    ///
    /// Zero after teardown; the leak tests assert on this.
    pub fn handler_count(&self) -> usize {
        self.nodes.values().map(EventHandlers::len).sum()
    }

    pub fn dispatch(&self, ctx: &EventContext) {
        if let Some(handlers) = self.nodes.get(&ctx.node_id) {
            handlers.dispatch(ctx);
        }
    }

    /// Nodes with at least one handler for `event_type`
    pub fn nodes_with_handler(&self, event_type: EventType) -> Vec<LayoutNodeId> {
        self.nodes
            .iter()
            .filter(|(_, h)| h.has_handler(event_type))
            .map(|(node, _)| *node)
            .collect()
    }
}

/// Routes pointer positions to enter/leave/move handlers by rect hit-testing
#[derive(Default)]
pub struct PointerRouter {
    hovered: HashSet<LayoutNodeId>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a pointer move in page coordinates
    ///
    /// Emits POINTER_LEAVE for nodes the pointer left, POINTER_ENTER for
    /// nodes it entered, then POINTER_MOVE for every hovered node with
    /// local coordinates.
    pub fn pointer_move(
        &mut self,
        tree: &LayoutTree,
        registry: &HandlerRegistry,
        page_x: f32,
        page_y: f32,
    ) {
        let mut now_hovered = HashSet::new();
        let interactive: Vec<LayoutNodeId> = {
            let mut nodes = registry.nodes_with_handler(event_types::POINTER_ENTER);
            nodes.extend(registry.nodes_with_handler(event_types::POINTER_LEAVE));
            nodes.extend(registry.nodes_with_handler(event_types::POINTER_MOVE));
            nodes
        };

        for node in interactive {
            if let Some(rect) = tree.rect(node) {
                if rect.contains(page_x, page_y) {
                    now_hovered.insert(node);
                }
            }
        }

        for node in self.hovered.difference(&now_hovered) {
            registry.dispatch(&EventContext::new(event_types::POINTER_LEAVE, *node));
        }
        for node in now_hovered.difference(&self.hovered) {
            registry.dispatch(&EventContext::new(event_types::POINTER_ENTER, *node));
        }
        for node in &now_hovered {
            if let Some(rect) = tree.rect(*node) {
                let ctx = EventContext::new(event_types::POINTER_MOVE, *node).with_pointer(
                    page_x,
                    page_y,
                    page_x - rect.x,
                    page_y - rect.y,
                );
                registry.dispatch(&ctx);
            }
        }

        self.hovered = now_hovered;
    }

    /// Pointer left the page entirely
    pub fn pointer_leave_all(&mut self, registry: &HandlerRegistry) {
        for node in self.hovered.drain() {
            registry.dispatch(&EventContext::new(event_types::POINTER_LEAVE, node));
        }
    }

    /// Route a click at page coordinates to the topmost hit node
    pub fn click(
        &self,
        tree: &LayoutTree,
        registry: &HandlerRegistry,
        page_x: f32,
        page_y: f32,
    ) {
        for node in registry.nodes_with_handler(event_types::CLICK) {
            if let Some(rect) = tree.rect(node) {
                if rect.contains(page_x, page_y) {
                    let ctx = EventContext::new(event_types::CLICK, node).with_pointer(
                        page_x,
                        page_y,
                        page_x - rect.x,
                        page_y - rect.y,
                    );
                    registry.dispatch(&ctx);
                }
            }
        }
    }

    pub fn hovered_count(&self) -> usize {
        self.hovered.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::RenderProps;
    use std::cell::Cell;
    use taffy::prelude::*;

    fn leaf_tree(height: f32) -> (LayoutTree, LayoutNodeId) {
        let mut tree = LayoutTree::new();
        let node = tree.create_node(
            Style {
                size: Size {
                    width: Dimension::Length(100.0),
                    height: Dimension::Length(height),
                },
                ..Style::default()
            },
            RenderProps::default(),
        );
        tree.set_root(node);
        tree.compute_layout(100.0);
        (tree, node)
    }

    #[test]
    fn test_register_and_dispatch() {
        let (_, node) = leaf_tree(50.0);
        let mut registry = HandlerRegistry::new();
        let hits = Rc::new(Cell::new(0));

        let h = Rc::clone(&hits);
        registry.register(node, event_types::CLICK, move |_| h.set(h.get() + 1));

        registry.dispatch(&EventContext::new(event_types::CLICK, node));
        registry.dispatch(&EventContext::new(event_types::CLICK, node));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_unregister_removes_only_that_handler() {
        let (_, node) = leaf_tree(50.0);
        let mut registry = HandlerRegistry::new();
        let hits = Rc::new(Cell::new(0));

        let h1 = Rc::clone(&hits);
        let id1 = registry.register(node, event_types::CLICK, move |_| h1.set(h1.get() + 1));
        let h2 = Rc::clone(&hits);
        let _id2 = registry.register(node, event_types::CLICK, move |_| h2.set(h2.get() + 10));

        assert!(registry.unregister(node, event_types::CLICK, id1));
        registry.dispatch(&EventContext::new(event_types::CLICK, node));
        assert_eq!(hits.get(), 10);
        assert_eq!(registry.handler_count(), 1);

        // Second unregister of the same id is a no-op
        assert!(!registry.unregister(node, event_types::CLICK, id1));
    }

    #[test]
    fn test_pointer_router_enter_move_leave() {
        let (tree, node) = leaf_tree(50.0);
        let mut registry = HandlerRegistry::new();
        let entered = Rc::new(Cell::new(0));
        let moved = Rc::new(Cell::new(0));
        let left = Rc::new(Cell::new(0));

        let e = Rc::clone(&entered);
        registry.register(node, event_types::POINTER_ENTER, move |_| e.set(e.get() + 1));
        let m = Rc::clone(&moved);
        let local = Rc::new(Cell::new((0.0f32, 0.0f32)));
        let l2 = Rc::clone(&local);
        registry.register(node, event_types::POINTER_MOVE, move |ctx| {
            m.set(m.get() + 1);
            l2.set((ctx.local_x, ctx.local_y));
        });
        let l = Rc::clone(&left);
        registry.register(node, event_types::POINTER_LEAVE, move |_| l.set(l.get() + 1));

        let mut router = PointerRouter::new();
        router.pointer_move(&tree, &registry, 10.0, 10.0);
        assert_eq!((entered.get(), moved.get(), left.get()), (1, 1, 0));
        assert_eq!(local.get(), (10.0, 10.0));

        router.pointer_move(&tree, &registry, 20.0, 20.0);
        assert_eq!((entered.get(), moved.get(), left.get()), (1, 2, 0));

        router.pointer_move(&tree, &registry, 500.0, 500.0);
        assert_eq!((entered.get(), moved.get(), left.get()), (1, 2, 1));
        assert_eq!(router.hovered_count(), 0);
    }

    #[test]
    fn test_click_requires_hit() {
        let (tree, node) = leaf_tree(50.0);
        let mut registry = HandlerRegistry::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        registry.register(node, event_types::CLICK, move |_| h.set(h.get() + 1));

        let router = PointerRouter::new();
        router.click(&tree, &registry, 500.0, 10.0);
        assert_eq!(hits.get(), 0);
        router.click(&tree, &registry, 50.0, 10.0);
        assert_eq!(hits.get(), 1);
    }
}
