//! Layout tree
//!
//! Wraps a taffy flexbox tree with stable slotmap node ids, per-node render
//! props, and section-local tags. Tags are how motion plans address
//! elements: a section tags the nodes it animates at build time and the
//! orchestrator resolves those tags against the section's own subtree -
//! there is no document-global selector.

use crate::element::RenderProps;
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use taffy::{AvailableSpace, Size, Style, TaffyTree};

new_key_type! {
    /// Stable handle to a layout node
    pub struct LayoutNodeId;
}

/// An absolute rectangle in page coordinates (y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

struct NodeData {
    taffy_id: taffy::NodeId,
    children: Vec<LayoutNodeId>,
    props: RenderProps,
    tag: Option<String>,
}

/// The page layout tree
pub struct LayoutTree {
    taffy: TaffyTree<()>,
    nodes: SlotMap<LayoutNodeId, NodeData>,
    /// Tags in registration order; registration order is document order,
    /// which keeps tag-prefix queries deterministic (cards resolve in
    /// response order)
    tags: Vec<(String, LayoutNodeId)>,
    root: Option<LayoutNodeId>,
    rects: SecondaryMap<LayoutNodeId, Rect>,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            nodes: SlotMap::with_key(),
            tags: Vec::new(),
            root: None,
            rects: SecondaryMap::new(),
        }
    }

    /// Create a node with a layout style and render props
    pub fn create_node(&mut self, style: Style, props: RenderProps) -> LayoutNodeId {
        let taffy_id = self
            .taffy
            .new_leaf(style)
            .expect("taffy node creation is infallible");
        self.nodes.insert(NodeData {
            taffy_id,
            children: Vec::new(),
            props,
            tag: None,
        })
    }

    /// Attach `child` under `parent`
    pub fn add_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) {
        let (parent_taffy, child_taffy) = match (self.nodes.get(parent), self.nodes.get(child)) {
            (Some(p), Some(c)) => (p.taffy_id, c.taffy_id),
            _ => {
                tracing::warn!("add_child on a removed node");
                return;
            }
        };
        self.taffy
            .add_child(parent_taffy, child_taffy)
            .expect("taffy add_child with live nodes");
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            parent_data.children.push(child);
        }
    }

    /// Tag a node so motion plans can address it
    pub fn set_tag(&mut self, node: LayoutNodeId, tag: impl Into<String>) {
        let tag = tag.into();
        if let Some(data) = self.nodes.get_mut(node) {
            data.tag = Some(tag.clone());
            self.tags.push((tag, node));
        }
    }

    /// Look up a node by its exact tag
    pub fn node_by_tag(&self, tag: &str) -> Option<LayoutNodeId> {
        self.tags
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, node)| *node)
    }

    /// All nodes whose tag starts with `prefix`, in registration order
    pub fn nodes_by_tag_prefix(&self, prefix: &str) -> Vec<LayoutNodeId> {
        self.tags
            .iter()
            .filter(|(t, _)| t.starts_with(prefix))
            .map(|(_, node)| *node)
            .collect()
    }

    pub fn set_root(&mut self, node: LayoutNodeId) {
        self.root = Some(node);
    }

    pub fn root(&self) -> Option<LayoutNodeId> {
        self.root
    }

    pub fn children(&self, node: LayoutNodeId) -> &[LayoutNodeId] {
        self.nodes
            .get(node)
            .map(|d| d.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn props(&self, node: LayoutNodeId) -> Option<&RenderProps> {
        self.nodes.get(node).map(|d| &d.props)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Compute flexbox layout for the given viewport width
    ///
    /// Height is unconstrained: the page is a vertical document and its
    /// content height falls out of layout. Absolute rects are cached for
    /// `rect` queries until the next compute.
    pub fn compute_layout(&mut self, viewport_width: f32) {
        let Some(root) = self.root else {
            return;
        };
        let Some(root_data) = self.nodes.get(root) else {
            return;
        };
        self.taffy
            .compute_layout(
                root_data.taffy_id,
                Size {
                    width: AvailableSpace::Definite(viewport_width),
                    height: AvailableSpace::MaxContent,
                },
            )
            .expect("taffy layout over live tree");

        self.rects.clear();
        self.cache_rects(root, 0.0, 0.0);
    }

    fn cache_rects(&mut self, node: LayoutNodeId, origin_x: f32, origin_y: f32) {
        let Some(data) = self.nodes.get(node) else {
            return;
        };
        let layout = match self.taffy.layout(data.taffy_id) {
            Ok(layout) => *layout,
            Err(_) => return,
        };
        let rect = Rect {
            x: origin_x + layout.location.x,
            y: origin_y + layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        };
        self.rects.insert(node, rect);

        let children = data.children.clone();
        for child in children {
            self.cache_rects(child, rect.x, rect.y);
        }
    }

    /// Absolute rect of a node from the last `compute_layout`
    pub fn rect(&self, node: LayoutNodeId) -> Option<Rect> {
        self.rects.get(node).copied()
    }

    /// Total laid-out content height
    pub fn content_height(&self) -> f32 {
        self.root
            .and_then(|root| self.rect(root))
            .map(|r| r.height)
            .unwrap_or(0.0)
    }

    /// Attach `child` under `parent` at a specific index
    ///
    /// Document order is layout order; a rebuilt section re-enters at its
    /// old position, not at the end.
    pub fn insert_child(&mut self, parent: LayoutNodeId, index: usize, child: LayoutNodeId) {
        let (parent_taffy, child_taffy) = match (self.nodes.get(parent), self.nodes.get(child)) {
            (Some(p), Some(c)) => (p.taffy_id, c.taffy_id),
            _ => {
                tracing::warn!("insert_child on a removed node");
                return;
            }
        };
        self.taffy
            .insert_child_at_index(parent_taffy, index, child_taffy)
            .expect("taffy insert_child with live nodes");
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            let index = index.min(parent_data.children.len());
            parent_data.children.insert(index, child);
        }
    }

    /// Every node in a subtree, root first
    pub fn subtree_nodes(&self, root: LayoutNodeId) -> Vec<LayoutNodeId> {
        let mut nodes = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if self.nodes.contains_key(node) {
                nodes.push(node);
                stack.extend(self.children(node).iter().copied());
            }
        }
        nodes
    }

    /// Nav sources within one subtree
    pub fn nav_sources_in(&self, root: LayoutNodeId) -> Vec<(LayoutNodeId, String)> {
        self.subtree_nodes(root)
            .into_iter()
            .filter_map(|id| {
                self.nodes
                    .get(id)
                    .and_then(|data| data.props.nav_target.clone())
                    .map(|target| (id, target))
            })
            .collect()
    }

    /// Nodes that navigate to an in-page anchor on click
    pub fn nav_sources(&self) -> Vec<(LayoutNodeId, String)> {
        self.nodes
            .iter()
            .filter_map(|(id, data)| data.props.nav_target.clone().map(|target| (id, target)))
            .collect()
    }

    /// The node carrying an anchor id
    pub fn node_by_anchor(&self, anchor: &str) -> Option<LayoutNodeId> {
        self.nodes
            .iter()
            .find(|(_, data)| data.props.anchor.as_deref() == Some(anchor))
            .map(|(id, _)| id)
    }

    /// Remove a node and its entire subtree
    pub fn remove_subtree(&mut self, node: LayoutNodeId) {
        // Detach from whichever parent references it
        for (_, data) in self.nodes.iter_mut() {
            data.children.retain(|c| *c != node);
        }
        self.remove_recursive(node);
    }

    fn remove_recursive(&mut self, node: LayoutNodeId) {
        let Some(data) = self.nodes.remove(node) else {
            return;
        };
        for child in data.children {
            self.remove_recursive(child);
        }
        let _ = self.taffy.remove(data.taffy_id);
        self.tags.retain(|(_, n)| *n != node);
        self.rects.remove(node);
        if self.root == Some(node) {
            self.root = None;
        }
    }
}
