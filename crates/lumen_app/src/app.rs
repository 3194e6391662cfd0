//! The portfolio application
//!
//! Owns the layout tree, the animation scheduler, the page scroll, and
//! the mounted sections. A platform embedding (or a test) feeds it input
//! events and calls [`PortfolioApp::frame`] once per display frame:
//!
//! 1. scroll physics tick
//! 2. animation scheduler tick
//! 3. per-section trigger/scrub evaluation at the new scroll offset
//! 4. queued anchor navigation
//! 5. loader poll; when the projects request settles, the projects
//!    section is fully torn down and rebuilt with the reconciled data
//!
//! Mounting and unmounting go through each section's animation scope, so
//! detaching the page leaves zero animations and zero listeners behind.

use std::cell::RefCell;
use std::rc::Rc;

use lumen_animation::AnimationScheduler;
use lumen_data::{
    reconcile, ApiClient, LoaderOptions, Project, Reconciled, ResourceLoader,
};
use lumen_site::sections::ProjectsSection;
use lumen_site::{fallback, Page, Section, Theme};
use lumen_ui::{
    div, event_types, ElementBuilder, HandlerRegistry, LayoutNodeId, LayoutTree, PageScroll,
    PointerRouter, SectionMotion, Viewport,
};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::Result;

/// Loader key for the projects collection
const PROJECTS_KEY: &str = "/projects/";

struct MountedSection {
    id: &'static str,
    root: LayoutNodeId,
    motion: SectionMotion,
}

/// The running portfolio page
pub struct PortfolioApp {
    theme: Theme,
    runtime: tokio::runtime::Runtime,
    client: ApiClient,
    loader: ResourceLoader<Vec<Project>>,
    scheduler: AnimationScheduler,
    scroll: PageScroll,
    tree: LayoutTree,
    registry: HandlerRegistry,
    router: PointerRouter,
    page_root: LayoutNodeId,
    sections: Vec<MountedSection>,
    /// Anchor targets clicked since the last frame
    nav_requests: Rc<RefCell<Vec<String>>>,
    /// Whether the settled projects state has been rendered
    projects_rendered: bool,
}

impl PortfolioApp {
    /// Build the page, attach every section, and start the projects fetch
    pub fn new(config: AppConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let client = ApiClient::new(&config.api_base_url)?;
        // Near-static data: never refetch on focus or reconnect, a refetch
        // mid-view would thrash the card animations
        let loader = ResourceLoader::new(runtime.handle().clone(), LoaderOptions::static_content());

        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        let mut tree = LayoutTree::new();
        let mut registry = HandlerRegistry::new();
        let page_root = div().w_full().build(&mut tree, &mut registry);
        tree.set_root(page_root);

        let mut app = Self {
            theme: Theme::default(),
            runtime,
            client,
            loader,
            scheduler: AnimationScheduler::new(),
            scroll: PageScroll::new(viewport),
            tree,
            registry,
            router: PointerRouter::new(),
            page_root,
            sections: Vec::new(),
            nav_requests: Rc::new(RefCell::new(Vec::new())),
            projects_rendered: false,
        };
        app.mount_all();
        app.start_projects_fetch();
        info!(sections = app.sections.len(), "page mounted");
        Ok(app)
    }

    fn mount_all(&mut self) {
        let theme = self.theme;
        let page = Page::standard(Reconciled::Loading);
        let mut pending = Vec::new();
        for section in page.sections() {
            let view = section.build(&theme);
            let root = view.element.build(&mut self.tree, &mut self.registry);
            self.tree.add_child(self.page_root, root);
            pending.push((section.id(), root, view.plan));
        }
        self.relayout();
        for (id, root, plan) in pending {
            self.register_nav_handlers(root);
            let motion = SectionMotion::attach(
                &plan,
                &self.tree,
                &mut self.registry,
                self.scheduler.handle(),
                self.scroll.viewport(),
                self.scroll.offset(),
            );
            self.sections.push(MountedSection { id, root, motion });
        }
    }

    fn start_projects_fetch(&self) {
        let client = self.client.clone();
        self.loader.load(PROJECTS_KEY, move || {
            let client = client.clone();
            async move { client.projects().await }
        });
    }

    /// Click handlers for every element with a nav target in the subtree
    fn register_nav_handlers(&mut self, root: LayoutNodeId) {
        for (node, target) in self.tree.nav_sources_in(root) {
            let requests = Rc::clone(&self.nav_requests);
            self.registry.register(node, event_types::CLICK, move |_| {
                requests.borrow_mut().push(target.clone());
            });
        }
    }

    /// Recompute layout and re-resolve every section's trigger geometry
    fn relayout(&mut self) {
        let viewport = self.scroll.viewport();
        self.tree.compute_layout(viewport.width);
        self.scroll.set_content_height(self.tree.content_height());
        for section in &mut self.sections {
            section.motion.relayout(&self.tree, viewport);
        }
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance the app by `dt` seconds
    pub fn frame(&mut self, dt: f32) {
        self.scroll.tick(dt);
        self.scheduler.tick(dt);

        let offset = self.scroll.offset();
        let direction = self.scroll.direction();
        for section in &mut self.sections {
            section.motion.update(offset, direction);
        }

        let requests: Vec<String> = self.nav_requests.borrow_mut().drain(..).collect();
        for target in requests {
            self.scroll_to_anchor(&target);
        }

        self.poll_projects();
    }

    fn poll_projects(&mut self) {
        if self.projects_rendered {
            return;
        }
        let Some(state) = self.loader.state(PROJECTS_KEY) else {
            return;
        };
        if state.is_loading() {
            return;
        }
        self.projects_rendered = true;
        let content = reconcile(&state, &fallback::projects());
        self.rebuild_projects(content);
    }

    /// Tear the projects section down and rebuild it with settled data
    ///
    /// The full revert-and-rebuild is what prevents duplicate bindings
    /// when the card set changes shape under the fallback render.
    fn rebuild_projects(&mut self, content: Reconciled<Project>) {
        let Some(index) = self.sections.iter().position(|s| s.id == "projects") else {
            return;
        };
        {
            let section = &mut self.sections[index];
            section.motion.detach(&mut self.registry);
            for node in self.tree.subtree_nodes(section.root) {
                self.registry.remove_node(node);
            }
            self.tree.remove_subtree(section.root);
        }

        let theme = self.theme;
        let view = ProjectsSection::new(content).build(&theme);
        let root = view.element.build(&mut self.tree, &mut self.registry);
        self.tree.insert_child(self.page_root, index, root);
        self.relayout();
        self.register_nav_handlers(root);
        let motion = SectionMotion::attach(
            &view.plan,
            &self.tree,
            &mut self.registry,
            self.scheduler.handle(),
            self.scroll.viewport(),
            self.scroll.offset(),
        );
        self.sections[index] = MountedSection {
            id: "projects",
            root,
            motion,
        };
        info!("projects section rebuilt");
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Scroll input delta in pixels (positive = down)
    pub fn scroll_by(&mut self, delta_y: f32) {
        self.scroll.apply_delta(delta_y);
    }

    /// Pointer moved, in viewport coordinates
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let page_y = y + self.scroll.offset();
        self.router
            .pointer_move(&self.tree, &self.registry, x, page_y);
    }

    /// Pointer left the window
    pub fn pointer_left(&mut self) {
        self.router.pointer_leave_all(&self.registry);
    }

    /// Click at viewport coordinates
    pub fn click(&mut self, x: f32, y: f32) {
        let page_y = y + self.scroll.offset();
        self.router.click(&self.tree, &self.registry, x, page_y);
    }

    /// Navigate to a section anchor directly
    pub fn click_anchor(&mut self, anchor: &str) {
        self.scroll_to_anchor(anchor);
    }

    /// Viewport resized; recompute layout and trigger geometry
    pub fn resize(&mut self, width: f32, height: f32) {
        self.scroll.set_viewport(Viewport::new(width, height));
        self.relayout();
    }

    /// Window regained focus (forwarded to the loader's revalidation)
    pub fn notify_focus(&self) {
        self.loader.notify_focus();
    }

    /// Network came back (forwarded to the loader's revalidation)
    pub fn notify_reconnect(&self) {
        self.loader.notify_reconnect();
    }

    fn scroll_to_anchor(&mut self, anchor: &str) {
        match self
            .tree
            .node_by_anchor(anchor)
            .and_then(|node| self.tree.rect(node))
        {
            Some(rect) => self.scroll.scroll_to(rect.top()),
            None => debug!(anchor, "no section for anchor"),
        }
    }

    // =========================================================================
    // Lifecycle and inspection
    // =========================================================================

    /// Unmount every section: end scopes, remove subtrees and handlers
    pub fn detach_all(&mut self) {
        let sections: Vec<MountedSection> = self.sections.drain(..).collect();
        for mut section in sections {
            section.motion.detach(&mut self.registry);
            for node in self.tree.subtree_nodes(section.root) {
                self.registry.remove_node(node);
            }
            self.tree.remove_subtree(section.root);
        }
        self.router.pointer_leave_all(&self.registry);
        info!("page detached");
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn scroll(&self) -> &PageScroll {
        &self.scroll
    }

    pub fn section_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.id).collect()
    }

    /// Total animations registered with the scheduler
    pub fn animation_count(&self) -> usize {
        self.scheduler.animation_count()
    }

    /// Total event handlers registered across the tree
    pub fn handler_count(&self) -> usize {
        self.registry.handler_count()
    }

    /// Whether the projects request has settled and been rendered
    pub fn projects_settled(&self) -> bool {
        self.projects_rendered
    }

    /// Current animated values for one section's targets
    pub fn motion_state(
        &self,
        section_id: &str,
    ) -> Option<std::collections::HashMap<LayoutNodeId, lumen_ui::NodeMotion>> {
        self.sections
            .iter()
            .find(|s| s.id == section_id)
            .map(|s| s.motion.motion_state())
    }

    /// Handle to the owned async runtime (the network boundary)
    pub fn runtime(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }
}
