//! Resource loader
//!
//! Per-key memoized fetching for frame-driven consumers. A key is fetched
//! at most once for the loader's lifetime (unless invalidated), with at
//! most one request in flight per key; consumers poll [`FetchState`] from
//! the frame loop instead of awaiting.
//!
//! Revalidation on window focus / reconnect exists but both options are
//! forced off by the site: the data is near-static and a refetch while the
//! page is animating would thrash card animations.
//!
//! The loader never substitutes fallback content - on failure the state
//! settles to `Failure` and the consumer decides via
//! [`crate::reconcile::reconcile`].

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::Result;

/// State of one keyed request
///
/// Transitions `Loading -> Success | Failure`, terminal on first settle;
/// invalidating the key restarts at `Loading`.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Failure(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }
}

/// Recognized loader options
#[derive(Clone, Copy, Debug)]
pub struct LoaderOptions {
    /// Re-run settled fetchers when the window regains focus
    pub revalidate_on_focus: bool,
    /// Re-run settled fetchers when the network comes back
    pub revalidate_on_reconnect: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            revalidate_on_focus: true,
            revalidate_on_reconnect: true,
        }
    }
}

impl LoaderOptions {
    /// Both revalidations off: fetch once, keep what settled
    pub fn static_content() -> Self {
        Self {
            revalidate_on_focus: false,
            revalidate_on_reconnect: false,
        }
    }
}

type BoxedFuture<T> = Pin<Box<dyn Future<Output = Result<T>> + Send>>;
type Fetcher<T> = Arc<dyn Fn() -> BoxedFuture<T> + Send + Sync>;

struct Entry<T> {
    state: FetchState<T>,
    in_flight: bool,
    fetcher: Fetcher<T>,
}

/// Memoizing, deduplicating loader for one payload type
pub struct ResourceLoader<T> {
    runtime: tokio::runtime::Handle,
    options: LoaderOptions,
    slots: Arc<Mutex<HashMap<String, Entry<T>>>>,
}

impl<T: Send + 'static> ResourceLoader<T> {
    pub fn new(runtime: tokio::runtime::Handle, options: LoaderOptions) -> Self {
        Self {
            runtime,
            options,
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Start fetching `key` if it has never been requested
    ///
    /// Memoized per key: while a request is in flight or after it has
    /// settled, further `load` calls for the same key are no-ops. No
    /// automatic retry on failure.
    pub fn load<F, Fut>(&self, key: &str, fetcher: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        {
            let mut slots = self.slots.lock().unwrap();
            if slots.contains_key(key) {
                return;
            }
            let fetcher: Fetcher<T> = Arc::new(move || Box::pin(fetcher()));
            slots.insert(
                key.to_string(),
                Entry {
                    state: FetchState::Loading,
                    in_flight: true,
                    fetcher,
                },
            );
        }
        debug!(key, "fetch started");
        self.spawn_fetch(key.to_string());
    }

    fn spawn_fetch(&self, key: String) {
        let fetcher = {
            let slots = self.slots.lock().unwrap();
            match slots.get(&key) {
                Some(entry) => Arc::clone(&entry.fetcher),
                None => return,
            }
        };
        let slots = Arc::clone(&self.slots);
        self.runtime.spawn(async move {
            let result = fetcher().await;
            let mut slots = slots.lock().unwrap();
            // The consumer may have detached meanwhile; settling state
            // nobody reads is fine, the data is read-only
            if let Some(entry) = slots.get_mut(&key) {
                entry.state = match result {
                    Ok(value) => FetchState::Success(value),
                    Err(e) => FetchState::Failure(e.to_string()),
                };
                entry.in_flight = false;
            }
        });
    }

    /// Current state for a key; `None` if it was never loaded
    pub fn state(&self, key: &str) -> Option<FetchState<T>>
    where
        T: Clone,
    {
        self.slots
            .lock()
            .unwrap()
            .get(key)
            .map(|entry| entry.state.clone())
    }

    /// Forget a key entirely; the next `load` restarts at `Loading`
    pub fn invalidate(&self, key: &str) {
        self.slots.lock().unwrap().remove(key);
    }

    /// Window regained focus
    pub fn notify_focus(&self) {
        if self.options.revalidate_on_focus {
            self.revalidate_settled();
        }
    }

    /// Network came back
    pub fn notify_reconnect(&self) {
        if self.options.revalidate_on_reconnect {
            self.revalidate_settled();
        }
    }

    fn revalidate_settled(&self) {
        let keys: Vec<String> = {
            let mut slots = self.slots.lock().unwrap();
            let keys: Vec<String> = slots
                .iter()
                .filter(|(_, entry)| !entry.in_flight)
                .map(|(key, _)| key.clone())
                .collect();
            for key in &keys {
                if let Some(entry) = slots.get_mut(key) {
                    entry.state = FetchState::Loading;
                    entry.in_flight = true;
                }
            }
            keys
        };
        for key in keys {
            debug!(key = %key, "revalidating");
            self.spawn_fetch(key);
        }
    }
}
