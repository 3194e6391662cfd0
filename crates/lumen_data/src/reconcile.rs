//! Fallback reconciliation
//!
//! The pure decision between loading indicator, backend data, static
//! fallback, and an explicit failure state. Separated from the fetch
//! mechanics so the whole policy is testable as a function.

use crate::loader::FetchState;

/// What the consumer should render for a collection
#[derive(Clone, Debug, PartialEq)]
pub enum Reconciled<T> {
    /// Request not settled: render the loading indicator
    Loading,
    /// Render these items (backend data or fallback), possibly empty
    Items(Vec<T>),
    /// Request failed and there is no fallback: render an explicit
    /// "unable to load" message with the raw error text
    Unavailable { error: String },
}

impl<T> Reconciled<T> {
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Reconciled::Items(items) => Some(items),
            _ => None,
        }
    }
}

/// Decide what to render from a fetch state and a static fallback
///
/// - `Loading` stays loading.
/// - `Success` renders the backend items as-is - an empty result is an
///   empty grid, never the fallback and never an error.
/// - `Failure` substitutes the fallback when there is one; an empty
///   fallback surfaces the error instead.
pub fn reconcile<T: Clone>(state: &FetchState<Vec<T>>, fallback: &[T]) -> Reconciled<T> {
    match state {
        FetchState::Loading => Reconciled::Loading,
        FetchState::Success(items) => Reconciled::Items(items.clone()),
        FetchState::Failure(error) => {
            if fallback.is_empty() {
                Reconciled::Unavailable {
                    error: error.clone(),
                }
            } else {
                Reconciled::Items(fallback.to_vec())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    fn fallback() -> Vec<Project> {
        vec![Project {
            title: "Analytics Dashboard".into(),
            ..Project::default()
        }]
    }

    #[test]
    fn test_loading_stays_loading() {
        let state: FetchState<Vec<Project>> = FetchState::Loading;
        assert_eq!(reconcile(&state, &fallback()), Reconciled::Loading);
    }

    #[test]
    fn test_failure_substitutes_fallback() {
        let state: FetchState<Vec<Project>> = FetchState::Failure("HTTP 502".into());
        let reconciled = reconcile(&state, &fallback());
        let items = reconciled.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Analytics Dashboard");
    }

    #[test]
    fn test_success_empty_renders_empty_grid() {
        let state: FetchState<Vec<Project>> = FetchState::Success(Vec::new());
        let reconciled = reconcile(&state, &fallback());
        assert_eq!(reconciled.items().unwrap().len(), 0);
    }

    #[test]
    fn test_success_renders_backend_items_in_order() {
        let projects: Vec<Project> = ["First", "Second", "Third"]
            .iter()
            .map(|title| Project {
                title: (*title).into(),
                ..Project::default()
            })
            .collect();
        let state = FetchState::Success(projects.clone());
        let reconciled = reconcile(&state, &fallback());
        assert_eq!(reconciled.items().unwrap(), projects.as_slice());
    }

    #[test]
    fn test_failure_with_empty_fallback_is_unavailable() {
        let state: FetchState<Vec<Project>> = FetchState::Failure("HTTP 404".into());
        match reconcile(&state, &[]) {
            Reconciled::Unavailable { error } => assert_eq!(error, "HTTP 404"),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }
}
