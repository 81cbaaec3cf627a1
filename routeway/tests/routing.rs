//! Integration tests for routing through a `Routes` table.

mod common;

use common::{EventRoutable, NamedRoute, NewsArticleRoutable, entries, new_log, wrap};
use routeway::{
    AnyRoutable, DispatchResult, Dispatcher, Routable, RouteMissing, Router, Routes,
    YieldRecipient, YieldsRoutable, route_fn,
};
use std::sync::Arc;

#[test]
fn test_routes_to_matching_route() {
    let log = new_log();
    let mut routes = Routes::new();
    routes.install(NamedRoute::<EventRoutable>::new("event", &log));
    routes.install(NamedRoute::<NewsArticleRoutable>::new("news", &log));

    routes.route(EventRoutable { id: 1 }).unwrap();
    routes.route(NewsArticleRoutable { id: 2 }).unwrap();

    assert_eq!(
        entries(&log),
        vec![
            "event:EventRoutable { id: 1 }",
            "news:NewsArticleRoutable { id: 2 }"
        ]
    );
}

#[test]
fn test_later_dispatcher_wins_and_earlier_is_never_invoked() {
    let log = new_log();
    let mut routes = Routes::new();
    routes
        .install(NamedRoute::<EventRoutable>::new("d1", &log))
        .install(NamedRoute::<EventRoutable>::new("d2", &log));

    routes.route(EventRoutable { id: 3 }).unwrap();

    assert_eq!(entries(&log), vec!["d2:EventRoutable { id: 3 }"]);
}

#[test]
fn test_unmatched_type_is_route_missing_carrying_value() {
    let mut routes = Routes::new();
    routes.install(route_fn(|_: &EventRoutable| {}));

    let error = routes.route(NewsArticleRoutable { id: 4 }).unwrap_err();

    assert!(matches!(error, RouteMissing::NoRoute(_)));
    assert_eq!(
        error.routable(),
        &AnyRoutable::new(NewsArticleRoutable { id: 4 })
    );
    assert_eq!(
        error.to_string(),
        "No route configured for content represented by NewsArticleRoutable"
    );
}

#[test]
fn test_route_missing_carries_terminal_not_wrapper() {
    let routes = Routes::new();

    let error = routes.route(wrap(wrap(EventRoutable { id: 5 }))).unwrap_err();

    assert_eq!(error.into_routable(), AnyRoutable::new(EventRoutable { id: 5 }));
}

#[test]
fn test_two_hop_wrapper_reaches_terminal_route() {
    let log = new_log();
    let mut routes = Routes::new();
    routes.install(NamedRoute::<EventRoutable>::new("event", &log));

    routes.route(wrap(wrap(EventRoutable { id: 6 }))).unwrap();

    assert_eq!(entries(&log), vec!["event:EventRoutable { id: 6 }"]);
}

#[test]
fn test_wrapper_routes_are_not_offered_the_wrapper() {
    let log = new_log();
    let mut routes = Routes::new();
    routes.install(NamedRoute::<common::Wrapper<EventRoutable>>::new("wrapper", &log));

    let error = routes.route(wrap(EventRoutable { id: 7 })).unwrap_err();

    assert!(entries(&log).is_empty());
    assert!(error.routable().is::<EventRoutable>());
}

#[derive(Debug, Clone, PartialEq)]
struct Unresolvable;

impl Routable for Unresolvable {
    fn as_yielding(&self) -> Option<&dyn YieldsRoutable> {
        Some(self)
    }
}

impl YieldsRoutable for Unresolvable {
    fn yield_to(&self, _recipient: &mut dyn YieldRecipient) {}
}

#[test]
fn test_yielding_nothing_is_reported() {
    let mut routes = Routes::new();
    routes.install(route_fn(|_: &Unresolvable| {}));

    let error = routes.route(wrap(Unresolvable)).unwrap_err();

    assert!(matches!(error, RouteMissing::NothingYielded(_)));
    assert_eq!(error.routable(), &AnyRoutable::new(Unresolvable));
    assert_eq!(
        error.to_string(),
        "Unresolvable did not yield any content to route"
    );
}

#[test]
fn test_child_table_overrides_parent_route() {
    let log = new_log();
    let mut parent = Routes::new();
    parent.install(NamedRoute::<EventRoutable>::new("route_x", &log));

    let mut child = Routes::new();
    child.install(NamedRoute::<NewsArticleRoutable>::new("news", &log));
    child.install(NamedRoute::<EventRoutable>::new("route_y", &log));
    parent.install(child);

    parent.route(EventRoutable { id: 8 }).unwrap();
    parent.route(NewsArticleRoutable { id: 9 }).unwrap();

    assert_eq!(
        entries(&log),
        vec![
            "route_y:EventRoutable { id: 8 }",
            "news:NewsArticleRoutable { id: 9 }"
        ]
    );
}

#[test]
fn test_routes_dispatcher_result() {
    let mut routes = Routes::new();
    routes.install(route_fn(|_: &EventRoutable| {}));

    assert_eq!(
        routes.dispatch(&AnyRoutable::new(EventRoutable { id: 1 })),
        DispatchResult::Dispatched
    );
    assert_eq!(
        routes.dispatch(&AnyRoutable::new(NewsArticleRoutable { id: 1 })),
        DispatchResult::NotDispatched
    );
}

struct EvenIdsOnly;

impl Dispatcher for EvenIdsOnly {
    fn dispatch(&self, routable: &AnyRoutable) -> DispatchResult {
        match routable.downcast_ref::<EventRoutable>() {
            Some(event) if event.id % 2 == 0 => DispatchResult::Dispatched,
            _ => DispatchResult::NotDispatched,
        }
    }
}

#[test]
fn test_declining_dispatcher_falls_through_to_earlier_one() {
    let log = new_log();
    let mut routes = Routes::new();
    routes.install(NamedRoute::<EventRoutable>::new("fallback", &log));
    routes.install_dispatcher(EvenIdsOnly);

    routes.route(EventRoutable { id: 2 }).unwrap();
    routes.route(EventRoutable { id: 3 }).unwrap();

    assert_eq!(entries(&log), vec!["fallback:EventRoutable { id: 3 }"]);
}

#[test]
fn test_shared_router_across_threads() {
    let log = new_log();
    let mut routes = Routes::new();
    routes.install(NamedRoute::<EventRoutable>::new("event", &log));
    let router: Arc<dyn Router> = Arc::new(routes);

    let handles: Vec<_> = (0..4)
        .map(|id| {
            let router = router.clone();
            std::thread::spawn(move || router.route(EventRoutable { id }))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(entries(&log).len(), 4);
}
