//! Integration tests for routeway macros.

#![cfg(feature = "macros")]

use routeway::testing::assert_yields;
use routeway::{
    AnyRoutable, Routable, Route, RouteMissing, Router, YieldRecipient, YieldsRoutable, routes,
};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Routable)]
struct EventRoutable {
    id: u64,
}

#[derive(Debug, Clone, PartialEq, Routable)]
#[routable(yields)]
struct EventLink {
    path: String,
}

impl YieldsRoutable for EventLink {
    fn yield_to(&self, recipient: &mut dyn YieldRecipient) {
        if let Some(id) = self
            .path
            .strip_prefix("/events/")
            .and_then(|id| id.parse().ok())
        {
            recipient.yield_value(EventRoutable { id });
        }
    }
}

#[derive(Debug, Clone, PartialEq, Routable)]
struct Tagged<T> {
    tag: T,
}

static SHOWN: Mutex<Vec<u64>> = Mutex::new(Vec::new());

/// Shows an event.
#[routeway::route]
fn show_event(event: &EventRoutable) {
    SHOWN.lock().unwrap().push(event.id);
}

#[routeway::route(name = "ShowTag")]
fn show_tag(_tagged: &Tagged<&'static str>) {}

#[test]
fn test_derived_routable_is_terminal() {
    assert!(EventRoutable { id: 1 }.as_yielding().is_none());
    assert_eq!(
        EventRoutable { id: 1 }.erase(),
        AnyRoutable::new(EventRoutable { id: 1 })
    );
}

#[test]
fn test_derived_yielding_routable() {
    assert!(
        EventLink {
            path: "/events/2".into()
        }
        .as_yielding()
        .is_some()
    );
    assert_yields(
        EventLink {
            path: "/events/2".into(),
        },
        EventRoutable { id: 2 },
    );
}

#[test]
fn test_route_attribute_generates_route() {
    let routes = routes![show_event];

    routes
        .route(EventLink {
            path: "/events/77".into(),
        })
        .unwrap();

    assert!(SHOWN.lock().unwrap().contains(&77));
}

#[test]
fn test_route_attribute_with_name_and_generic_parameter() {
    let route = ShowTag;
    route.route(&Tagged { tag: "news" });

    let routes = routes![ShowTag];
    assert!(routes.route(Tagged { tag: "news" }).is_ok());
    assert!(matches!(
        routes.route(Tagged { tag: 1_u8 }),
        Err(RouteMissing::NoRoute(_))
    ));
}
