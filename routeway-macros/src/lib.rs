//! Procedural macros for Routeway.
//!
//! Use these through the `routeway` facade crate; the generated code refers
//! to `::routeway` paths.

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

mod routable;
mod route;

/// Derive macro for implementing `Routable`.
///
/// The type must also be `PartialEq + Debug + Send + Sync + 'static`.
/// Annotate with `#[routable(yields)]` for types that yield another routable;
/// such types implement `YieldsRoutable` by hand.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, PartialEq, Routable)]
/// struct EventRoutable { id: u64 }
///
/// #[derive(Debug, Clone, PartialEq, Routable)]
/// #[routable(yields)]
/// struct EventLink { path: String }
/// ```
#[proc_macro_derive(Routable, attributes(routable))]
pub fn derive_routable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    routable::derive_routable_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Turns a function taking `&Content` into a unit-struct `Route`.
///
/// The struct takes the function's name unless `name = "..."` is given.
///
/// ```rust,ignore
/// #[route]
/// fn show_event(event: &EventRoutable) {
///     println!("showing event {}", event.id);
/// }
///
/// let routes = routes![show_event];
/// ```
#[proc_macro_attribute]
pub fn route(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as route::RouteArgs);
    let input = parse_macro_input!(item as ItemFn);

    route::route_impl(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
