//! Type-erased routables.

use crate::resolve::resolve;
use crate::routable::{Routable, YieldRecipient, YieldsRoutable};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Object-safe view of a concrete routable.
///
/// Implemented for every [`Routable`], so the equality and yield behaviour of
/// the concrete type is fixed when the value is erased.
trait ErasedContent: Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn content_type_id(&self) -> TypeId;

    fn content_type_name(&self) -> &'static str;

    fn content_eq(&self, other: &dyn Any) -> bool;

    fn yielding(&self) -> Option<&dyn YieldsRoutable>;

    fn fmt_content(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<R: Routable> ErasedContent for R {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn content_type_id(&self) -> TypeId {
        TypeId::of::<R>()
    }

    fn content_type_name(&self) -> &'static str {
        std::any::type_name::<R>()
    }

    fn content_eq(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<R>()
            .is_some_and(|other| self == other)
    }

    fn yielding(&self) -> Option<&dyn YieldsRoutable> {
        self.as_yielding()
    }

    fn fmt_content(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A type-erased [`Routable`] value.
///
/// `AnyRoutable` forwards equality comparisons and yielding to the wrapped
/// value while hiding its type. Two erased values are equal only when they
/// wrap the same concrete type and that type's `PartialEq` says so; values of
/// different types are simply unequal.
///
/// Cloning is cheap: the wrapped value is shared.
#[derive(Clone)]
pub struct AnyRoutable {
    content: Arc<dyn ErasedContent>,
}

impl AnyRoutable {
    /// Erase a concrete routable.
    pub fn new<R: Routable>(content: R) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    /// Compare against another erased routable.
    pub fn equals(&self, other: &AnyRoutable) -> bool {
        self.content.content_eq(other.content.as_any())
    }

    /// Whether the wrapped value yields another routable.
    pub fn yields(&self) -> bool {
        self.content.yielding().is_some()
    }

    /// Yield the successor of the wrapped value to `recipient`.
    ///
    /// Does nothing if the wrapped value is terminal.
    pub fn yield_to(&self, recipient: &mut dyn YieldRecipient) {
        if let Some(yielder) = self.content.yielding() {
            yielder.yield_to(recipient);
        }
    }

    /// Recursively yield until reaching a terminal value, handing it to
    /// `recipient`.
    ///
    /// See [`resolve`](fn@crate::resolve) for the cycle caveat.
    pub fn recursively_yield(&self, recipient: &mut dyn YieldRecipient) {
        resolve(self.clone(), recipient);
    }

    /// The `TypeId` of the wrapped value.
    pub fn content_type_id(&self) -> TypeId {
        self.content.content_type_id()
    }

    /// The fully qualified type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.content.content_type_name()
    }

    /// The type name of the wrapped value with module paths removed,
    /// e.g. `Wrapper<Event>`.
    pub fn short_type_name(&self) -> String {
        short_type_name(self.type_name())
    }

    /// Whether the wrapped value is of type `T`.
    pub fn is<T: Routable>(&self) -> bool {
        self.content_type_id() == TypeId::of::<T>()
    }

    /// Borrow the wrapped value as `T`, if that is its type.
    pub fn downcast_ref<T: Routable>(&self) -> Option<&T> {
        self.content.as_any().downcast_ref::<T>()
    }
}

impl PartialEq for AnyRoutable {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for AnyRoutable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.content.fmt_content(f)
    }
}

impl fmt::Display for AnyRoutable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.content.fmt_content(f)
    }
}

/// The name of `T` with module paths removed, e.g. `Wrapper<Event>` for
/// `app::news::Wrapper<app::events::Event>`.
pub fn short_type_name_of<T: ?Sized>() -> String {
    short_type_name(std::any::type_name::<T>())
}

fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;

    for (index, ch) in full.char_indices() {
        if matches!(ch, '<' | '>' | ',' | '(' | ')' | '[' | ']' | ';' | '&' | ' ') {
            short.push_str(last_path_segment(&full[segment_start..index]));
            short.push(ch);
            segment_start = index + ch.len_utf8();
        }
    }

    short.push_str(last_path_segment(&full[segment_start..]));
    short
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
