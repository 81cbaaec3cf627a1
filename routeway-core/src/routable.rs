//! # Routable Values
//!
//! A [`Routable`] is a stateless identifier for content in an application. It
//! is compared by value and carries no behaviour of its own: routes perform
//! the lookup and presentation of the content it identifies.
//!
//! # Yielding
//!
//! Some routables describe content indirectly. A deep link, for example,
//! names an event by URL rather than by identifier. Such routables implement
//! [`YieldsRoutable`] and hand a successor routable to a [`YieldRecipient`].
//! The router keeps unwrapping successors until it reaches a value that does
//! not yield (a *terminal* value), and only that value is dispatched.
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, PartialEq)]
//! struct EventRoutable { id: u64 }
//! impl Routable for EventRoutable {}
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct EventLink { path: String }
//!
//! impl Routable for EventLink {
//!     fn as_yielding(&self) -> Option<&dyn YieldsRoutable> {
//!         Some(self)
//!     }
//! }
//!
//! impl YieldsRoutable for EventLink {
//!     fn yield_to(&self, recipient: &mut dyn YieldRecipient) {
//!         if let Some(id) = self.path.strip_prefix("/events/").and_then(|id| id.parse().ok()) {
//!             recipient.yield_value(EventRoutable { id });
//!         }
//!     }
//! }
//! ```

use crate::erased::AnyRoutable;
use crate::resolve::resolve;
use std::fmt::Debug;

/// A value that can be submitted to a router.
///
/// Routables are compared by value (`PartialEq`) and must be thread-safe and
/// `'static` so they can be erased into an [`AnyRoutable`].
///
/// Types that yield another routable override [`as_yielding`](Self::as_yielding)
/// to return `Some(self)`; everything else is terminal.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Routable`",
    label = "missing `Routable` implementation",
    note = "Routables must be `PartialEq + Debug + Send + Sync + 'static`."
)]
pub trait Routable: PartialEq + Debug + Send + Sync + 'static {
    /// Returns the yielding capability of this value, if it has one.
    fn as_yielding(&self) -> Option<&dyn YieldsRoutable> {
        None
    }

    /// Wraps this routable with a type eraser.
    fn erase(self) -> AnyRoutable
    where
        Self: Sized,
    {
        AnyRoutable::new(self)
    }

    /// Recursively yields this routable until reaching a value that does not
    /// yield, handing that value to `recipient`.
    fn recursively_yield(self, recipient: &mut dyn YieldRecipient)
    where
        Self: Sized,
    {
        resolve(AnyRoutable::new(self), recipient);
    }
}

/// A routable that provides another routable in its place.
pub trait YieldsRoutable: Send + Sync {
    /// Hands the successor routable to `recipient`.
    ///
    /// Implementations should yield at most one routable. Yielding nothing is
    /// allowed and means the content could not be described.
    fn yield_to(&self, recipient: &mut dyn YieldRecipient);
}

/// The recipient of yielded routables.
pub trait YieldRecipient {
    /// Consumes a yielded routable.
    fn receive(&mut self, routable: AnyRoutable);
}

impl<F> YieldRecipient for F
where
    F: FnMut(AnyRoutable),
{
    fn receive(&mut self, routable: AnyRoutable) {
        self(routable)
    }
}

impl dyn YieldRecipient + '_ {
    /// Erases `value` and hands it to this recipient.
    pub fn yield_value<R: Routable>(&mut self, value: R) {
        self.receive(AnyRoutable::new(value));
    }
}

macro_rules! terminal_routable {
    ($($ty:ty),* $(,)?) => {
        $(impl Routable for $ty {})*
    };
}

// Common terminal routables
terminal_routable!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Terminal(u32);

    impl Routable for Terminal {}

    #[derive(Debug, Clone, PartialEq)]
    struct Wrapper(Terminal);

    impl Routable for Wrapper {
        fn as_yielding(&self) -> Option<&dyn YieldsRoutable> {
            Some(self)
        }
    }

    impl YieldsRoutable for Wrapper {
        fn yield_to(&self, recipient: &mut dyn YieldRecipient) {
            recipient.yield_value(self.0.clone());
        }
    }

    #[test]
    fn test_terminal_by_default() {
        assert!(Terminal(1).as_yielding().is_none());
        assert!(42_i64.as_yielding().is_none());
    }

    #[test]
    fn test_closure_recipient() {
        let mut received = Vec::new();
        Wrapper(Terminal(7)).recursively_yield(&mut |routable: AnyRoutable| received.push(routable));

        assert_eq!(received, vec![AnyRoutable::new(Terminal(7))]);
    }

    #[test]
    fn test_erase() {
        assert_eq!(Terminal(3).erase(), AnyRoutable::new(Terminal(3)));
    }
}
