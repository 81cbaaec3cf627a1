//! Yield resolution.
//!
//! Reduces any routable to its terminal form by re-applying one rule at every
//! hop: a yielding value is asked to yield to a recursive recipient, a
//! terminal value goes to the final recipient.
//!
//! There is no cycle detection. A routable whose yield chain leads back to
//! itself recurses until the stack overflows; keeping yield chains acyclic is
//! the caller's responsibility.

use crate::erased::AnyRoutable;
use crate::routable::YieldRecipient;

/// Recursively unwraps `routable`, handing every terminal value reached to
/// `recipient`.
pub fn resolve(routable: AnyRoutable, recipient: &mut dyn YieldRecipient) {
    RecursiveUnwrapper { recipient }.receive(routable);
}

struct RecursiveUnwrapper<'a> {
    recipient: &'a mut dyn YieldRecipient,
}

impl YieldRecipient for RecursiveUnwrapper<'_> {
    fn receive(&mut self, routable: AnyRoutable) {
        if routable.yields() {
            routable.yield_to(self);
        } else {
            self.recipient.receive(routable);
        }
    }
}

/// The outcome of resolving a routable for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Resolution reached a terminal value.
    Terminal(AnyRoutable),
    /// A yielding routable produced no successor. Carries the deepest
    /// routable reached.
    Unresolved(AnyRoutable),
}

/// Resolves `routable` to the single terminal value it describes.
///
/// Only the first terminal value reached is kept; anything yielded after it
/// is ignored.
pub fn resolve_terminal(routable: AnyRoutable) -> Resolution {
    let mut capture = TerminalCapture {
        deepest: routable.clone(),
        terminal: None,
    };
    capture.receive(routable);

    match capture.terminal {
        Some(terminal) => Resolution::Terminal(terminal),
        None => Resolution::Unresolved(capture.deepest),
    }
}

struct TerminalCapture {
    deepest: AnyRoutable,
    terminal: Option<AnyRoutable>,
}

impl YieldRecipient for TerminalCapture {
    fn receive(&mut self, routable: AnyRoutable) {
        if self.terminal.is_some() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                ignored = %routable.short_type_name(),
                "routable yielded more than one successor"
            );
            return;
        }

        if routable.yields() {
            #[cfg(feature = "tracing")]
            tracing::trace!(routable = ?routable, "unwrapping yielded routable");
            self.deepest = routable.clone();
            routable.yield_to(self);
        } else {
            self.terminal = Some(routable);
        }
    }
}
