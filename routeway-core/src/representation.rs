//! # External Representations
//!
//! Routing to a concrete routable is the clearest way to invoke a route, but
//! external triggers (deep links, notification payloads, intents) arrive as
//! some opaque representation and lose that meaning. A [`DecoderChain`]
//! restores it: an adapter registers the routable types (or factories) that
//! can be produced from its representation, and the chain tries them in
//! order.
//!
//! # Ordering
//!
//! Decoders are tried in **registration** order and the first one that
//! produces a routable wins. This is deliberately the opposite of the
//! dispatch table, where the last installed route wins.
//!
//! # Lazy evaluation
//!
//! [`DecoderChain::represent`] produces a [`Represented`] routable that holds
//! the raw representation and decodes it only when a router resolves it.
//!
//! ```rust,ignore
//! let mut chain = DecoderChain::<String>::new();
//! chain.register::<EventLink>().register::<NewsLink>();
//! chain.on_undecodable(|raw| Some(UnknownLink(raw.clone()).erase()));
//!
//! let chain = Arc::new(chain);
//! routes.route(chain.represent("/events/42".to_string()))?;
//! ```

use crate::erased::AnyRoutable;
use crate::routable::{Routable, YieldRecipient, YieldsRoutable};
use std::fmt;
use std::sync::Arc;

/// A routable type that can be created from an external representation.
pub trait FromRepresentation<Rep>: Sized {
    /// Attempts to create an instance from `representation`, returning
    /// `None` if it does not describe this type.
    fn from_representation(representation: &Rep) -> Option<Self>;
}

/// A factory that produces routables from an external representation.
pub trait RoutableFactory<Rep>: Send + Sync + 'static {
    /// The routable type this factory produces.
    type Output: Routable;

    /// Attempts to create a routable for `representation`.
    fn make_routable(&self, representation: &Rep) -> Option<Self::Output>;
}

type Decoder<Rep> = Box<dyn Fn(&Rep) -> Option<AnyRoutable> + Send + Sync>;

/// An ordered chain of decoders for one representation type.
pub struct DecoderChain<Rep> {
    decoders: Vec<Decoder<Rep>>,
    fallback: Option<Decoder<Rep>>,
}

impl<Rep: 'static> DecoderChain<Rep> {
    /// Create a chain with no decoders and no fallback.
    pub fn new() -> Self {
        Self {
            decoders: Vec::new(),
            fallback: None,
        }
    }

    /// Registers a routable type constructed through [`FromRepresentation`].
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: Routable + FromRepresentation<Rep>,
    {
        self.decoders.push(Box::new(|representation: &Rep| {
            T::from_representation(representation).map(AnyRoutable::new)
        }));
        self
    }

    /// Registers a factory object.
    pub fn register_factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: RoutableFactory<Rep>,
    {
        self.decoders.push(Box::new(move |representation: &Rep| {
            factory.make_routable(representation).map(AnyRoutable::new)
        }));
        self
    }

    /// Registers a decoding closure.
    pub fn register_fn<R, F>(&mut self, decode: F) -> &mut Self
    where
        R: Routable,
        F: Fn(&Rep) -> Option<R> + Send + Sync + 'static,
    {
        self.decoders.push(Box::new(move |representation: &Rep| {
            decode(representation).map(AnyRoutable::new)
        }));
        self
    }

    /// Sets the hook invoked when no decoder matches.
    ///
    /// The hook runs at most once per resolution, and only after every
    /// decoder has declined. It may return a substitute routable (e.g. an
    /// "unknown link" marker) or `None`. Setting it again replaces the
    /// previous hook.
    pub fn on_undecodable<F>(&mut self, fallback: F) -> &mut Self
    where
        F: Fn(&Rep) -> Option<AnyRoutable> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Decodes `representation` with the first decoder that accepts it.
    ///
    /// Falls back to the [`on_undecodable`](Self::on_undecodable) hook when
    /// every decoder declines, and to `None` when there is no hook.
    pub fn resolve(&self, representation: &Rep) -> Option<AnyRoutable> {
        if let Some(routable) = self
            .decoders
            .iter()
            .find_map(|decode| decode(representation))
        {
            return Some(routable);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            decoders = self.decoders.len(),
            fallback = self.fallback.is_some(),
            "no decoder accepted representation"
        );

        self.fallback
            .as_ref()
            .and_then(|fallback| fallback(representation))
    }

    /// Number of registered decoders.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether no decoder is registered.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Whether an undecodable hook is set.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Wraps `representation` into a routable that is decoded by this chain
    /// when it is routed.
    pub fn represent(self: &Arc<Self>, representation: Rep) -> Represented<Rep> {
        Represented {
            representation,
            chain: Arc::clone(self),
        }
    }
}

impl<Rep: 'static> Default for DecoderChain<Rep> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Rep> fmt::Debug for DecoderChain<Rep> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderChain")
            .field("decoders", &self.decoders.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

/// A routable defined by an external representation.
///
/// Yields whatever its chain decodes from the representation, or nothing at
/// all when the chain cannot decode it and has no fallback.
pub struct Represented<Rep> {
    representation: Rep,
    chain: Arc<DecoderChain<Rep>>,
}

impl<Rep> Represented<Rep> {
    /// The representation this routable was created with.
    pub fn representation(&self) -> &Rep {
        &self.representation
    }

    /// The chain used to decode the representation.
    pub fn chain(&self) -> &Arc<DecoderChain<Rep>> {
        &self.chain
    }
}

impl<Rep: Clone> Clone for Represented<Rep> {
    fn clone(&self) -> Self {
        Self {
            representation: self.representation.clone(),
            chain: Arc::clone(&self.chain),
        }
    }
}

impl<Rep: PartialEq> PartialEq for Represented<Rep> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.chain, &other.chain) && self.representation == other.representation
    }
}

impl<Rep: fmt::Debug> fmt::Debug for Represented<Rep> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Represented")
            .field("representation", &self.representation)
            .finish()
    }
}

impl<Rep> Routable for Represented<Rep>
where
    Rep: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    fn as_yielding(&self) -> Option<&dyn YieldsRoutable> {
        Some(self)
    }
}

impl<Rep> YieldsRoutable for Represented<Rep>
where
    Rep: Send + Sync + 'static,
{
    fn yield_to(&self, recipient: &mut dyn YieldRecipient) {
        if let Some(routable) = self.chain.resolve(&self.representation) {
            recipient.receive(routable);
        }
    }
}
