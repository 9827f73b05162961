//! In-place rewriting of class declarations.
//!
//! A [`TreeRewriter`] is configured with a [`SynthesisStrategy`] and then
//! pointed at [`Element`]s of a [`Round`]. Each rewrite checks the element's
//! compilation unit out, runs the strategy on the matching class exactly
//! once, and releases the unit.

mod element;
mod error;
mod rewriter;
mod round;
mod strategy;

pub use element::Element;
pub use error::RewriteError;
pub use rewriter::{RewriteOutcome, TreeRewriter};
pub use round::{RewriteGuard, Round, UnitId};
pub use strategy::SynthesisStrategy;
