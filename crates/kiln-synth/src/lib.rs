//! Synthesis of accessor methods and no-argument constructors.
//!
//! [`member`] holds the pure node constructors; the strategies in this crate
//! wrap them so a [`TreeRewriter`](kiln_rewrite::TreeRewriter) can apply them
//! to whole classes.

pub mod member;
pub mod naming;
mod strategy;

pub use strategy::{AppendGetters, AppendNoArgsConstructor, AppendSetters};
