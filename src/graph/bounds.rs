//! Common bound aliases used across graph code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They are zero-cost and only
//! reduce duplication in `where` clauses.

/// Canonical bound set for node identifiers.
///
/// Rationale:
/// - `Clone` because identifiers are typically strings or other owned names;
///   node identity is by equality, never by position or pointer
/// - `Eq + Hash` for `HashMap`-backed index assignment
/// - `Debug` for diagnostics and error messages
pub trait NodeLike: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
impl<T> NodeLike for T where T: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
