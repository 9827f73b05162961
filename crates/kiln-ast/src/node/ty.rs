use crate::Symbol;

/// An opaque type reference.
///
/// Types are never resolved here; a getter simply hands back whatever the
/// field declared.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    Void,
    Named(Symbol),
}
