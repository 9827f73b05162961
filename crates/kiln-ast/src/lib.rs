//! Declaration model for class augmentation.
//!
//! Compilation units own classes, classes own an ordered member list, and
//! every node is created through a [`TreeMaker`] so identifiers and
//! declaration ids are consistent across a round.

mod access;
mod intern;
mod maker;
mod node;
mod symbol;

pub mod visitor;

pub use access::{AccessLevel, Modifiers};
pub use intern::{InternKey, InternTable};
pub use maker::TreeMaker;
pub use node::{
    Block, ClassDecl, CompilationUnit, DeclId, ElementKind, Expr, FieldDecl, Marker, MarkerKind,
    Member, MethodDecl, Param, SourceOrigin, Stmt, TypeKind, TypeRef,
};
pub use symbol::{INIT_NAME, Names, Symbol};
