pub mod class;
pub mod marker;
pub mod member;
pub mod stmt;
pub mod ty;
pub mod unit;

pub use class::{ClassDecl, DeclId, TypeKind};
pub use marker::{Marker, MarkerKind};
pub use member::{FieldDecl, Member, MethodDecl, Param};
pub use stmt::{Block, Expr, Stmt};
pub use ty::TypeRef;
pub use unit::{CompilationUnit, SourceOrigin};

/// The kind of a declaration as seen by marker discovery.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Class,
    Interface,
    Enum,
    Field,
    Method,
    Constructor,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ElementKind::Class => "class",
            ElementKind::Interface => "interface",
            ElementKind::Enum => "enum",
            ElementKind::Field => "field",
            ElementKind::Method => "method",
            ElementKind::Constructor => "constructor",
        };
        f.write_str(text)
    }
}
