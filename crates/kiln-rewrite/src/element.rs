use kiln_ast::{DeclId, ElementKind, Symbol};

use crate::UnitId;

/// A handle to one declaration of a round: which unit it lives in, which node
/// it is, and what kind of declaration that node is.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Element {
    pub unit: UnitId,
    pub decl: DeclId,
    pub kind: ElementKind,
    pub name: Symbol,
}

impl Element {
    pub fn is_class(&self) -> bool {
        self.kind == ElementKind::Class
    }
}
