use crate::Symbol;

/// An expression inside a method body.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// The receiver, `this`.
    This,
    /// A bare identifier reference.
    Ident(Symbol),
    /// Member selection, `target.name`.
    Select { target: Box<Expr>, name: Symbol },
    /// `target = value`.
    Assign { target: Box<Expr>, value: Box<Expr> },
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    Return(Expr),
    /// An expression evaluated for its effect.
    Exec(Expr),
}

/// A statement block.
///
/// `indent` is a formatting hint carried over from the host; it has no
/// meaning for the rewrite.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub indent: usize,
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}
