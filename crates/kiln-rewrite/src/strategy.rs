use kiln_ast::{ClassDecl, Symbol, TreeMaker};

/// A transformation applied to one class declaration.
///
/// Returns the names of the members it synthesized, in the order they were
/// appended.
pub trait SynthesisStrategy {
    fn transform(&self, maker: &TreeMaker, class: &mut ClassDecl) -> Vec<Symbol>;
}

impl<F> SynthesisStrategy for F
where
    F: Fn(&TreeMaker, &mut ClassDecl) -> Vec<Symbol>,
{
    fn transform(&self, maker: &TreeMaker, class: &mut ClassDecl) -> Vec<Symbol> {
        self(maker, class)
    }
}
