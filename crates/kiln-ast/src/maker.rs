//! Tree-construction facility.
//!
//! Every node that enters a compilation unit, parsed or synthesized, is built
//! here so that declaration ids stay unique within a round.

use std::cell::Cell;

use crate::node::*;
use crate::{AccessLevel, Modifiers, Names, Symbol};

#[derive(Debug, Default)]
pub struct TreeMaker {
    names: Names,
    next_decl: Cell<usize>,
}

impl TreeMaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    /// Intern an identifier.
    pub fn name(&self, text: impl Into<String>) -> Symbol {
        self.names.intern(text)
    }

    fn next_id(&self) -> DeclId {
        let id = self.next_decl.get();
        self.next_decl.set(id + 1);
        DeclId(id)
    }

    pub fn type_ident(&self, name: impl Into<String>) -> TypeRef {
        TypeRef::Named(self.name(name))
    }

    pub fn void_type(&self) -> TypeRef {
        TypeRef::Void
    }

    pub fn param(&self, name: Symbol, ty: TypeRef) -> Param {
        Param { name, ty }
    }

    pub fn ident(&self, name: Symbol) -> Expr {
        Expr::Ident(name)
    }

    pub fn this(&self) -> Expr {
        Expr::This
    }

    pub fn select(&self, target: Expr, name: Symbol) -> Expr {
        Expr::Select {
            target: Box::new(target),
            name,
        }
    }

    pub fn assign(&self, target: Expr, value: Expr) -> Expr {
        Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn exec(&self, expr: Expr) -> Stmt {
        Stmt::Exec(expr)
    }

    pub fn ret(&self, expr: Expr) -> Stmt {
        Stmt::Return(expr)
    }

    pub fn block(&self, indent: usize, stmts: Vec<Stmt>) -> Block {
        Block { indent, stmts }
    }

    /// Modifier flags for `access`.
    pub fn modifiers(&self, access: AccessLevel) -> Modifiers {
        Modifiers::from(access)
    }
}

#[bon::bon]
impl TreeMaker {
    /// Build a method declaration.
    ///
    /// ```ignore
    /// let getter = maker
    ///     .method_def()
    ///     .modifiers(AccessLevel::Public.into())
    ///     .name(maker.name("getName"))
    ///     .return_type(field.ty)
    ///     .body(maker.block(1, vec![maker.ret(maker.ident(field.name))]))
    ///     .new();
    /// ```
    #[builder(finish_fn = new)]
    pub fn method_def(
        &self,
        name: Symbol,
        /// Absent only for constructors.
        return_type: Option<TypeRef>,
        #[builder(default)] modifiers: Modifiers,
        #[builder(default)] params: Vec<Param>,
        #[builder(default)] body: Block,
        #[builder(default)] markers: Vec<Marker>,
    ) -> MethodDecl {
        MethodDecl {
            id: self.next_id(),
            name,
            modifiers,
            return_type,
            params,
            body,
            markers,
        }
    }

    /// Build a constructor: a method named [`Names::init`] without a return type.
    #[builder(finish_fn = new)]
    pub fn constructor_def(
        &self,
        #[builder(default)] modifiers: Modifiers,
        #[builder(default)] params: Vec<Param>,
        #[builder(default)] body: Block,
        #[builder(default)] markers: Vec<Marker>,
    ) -> MethodDecl {
        MethodDecl {
            id: self.next_id(),
            name: self.names.init(),
            modifiers,
            return_type: None,
            params,
            body,
            markers,
        }
    }

    #[builder(finish_fn = new)]
    pub fn field_def(
        &self,
        name: Symbol,
        ty: TypeRef,
        #[builder(default)] modifiers: Modifiers,
        #[builder(default)] markers: Vec<Marker>,
    ) -> FieldDecl {
        FieldDecl {
            id: self.next_id(),
            name,
            ty,
            modifiers,
            markers,
        }
    }

    #[builder(finish_fn = new)]
    pub fn class_def(
        &self,
        name: Symbol,
        #[builder(default)] kind: TypeKind,
        #[builder(default)] modifiers: Modifiers,
        #[builder(default)] markers: Vec<Marker>,
        #[builder(default)] members: Vec<Member>,
    ) -> ClassDecl {
        ClassDecl {
            id: self.next_id(),
            name,
            kind,
            modifiers,
            markers,
            members,
        }
    }

    #[builder(finish_fn = new)]
    pub fn compilation_unit(
        &self,
        #[builder(into)] file_name: String,
        #[builder(into)] package: Option<String>,
        #[builder(default)] origin: SourceOrigin,
        #[builder(default)] types: Vec<ClassDecl>,
    ) -> CompilationUnit {
        CompilationUnit {
            file_name,
            package,
            origin,
            types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decl_ids_are_unique() {
        let maker = TreeMaker::new();
        let a = maker
            .field_def()
            .name(maker.name("a"))
            .ty(maker.type_ident("int"))
            .new();
        let b = maker
            .field_def()
            .name(maker.name("a"))
            .ty(maker.type_ident("int"))
            .new();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_constructor_def_uses_init_name() {
        let maker = TreeMaker::new();
        let ctor = maker
            .constructor_def()
            .modifiers(AccessLevel::Private.into())
            .new();
        assert!(ctor.is_constructor(maker.names()));
        assert_eq!(ctor.return_type, None);
        assert_eq!(ctor.arity(), 0);
        assert_eq!(ctor.modifiers.access(), Some(AccessLevel::Private));
    }

    #[test]
    fn test_method_named_like_constructor_text_is_constructor() {
        let maker = TreeMaker::new();
        let method = maker
            .method_def()
            .name(maker.name("<init>"))
            .new();
        assert!(method.is_constructor(maker.names()));
    }

    #[test]
    fn test_modifiers_encode_access() {
        let maker = TreeMaker::new();
        assert_eq!(maker.modifiers(AccessLevel::Public).bits(), 1);
        assert_eq!(maker.modifiers(AccessLevel::PackagePrivate).bits(), 0);
        assert_eq!(maker.modifiers(AccessLevel::Private).bits(), 2);
        assert_eq!(maker.modifiers(AccessLevel::Protected).bits(), 4);
    }
}
