use super::class::{ClassDecl, DeclId};
use super::marker::Marker;
use super::stmt::Block;
use super::ty::TypeRef;
use crate::{Modifiers, Names, Symbol};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDecl {
    pub id: DeclId,
    pub name: Symbol,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
    pub markers: Vec<Marker>,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: Symbol,
    pub ty: TypeRef,
}

/// A method or constructor.
///
/// Constructors carry the reserved [`Names::init`] name and no return type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDecl {
    pub id: DeclId,
    pub name: Symbol,
    pub modifiers: Modifiers,
    pub return_type: Option<TypeRef>,
    pub params: Vec<Param>,
    pub body: Block,
    pub markers: Vec<Marker>,
}

impl MethodDecl {
    pub fn is_constructor(&self, names: &Names) -> bool {
        self.name == names.init() && self.return_type.is_none()
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// One entry of a class body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Class(ClassDecl),
}

impl Member {
    pub fn name(&self) -> Symbol {
        match self {
            Member::Field(field) => field.name,
            Member::Method(method) => method.name,
            Member::Class(class) => class.name,
        }
    }

    pub fn as_field(&self) -> Option<&FieldDecl> {
        match self {
            Member::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDecl> {
        match self {
            Member::Method(method) => Some(method),
            _ => None,
        }
    }
}

impl From<FieldDecl> for Member {
    fn from(field: FieldDecl) -> Self {
        Member::Field(field)
    }
}

impl From<MethodDecl> for Member {
    fn from(method: MethodDecl) -> Self {
        Member::Method(method)
    }
}

impl From<ClassDecl> for Member {
    fn from(class: ClassDecl) -> Self {
        Member::Class(class)
    }
}
