use super::member::{FieldDecl, Member, MethodDecl};
use super::marker::Marker;
use super::ElementKind;
use crate::{Modifiers, Names, Symbol};

/// Identity of a declaration node, unique per [`TreeMaker`](crate::TreeMaker).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclId(pub(crate) usize);

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
        }
    }
}

impl From<TypeKind> for ElementKind {
    fn from(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Class => ElementKind::Class,
            TypeKind::Interface => ElementKind::Interface,
            TypeKind::Enum => ElementKind::Enum,
        }
    }
}

/// A named type and its ordered member list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDecl {
    pub id: DeclId,
    pub name: Symbol,
    pub kind: TypeKind,
    pub modifiers: Modifiers,
    pub markers: Vec<Marker>,
    pub members: Vec<Member>,
}

impl ClassDecl {
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(Member::as_field)
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(Member::as_method)
    }

    pub fn constructors<'a>(&'a self, names: &'a Names) -> impl Iterator<Item = &'a MethodDecl> {
        self.methods().filter(move |m| m.is_constructor(names))
    }

    pub fn nested(&self) -> impl Iterator<Item = &ClassDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Class(class) => Some(class),
            _ => None,
        })
    }

    pub fn element_kind(&self) -> ElementKind {
        self.kind.into()
    }
}
