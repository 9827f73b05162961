//! Depth-first traversal over compilation units.
//!
//! Nested classes are visited before the class that declares them, so a
//! visitor that mutates a class always sees its children in their final shape.

use crate::node::{ClassDecl, CompilationUnit, FieldDecl, Member, MethodDecl};

pub trait Visit {
    fn visit_unit(&mut self, unit: &CompilationUnit) {
        walk_unit(self, unit);
    }

    fn visit_class(&mut self, class: &ClassDecl) {
        walk_class(self, class);
    }

    fn visit_field(&mut self, _class: &ClassDecl, _field: &FieldDecl) {}

    fn visit_method(&mut self, _class: &ClassDecl, _method: &MethodDecl) {}
}

pub fn walk_unit<V: Visit + ?Sized>(visitor: &mut V, unit: &CompilationUnit) {
    for class in &unit.types {
        visitor.visit_class(class);
    }
}

pub fn walk_class<V: Visit + ?Sized>(visitor: &mut V, class: &ClassDecl) {
    for member in &class.members {
        match member {
            Member::Field(field) => visitor.visit_field(class, field),
            Member::Method(method) => visitor.visit_method(class, method),
            Member::Class(nested) => visitor.visit_class(nested),
        }
    }
}

pub trait VisitMut {
    fn visit_unit_mut(&mut self, unit: &mut CompilationUnit) {
        walk_unit_mut(self, unit);
    }

    fn visit_class_mut(&mut self, class: &mut ClassDecl) {
        walk_class_mut(self, class);
    }
}

pub fn walk_unit_mut<V: VisitMut + ?Sized>(visitor: &mut V, unit: &mut CompilationUnit) {
    for class in &mut unit.types {
        visitor.visit_class_mut(class);
    }
}

pub fn walk_class_mut<V: VisitMut + ?Sized>(visitor: &mut V, class: &mut ClassDecl) {
    for member in &mut class.members {
        if let Member::Class(nested) = member {
            visitor.visit_class_mut(nested);
        }
    }
}
