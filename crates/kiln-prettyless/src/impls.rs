//! [`PrettyPrint`] implementations for the declaration model.

use kiln_ast::{
    Block, ClassDecl, CompilationUnit, FieldDecl, Marker, Member, MethodDecl, Stmt, Symbol,
};
use prettyless::DocAllocator;

use crate::{ArenaDoc, Document, PrettyPrint};

impl<'a> Document<'a> {
    /// Print a method. Constructors are spelled with `class_name`.
    pub fn print_method(&'a self, method: &MethodDecl, class_name: Symbol) -> ArenaDoc<'a> {
        let is_constructor = method.is_constructor(self.names());
        let mut header = self.text(self.modifiers_text(method.modifiers));
        if is_constructor {
            header += self.text(self.symbol(class_name));
        } else {
            let ret = method
                .return_type
                .as_ref()
                .map(|ty| self.type_text(ty))
                .unwrap_or_else(|| "void".to_string());
            header += self.text(format!("{ret} {}", self.symbol(method.name)));
        }
        let params = self.list(method.params.iter(), ", ", |p| {
            self.text(format!("{} {}", self.type_text(&p.ty), self.symbol(p.name)))
        });
        self.print_markers(&method.markers)
            + header
            + params.enclose("(", ")")
            + method.body.pretty_print(self)
    }

    pub fn print_member(&'a self, member: &Member, class_name: Symbol) -> ArenaDoc<'a> {
        match member {
            Member::Field(field) => field.pretty_print(self),
            Member::Method(method) => self.print_method(method, class_name),
            Member::Class(class) => class.pretty_print(self),
        }
    }

    /// One `@Marker` line per marker.
    pub fn print_markers(&'a self, markers: &[Marker]) -> ArenaDoc<'a> {
        let mut doc = self.nil();
        for marker in markers {
            doc += self.text(marker.to_string()) + self.line_();
        }
        doc
    }
}

impl PrettyPrint for Stmt {
    fn pretty_print<'a>(&self, doc: &'a Document<'a>) -> ArenaDoc<'a> {
        match self {
            Stmt::Return(expr) => doc.text(format!("return {};", doc.expr_text(expr))),
            Stmt::Exec(expr) => doc.text(format!("{};", doc.expr_text(expr))),
        }
    }
}

impl PrettyPrint for Block {
    fn pretty_print<'a>(&self, doc: &'a Document<'a>) -> ArenaDoc<'a> {
        doc.braces(self.stmts.iter().map(|stmt| stmt.pretty_print(doc)).collect())
    }
}

impl PrettyPrint for FieldDecl {
    fn pretty_print<'a>(&self, doc: &'a Document<'a>) -> ArenaDoc<'a> {
        doc.print_markers(&self.markers)
            + doc.text(format!(
                "{}{} {};",
                doc.modifiers_text(self.modifiers),
                doc.type_text(&self.ty),
                doc.symbol(self.name)
            ))
    }
}

impl PrettyPrint for MethodDecl {
    fn pretty_print<'a>(&self, doc: &'a Document<'a>) -> ArenaDoc<'a> {
        doc.print_method(self, self.name)
    }
}

impl PrettyPrint for ClassDecl {
    fn pretty_print<'a>(&self, doc: &'a Document<'a>) -> ArenaDoc<'a> {
        let header = format!(
            "{}{} {}",
            doc.modifiers_text(self.modifiers),
            self.kind.keyword(),
            doc.symbol(self.name)
        );
        let members = self
            .members
            .iter()
            .map(|member| doc.print_member(member, self.name))
            .collect();
        doc.print_markers(&self.markers) + doc.text(header) + doc.braces(members)
    }
}

impl PrettyPrint for CompilationUnit {
    fn pretty_print<'a>(&self, doc: &'a Document<'a>) -> ArenaDoc<'a> {
        let mut out = doc.nil();
        if let Some(package) = &self.package {
            out += doc.text(format!("package {package};")) + doc.line_() + doc.line_();
        }
        for (i, class) in self.types.iter().enumerate() {
            if i > 0 {
                out += doc.line_() + doc.line_();
            }
            out += class.pretty_print(doc);
        }
        out
    }
}
