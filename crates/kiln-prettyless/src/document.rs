//! Document builder for pretty printing.

use std::{borrow::Cow, ops::Deref};

use kiln_ast::{Expr, Modifiers, Names, Symbol, TypeRef};
use prettyless::{Arena, DocAllocator};

use crate::{ArenaDoc, BraceStyle, Config, PrettyPrint};

/// A document builder for pretty printing declarations.
///
/// Holds the configuration, an arena allocator and the identifier table used
/// to spell symbols.
pub struct Document<'a> {
    config: Config,
    arena: Arena<'a>,
    names: &'a Names,
}

impl<'a> Document<'a> {
    pub fn new(config: Config, names: &'a Names) -> Self {
        Self {
            config,
            arena: Arena::new(),
            names,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn names(&self) -> &'a Names {
        self.names
    }

    /// Indent a document by the configured tab spaces.
    pub fn indent(&'a self, doc: ArenaDoc<'a>) -> ArenaDoc<'a> {
        doc.nest(self.config.tab_spaces as isize)
    }

    /// Create an indented block with a leading line break.
    pub fn block_indent(&'a self, doc: ArenaDoc<'a>) -> ArenaDoc<'a> {
        self.indent(self.arena.line_() + doc)
    }

    /// `{ ... }` with one line per item, or `{}` when there are none.
    ///
    /// The opening brace is placed per [`BraceStyle`], so callers end the
    /// declaration header without a trailing space.
    pub fn braces(&'a self, items: Vec<ArenaDoc<'a>>) -> ArenaDoc<'a> {
        let open = match self.config.brace_style {
            BraceStyle::SameLine => self.text(" {"),
            BraceStyle::NextLine => self.line_() + self.text("{"),
        };
        if items.is_empty() {
            return open + self.text("}");
        }
        let mut inner = self.nil();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                inner += self.line_();
            }
            inner += item;
        }
        open + self.block_indent(inner) + self.line_() + self.text("}")
    }

    /// Build a list of items with a separator.
    pub fn list<I, U: Clone + Into<Cow<'a, str>>>(
        &'a self,
        items: impl Iterator<Item = I>,
        sep: U,
        f: impl Fn(I) -> ArenaDoc<'a>,
    ) -> ArenaDoc<'a> {
        let mut doc = self.nil();
        let mut first = true;
        for item in items {
            if !first {
                doc += self.text(sep.clone());
            }
            doc += f(item);
            first = false;
        }
        doc
    }

    pub fn symbol(&self, symbol: Symbol) -> String {
        self.names.display(symbol)
    }

    pub fn type_text(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Void => "void".to_string(),
            TypeRef::Named(name) => self.symbol(*name),
        }
    }

    /// Modifier keywords followed by a space, or nothing.
    pub fn modifiers_text(&self, modifiers: Modifiers) -> String {
        let mut words = Vec::new();
        if let Some(keyword) = modifiers
            .access()
            .map(|access| access.keyword())
            .filter(|keyword| !keyword.is_empty())
        {
            words.push(keyword);
        }
        if modifiers.is_static() {
            words.push("static");
        }
        if modifiers.is_final() {
            words.push("final");
        }
        words.into_iter().map(|w| format!("{w} ")).collect()
    }

    pub fn expr_text(&self, expr: &Expr) -> String {
        match expr {
            Expr::This => "this".to_string(),
            Expr::Ident(name) => self.symbol(*name),
            Expr::Select { target, name } => {
                format!("{}.{}", self.expr_text(target), self.symbol(*name))
            }
            Expr::Assign { target, value } => {
                format!("{} = {}", self.expr_text(target), self.expr_text(value))
            }
        }
    }

    /// Render a node to a string.
    pub fn render<N: PrettyPrint + ?Sized>(&'a self, node: &N) -> Result<String, std::fmt::Error> {
        let max_width = self.config.max_width;
        let arena_doc = node.pretty_print(self);
        let mut buf = String::new();
        arena_doc.render_fmt(max_width, &mut buf)?;
        Ok(strip_trailing_whitespace(&buf))
    }
}

impl<'a> Deref for Document<'a> {
    type Target = Arena<'a>;

    fn deref(&self) -> &Self::Target {
        &self.arena
    }
}

/// Strip trailing whitespace from each line in the string.
fn strip_trailing_whitespace(s: &str) -> String {
    if s.is_empty() {
        return "\n".to_string();
    }
    let mut res = String::with_capacity(s.len());
    for line in s.lines() {
        res.push_str(line.trim_end());
        res.push('\n');
    }
    res
}
