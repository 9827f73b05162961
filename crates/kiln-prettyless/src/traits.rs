//! Core traits for pretty printing.

use std::io::{Write, stdout};

use kiln_ast::Names;

use crate::{ArenaDoc, Config, Document};

/// Core trait for pretty printing values to a document.
pub trait PrettyPrint {
    fn pretty_print<'a>(&self, doc: &'a Document<'a>) -> ArenaDoc<'a>;
}

/// Convenience rendering for anything that implements [`PrettyPrint`].
///
/// ```ignore
/// use kiln_prettyless::PrettyPrintExt;
///
/// let source = unit.sprint(round.maker().names());
/// ```
pub trait PrettyPrintExt: PrettyPrint {
    /// Render to string with custom config.
    fn sprint_with_config(&self, config: Config, names: &Names) -> String;

    /// Render to string with default config.
    fn sprint(&self, names: &Names) -> String {
        self.sprint_with_config(Config::default(), names)
    }

    /// Write to writer with custom config.
    fn write_with_config(
        &self,
        writer: &mut impl Write,
        config: Config,
        names: &Names,
    ) -> std::io::Result<()> {
        writer.write_all(self.sprint_with_config(config, names).as_bytes())
    }

    /// Print to stdout with default config.
    fn print(&self, names: &Names) -> std::io::Result<()> {
        self.write_with_config(&mut stdout(), Config::default(), names)
    }
}

impl<T: PrettyPrint + ?Sized> PrettyPrintExt for T {
    fn sprint_with_config(&self, config: Config, names: &Names) -> String {
        let doc = Document::new(config, names);
        doc.render(self).expect("render failed")
    }
}

impl<T: PrettyPrint> PrettyPrint for &T {
    fn pretty_print<'a>(&self, doc: &'a Document<'a>) -> ArenaDoc<'a> {
        (*self).pretty_print(doc)
    }
}
