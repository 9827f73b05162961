//! Source rendering for kiln compilation units.
//!
//! Built on `prettyless`; renders the declaration model back to Java-like
//! source so rewritten classes can be inspected.
//!
//! ```ignore
//! use kiln_prettyless::{Config, PrettyPrintExt};
//!
//! let source = unit.sprint(maker.names());
//! let narrow = unit.sprint_with_config(Config::default().with_tab_spaces(2), maker.names());
//! ```

mod config;
mod document;
mod impls;
mod traits;

pub use config::{BraceStyle, Config};
pub use document::Document;
pub use traits::{PrettyPrint, PrettyPrintExt};

// Re-export from prettyless for convenience
pub use prettyless::{Arena, DocAllocator};
pub type ArenaDoc<'a> = prettyless::DocBuilder<'a, Arena<'a>>;
