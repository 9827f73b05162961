//! Compile-time class augmentation.
//!
//! Classes carrying `@Getter`, `@Setter` or `@NoArgsConstructor` markers are
//! rewritten in place during a processing [`Round`](rewrite::Round): the
//! [`Driver`](process::Driver) discovers marked classes, reports diagnostics
//! and appends the synthesized members.
//!
//! ```ignore
//! use kiln::prelude::*;
//!
//! let maker = TreeMaker::new();
//! let unit = /* build a compilation unit with maker */;
//! let mut round = Round::new(maker);
//! let id = round.add_unit(unit);
//! let report = Driver::default().run(&round);
//! ```

pub use kiln_ast as ast;
pub use kiln_process as process;
pub use kiln_rewrite as rewrite;
pub use kiln_synth as synth;

#[cfg(feature = "pretty")]
pub use kiln_prettyless as pretty;

pub mod prelude {
    pub use kiln_ast::*;
    pub use kiln_process::{Driver, ProcessingConfig, RoundReport, Severity};
    pub use kiln_rewrite::{Element, Round, TreeRewriter};

    #[cfg(feature = "pretty")]
    pub use kiln_prettyless::PrettyPrintExt;
}
