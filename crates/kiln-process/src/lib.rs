//! Marker processing: discovery, resolution, diagnostics and the processors
//! that drive the rewrite of one compilation round.

mod config;
mod diagnostic;
mod driver;
mod env;
mod processor;
mod resolver;

pub use config::ProcessingConfig;
pub use diagnostic::{Diagnostic, DiagnosticSink, Messager, Severity};
pub use driver::{Driver, RoundReport};
pub use env::{AnnotatedElement, RoundEnvironment};
pub use processor::{GetterProcessor, NoArgsProcessor, Processor, SetterProcessor};
pub use resolver::resolve_marker;
