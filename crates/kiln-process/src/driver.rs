use kiln_ast::MarkerKind;
use kiln_rewrite::Round;

use crate::config::ProcessingConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink, Severity};
use crate::processor::{GetterProcessor, NoArgsProcessor, Processor, SetterProcessor};

/// Everything a round produced for the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Markers claimed by a processor, in run order.
    pub claimed: Vec<MarkerKind>,
}

impl RoundReport {
    /// Diagnostics are advisory, so a round always completes successfully.
    pub fn success(&self) -> bool {
        true
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn notes(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Note)
    }
}

/// Runs the registered processors over a round, one after another.
pub struct Driver {
    config: ProcessingConfig,
    processors: Vec<Box<dyn Processor>>,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(ProcessingConfig::default())
    }
}

impl Driver {
    /// Register the processors named by `config`, in order.
    pub fn new(config: ProcessingConfig) -> Self {
        let processors = config
            .processors
            .iter()
            .map(|kind| -> Box<dyn Processor> {
                match kind {
                    MarkerKind::Getter => Box::new(GetterProcessor),
                    MarkerKind::Setter => Box::new(SetterProcessor),
                    MarkerKind::NoArgsConstructor => Box::new(NoArgsProcessor),
                }
            })
            .collect();
        Self { config, processors }
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    pub fn processors(&self) -> impl Iterator<Item = MarkerKind> + '_ {
        self.processors.iter().map(|p| p.supported_marker())
    }

    pub fn run(&mut self, round: &Round) -> RoundReport {
        let _span = tracing::debug_span!("round", units = round.len()).entered();
        let mut sink = DiagnosticSink::new();
        let mut claimed = Vec::new();
        for processor in &mut self.processors {
            let marker = processor.supported_marker();
            tracing::debug!(%marker, "running processor");
            if processor.process(round, &self.config, &mut sink) {
                claimed.push(marker);
            }
        }
        RoundReport {
            diagnostics: sink.into_diagnostics(),
            claimed,
        }
    }
}
