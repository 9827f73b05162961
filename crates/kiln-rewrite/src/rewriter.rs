use kiln_ast::visitor::{VisitMut, walk_class_mut};
use kiln_ast::{ClassDecl, DeclId, Symbol, TreeMaker};

use crate::{Element, RewriteError, Round, SynthesisStrategy};

/// What a call to [`TreeRewriter::modify_tree`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// No strategy was configured; nothing happened.
    NotConfigured,
    /// The unit is generated or library code and is never rewritten.
    SkippedOrigin,
    /// No class in the unit carries the element's declaration id.
    NotFound,
    /// The matched class was rewritten.
    Rewritten { class: Symbol, generated: Vec<Symbol> },
}

/// Applies a configured [`SynthesisStrategy`] to the class an element points at.
///
/// The rewriter starts idle. Once a strategy is attached it can be used for
/// any number of elements; each call checks the element's unit out, walks it,
/// and releases it before returning.
#[derive(Default)]
pub struct TreeRewriter<'s> {
    strategy: Option<Box<dyn SynthesisStrategy + 's>>,
}

impl<'s> TreeRewriter<'s> {
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Attach a strategy, replacing any previous one.
    pub fn set_strategy(&mut self, strategy: impl SynthesisStrategy + 's) {
        self.strategy = Some(Box::new(strategy));
    }

    pub fn is_configured(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn modify_tree(
        &self,
        round: &Round,
        element: &Element,
    ) -> Result<RewriteOutcome, RewriteError> {
        let Some(strategy) = self.strategy.as_deref() else {
            tracing::debug!("no strategy configured, skipping rewrite");
            return Ok(RewriteOutcome::NotConfigured);
        };

        let mut unit = round.checkout(element.unit)?;
        if !unit.is_primary_source() {
            tracing::debug!(
                file = %unit.file_name,
                origin = ?unit.origin,
                "compilation unit is not primary source, skipping rewrite"
            );
            return Ok(RewriteOutcome::SkippedOrigin);
        }

        let mut locator = ClassLocator {
            target: element.decl,
            strategy,
            maker: round.maker(),
            visited: 0,
            outcome: None,
        };
        locator.visit_unit_mut(&mut *unit);
        tracing::debug!(
            file = %unit.file_name,
            classes = locator.visited,
            "visited compilation unit"
        );

        Ok(locator.outcome.unwrap_or(RewriteOutcome::NotFound))
    }
}

struct ClassLocator<'a> {
    target: DeclId,
    strategy: &'a dyn SynthesisStrategy,
    maker: &'a TreeMaker,
    visited: usize,
    outcome: Option<RewriteOutcome>,
}

impl VisitMut for ClassLocator<'_> {
    fn visit_class_mut(&mut self, class: &mut ClassDecl) {
        walk_class_mut(self, class);
        self.visited += 1;
        if class.id != self.target || self.outcome.is_some() {
            return;
        }

        // The strategy works on a staged copy; the member list is committed
        // in a single assignment.
        let mut staged = class.clone();
        let generated = self.strategy.transform(self.maker, &mut staged);
        class.members = staged.members;

        self.outcome = Some(RewriteOutcome::Rewritten {
            class: class.name,
            generated,
        });
    }
}
