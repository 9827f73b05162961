//! The three marker processors.
//!
//! Each processor walks the declarations carrying its marker one at a time:
//! it resolves the declaration, attaches the matching synthesis strategy to a
//! [`TreeRewriter`] and rewrites the class before moving on to the next one. Processing always succeeds; problems become diagnostics.

use kiln_ast::{Marker, MarkerKind};
use kiln_rewrite::{Element, RewriteOutcome, Round, TreeRewriter};
use kiln_synth::{AppendGetters, AppendNoArgsConstructor, AppendSetters};

use crate::config::ProcessingConfig;
use crate::diagnostic::Messager;
use crate::env::RoundEnvironment;
use crate::resolver::resolve_marker;

pub trait Processor {
    /// The marker this processor claims.
    fn supported_marker(&self) -> MarkerKind;

    /// Process one round. Returns whether the marker was claimed.
    fn process(
        &mut self,
        round: &Round,
        config: &ProcessingConfig,
        messager: &mut dyn Messager,
    ) -> bool;
}

#[derive(Debug, Default)]
pub struct GetterProcessor;

#[derive(Debug, Default)]
pub struct SetterProcessor;

#[derive(Debug, Default)]
pub struct NoArgsProcessor;

impl Processor for GetterProcessor {
    fn supported_marker(&self) -> MarkerKind {
        MarkerKind::Getter
    }

    fn process(
        &mut self,
        round: &Round,
        config: &ProcessingConfig,
        messager: &mut dyn Messager,
    ) -> bool {
        let mut rewriter = TreeRewriter::new();
        rewriter.set_strategy(AppendGetters);
        for annotated in round.elements_annotated_with(MarkerKind::Getter) {
            if resolve_marker(round, &annotated, messager) {
                rewrite(&rewriter, round, &annotated.element, config.member_notes, messager);
            }
        }
        true
    }
}

impl Processor for SetterProcessor {
    fn supported_marker(&self) -> MarkerKind {
        MarkerKind::Setter
    }

    fn process(
        &mut self,
        round: &Round,
        config: &ProcessingConfig,
        messager: &mut dyn Messager,
    ) -> bool {
        let mut rewriter = TreeRewriter::new();
        rewriter.set_strategy(AppendSetters);
        for annotated in round.elements_annotated_with(MarkerKind::Setter) {
            if resolve_marker(round, &annotated, messager) {
                rewrite(&rewriter, round, &annotated.element, config.member_notes, messager);
            }
        }
        true
    }
}

impl Processor for NoArgsProcessor {
    fn supported_marker(&self) -> MarkerKind {
        MarkerKind::NoArgsConstructor
    }

    fn process(
        &mut self,
        round: &Round,
        _config: &ProcessingConfig,
        messager: &mut dyn Messager,
    ) -> bool {
        let mut rewriter = TreeRewriter::new();
        for annotated in round.elements_annotated_with(MarkerKind::NoArgsConstructor) {
            let Marker::NoArgsConstructor { access } = annotated.marker else {
                continue;
            };
            if !resolve_marker(round, &annotated, messager) {
                continue;
            }
            // The access level differs per class, so the strategy is rebuilt for each one.
            rewriter.set_strategy(AppendNoArgsConstructor::new(access));
            rewrite(&rewriter, round, &annotated.element, false, messager);
        }
        true
    }
}

fn rewrite(
    rewriter: &TreeRewriter<'_>,
    round: &Round,
    element: &Element,
    member_notes: bool,
    messager: &mut dyn Messager,
) {
    let names = round.maker().names();
    match rewriter.modify_tree(round, element) {
        Ok(RewriteOutcome::Rewritten { class, generated }) => {
            tracing::debug!(
                class = %names.display(class),
                generated = generated.len(),
                "rewrote class"
            );
            if member_notes {
                for name in generated {
                    messager.note(names.display(name));
                }
            }
        }
        Ok(RewriteOutcome::NotFound) => messager.error(format!(
            "could not locate class `{}` in its compilation unit",
            names.display(element.name)
        )),
        Ok(outcome) => tracing::debug!(?outcome, "class left unchanged"),
        Err(err) => messager.error(format!(
            "failed to rewrite `{}`: {err}",
            names.display(element.name)
        )),
    }
}
