use crate::diagnostic::Messager;
use crate::env::{AnnotatedElement, RoundEnvironment};

/// Accept or reject one annotated declaration.
///
/// A marker on anything other than a class is reported as an error and the
/// declaration is skipped. An accepted class gets a note naming it, emitted
/// right before the caller rewrites it.
pub fn resolve_marker(
    env: &impl RoundEnvironment,
    annotated: &AnnotatedElement,
    messager: &mut dyn Messager,
) -> bool {
    let element = &annotated.element;
    let name = env.names().display(element.name);
    if element.is_class() {
        messager.note(format!("Processing >> {name}"));
        true
    } else {
        messager.error(format!(
            "annotation not supported: {} on {} `{name}`, only classes can be augmented",
            annotated.marker.kind(),
            element.kind
        ));
        false
    }
}
