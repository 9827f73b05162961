//! Marker discovery over the units of a round.

use kiln_ast::visitor::{Visit, walk_class};
use kiln_ast::{ClassDecl, ElementKind, FieldDecl, Marker, MarkerKind, MethodDecl, Names};
use kiln_rewrite::{Element, Round, UnitId};

/// A declaration together with the marker it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnotatedElement {
    pub element: Element,
    pub marker: Marker,
}

/// The host's view of a round: which declarations carry a given marker.
pub trait RoundEnvironment {
    /// Every declaration annotated with `kind`, in declaration order.
    fn elements_annotated_with(&self, kind: MarkerKind) -> Vec<AnnotatedElement>;

    fn names(&self) -> &Names;
}

impl RoundEnvironment for Round {
    fn elements_annotated_with(&self, kind: MarkerKind) -> Vec<AnnotatedElement> {
        let mut scanner = MarkerScanner {
            kind,
            names: self.maker().names(),
            unit: None,
            found: Vec::new(),
        };
        for id in self.unit_ids() {
            match self.unit(id) {
                Ok(unit) => {
                    scanner.unit = Some(id);
                    scanner.visit_unit(&unit);
                }
                Err(err) => tracing::warn!(unit = id.raw(), %err, "skipping unit during discovery"),
            }
        }
        scanner.found
    }

    fn names(&self) -> &Names {
        self.maker().names()
    }
}

struct MarkerScanner<'a> {
    kind: MarkerKind,
    names: &'a Names,
    unit: Option<UnitId>,
    found: Vec<AnnotatedElement>,
}

impl MarkerScanner<'_> {
    fn record(&mut self, markers: &[Marker], element: impl FnOnce(UnitId) -> Element) {
        let Some(unit) = self.unit else { return };
        if let Some(marker) = markers.iter().find(|m| m.kind() == self.kind) {
            self.found.push(AnnotatedElement {
                element: element(unit),
                marker: *marker,
            });
        }
    }
}

impl Visit for MarkerScanner<'_> {
    fn visit_class(&mut self, class: &ClassDecl) {
        self.record(&class.markers, |unit| Element {
            unit,
            decl: class.id,
            kind: class.element_kind(),
            name: class.name,
        });
        walk_class(self, class);
    }

    fn visit_field(&mut self, _class: &ClassDecl, field: &FieldDecl) {
        self.record(&field.markers, |unit| Element {
            unit,
            decl: field.id,
            kind: ElementKind::Field,
            name: field.name,
        });
    }

    fn visit_method(&mut self, _class: &ClassDecl, method: &MethodDecl) {
        let kind = if method.is_constructor(self.names) {
            ElementKind::Constructor
        } else {
            ElementKind::Method
        };
        self.record(&method.markers, |unit| Element {
            unit,
            decl: method.id,
            kind,
            name: method.name,
        });
    }
}
