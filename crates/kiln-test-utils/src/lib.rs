//! Fixtures shared by the kiln test suites.

use kiln_ast::{
    AccessLevel, ClassDecl, CompilationUnit, ElementKind, Marker, MethodDecl, Modifiers, Stmt,
    TreeMaker,
};
use kiln_rewrite::{Element, Round};

/// The markers the demo `Car` class carries.
pub fn car_markers() -> Vec<Marker> {
    vec![
        Marker::Getter,
        Marker::NoArgsConstructor {
            access: AccessLevel::Private,
        },
    ]
}

/// `this.<field> = <field>;`
pub fn assign_this(maker: &TreeMaker, field: &str) -> Stmt {
    let name = maker.name(field);
    maker.exec(maker.assign(maker.select(maker.this(), name), maker.ident(name)))
}

fn constructor(maker: &TreeMaker, access: AccessLevel, params: &[(&str, &str)]) -> MethodDecl {
    let mut body = Vec::new();
    let mut decls = Vec::new();
    for (name, ty) in params {
        decls.push(maker.param(maker.name(*name), maker.type_ident(*ty)));
        body.push(assign_this(maker, name));
    }
    maker
        .constructor_def()
        .modifiers(access.into())
        .params(decls)
        .body(maker.block(1, body))
        .new()
}

/// ```text
/// public class Car {
///     private String name;
///     private int price;
///     private Car(String name) { ... }
///     public Car(int price) { ... }
///     protected Car(String name, int price) { ... }
/// }
/// ```
pub fn car_class(maker: &TreeMaker, markers: Vec<Marker>) -> ClassDecl {
    let private = Modifiers::from(AccessLevel::Private);
    let name = maker
        .field_def()
        .name(maker.name("name"))
        .ty(maker.type_ident("String"))
        .modifiers(private)
        .new();
    let price = maker
        .field_def()
        .name(maker.name("price"))
        .ty(maker.type_ident("int"))
        .modifiers(private)
        .new();

    maker
        .class_def()
        .name(maker.name("Car"))
        .modifiers(AccessLevel::Public.into())
        .markers(markers)
        .members(vec![
            name.into(),
            price.into(),
            constructor(maker, AccessLevel::Private, &[("name", "String")]).into(),
            constructor(maker, AccessLevel::Public, &[("price", "int")]).into(),
            constructor(
                maker,
                AccessLevel::Protected,
                &[("name", "String"), ("price", "int")],
            )
            .into(),
        ])
        .new()
}

pub fn car_unit(maker: &TreeMaker, markers: Vec<Marker>) -> CompilationUnit {
    maker
        .compilation_unit()
        .file_name("Car.java")
        .package("com.app")
        .types(vec![car_class(maker, markers)])
        .new()
}

/// A round holding only the `Car` unit, plus the element handle for `Car`.
pub fn car_round() -> (Round, Element) {
    car_round_with(car_markers())
}

pub fn car_round_with(markers: Vec<Marker>) -> (Round, Element) {
    let maker = TreeMaker::new();
    let unit = car_unit(&maker, markers);
    let class = &unit.types[0];
    let (decl, name) = (class.id, class.name);
    let mut round = Round::new(maker);
    let unit = round.add_unit(unit);
    let element = Element {
        unit,
        decl,
        kind: ElementKind::Class,
        name,
    };
    (round, element)
}

/// An empty public class.
pub fn plain_class(maker: &TreeMaker, name: &str) -> ClassDecl {
    maker
        .class_def()
        .name(maker.name(name))
        .modifiers(AccessLevel::Public.into())
        .new()
}

/// Names of the members of `class`, constructors rendered as `<init>/arity`.
pub fn member_names(maker: &TreeMaker, class: &ClassDecl) -> Vec<String> {
    let names = maker.names();
    class
        .members
        .iter()
        .map(|member| match member.as_method() {
            Some(method) if method.is_constructor(names) => {
                format!("<init>/{}", method.arity())
            }
            _ => names.display(member.name()),
        })
        .collect()
}
