use kiln::ast::{
    AccessLevel, CompilationUnit, Marker, Member, MethodDecl, Modifiers, TreeMaker,
};

fn constructor(maker: &TreeMaker, access: AccessLevel, params: &[(&str, &str)]) -> MethodDecl {
    let mut body = Vec::new();
    let mut decls = Vec::new();
    for (name, ty) in params {
        let name = maker.name(*name);
        decls.push(maker.param(name, maker.type_ident(*ty)));
        body.push(maker.exec(maker.assign(maker.select(maker.this(), name), maker.ident(name))));
    }
    maker
        .constructor_def()
        .modifiers(access.into())
        .params(decls)
        .body(maker.block(1, body))
        .new()
}

/// The `com.app.Car` compilation unit carrying `markers`.
pub fn car_unit(maker: &TreeMaker, markers: Vec<Marker>) -> CompilationUnit {
    let private = Modifiers::from(AccessLevel::Private);
    let mut members: Vec<Member> = [("name", "String"), ("price", "int")]
        .into_iter()
        .map(|(name, ty)| {
            maker
                .field_def()
                .name(maker.name(name))
                .ty(maker.type_ident(ty))
                .modifiers(private)
                .new()
                .into()
        })
        .collect();
    members.push(constructor(maker, AccessLevel::Private, &[("name", "String")]).into());
    members.push(constructor(maker, AccessLevel::Public, &[("price", "int")]).into());
    members.push(
        constructor(
            maker,
            AccessLevel::Protected,
            &[("name", "String"), ("price", "int")],
        )
        .into(),
    );

    let car = maker
        .class_def()
        .name(maker.name("Car"))
        .modifiers(AccessLevel::Public.into())
        .markers(markers)
        .members(members)
        .new();
    maker
        .compilation_unit()
        .file_name("Car.java")
        .package("com.app")
        .types(vec![car])
        .new()
}
