//! Pure constructors for synthesized members.

use kiln_ast::{AccessLevel, FieldDecl, Member, MethodDecl, Names, TreeMaker};

use crate::naming::{getter_name, setter_name, setter_param_name};

/// `public T getN() { return n; }`
pub fn getter(maker: &TreeMaker, field: &FieldDecl) -> MethodDecl {
    let field_name = maker.names().display(field.name);
    maker
        .method_def()
        .modifiers(AccessLevel::Public.into())
        .name(maker.name(getter_name(&field_name)))
        .return_type(field.ty)
        .body(maker.block(1, vec![maker.ret(maker.ident(field.name))]))
        .new()
}

/// `public void setN(T _n) { n = _n; }`
pub fn setter(maker: &TreeMaker, field: &FieldDecl) -> MethodDecl {
    let field_name = maker.names().display(field.name);
    let param = maker.param(maker.name(setter_param_name(&field_name)), field.ty);
    let assign = maker.assign(maker.ident(field.name), maker.ident(param.name));
    maker
        .method_def()
        .modifiers(AccessLevel::Public.into())
        .name(maker.name(setter_name(&field_name)))
        .return_type(maker.void_type())
        .params(vec![param])
        .body(maker.block(1, vec![maker.exec(assign)]))
        .new()
}

/// An empty zero-parameter constructor with the requested access.
pub fn no_args_constructor(maker: &TreeMaker, access: AccessLevel) -> MethodDecl {
    maker
        .constructor_def()
        .modifiers(access.into())
        .body(maker.block(0, Vec::new()))
        .new()
}

/// Drop every zero-parameter constructor, keeping all other members in order.
pub fn without_no_args_constructors(members: Vec<Member>, names: &Names) -> Vec<Member> {
    members
        .into_iter()
        .filter(|member| match member {
            Member::Method(method) => !(method.is_constructor(names) && method.params.is_empty()),
            _ => true,
        })
        .collect()
}
