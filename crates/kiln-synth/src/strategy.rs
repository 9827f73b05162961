use kiln_ast::{AccessLevel, ClassDecl, Member, MethodDecl, Symbol, TreeMaker};
use kiln_rewrite::SynthesisStrategy;

use crate::member::{getter, no_args_constructor, setter, without_no_args_constructors};

/// Appends one getter per field, after all existing members.
///
/// Existing accessors are not consulted, so applying this twice appends a
/// second copy of every getter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendGetters;

/// Appends one setter per field, after all existing members.
///
/// Like [`AppendGetters`], this is not idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendSetters;

/// Replaces every zero-parameter constructor with a single empty one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendNoArgsConstructor {
    pub access: AccessLevel,
}

impl AppendNoArgsConstructor {
    pub fn new(access: AccessLevel) -> Self {
        Self { access }
    }
}

fn append_per_field(
    maker: &TreeMaker,
    class: &mut ClassDecl,
    synthesize: fn(&TreeMaker, &kiln_ast::FieldDecl) -> MethodDecl,
) -> Vec<Symbol> {
    let methods: Vec<MethodDecl> = class.fields().map(|f| synthesize(maker, f)).collect();
    let generated = methods.iter().map(|m| m.name).collect();
    class.members.extend(methods.into_iter().map(Member::from));
    generated
}

impl SynthesisStrategy for AppendGetters {
    fn transform(&self, maker: &TreeMaker, class: &mut ClassDecl) -> Vec<Symbol> {
        let generated = append_per_field(maker, class, getter);
        tracing::debug!(count = generated.len(), "appended getters");
        generated
    }
}

impl SynthesisStrategy for AppendSetters {
    fn transform(&self, maker: &TreeMaker, class: &mut ClassDecl) -> Vec<Symbol> {
        let generated = append_per_field(maker, class, setter);
        tracing::debug!(count = generated.len(), "appended setters");
        generated
    }
}

impl SynthesisStrategy for AppendNoArgsConstructor {
    fn transform(&self, maker: &TreeMaker, class: &mut ClassDecl) -> Vec<Symbol> {
        let before = class.members.len();
        let mut members =
            without_no_args_constructors(std::mem::take(&mut class.members), maker.names());
        tracing::debug!(
            dropped = before - members.len(),
            access = %self.access,
            "replacing zero-parameter constructors"
        );

        let ctor = no_args_constructor(maker, self.access);
        let name = ctor.name;
        members.push(ctor.into());
        class.members = members;
        vec![name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_ast::Names;
    use kiln_test_utils::{car_class, member_names};

    fn zero_arg_ctors<'a>(class: &'a ClassDecl, names: &'a Names) -> Vec<&'a MethodDecl> {
        class
            .constructors(names)
            .filter(|c| c.params.is_empty())
            .collect()
    }

    #[test]
    fn test_getters_are_appended_in_field_order() {
        let maker = TreeMaker::new();
        let mut car = car_class(&maker, Vec::new());
        let before = car.members.clone();

        let generated = AppendGetters.transform(&maker, &mut car);

        assert_eq!(
            generated,
            vec![maker.name("getName"), maker.name("getPrice")]
        );
        assert_eq!(&car.members[..before.len()], &before[..]);
        assert_eq!(car.members.len(), before.len() + 2);
    }

    #[test]
    fn test_setters_are_appended_in_field_order() {
        let maker = TreeMaker::new();
        let mut car = car_class(&maker, Vec::new());
        let before = car.members.len();

        let generated = AppendSetters.transform(&maker, &mut car);

        assert_eq!(
            generated,
            vec![maker.name("setName"), maker.name("setPrice")]
        );
        assert_eq!(car.members.len(), before + 2);
    }

    #[test]
    fn test_getters_are_not_idempotent() {
        let maker = TreeMaker::new();
        let mut car = car_class(&maker, Vec::new());

        AppendGetters.transform(&maker, &mut car);
        AppendGetters.transform(&maker, &mut car);

        let get_name = maker.name("getName");
        let copies = car.methods().filter(|m| m.name == get_name).count();
        assert_eq!(copies, 2, "duplicate getters are expected, not guarded");
    }

    #[test]
    fn test_class_without_fields_gets_nothing() {
        let maker = TreeMaker::new();
        let mut empty = maker.class_def().name(maker.name("Empty")).new();
        assert!(AppendGetters.transform(&maker, &mut empty).is_empty());
        assert!(AppendSetters.transform(&maker, &mut empty).is_empty());
        assert!(empty.members.is_empty());
    }

    #[test]
    fn test_no_args_constructor_on_car() {
        let maker = TreeMaker::new();
        let mut car = car_class(&maker, Vec::new());

        let generated =
            AppendNoArgsConstructor::new(AccessLevel::Private).transform(&maker, &mut car);

        assert_eq!(generated, vec![maker.names().init()]);
        assert_eq!(
            member_names(&maker, &car),
            vec!["name", "price", "<init>/1", "<init>/1", "<init>/2", "<init>/0"]
        );
        let ctors = zero_arg_ctors(&car, maker.names());
        assert_eq!(ctors.len(), 1);
        assert_eq!(ctors[0].modifiers.access(), Some(AccessLevel::Private));
        assert!(ctors[0].body.is_empty());
    }

    #[test]
    fn test_no_args_constructor_replaces_existing_ones() {
        let maker = TreeMaker::new();
        let mut car = car_class(&maker, Vec::new());
        let strategy = AppendNoArgsConstructor::new(AccessLevel::Protected);

        strategy.transform(&maker, &mut car);
        AppendNoArgsConstructor::new(AccessLevel::PackagePrivate).transform(&maker, &mut car);

        let ctors = zero_arg_ctors(&car, maker.names());
        assert_eq!(ctors.len(), 1);
        assert_eq!(ctors[0].modifiers.access(), Some(AccessLevel::PackagePrivate));
        assert_eq!(car.constructors(maker.names()).count(), 4);
    }
}
