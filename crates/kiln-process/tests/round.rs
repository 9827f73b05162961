use kiln_ast::{
    AccessLevel, ClassDecl, Expr, Marker, MarkerKind, Member, SourceOrigin, Stmt, TreeMaker,
    TypeKind, TypeRef,
};
use kiln_process::{Driver, ProcessingConfig, Severity};
use kiln_rewrite::{Element, Round};
use kiln_test_utils::{car_markers, car_round, car_round_with, car_unit, member_names};

fn car(round: &Round, element: &Element) -> ClassDecl {
    round.unit(element.unit).unwrap().types[0].clone()
}

fn messages(report: &kiln_process::RoundReport) -> Vec<(Severity, &str)> {
    report
        .diagnostics
        .iter()
        .map(|d| (d.severity, d.message.as_str()))
        .collect()
}

#[test]
fn test_car_scenario() {
    let (round, element) = car_round();
    let report = Driver::default().run(&round);

    assert!(report.success());
    assert_eq!(report.errors().count(), 0);
    assert_eq!(
        report.claimed,
        vec![
            MarkerKind::Getter,
            MarkerKind::Setter,
            MarkerKind::NoArgsConstructor
        ]
    );
    assert_eq!(
        messages(&report),
        vec![
            (Severity::Note, "Processing >> Car"),
            (Severity::Note, "getName"),
            (Severity::Note, "getPrice"),
            (Severity::Note, "Processing >> Car"),
        ]
    );

    let maker = round.maker();
    let car = car(&round, &element);
    assert_eq!(
        member_names(maker, &car),
        vec![
            "name", "price", "<init>/1", "<init>/1", "<init>/2", "getName", "getPrice", "<init>/0"
        ]
    );

    let ctor = car
        .constructors(maker.names())
        .find(|c| c.params.is_empty())
        .unwrap();
    assert_eq!(ctor.modifiers.access(), Some(AccessLevel::Private));
    assert!(ctor.body.is_empty());

    let get_price = car
        .methods()
        .find(|m| m.name == maker.name("getPrice"))
        .unwrap();
    assert_eq!(get_price.return_type, Some(maker.type_ident("int")));
    assert_eq!(
        get_price.body.stmts,
        vec![Stmt::Return(Expr::Ident(maker.name("price")))]
    );
}

#[test]
fn test_getters_append_one_public_method_per_field() {
    let (round, element) = car_round_with(vec![Marker::Getter]);
    let before = car(&round, &element);

    Driver::default().run(&round);

    let maker = round.maker();
    let after = car(&round, &element);
    let fields: Vec<_> = before.fields().cloned().collect();
    assert_eq!(after.members.len(), before.members.len() + fields.len());
    assert_eq!(&after.members[..before.members.len()], &before.members[..]);

    for (field, member) in fields.iter().zip(&after.members[before.members.len()..]) {
        let Member::Method(getter) = member else {
            panic!("expected a method, got {member:?}");
        };
        let field_name = maker.names().display(field.name);
        let expected = kiln_synth::naming::getter_name(&field_name);
        assert_eq!(maker.names().display(getter.name), expected);
        assert_eq!(getter.modifiers.access(), Some(AccessLevel::Public));
        assert!(getter.params.is_empty());
        assert_eq!(getter.return_type, Some(field.ty));
        assert_eq!(getter.body.stmts, vec![Stmt::Return(Expr::Ident(field.name))]);
    }
}

#[test]
fn test_setters_assign_parameter_to_field() {
    let (round, element) = car_round_with(vec![Marker::Setter]);
    let before = car(&round, &element);

    let report = Driver::default().run(&round);
    assert_eq!(
        messages(&report),
        vec![
            (Severity::Note, "Processing >> Car"),
            (Severity::Note, "setName"),
            (Severity::Note, "setPrice"),
        ]
    );

    let after = car(&round, &element);
    let setters: Vec<_> = after.methods().skip(3).collect();
    assert_eq!(setters.len(), 2);
    for (field, setter) in before.fields().zip(setters) {
        assert_eq!(setter.return_type, Some(TypeRef::Void));
        assert_eq!(setter.params.len(), 1);
        assert_eq!(setter.params[0].ty, field.ty);
        assert_eq!(
            setter.body.stmts,
            vec![Stmt::Exec(Expr::Assign {
                target: Box::new(Expr::Ident(field.name)),
                value: Box::new(Expr::Ident(setter.params[0].name)),
            })]
        );
    }
}

#[test]
fn test_no_args_constructor_preserves_other_members() {
    let maker = TreeMaker::new();
    let a = maker
        .field_def()
        .name(maker.name("a"))
        .ty(maker.type_ident("int"))
        .new();
    let old_public = maker
        .constructor_def()
        .modifiers(AccessLevel::Public.into())
        .new();
    let run = maker
        .method_def()
        .name(maker.name("run"))
        .return_type(maker.void_type())
        .new();
    let with_a = maker
        .constructor_def()
        .params(vec![maker.param(a.name, a.ty)])
        .new();
    let old_private = maker
        .constructor_def()
        .modifiers(AccessLevel::Private.into())
        .new();
    let class = maker
        .class_def()
        .name(maker.name("Widget"))
        .markers(vec![Marker::NoArgsConstructor {
            access: AccessLevel::Protected,
        }])
        .members(vec![
            a.into(),
            old_public.into(),
            run.into(),
            with_a.into(),
            old_private.into(),
        ])
        .new();
    let unit = maker
        .compilation_unit()
        .file_name("Widget.java")
        .types(vec![class])
        .new();
    let mut round = Round::new(maker);
    let unit_id = round.add_unit(unit);

    Driver::default().run(&round);

    let maker = round.maker();
    let widget = round.unit(unit_id).unwrap().types[0].clone();
    assert_eq!(
        member_names(maker, &widget),
        vec!["a", "run", "<init>/1", "<init>/0"]
    );
    let zero_arg: Vec<_> = widget
        .constructors(maker.names())
        .filter(|c| c.params.is_empty())
        .collect();
    assert_eq!(zero_arg.len(), 1);
    assert_eq!(zero_arg[0].modifiers.access(), Some(AccessLevel::Protected));
}

#[test]
fn test_accessor_generation_is_not_idempotent() {
    let (round, element) = car_round_with(vec![Marker::Getter, Marker::Setter]);
    let mut driver = Driver::default();

    driver.run(&round);
    driver.run(&round);

    let maker = round.maker();
    let car = car(&round, &element);
    for name in ["getName", "getPrice", "setName", "setPrice"] {
        let symbol = maker.name(name);
        assert_eq!(
            car.methods().filter(|m| m.name == symbol).count(),
            2,
            "{name} is appended once per run; duplicates are left to the semantic checker"
        );
    }
}

#[test]
fn test_no_args_constructor_is_stable_across_runs() {
    let (round, element) = car_round_with(car_markers());
    let mut driver = Driver::new(
        ProcessingConfig::new().with_processors([MarkerKind::NoArgsConstructor]),
    );

    driver.run(&round);
    let once = member_names(round.maker(), &car(&round, &element));
    driver.run(&round);
    let twice = member_names(round.maker(), &car(&round, &element));
    assert_eq!(once, twice);
}

#[test]
fn test_marker_on_interface_is_an_error() {
    let maker = TreeMaker::new();
    let area = maker
        .method_def()
        .name(maker.name("area"))
        .return_type(maker.type_ident("double"))
        .new();
    let shape = maker
        .class_def()
        .name(maker.name("Shape"))
        .kind(TypeKind::Interface)
        .markers(vec![Marker::Getter])
        .members(vec![area.into()])
        .new();
    let before = shape.clone();
    let unit = maker
        .compilation_unit()
        .file_name("Shape.java")
        .types(vec![shape])
        .new();
    let mut round = Round::new(maker);
    let unit_id = round.add_unit(unit);
    round.add_unit(car_unit(round.maker(), vec![Marker::Getter]));

    let report = Driver::default().run(&round);

    assert!(report.success());
    let errors: Vec<_> = report.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("`Shape`"));
    assert_eq!(round.unit(unit_id).unwrap().types[0], before);
    // The class in the other unit is still processed.
    assert!(report.notes().any(|d| d.message == "getPrice"));
}

#[test]
fn test_member_notes_can_be_disabled() {
    let (round, _) = car_round();
    let report = Driver::new(ProcessingConfig::new().with_member_notes(false)).run(&round);
    assert_eq!(
        messages(&report),
        vec![
            (Severity::Note, "Processing >> Car"),
            (Severity::Note, "Processing >> Car"),
        ]
    );
}

#[test]
fn test_library_units_are_left_alone() {
    let maker = TreeMaker::new();
    let mut unit = car_unit(&maker, vec![Marker::Getter]);
    unit.origin = SourceOrigin::Library;
    let before = unit.clone();
    let mut round = Round::new(maker);
    let unit_id = round.add_unit(unit);

    let report = Driver::default().run(&round);

    assert_eq!(report.errors().count(), 0);
    assert_eq!(*round.unit(unit_id).unwrap(), before);
}

#[test]
fn test_processor_order_follows_config() {
    let (round, element) = car_round();
    let config = ProcessingConfig::new()
        .with_processors([MarkerKind::NoArgsConstructor, MarkerKind::Getter]);
    let mut driver = Driver::new(config);
    assert!(driver.config().member_notes);
    assert_eq!(
        driver.processors().collect::<Vec<_>>(),
        vec![MarkerKind::NoArgsConstructor, MarkerKind::Getter]
    );

    driver.run(&round);

    assert_eq!(
        member_names(round.maker(), &car(&round, &element)),
        vec![
            "name", "price", "<init>/1", "<init>/1", "<init>/2", "<init>/0", "getName", "getPrice"
        ]
    );
}

#[test]
fn test_each_class_is_noted_right_before_its_members() {
    let maker = TreeMaker::new();
    let class = |name: &str, field: &str| {
        maker
            .class_def()
            .name(maker.name(name))
            .markers(vec![Marker::Getter])
            .members(vec![
                maker
                    .field_def()
                    .name(maker.name(field))
                    .ty(maker.type_ident("int"))
                    .new()
                    .into(),
            ])
            .new()
    };
    let types = vec![class("A", "x"), class("B", "y")];
    let unit = maker
        .compilation_unit()
        .file_name("Pair.java")
        .types(types)
        .new();
    let mut round = Round::new(maker);
    round.add_unit(unit);

    let report = Driver::default().run(&round);

    assert_eq!(
        messages(&report),
        vec![
            (Severity::Note, "Processing >> A"),
            (Severity::Note, "getX"),
            (Severity::Note, "Processing >> B"),
            (Severity::Note, "getY"),
        ]
    );
}
