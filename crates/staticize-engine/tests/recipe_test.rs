//! Behavioral cases for the recipe, checked against printed source.

use staticize_engine::StaticMethods;
use staticize_tree::ast::CompilationUnit;
use staticize_tree::build::*;
use staticize_tree::modifier::ModifierKind::{self, *};
use staticize_tree::printer::print_unit;
use staticize_tree::FieldSignature;

fn rewrite_run(before: CompilationUnit, expected: &str) {
    let outcome = StaticMethods::new().run(before);
    assert_eq!(print_unit(&outcome.unit), expected);
}

fn rewrite_unchanged(before: CompilationUnit) {
    let expected = print_unit(&before);
    let outcome = StaticMethods::new().run(before);
    assert!(outcome.report.is_empty(), "unexpected changes: {:?}", outcome.report.changes);
    assert_eq!(print_unit(&outcome.unit), expected);
}

fn my_string(owner: &str) -> FieldSignature {
    FieldSignature::new(owner, "myString", "String")
}

fn utilities(field: &[ModifierKind], method: &[ModifierKind], reads_field: bool) -> CompilationUnit {
    let mut class = ClassBuilder::new("Utilities");
    if reads_field || !field.is_empty() {
        class = class.field(
            FieldBuilder::new("String", "myString")
                .modifiers(field)
                .init(string("My string")),
        );
    }
    let value = if reads_field {
        field_ref("myString", my_string("Utilities"))
    } else {
        string("My string")
    };
    class = class.method(
        MethodBuilder::new("String", "getMyString")
            .modifiers(method)
            .body(vec![ret(value)]),
    );
    UnitBuilder::new().class(class).build()
}

#[test]
fn private_method_accessing_static_field_is_made_static() {
    rewrite_run(
        utilities(&[Private, Static], &[Private], true),
        r#"class Utilities {
    private static String myString = "My string";

    private static String getMyString() {
        return myString;
    }
}
"#,
    );
}

#[test]
fn private_method_accessing_no_fields_is_made_static() {
    rewrite_run(
        utilities(&[], &[Private], false),
        r#"class Utilities {
    private static String getMyString() {
        return "My string";
    }
}
"#,
    );
}

#[test]
fn private_method_accessing_instance_field_is_not_made_static() {
    rewrite_unchanged(utilities(&[Private], &[Private], true));
}

#[test]
fn final_method_accessing_static_field_is_made_static() {
    rewrite_run(
        utilities(&[Private, Static], &[Final, Public], true),
        r#"class Utilities {
    private static String myString = "My string";

    public static final String getMyString() {
        return myString;
    }
}
"#,
    );
}

#[test]
fn final_method_accessing_no_fields_is_made_static() {
    rewrite_run(
        utilities(&[], &[Public, Final], false),
        r#"class Utilities {
    public static final String getMyString() {
        return "My string";
    }
}
"#,
    );
}

#[test]
fn final_method_accessing_instance_field_is_not_made_static() {
    rewrite_unchanged(utilities(&[Private], &[Final, Public], true));
}

#[test]
fn overridable_method_accessing_static_field_is_not_made_static() {
    rewrite_unchanged(utilities(&[Private, Static], &[Public], true));
}

#[test]
fn overridable_method_accessing_no_field_is_not_made_static() {
    rewrite_unchanged(utilities(&[], &[Public], false));
}

#[test]
fn overridable_method_accessing_instance_field_is_not_made_static() {
    rewrite_unchanged(utilities(&[Private], &[Public], true));
}

#[test]
fn package_private_and_protected_methods_are_not_made_static() {
    rewrite_unchanged(utilities(&[], &[], false));
    rewrite_unchanged(utilities(&[], &[Protected], false));
}

#[test]
fn private_method_accessing_static_field_in_lambda_is_made_static() {
    let unit = UnitBuilder::new()
        .class(
            ClassBuilder::new("Utilities")
                .field(
                    FieldBuilder::new("String", "myString")
                        .modifiers(&[Private, Static])
                        .init(string("My string")),
                )
                .nested(
                    ClassBuilder::interface("MyInterface")
                        .method(MethodBuilder::new("String", "grabMyString").no_body()),
                )
                .method(
                    MethodBuilder::new("String", "getMyString")
                        .modifiers(&[Private])
                        .body(vec![
                            local(
                                "MyInterface",
                                "msg",
                                lambda(&[], field_ref("myString", my_string("Utilities"))),
                            ),
                            ret(call(Some(ident("msg")), "grabMyString", vec![])),
                        ]),
                ),
        )
        .build();

    rewrite_run(
        unit,
        r#"class Utilities {
    private static String myString = "My string";

    interface MyInterface {
        String grabMyString();
    }

    private static String getMyString() {
        MyInterface msg = () -> myString;
        return msg.grabMyString();
    }
}
"#,
    );
}

#[test]
fn private_method_accessing_instance_field_in_lambda_is_not_made_static() {
    let unit = UnitBuilder::new()
        .class(
            ClassBuilder::new("Utilities")
                .field(FieldBuilder::new("String", "myString").modifiers(&[Private]))
                .method(
                    MethodBuilder::new("Supplier<String>", "supplier")
                        .modifiers(&[Private])
                        .body(vec![ret(lambda(&[], field_ref("myString", my_string("Utilities"))))]),
                ),
        )
        .build();

    rewrite_unchanged(unit);
}

fn outer_utilities(field: &[ModifierKind]) -> CompilationUnit {
    UnitBuilder::new()
        .class(
            ClassBuilder::new("OuterUtilities")
                .field(
                    FieldBuilder::new("String", "myString")
                        .modifiers(field)
                        .init(string("My string")),
                )
                .nested(
                    ClassBuilder::new("InnerUtilities").method(
                        MethodBuilder::new("String", "getMyString")
                            .modifiers(&[Private])
                            .body(vec![ret(field_ref("myString", my_string("OuterUtilities")))]),
                    ),
                ),
        )
        .build()
}

#[test]
fn nested_class_method_accessing_static_outer_field_is_not_made_static() {
    // Methods of nested classes are never rewritten
    rewrite_unchanged(outer_utilities(&[Private, Static]));
}

#[test]
fn nested_class_method_accessing_instance_outer_field_is_not_made_static() {
    rewrite_unchanged(outer_utilities(&[Private]));
}
