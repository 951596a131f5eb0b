use expect_test::expect;
use typeprobe_detect::{DetectError, Detection, Strategy, TypeDetector};
use typeprobe_meta::{
    ClassDescriptor, ConfigError, FieldDescriptor, MetadataProvider, MethodDescriptor,
    ProbeConfig, Schema, TypeToken,
};

fn detector() -> TypeDetector {
    TypeDetector::new(&ProbeConfig::default()).unwrap()
}

/// Detects `field` as declared on a class carrying `methods`.
fn detect(field: FieldDescriptor, methods: Vec<MethodDescriptor>) -> Vec<TypeToken> {
    let mut class = ClassDescriptor::new("App.Models.Order").with_field(field.clone());
    for method in methods {
        class = class.with_method(method);
    }
    let schema = Schema::from_classes([class]).unwrap();
    let field = schema.class("App.Models.Order").unwrap().field(&field.name).unwrap();
    detector().detect(field, &schema)
}

fn tokens(names: &[&str]) -> Vec<TypeToken> {
    names.iter().copied().map(TypeToken::from).collect()
}

#[test]
fn test_native_type_is_authoritative() {
    let field = FieldDescriptor::new("total").with_native_type("float", false);
    assert_eq!(detect(field, vec![]), tokens(&["float"]));
}

#[test]
fn test_nullable_native_type_appends_null() {
    let field = FieldDescriptor::new("total").with_native_type("Money", true);
    assert_eq!(detect(field, vec![]), tokens(&["Money", "null"]));
}

#[test]
fn test_native_type_beats_documentation_and_accessor() {
    let field = FieldDescriptor::new("total")
        .with_native_type("int", false)
        .with_documentation("@var string");
    let getter = MethodDescriptor::new("getTotal", 0).returning("float", false);
    assert_eq!(detect(field, vec![getter]), tokens(&["int"]));
}

#[test]
fn test_array_falls_through_to_accessor() {
    let field = FieldDescriptor::new("lines").with_native_type("array", false);
    let getter = MethodDescriptor::new("getLines", 0).returning("int", false);
    assert_eq!(detect(field, vec![getter]), tokens(&["int"]));
}

#[test]
fn test_array_fallback_preserved_without_other_signals() {
    let field = FieldDescriptor::new("lines").with_native_type("array", false);
    assert_eq!(detect(field, vec![]), tokens(&["array"]));
}

#[test]
fn test_array_overridden_by_documentation() {
    let field = FieldDescriptor::new("lines")
        .with_native_type("array", false)
        .with_documentation("/** @var Line[] */");
    assert_eq!(detect(field, vec![]), tokens(&["Line[]"]));
}

#[test]
fn test_nullable_array_is_confident() {
    let field = FieldDescriptor::new("lines")
        .with_native_type("array", true)
        .with_documentation("@var Line[]");
    assert_eq!(detect(field, vec![]), tokens(&["array", "null"]));
}

#[test]
fn test_accessor_without_return_type_suppresses_fallback() {
    let field = FieldDescriptor::new("lines").with_native_type("array", false);
    let getter = MethodDescriptor::new("getLines", 0);
    assert_eq!(detect(field, vec![getter]), Vec::<TypeToken>::new());
}

#[test]
fn test_documentation_preferred_over_accessor() {
    let field = FieldDescriptor::new("owner").with_documentation("@var Foo|null");
    let getter = MethodDescriptor::new("getOwner", 0).returning("Bar", false);
    assert_eq!(detect(field, vec![getter]), tokens(&["Foo", "null"]));
}

#[test]
fn test_accessor_nullable_return() {
    let field = FieldDescriptor::new("owner");
    let getter = MethodDescriptor::new("getOwner", 0).returning("User", true);
    assert_eq!(detect(field, vec![getter]), tokens(&["User", "null"]));
}

#[test]
fn test_documentation_without_tag_falls_through() {
    let field = FieldDescriptor::new("owner").with_documentation("The owner of the order.");
    let getter = MethodDescriptor::new("getOwner", 0).returning("User", false);
    assert_eq!(detect(field, vec![getter]), tokens(&["User"]));
}

#[test]
fn test_nothing_detected() {
    let field = FieldDescriptor::new("note");
    let setter = MethodDescriptor::new("setNote", 1);
    assert!(detect(field, vec![setter]).is_empty());
}

#[test]
fn test_unknown_declaring_class_skips_accessor() {
    let mut field = FieldDescriptor::new("note").with_native_type("array", false);
    field.declaring_class = "Nowhere".to_string();
    let schema = Schema::new();
    assert_eq!(detector().detect(&field, &schema), tokens(&["array"]));
}

#[test]
fn test_individual_strategies() {
    let detector = detector();
    let schema = Schema::new();
    let field = FieldDescriptor::new("lines").with_native_type("array", false);
    assert_eq!(
        detector.run(Strategy::NativeType, &field, &schema),
        Detection::Weak(tokens(&["array"]))
    );
    assert_eq!(detector.run(Strategy::Documentation, &field, &schema), Detection::Miss);
    assert_eq!(detector.run(Strategy::Accessor, &field, &schema), Detection::Miss);
}

#[test]
fn test_custom_tag_and_marker() {
    let config = ProbeConfig { doc_tag: "@type".to_string(), getter_marker: "fetch".to_string() };
    let detector = TypeDetector::new(&config).unwrap();
    let class = ClassDescriptor::new("App.Box")
        .with_field(FieldDescriptor::new("size").with_documentation("@var int"))
        .with_field(FieldDescriptor::new("label").with_documentation("@type string"))
        .with_method(MethodDescriptor::new("fetchSize", 0).returning("float", false));
    let schema = Schema::from_classes([class]).unwrap();
    let class = schema.class("App.Box").unwrap();

    assert_eq!(detector.detect(class.field("size").unwrap(), &schema), tokens(&["float"]));
    assert_eq!(detector.detect(class.field("label").unwrap(), &schema), tokens(&["string"]));
}

#[test]
fn test_empty_tag_rejected() {
    let config = ProbeConfig { doc_tag: String::new(), ..ProbeConfig::default() };
    let err = TypeDetector::new(&config).unwrap_err();
    assert!(matches!(err, DetectError::Config(ConfigError::InvalidValue { key: "doc_tag", .. })));

    let config = ProbeConfig { doc_tag: "@var x".to_string(), ..ProbeConfig::default() };
    assert!(TypeDetector::new(&config).is_err());
}

#[test]
fn test_empty_getter_marker_rejected() {
    let config = ProbeConfig { getter_marker: String::new(), ..ProbeConfig::default() };
    let err = TypeDetector::new(&config).unwrap_err();
    expect![[r#"Invalid configuration value for `getter_marker`: must not be empty"#]]
        .assert_eq(&err.to_string());
}

#[test]
fn test_inherited_getter_is_not_an_accessor() {
    let parent = ClassDescriptor::new("App.Models.Base")
        .with_method(MethodDescriptor::new("getTotal", 0).returning("float", false));
    let child = ClassDescriptor::new("App.Models.Order")
        .with_parent("App.Models.Base")
        .with_field(FieldDescriptor::new("total"));
    let schema = Schema::from_classes([parent, child]).unwrap();
    let field = schema.class("App.Models.Order").unwrap().field("total").unwrap();
    assert_eq!(detector().detect(field, &schema), Vec::<TypeToken>::new());
}
