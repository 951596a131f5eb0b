#![allow(dead_code)]

use typeprobe_meta::{
    ClassDescriptor, FieldDescriptor, ImportDecl, MetadataProvider, MethodDescriptor, Schema,
    NAMESPACE_ALIAS,
};

/// A small class universe exercising every search layer.
///
/// - `App.Current.Holder` imports `App\Models\Foo` and `App\Models` (as a
///   namespace alias) and lives next to `App.Current.Bar`.
/// - `App.Sub.Thing` declares `App` as its root namespace.
/// - `App.Deep.Child` sits three levels below `App.Deep.GreatGrand`, which
///   includes the `Lib.Traits.HasWidget` mixin module.
pub fn fixture_schema() -> Schema {
    let schema = Schema::from_classes([
        ClassDescriptor::new("App.Models.Foo"),
        ClassDescriptor::new("App.Models.User"),
        ClassDescriptor::interface("App.Contracts.Shape"),
        ClassDescriptor::new("App.Current.Bar"),
        ClassDescriptor::new("App.Shared"),
        ClassDescriptor::new("DateTime"),
        ClassDescriptor::new("App.Current.Holder")
            .with_import(ImportDecl::new(r"App\Models\Foo"))
            .with_import(ImportDecl::new(r"App\Models"))
            .with_import(ImportDecl::aliased("Ghost", "App.Missing.Ghost"))
            .with_import(ImportDecl::aliased("Contract", r"\App\Contracts\Shape"))
            .with_field(FieldDescriptor::new("foo"))
            .with_field(FieldDescriptor::new("bars")),
        ClassDescriptor::new("App.Sub.Thing")
            .with_import(ImportDecl::aliased(NAMESPACE_ALIAS, "App"))
            .with_field(FieldDescriptor::new("shared")),
        ClassDescriptor::new("Lib.Ui.Widget"),
        ClassDescriptor::new("Lib.Traits.Knob"),
        ClassDescriptor::new("Lib.Parts.Gear"),
        ClassDescriptor::mixin("Lib.Traits.HasWidget")
            .with_import(ImportDecl::new("Lib.Ui.Widget"))
            .with_mixin("Lib.Traits.HasGear")
            .with_field(FieldDescriptor::new("widget"))
            .with_field(FieldDescriptor::new("knob"))
            .with_method(MethodDescriptor::new("render", 1)),
        ClassDescriptor::mixin("Lib.Traits.HasGear")
            .with_import(ImportDecl::new("Lib.Parts.Gear"))
            .with_field(FieldDescriptor::new("widget")),
        ClassDescriptor::new("App.Deep.GreatGrand").with_mixin("Lib.Traits.HasWidget"),
        ClassDescriptor::new("App.Deep.Grand").with_parent("App.Deep.GreatGrand"),
        ClassDescriptor::new("App.Deep.Parent").with_parent("App.Deep.Grand"),
        ClassDescriptor::new("App.Deep.Child")
            .with_parent("App.Deep.Parent")
            .with_field(FieldDescriptor::new("widget"))
            .with_field(FieldDescriptor::new("knob"))
            .with_field(FieldDescriptor::new("gadget")),
    ])
    .expect("fixture classes are unique");
    schema.validate().expect("fixture schema is consistent");
    schema
}

pub fn field<'s>(schema: &'s Schema, class: &str, name: &str) -> &'s FieldDescriptor {
    schema
        .class(class)
        .and_then(|c| c.field(name))
        .unwrap_or_else(|| panic!("fixture field {class}::{name}"))
}
