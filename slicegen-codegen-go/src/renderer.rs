//! Renders a [`GenerationSpec`] into Go source text.

use slicegen_manifest::GenerationSpec;

use crate::{
    GoFile,
    ast::{Func, Import, Param, Struct},
    naming::DerivedIdentifiers,
    operations::Specialization,
};

/// Render the Go file for `spec`.
///
/// The output depends on nothing but `spec`: equal specs render
/// byte-identical files.
pub fn render(spec: &GenerationSpec) -> String {
    let ids = DerivedIdentifiers::derive(spec);
    let element_type = spec.element_type().as_str();
    let target = Specialization::new(element_type, &ids, spec.uniq_policy());

    tracing::debug!(
        element_type,
        stem = %ids.symbol_stem,
        equality = ?target.equality(),
        "rendering slice helpers"
    );

    let wrapper = Struct::new(&ids.wrapper_type_name)
        .doc(format!("wraps a {} for chaining.", target.slice_type()))
        .field("isPtr", "bool")
        .field("value", target.slice_type());

    let constructor = Func::new(&ids.constructor_name)
        .doc("wraps slice for chaining.")
        .param(Param::new("slice", target.slice_type()))
        .returns(target.wrapper_ptr())
        .body_line(format!(
            "return &{}{{isPtr: {}, value: slice}}",
            ids.wrapper_type_name,
            ids.element_kind.is_reference()
        ));

    let value = Func::new("Value")
        .doc("returns the wrapped slice.")
        .receiver("c", target.wrapper_ptr())
        .returns(target.slice_type())
        .body_line("return c.value");

    let mut file = GoFile::new(spec.package()).generated();
    if let Some(path) = spec.import_path() {
        file = file.import(Import::new(path).dot());
    }
    file = file.add(wrapper).add(constructor).add(value);

    for decls in target.operations().filter_map(|op| target.declare(op)) {
        file = file.add(decls.function).add(decls.method);
    }

    file.render()
}
