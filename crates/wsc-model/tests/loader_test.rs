//! Loading the shared model fixtures

use std::path::PathBuf;

use wsc_model::{
    AccessorKind, DirectiveKind, Error, KnownXmlType, ModelLoader, TypeDefinitionKind,
    TypeHierarchy, XmlTypeRef,
};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn loads_calculator_json_fixture() -> anyhow::Result<()> {
    let model = ModelLoader::new().load_from_file(&repo_root().join("testdata/models/calculator.json"))?;

    let calculator = model
        .endpoint_interface("com.example.calc.Calculator")
        .ok_or_else(|| anyhow::anyhow!("calculator interface should be present"))?;
    assert_eq!(calculator.web_methods.len(), 2);
    assert_eq!(calculator.target_namespace(), "http://calc.example.com/");
    assert!(calculator.web_methods[1].one_way);
    assert!(calculator.web_methods[0].request_wrapper().is_some());

    let operand = model.require_type_definition("com.example.calc.Operand")?;
    assert_eq!(operand.kind, TypeDefinitionKind::Complex);
    assert_eq!(operand.attributes[0].kind, AccessorKind::Attribute);
    assert_eq!(
        operand.elements[0].base_type,
        Some(XmlTypeRef::known(KnownXmlType::Int))
    );
    assert!(operand.xml_id.as_ref().is_some_and(|id| id.accessor_type.is_string()));
    assert!(operand.declaration.metadata.has(DirectiveKind::XmlType));

    assert_eq!(
        model.superinterfaces("com.example.calc.CalculatorImpl"),
        Some(&["com.example.calc.Calculator".to_string()][..])
    );
    Ok(())
}

#[test]
fn loads_yaml_fixture_with_operation_name_override() -> anyhow::Result<()> {
    let model = ModelLoader::new()
        .load_from_file(&repo_root().join("testdata/models/calculator_duplicate.yaml"))?;

    let names: Vec<&str> = model.endpoint_interfaces[0]
        .web_methods
        .iter()
        .map(|m| m.operation_name())
        .collect();
    assert_eq!(names, vec!["add", "add"]);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ModelLoader::new()
        .load_from_file(&repo_root().join("testdata/models/does-not-exist.json"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn unknown_type_lookup_fails() -> anyhow::Result<()> {
    let model = ModelLoader::new().load_from_file(&repo_root().join("testdata/models/orders.yaml"))?;
    let err = model.require_type_definition("com.example.orders.Missing").unwrap_err();
    assert_eq!(err.to_string(), "Unknown type: com.example.orders.Missing");
    Ok(())
}
