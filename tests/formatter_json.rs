use modmap::core::{Diagnostic, FunctionCalls, ModuleRecord, ProjectModel};
use modmap::formatters::JsonFormatter;
use serde_json::Value;

#[test]
fn json_rendering_exposes_the_model_structure() {
    let mut model = ProjectModel::new();
    model.insert(ModuleRecord {
        module_name: "app".to_string(),
        imports: vec!["os".to_string()],
        function_calls: vec![FunctionCalls {
            name: "f".to_string(),
            calls: vec!["g".to_string()],
        }],
    });

    let rendered = JsonFormatter::new().format_to_string(&model).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();

    let app = &value["modules"]["app"];
    assert_eq!(app["module_name"], "app");
    assert_eq!(app["imports"][0], "os");
    assert_eq!(app["function_calls"][0]["name"], "f");
    assert_eq!(app["function_calls"][0]["calls"][0], "g");

    // No diagnostics key when the scan was clean
    assert!(value.get("diagnostics").is_none());
}

#[test]
fn diagnostics_appear_when_present() {
    let mut model = ProjectModel::new();
    model.push_diagnostic(Diagnostic {
        path: "bad.py".to_string(),
        message: "bad.py does not parse as Python".to_string(),
    });

    let rendered = JsonFormatter::new().format_to_string(&model).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["diagnostics"][0]["path"], "bad.py");
}
