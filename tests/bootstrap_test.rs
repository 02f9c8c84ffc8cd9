//! Bootstrap behaviour: argument forwarding and error propagation.

use pets_api::{Application, HttpRuntime, SERVICE_METADATA};

mod common;
use common::RecordingRuntime;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_args_single_call() {
    let runtime = RecordingRuntime::default();
    Application::run(runtime.clone(), Vec::new()).unwrap();

    let calls = runtime.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].entry_name.ends_with("Application"));
    assert!(calls[0].args.is_empty());
}

#[test]
fn test_args_forwarded_verbatim_and_in_order() {
    let runtime = RecordingRuntime::default();
    let forwarded = args(&["--port=8080", "-x", "", "--port=9090"]);
    Application::run(runtime.clone(), forwarded.clone()).unwrap();

    let calls = runtime.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args, forwarded);
}

#[test]
fn test_entry_carries_service_metadata() {
    let runtime = RecordingRuntime::default();
    Application::run(runtime.clone(), args(&["--port=8080"])).unwrap();

    let call = &runtime.calls()[0];
    assert_eq!(call.title, "pets-api");
    assert_eq!(call.version, "0.2");
    assert_eq!(SERVICE_METADATA.title, call.title);
}

#[test]
fn test_runtime_error_is_not_suppressed() {
    let runtime = RecordingRuntime::failing("port taken");
    let err = Application::run(runtime.clone(), Vec::new()).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::AddrInUse);
    assert_eq!(err.to_string(), "port taken");
    assert_eq!(runtime.calls().len(), 1);
}

#[test]
fn test_http_runtime_rejects_unknown_arguments() {
    let err = Application::run(HttpRuntime, args(&["--no-such-flag"])).unwrap_err();
    assert!(matches!(err, pets_api::RuntimeError::Args(_)));
}

#[test]
fn test_http_runtime_reports_missing_config_file() {
    let err = Application::run(
        HttpRuntime,
        args(&["--config", "/nonexistent/pets-api.toml"]),
    )
    .unwrap_err();
    assert!(matches!(err, pets_api::RuntimeError::Config(_)));
}

#[test]
fn test_http_runtime_help_exits_cleanly() {
    assert!(Application::run(HttpRuntime, args(&["--help"])).is_ok());
}

#[test]
fn test_document_retains_registered_type() {
    let doc = Application::entry_point().document();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["info"]["title"], "pets-api");
    assert_eq!(json["info"]["version"], "0.2");
    assert_eq!(
        json["components"]["schemas"]["PetHealth"]["enum"],
        serde_json::json!(["VACCINATED", "REQUIRES_VACCINATION"])
    );
}
