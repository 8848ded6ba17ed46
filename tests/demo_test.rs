use srp_calculator::app::demo::run_demo;
use srp_calculator::utils::validation::Validate;
use srp_calculator::{build_sink, CalcError, ConfigProvider, MemorySink, Sink, TomlConfig};
use tempfile::TempDir;

#[test]
fn test_demo_narration_and_recorded_entries() {
    let sink = MemorySink::new();
    let mut out = Vec::new();

    run_demo(&mut out, || Ok(Box::new(sink.clone()) as Box<dyn Sink>)).unwrap();

    let narration = String::from_utf8(out).unwrap();
    assert!(narration.starts_with("=== SIMPLE SRP EXAMPLE ==="));
    assert!(narration.contains("❌ VIOLATION of SRP:"));
    assert!(narration.contains("✅ CORRECT SRP Implementation:"));
    assert!(narration.contains(&"=".repeat(40)));
    assert_eq!(narration.matches("Result: 8").count(), 2);
    assert!(narration.contains("Math only: 30"));
    assert!(narration.contains("Math only: 20"));
    assert!(narration.contains("--- Using FileLogger independently ---"));

    assert_eq!(
        sink.entries(),
        vec!["Addition: 5 + 3 = 8", "Addition: 5 + 3 = 8", "Some other data"]
    );
}

#[test]
fn test_demo_records_to_configured_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("calculations.log");
    let toml_content = format!(
        r#"
[sink]
kind = "file"
path = "{}"
format = "plain"
"#,
        log_path.to_str().unwrap().replace('\\', "/")
    );

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    config.validate().unwrap();
    let provider: &dyn ConfigProvider = &config;

    let mut out = Vec::new();
    run_demo(&mut out, || build_sink(provider)).unwrap();

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(
        content,
        "Addition: 5 + 3 = 8\nAddition: 5 + 3 = 8\nSome other data\n"
    );
}

#[test]
fn test_demo_stops_on_sink_factory_error() {
    let mut out = Vec::new();

    let result = run_demo(&mut out, || {
        Err(CalcError::SinkUnavailable {
            sink: "file".to_string(),
            reason: "read-only filesystem".to_string(),
        })
    });

    assert!(matches!(result, Err(CalcError::SinkUnavailable { .. })));
    let narration = String::from_utf8(out).unwrap();
    assert!(!narration.contains("Result: 8"));
}
