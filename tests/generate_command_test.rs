use k6gen::commands::generate::generate;
use k6gen::commands::{GenerateCommandArgs, GenerateOutput, execute_generate};
use k6gen::converters::GenerationSettings;
use k6gen::output::OUTPUT_FILE_NAME;

fn settings(token: &str) -> GenerationSettings {
    GenerationSettings {
        token: token.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn generate_returns_error_for_empty_token() {
    let dir = tempfile::tempdir().unwrap();
    let args = GenerateCommandArgs {
        spec: Some("tests/fixtures/petstore.json"),
        settings: settings(""),
        output_dir: dir.path(),
        to_stdout: false,
    };

    let result = execute_generate(args).await;

    let message = format!("{}", result.unwrap_err());
    assert!(
        message.contains("Bearer token must not be empty"),
        "unexpected message: {message}"
    );
    assert!(!dir.path().join(OUTPUT_FILE_NAME).exists());
}

#[tokio::test]
async fn generate_returns_error_for_missing_spec() {
    let dir = tempfile::tempdir().unwrap();
    let args = GenerateCommandArgs {
        spec: None,
        settings: settings("abc"),
        output_dir: dir.path(),
        to_stdout: false,
    };

    let message = format!("{}", execute_generate(args).await.unwrap_err());
    assert!(
        message.contains("no OpenAPI spec given"),
        "unexpected message: {message}"
    );
}

#[tokio::test]
async fn generate_writes_script_into_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let args = GenerateCommandArgs {
        spec: Some("tests/fixtures/petstore.json"),
        settings: settings("abc"),
        output_dir: dir.path(),
        to_stdout: false,
    };

    execute_generate(args).await.unwrap();

    let script = std::fs::read_to_string(dir.path().join(OUTPUT_FILE_NAME)).unwrap();
    assert!(script.contains("group('animals', () => {"));
}

#[tokio::test]
async fn generate_to_stdout_yields_bare_script_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let args = GenerateCommandArgs {
        spec: Some("tests/fixtures/empty.json"),
        settings: settings("abc"),
        output_dir: dir.path(),
        to_stdout: true,
    };

    let GenerateOutput::Script(script) = generate(&args).await.unwrap() else {
        panic!("expected the script to be returned for stdout");
    };
    assert!(script.as_str().starts_with("// k6 script"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    execute_generate(args).await.unwrap();
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
