use super::*;

const SCENARIO: &str = r#"{"messages":[{"id":"1","role":"user","content":"show data","timestamp":"9:00"}]}"#;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["chat-url", "--base-url", "https://widget.test/"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

#[test]
fn defaults_read_stdin_in_encoded_mode() {
    let cli = cli(&[]);
    assert_eq!(cli.input, "-");
    assert_eq!(cli.mode, Mode::Encoded);
    assert!(!cli.check);
}

#[test]
fn mode_flag_selects_data_parameter() {
    let cli = cli(&["--mode", "data", "input.json"]);
    assert_eq!(cli.mode, Mode::Data);
    assert_eq!(cli.input, "input.json");
}

#[test]
fn unknown_mode_is_rejected() {
    let result = Cli::try_parse_from(["chat-url", "--mode", "zip"]);
    assert!(result.is_err());
}

#[test]
fn encoded_url_decodes_back_to_input() {
    let url = build_url(&cli(&[]), SCENARIO).expect("url");
    let value = url
        .strip_prefix("https://widget.test/?encoded=")
        .expect("encoded prefix");
    let decoded = payload::decode_base64(&payload::form_decode(value).expect("form decode")).expect("decode");
    assert_eq!(decoded, payload::parse_json(SCENARIO).expect("parse"));
}

#[test]
fn data_url_decodes_back_to_input() {
    let url = build_url(&cli(&["--mode", "data"]), SCENARIO).expect("url");
    let value = url
        .strip_prefix("https://widget.test/?data=")
        .expect("data prefix");
    let decoded = payload::decode_url_json(&payload::form_decode(value).expect("form decode")).expect("decode");
    assert_eq!(decoded.messages[0].content, "show data");
}

#[test]
fn pretty_input_is_compacted() {
    let pretty = "{\n  \"messages\": []\n}\n";
    let compact = build_url(&cli(&[]), r#"{"messages":[]}"#).expect("compact");
    assert_eq!(build_url(&cli(&[]), pretty).expect("pretty"), compact);
}

#[test]
fn invalid_json_is_reported() {
    let err = build_url(&cli(&[]), "{not json").expect_err("should fail");
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn empty_input_is_reported() {
    let err = build_url(&cli(&[]), "  \n").expect_err("should fail");
    assert!(matches!(err, CliError::EmptyInput));
}

#[test]
fn schema_is_only_enforced_with_check() {
    let off_schema = r#"{"conversation":[]}"#;
    assert!(build_url(&cli(&[]), off_schema).is_ok());
    let err = build_url(&cli(&["--check"]), off_schema).expect_err("should fail");
    assert!(matches!(err, CliError::Schema(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = read_input("/nonexistent/chat-input.json").expect_err("should fail");
    assert!(err.to_string().contains("/nonexistent/chat-input.json"));
}
