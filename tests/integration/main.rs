//! Integration tests for the devfinder CLI
//!
//! These tests run the real binary against a local tiny_http fixture
//! server standing in for the profiles endpoint.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const FIXTURE_JSON: &str = r#"[
  {
    "name": "José da Silva",
    "picture": "http://example.com/jose.png",
    "programmingLanguages": [
      { "language": "Java" },
      { "language": "Python" }
    ]
  },
  {
    "name": "Ana Clara",
    "picture": "http://example.com/ana.png",
    "programmingLanguages": [
      { "language": "JavaScript" }
    ]
  },
  {
    "name": "Bruno",
    "picture": "http://example.com/bruno.png",
    "programmingLanguages": [
      { "language": "Java" }
    ]
  }
]"#;

/// Helper function to create a devfinder command with isolated config
fn devfinder(config_home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("devfinder"));
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

/// Spawn a fixture server on an ephemeral port and return the endpoint URL
fn spawn_devs_server(body: &'static str, status: u16) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fixture server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("tcp listener address")
        .port();

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let header = tiny_http::Header::from_bytes(
                &b"Content-Type"[..],
                &b"application/json"[..],
            )
            .expect("static header");
            let response = tiny_http::Response::from_string(body)
                .with_header(header)
                .with_status_code(status);
            let _ = request.respond(response);
        }
    });

    format!("http://127.0.0.1:{port}/devs")
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    devfinder(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("devfinder"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    devfinder(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("accent-insensitive"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    devfinder(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("devfinder"));
}

#[test]
fn test_languages_lists_supported_tags() {
    let temp = TempDir::new().unwrap();
    devfinder(&temp)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript"))
        .stdout(predicate::str::contains("Python"));
}

#[test]
fn test_languages_json() {
    let temp = TempDir::new().unwrap();
    let output = devfinder(&temp)
        .args(["--json", "languages"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tags: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(tags.as_array().unwrap().len(), 3);
    assert_eq!(tags[0]["tag"], "java");
}

#[test]
fn test_list_shows_every_profile_by_default() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server(FIXTURE_JSON, 200);

    devfinder(&temp)
        .args(["--url", &url, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 developer(s) found"))
        .stdout(predicate::str::contains("José da Silva"))
        .stdout(predicate::str::contains("Bruno"));
}

#[test]
fn test_list_name_query_is_accent_insensitive() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server(FIXTURE_JSON, 200);

    devfinder(&temp)
        .args(["--url", &url, "list", "--name", "jose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 developer(s) found"))
        .stdout(predicate::str::contains("José da Silva"))
        .stdout(predicate::str::contains("Ana Clara").not());
}

#[test]
fn test_list_all_mode_requires_exact_language_set() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server(FIXTURE_JSON, 200);

    // José has java+python, so only Bruno matches {java} exactly.
    devfinder(&temp)
        .args(["--url", &url, "list", "--lang", "java", "--mode", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 developer(s) found"))
        .stdout(predicate::str::contains("Bruno"))
        .stdout(predicate::str::contains("José").not());
}

#[test]
fn test_list_json_emits_the_view_model() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server(FIXTURE_JSON, 200);

    let output = devfinder(&temp)
        .args(["--json", "--url", &url, "list", "--lang", "javascript"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(listing["count"], 1);
    assert_eq!(listing["cards"][0]["name"], "Ana Clara");
    assert_eq!(listing["cards"][0]["languages"][0]["label"], "JavaScript");
}

#[test]
fn test_list_rejects_unknown_tag_flag() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server(FIXTURE_JSON, 200);

    devfinder(&temp)
        .args(["--url", &url, "list", "--lang", "cobol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language tag"));
}

#[test]
fn test_list_fails_fast_on_unreachable_endpoint() {
    let temp = TempDir::new().unwrap();
    devfinder(&temp)
        .args(["--url", "http://127.0.0.1:1/devs", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request to"));
}

#[test]
fn test_list_fails_fast_on_error_status() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server("oops", 500);

    devfinder(&temp)
        .args(["--url", &url, "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request to"));
}

#[test]
fn test_list_fails_fast_on_malformed_body() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server("{\"not\": \"a list\"}", 200);

    devfinder(&temp)
        .args(["--url", &url, "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed profile data"));
}

#[test]
fn test_list_fails_loudly_on_unsupported_tag_in_data() {
    let temp = TempDir::new().unwrap();
    // The profile needs a supported tag too, or the language filter drops
    // it before the unsupported one ever reaches rendering.
    let url = spawn_devs_server(
        r#"[{"name": "Rusty", "picture": "p", "programmingLanguages": [{"language": "Java"}, {"language": "Rust"}]}]"#,
        200,
    );

    devfinder(&temp)
        .args(["--url", &url, "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language tag"));
}

#[test]
fn test_repl_filters_per_command() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server(FIXTURE_JSON, 200);

    devfinder(&temp)
        .args(["--url", &url, "repl"])
        .write_stdin("name jose\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 developer(s) found"))
        .stdout(predicate::str::contains("1 developer(s) found"));
}

#[test]
fn test_repl_toggling_every_tag_off_empties_the_view() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server(FIXTURE_JSON, 200);

    devfinder(&temp)
        .args(["--url", &url, "repl"])
        .write_stdin("lang java\nlang javascript\nlang python\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 developer(s) found"));
}

#[test]
fn test_repl_reports_unknown_commands_and_continues() {
    let temp = TempDir::new().unwrap();
    let url = spawn_devs_server(FIXTURE_JSON, 200);

    devfinder(&temp)
        .args(["--url", &url, "repl"])
        .write_stdin("frobnicate\nlang cobol\nmode all\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command"))
        .stderr(predicate::str::contains("unsupported language tag"))
        .stdout(predicate::str::contains("0 developer(s) found"));
}
