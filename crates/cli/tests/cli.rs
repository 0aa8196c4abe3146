// ABOUTME: Integration tests for the okazje CLI binary.
// ABOUTME: Tests offline HTML scraping, fetch mode over a mock server, and argument validation.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn okazje_cmd() -> Command {
    Command::cargo_bin("okazje").unwrap()
}

const PRODUCT_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<h1>Czajnik elektryczny</h1>
<span class="price">99,90 zł</span>
<div class="product-description">Czajnik ze stali nierdzewnej</div>
</body>
</html>"#;

#[test]
fn scrapes_html_file_offline() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("produkt.html");
    fs::write(&html_path, PRODUCT_HTML).unwrap();

    okazje_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://www.x-kom.pl/p/1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Czajnik elektryczny"))
        .stdout(predicate::str::contains("99.9"))
        .stdout(predicate::str::contains("x-kom"));
}

#[test]
fn html_mode_requires_url_context() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("produkt.html");
    fs::write(&html_path, PRODUCT_HTML).unwrap();

    okazje_cmd()
        .arg("--html")
        .arg(&html_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn no_targets_is_an_error() {
    okazje_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one URL"));
}

#[test]
fn fetch_mode_emits_one_envelope_per_url() {
    let server = MockServer::start();

    let mock1 = server.mock(|when, then| {
        when.method(GET).path("/p/1");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body><h1>Produkt Pierwszy</h1></body></html>");
    });
    let mock2 = server.mock(|when, then| {
        when.method(GET).path("/p/2");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body><h1>Produkt Drugi</h1></body></html>");
    });

    let output = okazje_cmd()
        .arg("--allow-private-networks")
        .arg("--compact")
        .arg(server.url("/p/1"))
        .arg(server.url("/p/2"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    mock1.assert();
    mock2.assert();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2, "expected one JSON line per target");

    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["ok"], serde_json::Value::Bool(true));
    }
    assert!(stdout.contains("Produkt Pierwszy"));
    assert!(stdout.contains("Produkt Drugi"));
}

#[test]
fn failed_fetch_reports_error_envelope_and_failure_exit() {
    // Private address without --allow-private-networks: SSRF-blocked.
    let output = okazje_cmd()
        .arg("--compact")
        .arg("http://127.0.0.1:1/p/1")
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["ok"], serde_json::Value::Bool(false));
    assert!(value["error"].as_str().unwrap().contains("SSRF"));
}

#[test]
fn timing_flag_prints_elapsed() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("produkt.html");
    fs::write(&html_path, PRODUCT_HTML).unwrap();

    okazje_cmd()
        .arg("--html")
        .arg(&html_path)
        .arg("--url")
        .arg("https://shop.example/p/1")
        .arg("--timing")
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"));
}
