use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD: &str = "John Smith\njohn@acme.com\n+1 555 123 4567\nAcme Solutions LLC\n";

fn cardscan(dir: &Path) -> Command {
    let config = dir.join("config.json");
    if !config.exists() {
        fs::write(
            &config,
            format!(
                r#"{{"store": {{"path": {}}}}}"#,
                serde_json::to_string(&dir.join("records.json")).unwrap()
            ),
        )
        .unwrap();
    }

    let mut cmd = Command::cargo_bin("cardscan").unwrap();
    cmd.current_dir(dir).arg("--config").arg(&config);
    cmd
}

#[test]
fn parse_reads_stdin() {
    let dir = TempDir::new().unwrap();
    cardscan(dir.path())
        .arg("parse")
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""email": "john@acme.com""#))
        .stdout(predicate::str::contains(r#""phone": "+1 555 123 4567""#))
        .stdout(predicate::str::contains(r#""companyName": "Acme Solutions LLC""#))
        .stdout(predicate::str::contains("whatsapp").not());
}

#[test]
fn parse_payload_from_file() {
    let dir = TempDir::new().unwrap();
    let payload = dir.path().join("payload.txt");
    fs::write(&payload, "https://wa.me/35699123456").unwrap();

    cardscan(dir.path())
        .args(["parse", "--payload", "--format", "text"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("35699123456"));
}

#[test]
fn add_list_and_export_csv() {
    let dir = TempDir::new().unwrap();
    let card = dir.path().join("card.txt");
    fs::write(&card, CARD).unwrap();

    cardscan(dir.path())
        .args(["add", "--relevancy", "high", "--rep", "Dana", "--first-name", "Johnny"])
        .arg("--from-text")
        .arg(&card)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Johnny Smith"));

    cardscan(dir.path())
        .args(["list", "--search", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Johnny Smith"))
        .stdout(predicate::str::contains("Acme Solutions LLC"))
        .stdout(predicate::str::contains("1 submission(s)"));

    let out = dir.path().join("out.csv");
    cardscan(dir.path())
        .args(["export", "--format", "csv", "--relevancy", "High", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 contact(s)"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("ID,Rep,Relevancy,Company Name"));
    assert!(csv.contains(",Dana,High,Acme Solutions LLC,Johnny,Smith,john@acme.com,"));
}

#[test]
fn add_requires_email() {
    let dir = TempDir::new().unwrap();
    cardscan(dir.path())
        .args(["add", "--first-name", "Ann", "--last-name", "Lee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: email"));
}

#[test]
fn export_with_no_records_fails() {
    let dir = TempDir::new().unwrap();
    cardscan(dir.path())
        .args(["export", "--format", "xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data to export"));
}

#[test]
fn export_xlsx_default_name() {
    let dir = TempDir::new().unwrap();
    cardscan(dir.path())
        .args(["add", "--first-name", "Ann", "--last-name", "Lee", "--email", "ann@lee.org"])
        .assert()
        .success();

    cardscan(dir.path())
        .args(["export", "--format", "xlsx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("business-contacts-"));

    let exported: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".xlsx"))
        .collect();
    assert_eq!(exported.len(), 1);
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    cardscan(dir.path())
        .args(["add", "--first-name", "Ann", "--last-name", "Lee", "--email", "ann@lee.org"])
        .assert()
        .success();

    cardscan(dir.path())
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    cardscan(dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 submission(s)"));

    cardscan(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No submissions found"));
}

#[test]
fn qr_without_code_fails() {
    let dir = TempDir::new().unwrap();
    let blank = dir.path().join("blank.png");
    image::GrayImage::from_pixel(64, 64, image::Luma([255u8]))
        .save(&blank)
        .unwrap();

    cardscan(dir.path())
        .arg("qr")
        .arg(&blank)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No QR code found"));
}

#[test]
fn config_set_and_get() {
    let dir = TempDir::new().unwrap();
    cardscan(dir.path())
        .args(["config", "set", "extraction.name_max_tokens", "3"])
        .assert()
        .success();

    cardscan(dir.path())
        .args(["config", "get", "extraction.name_max_tokens"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));

    cardscan(dir.path())
        .args(["config", "get", "extraction.nope"])
        .assert()
        .failure();

    cardscan(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: exists"));
}
