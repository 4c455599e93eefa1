use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RECEIPT: &str = "\
CORNER MARKET
12 Elm Street
(512) 555-0100
03/14/2024 12:45
Bananas 2x $1.50
Organic Fuji Apples 3.98
2% Milk 3,49
Limes 3 @ 1.00
Sourdough Bread 5.99
SUBTOTAL 15.96
TAX 0.50
TOTAL 16.46
Thank you!
";

fn rcpt() -> Command {
    Command::cargo_bin("rcpt").unwrap()
}

/// Temp dir with an empty config file, so tests never read the user's config.
fn workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{}").unwrap();
    (dir, config)
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_process_json() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "receipt.txt", RECEIPT);

    let output = rcpt()
        .arg("-c")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = json["items"].as_array().unwrap();
    let names: Vec<(&str, &str)> = items
        .iter()
        .map(|i| (i["name"].as_str().unwrap(), i["category"].as_str().unwrap()))
        .collect();

    assert_eq!(
        names,
        vec![
            ("Bananas", "fruits"),
            ("Organic Fuji Apples", "fruits"),
            ("2 Milk", "dairy"),
            ("Limes", "fruits"),
            ("Sourdough Bread", "grains"),
        ]
    );
    assert_eq!(items[0]["quantity"], 2);
    assert_eq!(items[0]["unit_price"], "0.75");
    assert_eq!(json["total"], "15.96");
    assert_eq!(json["store"]["name"], "CORNER MARKET");
}

#[test]
fn test_process_no_store() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "receipt.txt", RECEIPT);

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["process", "--no-store"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("CORNER MARKET").not());
}

#[test]
fn test_process_csv_to_file() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "receipt.txt", RECEIPT);
    let output = dir.path().join("items.csv");

    rcpt()
        .arg("-c")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .args(["-f", "csv", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 items written"));

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,quantity,unit_price,total_price,category"));
    assert_eq!(lines.next(), Some("Bananas,2,0.75,1.50,fruits"));
    assert_eq!(csv.lines().count(), 6);
}

#[test]
fn test_process_stdin_text() {
    let (_dir, config) = workspace();

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["process", "-", "-f", "text"])
        .write_stdin(RECEIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Store: CORNER MARKET"))
        .stdout(predicate::str::contains("Total: 15.96"));
}

#[test]
fn test_process_without_items_fails() {
    let (dir, config) = workspace();
    let input = write(dir.path(), "blank.txt", "THANK YOU\nTOTAL 0.00\n");

    rcpt()
        .arg("-c")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not identify any items in the receipt"));
}

#[test]
fn test_process_missing_file() {
    let (dir, config) = workspace();

    rcpt()
        .arg("-c")
        .arg(&config)
        .arg("process")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_categorize_names() {
    let (_dir, config) = workspace();

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["categorize", "Bananas", "2% Milk", "xyz123nonsense", "Bananna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bananas: fruits"))
        .stdout(predicate::str::contains("2% Milk: dairy"))
        .stdout(predicate::str::contains("xyz123nonsense: other"))
        .stdout(predicate::str::contains("Bananna: fruits"));
}

#[test]
fn test_categorize_explain_json() {
    let (_dir, config) = workspace();

    let output = rcpt()
        .arg("-c")
        .arg(&config)
        .args(["categorize", "--json", "Frozen Lasagna"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json[0]["name"], "Frozen Lasagna");
    assert_eq!(json[0]["category"], "frozen");
    assert_eq!(json[0]["stage"], "marker");
}

#[test]
fn test_suggest_json() {
    let (_dir, config) = workspace();

    let output = rcpt()
        .arg("-c")
        .arg(&config)
        .args(["suggest", "chiken", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let suggestions = json.as_array().unwrap();
    assert!(!suggestions.is_empty() && suggestions.len() <= 5);
    assert_eq!(suggestions[0]["category"], "meat");
    assert_eq!(suggestions[0]["keyword"], "chicken");
    assert_eq!(suggestions[0]["score"], 92);
}

#[test]
fn test_suggest_nothing() {
    let (_dir, config) = workspace();

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["suggest", "xyz123nonsense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions"));
}

#[test]
fn test_config_map_applies_to_categorize() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("rcpt").join("config.json");

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["config", "map", "Kimchi", "vegetables"])
        .assert()
        .success();

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["categorize", "kimchi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kimchi: vegetables"));

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["config", "map", "spam", "other"])
        .assert()
        .failure();
}

#[test]
fn test_config_set_and_get() {
    let (_dir, config) = workspace();

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "categorizer.fuzzy_threshold", "90"])
        .assert()
        .success();

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "categorizer.fuzzy_threshold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("90"));

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "categorizer.nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));

    rcpt()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "categorizer.fuzzy_threshold", "loud"])
        .assert()
        .failure();
}

#[test]
fn test_batch_with_summary() {
    let (dir, config) = workspace();
    let inputs = dir.path().join("in");
    fs::create_dir(&inputs).unwrap();
    write(&inputs, "a.txt", RECEIPT);
    write(&inputs, "b.txt", "Limes 3 @ 1.00\nEggs 3.49\n");
    write(&inputs, "c.txt", "TOTAL 9.99\n");
    let out = dir.path().join("out");

    let pattern = inputs.join("*.txt");
    rcpt()
        .arg("-c")
        .arg(&config)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("-o")
        .arg(&out)
        .args(["--summary", "--continue-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 files"))
        .stdout(predicate::str::contains("c.txt"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());
    assert!(!out.join("c.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,"));
    assert!(summary.contains("a.txt,success,CORNER MARKET,03/14/2024,5,15.96,"));
    assert!(summary.contains("c.txt,error,"));
}

#[test]
fn test_batch_stops_on_error() {
    let (dir, config) = workspace();
    write(dir.path(), "bad.txt", "THANK YOU\n");

    let pattern = dir.path().join("*.txt");
    rcpt()
        .arg("-c")
        .arg(&config)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}
