use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BIN_NAME: &str = "finanzas";

/// A data directory whose settings pin the calendar to UTC
fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "$", "utc_offset_minutes": 0}"#,
    )
    .expect("write settings");
    dir
}

fn finanzas(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINANZAS_DATA_DIR", dir).env_remove("FINANZAS_LOG");
    cmd
}

fn stored_movements(dir: &Path) -> Vec<serde_json::Value> {
    let raw = fs::read_to_string(dir.join("data").join("movements.json")).expect("movements file");
    serde_json::from_str(&raw).expect("valid json")
}

#[test]
fn cli_help_lists_commands() {
    let dir = data_dir();
    finanzas(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("add").and(contains("summary")).and(contains("export")));
}

#[test]
fn cli_init_creates_empty_movements_file() {
    let dir = TempDir::new().unwrap();
    finanzas(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(stored_movements(dir.path()).is_empty());
}

#[test]
fn cli_add_persists_wire_format() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["add", "expense", "25,50", "-c", "transporte", "-t", "Uber", "-d", "2026-10-05"])
        .assert()
        .success()
        .stdout(contains("Added mov-").and(contains("-$25.50")));

    let movements = stored_movements(dir.path());
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0]["type"], "expense");
    assert_eq!(movements[0]["category"], "transporte");
    assert_eq!(movements[0]["title"], "Uber");
    assert_eq!(movements[0]["amount"], 25.5);
    assert_eq!(movements[0]["isRecurring"], false);
    assert_eq!(movements[0]["date"], "2026-10-05T12:00:00Z");
}

#[test]
fn cli_summary_reports_month_totals() {
    let dir = data_dir();
    for args in [
        ["add", "income", "120000", "-c", "sueldo", "-d", "2026-10-18"],
        ["add", "expense", "18500", "-c", "comida", "-d", "2026-10-17"],
        ["add", "expense", "6200", "-c", "transporte", "-d", "2026-10-16"],
        ["add", "expense", "4500", "-c", "ocio", "-d", "2026-10-15"],
        ["add", "expense", "999", "-c", "hogar", "-d", "2026-09-15"],
    ] {
        finanzas(dir.path()).args(args).assert().success();
    }

    finanzas(dir.path())
        .args(["summary", "--month", "2026-10"])
        .assert()
        .success()
        .stdout(
            contains("Octubre 2026")
                .and(contains("$120000"))
                .and(contains("$29200"))
                .and(contains("$90800"))
                .and(contains("Hogar").not()),
        );
}

#[test]
fn cli_list_filters_by_month() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["add", "expense", "40", "-c", "salud", "-t", "Farmacia", "-d", "2026-09-03"])
        .assert()
        .success();

    finanzas(dir.path())
        .args(["list", "--month", "2026-10"])
        .assert()
        .success()
        .stdout(contains("No movements found."));

    finanzas(dir.path())
        .args(["list", "--month", "2026-09"])
        .assert()
        .success()
        .stdout(contains("Farmacia"));
}

#[test]
fn cli_rejects_category_of_other_type() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["add", "income", "10", "-c", "comida"])
        .assert()
        .failure()
        .stderr(contains("cannot be used for income movements"));

    assert!(!dir.path().join("data").join("movements.json").exists());
}

#[test]
fn cli_rejects_unknown_category() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["add", "expense", "10", "-c", "casino"])
        .assert()
        .failure()
        .stderr(contains("Unknown category"));
}

#[test]
fn cli_delete_by_short_id() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["add", "income", "500", "-c", "venta"])
        .assert()
        .success();

    let id = stored_movements(dir.path())[0]["id"]
        .as_str()
        .expect("id string")
        .to_string();

    finanzas(dir.path())
        .args(["delete", &id[..8]])
        .assert()
        .success()
        .stdout(contains("Deleted"));
    assert!(stored_movements(dir.path()).is_empty());

    finanzas(dir.path())
        .args(["delete", &id[..8]])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn cli_scan_confirms_untitled_receipt() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["scan", "--amount", "45.99", "-c", "compras"])
        .assert()
        .success()
        .stdout(contains("Confirmed").and(contains("Ticket")));

    let movements = stored_movements(dir.path());
    assert_eq!(movements[0]["title"], "Ticket");
    assert_eq!(movements[0]["type"], "expense");
    assert_eq!(movements[0]["category"], "compras");
}

#[test]
fn cli_export_month_csv() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["add", "expense", "18,5", "-c", "comida", "-d", "2026-10-01"])
        .assert()
        .success();

    let out = dir.path().join("october.csv");
    finanzas(dir.path())
        .args(["export", "--month", "2026-10", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported 1 movements"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("ID,Date,Type,Category,Title,Amount,Recurring"));
    assert!(csv.contains("expense,comida,,-18.50,false"));
}

#[test]
fn cli_calendar_and_day_balance() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["add", "income", "300", "-c", "regalo", "-d", "2026-10-18"])
        .assert()
        .success();
    finanzas(dir.path())
        .args(["add", "expense", "50", "-c", "ocio", "-d", "2026-10-18"])
        .assert()
        .success();

    finanzas(dir.path())
        .args(["calendar", "--month", "2026-10"])
        .assert()
        .success()
        .stdout(contains("Lun").and(contains("18 +250")));

    finanzas(dir.path())
        .args(["day", "2026-10-18"])
        .assert()
        .success()
        .stdout(contains("$250"));
}

#[test]
fn cli_config_sets_currency() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["config", "--currency", "€"])
        .assert()
        .success()
        .stdout(contains("Currency symbol: €"));

    let settings = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(settings.contains("€"));
}

#[test]
fn cli_corrupt_data_starts_empty() {
    let dir = data_dir();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("movements.json"), "not json").unwrap();

    finanzas(dir.path())
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(contains("No movements found."));
}

#[test]
fn cli_config_time_zone_files_by_local_month() {
    let dir = data_dir();
    finanzas(dir.path())
        .args(["config", "--time-zone", "Europe/Madrid"])
        .assert()
        .success()
        .stdout(contains("Time zone:       Europe/Madrid"));

    // 00:30 on July 1 in Madrid summer time
    finanzas(dir.path())
        .args(["add", "expense", "12", "-c", "comida", "-t", "Churros", "-d", "2026-06-30T22:30:00Z"])
        .assert()
        .success();

    finanzas(dir.path())
        .args(["list", "--month", "2026-07"])
        .assert()
        .success()
        .stdout(contains("Churros"));

    finanzas(dir.path())
        .args(["config", "--time-zone", "Nowhere/Special"])
        .assert()
        .failure()
        .stderr(contains("Unknown time zone"));
}

#[test]
fn cli_add_rejects_malformed_amounts() {
    let dir = data_dir();
    for amount in ["25.5€", "10.999", "99999999999999999"] {
        finanzas(dir.path())
            .args(["add", "expense", amount, "-c", "comida"])
            .assert()
            .failure()
            .stderr(contains("Invalid amount").and(contains("panicked").not()));
    }
    assert!(!dir.path().join("data").join("movements.json").exists());
}
