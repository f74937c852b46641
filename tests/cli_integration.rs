use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

/// A stockman invocation confined to `dir`: project scope resolves to `dir` and the
/// global scope to `dir/global`.
fn stockman(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockman").unwrap();
    cmd.current_dir(dir)
        .env("STOCKMAN_GLOBAL_DATA", dir.join("global"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn write_stock(dir: &Path, content: &str) {
    fs::write(dir.join("stocks.txt"), content).unwrap();
}

fn read_stock(dir: &Path) -> String {
    fs::read_to_string(dir.join("stocks.txt")).unwrap()
}

const SAMPLE: &str = "A|Drinks|3\nB|Snacks|10\nC|Drinks|5\n";

#[test]
fn add_then_list_marks_low_rows() {
    let temp = tempfile::tempdir().unwrap();

    stockman(temp.path())
        .args(["add", "Cola", "4", "-c", "Drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cola added successfully!"));
    assert_eq!(read_stock(temp.path()), "Cola|Drinks|4\n");

    stockman(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(" ! 1.  Cola"));
}

#[test]
fn bare_invocation_lists_and_alerts() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Snacks"))
        .stdout(predicate::str::contains("Low stock alert: A (3)"));
}

#[test]
fn startup_alert_can_be_turned_off() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["config", "startup-alert", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("startup-alert set to false"));

    stockman(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Low stock alert").not());
}

#[test]
fn invalid_quantity_is_rejected_without_writing() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["add", "Cola", "ten"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("quantity must be a whole number"));
    assert_eq!(read_stock(temp.path()), SAMPLE);
}

#[test]
fn reserved_separator_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["add", "Cola|Zero", "4"])
        .assert()
        .code(1);
    assert_eq!(read_stock(temp.path()), SAMPLE);
}

#[test]
fn update_changes_only_the_given_field() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["update", "2", "--quantity", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B updated successfully!"));
    assert_eq!(
        read_stock(temp.path()),
        "A|Drinks|3\nB|Snacks|1\nC|Drinks|5\n"
    );
}

#[test]
fn delete_removes_exactly_the_given_rows() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["delete", "1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected item(s) deleted successfully."));
    assert_eq!(read_stock(temp.path()), "B|Snacks|10\n");
}

#[test]
fn unknown_row_is_a_warning() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["delete", "9"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Row 9 not found"));
    assert_eq!(read_stock(temp.path()), SAMPLE);
}

#[test]
fn show_prints_the_fields() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:     A"))
        .stdout(predicate::str::contains("Quantity: 3"))
        .stdout(predicate::str::contains("Running low"));
}

#[test]
fn show_offers_the_configured_categories() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["config", "categories", "Tools,Paint"])
        .assert()
        .success();

    stockman(temp.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(categories: Tools, Paint)"));
}

#[test]
fn list_by_category() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .args(["list", "-c", "Drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.  C"))
        .stdout(predicate::str::contains("Snacks").not());
}

#[test]
fn analytics_over_the_reference_data() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .arg("analytics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Item Types: 3"))
        .stdout(predicate::str::contains("Total Quantity: 18"))
        .stdout(predicate::str::contains("Low-stock Items (<5): 1"))
        .stdout(predicate::str::contains("Highest Stock: 10"))
        .stdout(predicate::str::contains("Lowest Stock: 3"))
        .stdout(predicate::str::contains("Average Stock: 6.0"))
        .stdout(predicate::str::contains("• Drinks: 2"))
        .stdout(predicate::str::contains("• Snacks: 1"));
}

#[test]
fn analytics_without_data_is_informational() {
    let temp = tempfile::tempdir().unwrap();

    stockman(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available."));
}

#[test]
fn file_flag_overrides_the_data_file() {
    let temp = tempfile::tempdir().unwrap();

    stockman(temp.path())
        .args(["--file", "other.txt", "add", "X", "1"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(temp.path().join("other.txt")).unwrap(),
        "X||1\n"
    );
    assert!(!temp.path().join("stocks.txt").exists());
}

#[test]
fn malformed_lines_are_skipped_and_doctor_fixes_them() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), "A|Drinks|3\nnot a record\n");

    stockman(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("not a record").not());

    stockman(temp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("line 2"));
    assert!(read_stock(temp.path()).contains("not a record"));

    stockman(temp.path())
        .args(["doctor", "--fix"])
        .assert()
        .success();
    assert_eq!(read_stock(temp.path()), "A|Drinks|3\n");
}

#[test]
fn unknown_config_key_fails() {
    let temp = tempfile::tempdir().unwrap();

    stockman(temp.path())
        .args(["config", "colour", "red"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn init_and_path() {
    let temp = tempfile::tempdir().unwrap();

    stockman(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized stockman inventory"));
    assert!(temp.path().join("stockman.json").exists());
    assert!(temp.path().join("stocks.txt").exists());

    stockman(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("stocks.txt"));
}

#[test]
fn global_scope_uses_its_own_data_file() {
    let temp = tempfile::tempdir().unwrap();

    stockman(temp.path())
        .args(["-g", "add", "Milk", "2", "-c", "Dairy"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(temp.path().join("global").join("stocks.txt")).unwrap(),
        "Milk|Dairy|2\n"
    );
    assert!(!temp.path().join("stocks.txt").exists());
}

#[test]
fn shell_session_reads_commands_from_stdin() {
    let temp = tempfile::tempdir().unwrap();
    write_stock(temp.path(), SAMPLE);

    stockman(temp.path())
        .arg("shell")
        .write_stdin("select 2\nset quantity 1\nupdate\nset name \"Green Tea\"\nset qty 7\nadd\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("B updated successfully!"))
        .stdout(predicate::str::contains("Green Tea added successfully!"));
    assert_eq!(
        read_stock(temp.path()),
        "A|Drinks|3\nB|Snacks|1\nC|Drinks|5\nGreen Tea||7\n"
    );
}

#[test]
fn grouped_help_lists_commands() {
    let temp = tempfile::tempdir().unwrap();

    stockman(temp.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory Commands:"))
        .stdout(predicate::str::contains("analytics"));
}
