//! End-to-end tests for the plugin-demo binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any config the machine might have lying around
fn isolated(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plugin-demo").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("PLUGIN_DEMO_CONFIG")
        .env_remove("PLUGIN_DEMO_CONFIG_DIR")
        .env_remove("PLUGIN_DEMO_OUTPUT_FORMAT")
        .env_remove("PLUGIN_DEMO_PRETTY")
        .env_remove("PLUGIN_DEMO_LOG_LEVEL")
        .env_remove("PLUGIN_DEMO_IMPORT_NAME")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn plugin_demo(home: &TempDir) -> Command {
    let mut cmd = isolated(home);
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_call_getenv() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .env("CLI_TEST_VALUE", "from-env")
        .args(["call", "getenv", "CLI_TEST_VALUE"])
        .assert()
        .success()
        .stdout("\"from-env\"\n");
}

#[test]
fn test_call_getenv_unset_is_empty_string() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .env_remove("CLI_TEST_UNSET")
        .args(["--format", "text", "call", "getenv", "CLI_TEST_UNSET"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_call_getfile() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("policy.txt");
    fs::write(&path, "main = rule { true }").unwrap();

    plugin_demo(&home)
        .args(["--format", "text", "call", "getfile"])
        .arg(&path)
        .assert()
        .success()
        .stdout("main = rule { true }\n");
}

#[test]
fn test_call_getfile_missing_prints_null() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .args(["call", "getfile"])
        .arg(home.path().join("missing.txt"))
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_call_test_function() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .args(["call", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"message\":\"Test message\""));
}

#[test]
fn test_call_unknown_function() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .args(["call", "plan_json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No such function: plan_json"));
}

#[test]
fn test_call_wrong_arity_fails() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .args(["call", "getenv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("getenv expects 1 argument(s), got 0"));
}

#[test]
fn test_get_pwd() {
    let home = TempDir::new().unwrap();
    let expected = fs::canonicalize(home.path()).unwrap();

    let output = plugin_demo(&home)
        .args(["--format", "text", "get", "pwd"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let printed = String::from_utf8(output.stdout).unwrap();
    assert_eq!(fs::canonicalize(printed.trim_end()).unwrap(), expected);
}

#[test]
fn test_get_envs_yaml() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .env("CLI_TEST_EQUALS", "a=b=c")
        .args(["--format", "yaml", "get", "envs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CLI_TEST_EQUALS: a=b=c"));
}

#[test]
fn test_get_unknown_property() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .args(["get", "plan_json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No such property: plan_json"));
}

#[test]
fn test_list() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .args(["--format", "text", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("getallenvs"))
        .stdout(predicate::str::contains("getfile (1 arg)"))
        .stdout(predicate::str::contains("pwd"));
}

#[test]
fn test_no_color_env_accepts_numeric_value() {
    let home = TempDir::new().unwrap();

    isolated(&home)
        .env("NO_COLOR", "1")
        .args(["--format", "text", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("getenv (1 arg)"));

    isolated(&home)
        .env("NO_COLOR", "0")
        .args(["list"])
        .assert()
        .success();
}

#[test]
fn test_list_shows_import_name() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .args(["--format", "text", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("import \"plugin_demo\"\n"));

    fs::write(
        home.path().join("plugin-demo.yaml"),
        "version: \"1.0\"\nplugin:\n  import_name: envtools\n",
    )
    .unwrap();

    plugin_demo(&home)
        .args(["--format", "text", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("import \"envtools\""));

    plugin_demo(&home)
        .env("PLUGIN_DEMO_IMPORT_NAME", "from_env")
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"import\":\"from_env\""));
}

#[test]
fn test_host_config_flag() {
    let home = TempDir::new().unwrap();

    plugin_demo(&home)
        .args(["--host-config", r#"{"region": "eu-west-1"}"#, "call", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test message"));

    plugin_demo(&home)
        .args(["--host-config", "[1, 2]", "call", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --host-config"))
        .stderr(predicate::str::contains("expected an object, got array"));

    plugin_demo(&home)
        .args(["--host-config", "{oops", "get", "now"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_config_file_sets_format() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("plugin-demo.yaml"),
        "version: \"1.0\"\noutput:\n  format: text\n",
    )
    .unwrap();

    plugin_demo(&home)
        .env("CLI_TEST_CONFIGURED", "plain")
        .args(["call", "getenv", "CLI_TEST_CONFIGURED"])
        .assert()
        .success()
        .stdout("plain\n");
}

#[test]
fn test_validate() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("candidate.yaml");
    fs::write(&path, "version: \"1.0\"\nplugin:\n  import_name: pd\n").unwrap();

    plugin_demo(&home)
        .arg("validate")
        .arg(&path)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid!"))
        .stdout(predicate::str::contains("Import name: pd"));
}

#[test]
fn test_validate_rejects_bad_version() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("candidate.json");
    fs::write(&path, r#"{"version": "2.0"}"#).unwrap();

    plugin_demo(&home)
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"));
}
