use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("sc-genscript").unwrap()
}

#[test]
fn prints_both_blocks() {
    let output = cmd().assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<_> = stdout.lines().collect();

    // label + 15 lines, blank, label + 15 lines
    assert_eq!(lines.len(), 33);
    assert_eq!(lines[0], "### HEADER_PATH_BLOCK");
    assert_eq!(
        lines[1],
        r#"CAPTIVE_NETWORK_HEADER_PATH="${SC_HEADER_PATH}/CaptiveNetwork.h""#
    );
    assert_eq!(lines[16], "");
    assert_eq!(lines[17], "### BINDING_PATH_BLOCK");
    assert_eq!(
        lines[32],
        r#"SYSTEM_CONFIGURATION_BINDING_PATH="${SC_BINDING_PATH}/system_configuration.rs""#
    );
}

#[test]
fn derives_acronym_boundaries() {
    cmd().assert().success().stdout(
        predicate::str::contains(
            r#"DYNAMIC_STORE_COPY_DHCP_INFO_HEADER_PATH="${SC_HEADER_PATH}/SCDynamicStoreCopyDHCPInfo.h""#,
        )
        .and(predicate::str::contains(
            r#"DHCP_CLIENT_PREFERENCES_BINDING_PATH="${SC_BINDING_PATH}/dhcp_client_preferences.rs""#,
        )),
    );
}

#[test]
fn logging_stays_off_stdout() {
    cmd()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("### HEADER_PATH_BLOCK\n"))
        .stderr(predicate::str::contains("derived 15 items"));
}

#[test]
fn shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flags() {
    cmd().arg("--fix").assert().failure();
}
