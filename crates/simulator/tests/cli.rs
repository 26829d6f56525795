//! Runs the `panel-sim` binary and checks what it prints.
//!
//! Run with: cargo test -p simulator --test cli

use std::io::Write;
use std::process::{Command, Output};

fn panel_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_panel-sim"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn button_mode_click_prints_two_presses() {
    let out = panel_sim(&["--mode", "button", "click:USER"]);
    assert!(out.status.success());
    assert_eq!(
        stdout_lines(&out),
        vec!["button pressed #0", "button pressed #0"]
    );
}

#[test]
fn command_mode_prints_escape_once_per_press() {
    let out = panel_sim(&["--mode", "command", "press:USER", "release:USER"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec!["command esc (0x00)"]);
}

#[test]
fn home_mode_prints_generic_event() {
    let out = panel_sim(&["--mode", "home", "click:0"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec!["generic WADAPPS=1"]);
}

#[test]
fn script_and_config_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("panel.json");
    std::fs::write(
        &config,
        r#"{ "buttons": [ {"id": 0, "label": "USER"}, {"id": 7, "label": "BACK"} ],
             "listener": { "mode": "button" } }"#,
    )
    .unwrap();
    let script = dir.path().join("actions.txt");
    let mut file = std::fs::File::create(&script).unwrap();
    writeln!(file, "# go back").unwrap();
    writeln!(file, "press:BACK").unwrap();
    writeln!(file, "release:BACK").unwrap();
    drop(file);

    let out = panel_sim(&[
        "--config",
        config.to_str().unwrap(),
        "--script",
        script.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert_eq!(
        stdout_lines(&out),
        vec!["button pressed #7", "button pressed #7"]
    );
}

#[test]
fn unknown_button_fails_after_earlier_output() {
    let out = panel_sim(&["--mode", "button", "press:USER", "press:MENU"]);
    assert!(!out.status.success());
    assert_eq!(stdout_lines(&out), vec!["button pressed #0"]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("MENU"), "stderr: {stderr}");
}

#[test]
fn bad_mode_is_rejected_by_argument_parsing() {
    let out = panel_sim(&["--mode", "joystick", "click:USER"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
