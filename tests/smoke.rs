use std::path::PathBuf;
use std::process::Command;

fn demo_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/ui.toml")
}

fn run(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_vrui"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs");
    assert!(
        output.status.success(),
        "vrui {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 output")
}

#[test]
fn layout_prints_the_page_tree() {
    let config = demo_config();
    let stdout = run(&["layout", "--config", config.to_str().unwrap()]);
    let tree: serde_json::Value = serde_json::from_str(&stdout).expect("json tree");

    assert_eq!(tree["name"], "settings");
    assert_eq!(tree["kind"], "vertical");
    let children = tree["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["children"][1]["kind"], "slider");
    assert_eq!(children[0]["children"][1]["value"], 40.0);
}

#[test]
fn layout_of_a_missing_page_fails() {
    let config = demo_config();
    let status = Command::new(env!("CARGO_BIN_EXE_vrui"))
        .args(["layout", "--config", config.to_str().unwrap(), "--page", "9"])
        .output()
        .expect("binary runs")
        .status;
    assert!(!status.success());
}

#[test]
fn pick_toggles_the_checkbox_under_the_cursor() {
    let config = demo_config();
    let stdout = run(&[
        "pick",
        "--config",
        config.to_str().unwrap(),
        "--x",
        "536",
        "--y",
        "256",
        "--press",
    ]);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();

    let entered: Vec<_> = events
        .iter()
        .filter(|event| event["event"] == "hover_enter")
        .map(|event| event["element"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(entered, vec!["settings", "controls", "mute"]);

    let release = events
        .iter()
        .find(|event| event["event"] == "change" && event["pressed"] == false)
        .expect("release event");
    assert_eq!(release["element"], "mute");
    assert_eq!(release["checked"], true);
    assert_eq!(release["tick"], 1);
}
