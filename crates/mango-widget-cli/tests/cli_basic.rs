//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against temporary store fixtures and an
//! isolated config directory, then inspect its JSON output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const FIXTURE: &str = r#"{
    "affirmations_list": "Breathe|||Relax|||Smile",
    "category_text": "Calm",
    "daily_streak": 12,
    "evolution_name": "Golden Mango",
    "monthly_consistency": 0.9,
    "activity_7days": "1111101"
}"#;

const T0: &str = "2026-10-19T08:00:00Z";

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn fixture(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("store.json");
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Run a CLI command and return (stdout, stderr, exit code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_mango-widget"))
            .args(args)
            .env("MANGO_WIDGET_CONFIG_DIR", self.config_dir())
            .env_remove("MANGO_WIDGET_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        (stdout, stderr, code)
    }

    fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "CLI failed for {args:?}: {stderr}");
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn test_snapshot_empty_store_uses_defaults() {
    let env = Env::new();
    let snapshot = env.run_json(&["snapshot"]);
    assert_eq!(snapshot["category"], "Mango");
    assert_eq!(snapshot["streak_days"], 1);
    assert_eq!(snapshot["affirmations"][0], "Deep breaths. You've got this.");
}

#[test]
fn test_snapshot_explain_lists_issues() {
    let env = Env::new();
    let store = env.fixture(r#"{"daily_streak": -4}"#);
    let out = env.run_json(&["snapshot", "--store", path_arg(&store), "--explain"]);

    assert_eq!(out["snapshot"]["streak_days"], 1);
    let issues = out["issues"].as_array().unwrap();
    assert!(issues
        .iter()
        .any(|i| i["key"] == "daily_streak" && i["kind"] == "malformed"));
    assert!(issues
        .iter()
        .any(|i| i["key"] == "category_text" && i["kind"] == "missing"));
}

#[test]
fn test_timeline_cycles_affirmations() {
    let env = Env::new();
    let store = env.fixture(FIXTURE);
    let timeline = env.run_json(&["timeline", "--store", path_arg(&store), "--now", T0]);

    let entries = timeline["entries"].as_array().unwrap();
    let texts: Vec<&str> = entries
        .iter()
        .map(|e| e["affirmation"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["Breathe", "Relax", "Smile"]);
    assert_eq!(entries[1]["timestamp"], "2026-10-19T09:00:00Z");
    assert_eq!(timeline["next_refresh_at"], "2026-10-19T20:00:00Z");
}

#[test]
fn test_timeline_refresh_instruction() {
    let env = Env::new();
    let store = env.fixture(FIXTURE);
    let out = env.run_json(&[
        "timeline",
        "--store",
        path_arg(&store),
        "--now",
        T0,
        "--horizon",
        "2",
        "--at",
        "2026-10-19T09:30:00Z",
    ]);

    assert_eq!(out["visible_now"]["affirmation"], "Relax");
    assert_eq!(out["refresh_at"], "2026-10-19T10:00:00Z");
}

#[test]
fn test_resolve_circular_hides_affirmation() {
    let env = Env::new();
    let store = env.fixture(FIXTURE);
    let layout = env.run_json(&[
        "resolve",
        "--store",
        path_arg(&store),
        "--class",
        "accessoryCircular",
    ]);

    assert_eq!(layout["display_class"], "circular");
    let fields: Vec<&str> = layout["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"streak_count"));
    assert!(fields.contains(&"mascot_name"));
    assert!(!fields.contains(&"affirmation"));
}

#[test]
fn test_resolve_unknown_class_falls_back_to_medium() {
    let env = Env::new();
    let layout = env.run_json(&["resolve", "--class", "hologram", "--theme", "nebula"]);
    assert_eq!(layout["display_class"], "medium");
    assert_eq!(layout["theme"], "mango");
}

#[test]
fn test_render_android_binds_text() {
    let env = Env::new();
    let store = env.fixture(FIXTURE);
    let visual = env.run_json(&[
        "render",
        "--store",
        path_arg(&store),
        "--now",
        T0,
        "--platform",
        "android",
    ]);

    assert_eq!(visual["platform"], "android");
    assert_eq!(visual["payload"]["layout"], "mango_widget");
    let bindings = visual["payload"]["bindings"].as_array().unwrap();
    assert!(bindings
        .iter()
        .any(|b| b["view_id"] == "app_widget_text" && b["text"] == "Breathe"));
}

#[test]
fn test_render_streak_widget_for_ios() {
    let env = Env::new();
    let store = env.fixture(FIXTURE);
    let visual = env.run_json(&[
        "render",
        "--store",
        path_arg(&store),
        "--widget",
        "StreakWidget",
        "--class",
        "systemSmall",
    ]);

    assert_eq!(visual["platform"], "ios");
    assert_eq!(visual["payload"]["family"], "systemSmall");
    assert_eq!(visual["payload"]["theme"], "mango");
}

#[test]
fn test_render_unknown_platform_fails() {
    let env = Env::new();
    let (_, stderr, code) = env.run(&["render", "--platform", "web"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: unknown platform: web"));
}

#[test]
fn test_missing_store_file_fails() {
    let env = Env::new();
    let missing = env.dir.path().join("missing.json");
    let (_, stderr, code) = env.run(&["timeline", "--store", path_arg(&missing)]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_widgets_list_json() {
    let env = Env::new();
    let rows = env.run_json(&["widgets", "list", "--json"]);
    let kinds: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        ["MangoWidget", "OceanWidget", "ForestWidget", "MinimalWidget", "StreakWidget"]
    );
}

#[test]
fn test_widgets_family_mapping() {
    let env = Env::new();
    let (stdout, _, code) = env.run(&["widgets", "family", "streak", "systemLarge"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "streak_medium");
}

#[test]
fn test_config_set_get_and_reset() {
    let env = Env::new();

    let (stdout, _, code) = env.run(&["config", "get", "timeline.horizon_hours"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "12");

    let (_, _, code) = env.run(&["config", "set", "timeline.horizon_hours", "3"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = env.run(&["config", "get", "timeline.horizon_hours"]);
    assert_eq!(stdout.trim(), "3");
    assert!(env.config_dir().join("config.toml").exists());

    let (_, stderr, code) = env.run(&["config", "set", "timeline.horizon_hours", "100"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("timeline.horizon_hours"));

    let (_, _, code) = env.run(&["config", "reset"]);
    assert_eq!(code, 0);
    let config = env.run_json(&["config", "list"]);
    assert_eq!(config["timeline"]["horizon_hours"], 12);
}

#[test]
fn test_config_horizon_applies_to_timeline() {
    let env = Env::new();
    let store = env.fixture(FIXTURE);
    let (_, _, code) = env.run(&["config", "set", "timeline.horizon_hours", "2"]);
    assert_eq!(code, 0);

    let timeline = env.run_json(&["timeline", "--store", path_arg(&store), "--now", T0]);
    assert_eq!(timeline["entries"].as_array().unwrap().len(), 2);
    assert_eq!(timeline["next_refresh_at"], "2026-10-19T10:00:00Z");
}

#[test]
fn test_config_snapshot_path_can_be_unset() {
    let env = Env::new();
    let store = env.fixture(FIXTURE);

    let (_, _, code) = env.run(&["config", "set", "store.snapshot_path", path_arg(&store)]);
    assert_eq!(code, 0);
    let snapshot = env.run_json(&["snapshot"]);
    assert_eq!(snapshot["category"], "Calm");

    let (_, _, code) = env.run(&["config", "set", "store.snapshot_path", ""]);
    assert_eq!(code, 0);
    let (_, _, code) = env.run(&["config", "get", "store.snapshot_path"]);
    assert_eq!(code, 1);
    let snapshot = env.run_json(&["snapshot"]);
    assert_eq!(snapshot["category"], "Mango");
}

#[test]
fn test_timeline_horizon_beyond_config_limit() {
    let env = Env::new();
    let store = env.fixture(FIXTURE);
    let timeline = env.run_json(&[
        "timeline",
        "--store",
        path_arg(&store),
        "--now",
        T0,
        "--horizon",
        "72",
    ]);
    assert_eq!(timeline["entries"].as_array().unwrap().len(), 3);
    assert_eq!(timeline["next_refresh_at"], "2026-10-22T08:00:00Z");
}

#[test]
fn test_config_unknown_key_fails() {
    let env = Env::new();
    let (_, stderr, code) = env.run(&["config", "get", "display.nonexistent"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown or unset key"));
}
