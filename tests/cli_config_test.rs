use std::process::Command;
use tempfile::TempDir;

fn gradecalc(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gradecalc"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_init_command() {
    let temp_dir = TempDir::new().unwrap();

    let output = gradecalc(&temp_dir)
        .arg("init")
        .output()
        .expect("Failed to run init command");

    assert!(output.status.success());

    // Check that config file was created
    let config_path = temp_dir.path().join(".gradecalc/settings.toml");
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = 1"));
    assert!(content.contains("[data]"));
    assert!(content.contains("[logging]"));

    // Second init without --force refuses
    let output = gradecalc(&temp_dir).arg("init").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--force"));
}

#[test]
fn test_config_command() {
    let temp_dir = TempDir::new().unwrap();

    let config_dir = temp_dir.path().join(".gradecalc");
    std::fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"
version = 2
[repl]
prompt = "grades> "
"#;
    std::fs::write(config_dir.join("settings.toml"), config_content).unwrap();

    let output = gradecalc(&temp_dir)
        .arg("config")
        .output()
        .expect("Failed to run config command");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version = 2"));
    assert!(stdout.contains("prompt = \"grades> \""));
}

#[test]
fn test_corrupt_config_exits_with_config_code() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "version = \"not a number\"\n").unwrap();

    let output = gradecalc(&temp_dir)
        .args(["--config", path.to_str().unwrap(), "config"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Configuration error"));
}
