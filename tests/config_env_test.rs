use gradecalc::Settings;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

// One test function: environment variables are process-wide.
#[test]
fn test_env_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        r#"
[data]
dir = "from-file"
grades_file = "sheet.csv"

[repl]
prompt = "file> "
"#,
    )
    .unwrap();

    unsafe {
        // Double underscore separates nested levels
        env::set_var("GC_DATA__DIR", "/tmp/from-env");
        env::set_var("GC_LOGGING__CONSOLE", "true");
        // Unprefixed compatibility variables
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("LOG_FILE", "/tmp/gradecalc-test.log");
        env::set_var("ENVIRONMENT", "DEVELOPMENT");
    }

    let settings = Settings::load_from(&config_path).unwrap();

    // Environment wins over the file
    assert_eq!(settings.data.dir, PathBuf::from("/tmp/from-env"));
    // File value kept where no env var is set
    assert_eq!(settings.data.grades_file, PathBuf::from("sheet.csv"));
    assert_eq!(settings.repl.prompt, "file> ");
    assert!(settings.logging.console);
    assert_eq!(settings.logging.default, "debug");
    assert_eq!(
        settings.logging.file,
        Some(PathBuf::from("/tmp/gradecalc-test.log"))
    );
    assert_eq!(settings.environment, "DEVELOPMENT");

    unsafe {
        env::remove_var("GC_DATA__DIR");
        env::remove_var("GC_LOGGING__CONSOLE");
        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_FILE");
        env::remove_var("ENVIRONMENT");
    }

    let settings = Settings::load_from(&config_path).unwrap();
    assert_eq!(settings.data.dir, PathBuf::from("from-file"));
    assert_eq!(settings.environment, "PRODUCTION");
}
