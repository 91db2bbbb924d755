use lifeclock_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_config_set_show_clear() {
    let world = TestWorld::new();

    let result = world
        .run(&["config", "set", "--birth", "1985-07-14", "--years", "81"])
        .expect("Failed to run config set");
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(world.config_path().exists());

    let stored = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(stored.contains("reference = \"1985-07-14T00:00:00\""), "{stored}");
    assert!(stored.contains("duration_years = 81"), "{stored}");

    let result = world
        .run(&["config", "show", "--format", "json"])
        .expect("Failed to run config show");
    let json = result.json().unwrap();
    assert_eq!(json["configured"], true);
    assert_eq!(json["birth"], "1985-07-14");
    assert_eq!(json["years"], 81);
    assert_eq!(json["end"], "2066-07-14");

    let result = world.run(&["config", "clear"]).expect("Failed to run config clear");
    assert!(result.success());
    assert!(!world.config_path().exists());

    let result = world.run(&["config", "show"]).expect("Failed to run config show");
    assert!(predicate::str::contains("Not configured.").eval(&result.stdout));
}

#[test]
fn test_config_set_clamps_years() {
    let world = TestWorld::new();
    let result = world
        .run(&["config", "set", "--birth", "2000-01-01", "--years", "5"])
        .expect("Failed to run config set");

    assert!(result.success());
    assert!(predicate::str::contains("using 10").eval(&result.stderr));

    let result = world.run(&["config", "show"]).expect("Failed to run config show");
    assert!(predicate::str::contains("Life expectancy: 10 years").eval(&result.stdout));
}

#[test]
fn test_config_set_rejects_impossible_date() {
    let world = TestWorld::new();
    let result = world
        .run(&["config", "set", "--birth", "2023-02-29"])
        .expect("Failed to run config set");

    assert!(!result.success());
    assert!(!world.config_path().exists());
}

#[test]
fn test_config_show_reports_corrupt_file() {
    let world = TestWorld::new().with_config_file("duration_years = \"many\"");
    let result = world.run(&["config", "show"]).expect("Failed to run config show");

    assert!(!result.success());
    assert!(predicate::str::starts_with("Error: Failed to read").eval(&result.stderr));
}

#[test]
fn test_data_dir_from_environment() {
    let world = TestWorld::new();
    let env_dir = world.temp_dir().join("from-env");
    let world = world.with_env("LIFECLOCK_PATH", env_dir.to_string_lossy());

    // --data-dir still wins over the environment variable
    let result = world
        .run(&["config", "set", "--birth", "2000-01-01"])
        .expect("Failed to run config set");
    assert!(result.success());
    assert!(world.config_path().exists());
    assert!(!env_dir.join("config.toml").exists());
}
