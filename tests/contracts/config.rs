//! Config contracts: precedence and non-fatal unknown keys.

use crate::common::TestEnv;

/// CONTRACT: CLI flags > env > project file.
#[test]
fn contract_config_precedence() {
    let env = TestEnv::new();
    env.write_project_config("[storage]\ndir = \"from-file\"\n");

    let result = env.run(&["--json", "config"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.data()["store"]
        .as_str()
        .unwrap()
        .ends_with("cookmate.toml"));
    assert_eq!(result.data()["config"]["storage"]["dir"], "from-file");

    let result = env.run_with_env(&["--json", "config"], &[("COOKMATE_DB_DIR", "from-env")]);
    assert_eq!(result.data()["config"]["storage"]["dir"], "from-env");

    let result = env.run_with_env(
        &["--json", "--data-dir", "from-flag", "config"],
        &[("COOKMATE_DB_DIR", "from-env")],
    );
    assert_eq!(result.data()["config"]["storage"]["dir"], "from-flag");
}

/// CONTRACT: unknown config keys warn but never fail the command.
#[test]
fn contract_unknown_config_keys_warn() {
    let env = TestEnv::new();
    env.write_project_config("[inventory]\nexpiring_dais = 4\n");

    let result = env.run(&["config"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("unknown config key 'expiring_dais'"));
    assert!(result.stderr.contains("did you mean 'expiring_days'?"));
}

/// CONTRACT: malformed config is an error naming the file.
#[test]
fn contract_malformed_config_fails() {
    let env = TestEnv::new();
    env.write_project_config("[storage\n");

    let result = env.run(&["config"]);

    assert_eq!(result.exit_code, 5);
    assert!(result.stderr.contains("cookmate.toml"));
}

/// CONTRACT: the project file layers over the user file key by key.
#[test]
#[cfg_attr(not(target_os = "linux"), ignore = "user config dir follows XDG only on Linux")]
fn contract_user_and_project_config_merge() {
    let env = TestEnv::new();
    let user_dir = env.home_dir.path().join(".config").join("cookmate");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[inventory]\nexpiring_days = 9\n\n[storage]\ndir = \"from-user\"\n",
    )
    .unwrap();
    env.write_project_config("[storage]\ndir = \"from-project\"\n");

    let result = env.run(&["--json", "config"]);

    assert!(result.success, "{}", result.combined_output());
    let config = &result.data()["config"];
    assert_eq!(config["storage"]["dir"], "from-project");
    assert_eq!(config["inventory"]["expiring_days"], 9);
}
