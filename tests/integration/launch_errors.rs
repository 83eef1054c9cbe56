use std::path::Path;

use anyhow::Result;
use tempfile::tempdir;
use warpcord::{
    app::{EXIT_LAUNCH, EXIT_VALIDATION},
    proxy::{ConfigStore, ProxyConfig, ProxyType, DEFAULT_EXECUTABLE},
};

use crate::common::{run_warpcord, stderr_text};

#[test]
fn invalid_port_is_reported_and_nothing_is_saved() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.json");

    let output = run_warpcord(
        &config_path,
        &["--proxy-type", "http", "--ip", "10.0.0.5", "--port", "0"],
    )?;

    assert_eq!(output.status.code(), Some(i32::from(EXIT_VALIDATION)));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("invalid port"), "stderr: {stderr}");
    assert!(!config_path.exists(), "rejected settings must not be saved");
    Ok(())
}

#[test]
fn missing_ip_is_reported() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.json");

    let output = run_warpcord(&config_path, &["--proxy-type", "socks5", "--port", "9050"])?;

    assert_eq!(output.status.code(), Some(i32::from(EXIT_VALIDATION)));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("missing IP"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn missing_target_application_is_reported_after_saving() -> Result<()> {
    if Path::new(DEFAULT_EXECUTABLE).exists() {
        eprintln!("Skipping launch failure test because {DEFAULT_EXECUTABLE} is installed");
        return Ok(());
    }
    let temp = tempdir()?;
    let config_path = temp.path().join("warpcord").join("config.json");

    let output = run_warpcord(
        &config_path,
        &["--proxy-type", "http", "--ip", "10.0.0.5", "--port", "3128"],
    )?;

    assert_eq!(output.status.code(), Some(i32::from(EXIT_LAUNCH)));
    let stderr = stderr_text(&output);
    assert!(stderr.contains(DEFAULT_EXECUTABLE), "stderr: {stderr}");
    assert_eq!(
        ConfigStore::new(&config_path).load(),
        ProxyConfig::new(ProxyType::Http, "10.0.0.5", "3128")
    );
    Ok(())
}

#[test]
fn usage_errors_and_rejected_settings_exit_differently() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.json");

    let usage = run_warpcord(&config_path, &["--bogus"])?;
    let rejected = run_warpcord(&config_path, &["--proxy-type", "http", "--ip", "10.0.0.5"])?;

    assert_eq!(usage.status.code(), Some(2));
    assert_eq!(rejected.status.code(), Some(i32::from(EXIT_VALIDATION)));
    assert_ne!(usage.status.code(), rejected.status.code());
    Ok(())
}
