use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{run_warpcord, run_warpcord_without_env, stdout_json};

#[test]
fn dry_run_with_socks_proxy_prints_plan_without_saving() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join("warpcord").join("config.json");

    let output = run_warpcord(
        &config_path,
        &[
            "--dry-run",
            "--proxy-type",
            "socks5",
            "--ip",
            "127.0.0.1",
            "--port",
            "9050",
        ],
    )?;

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let payload = stdout_json(&output)?;
    assert_eq!(payload["status"], "proxied");
    assert_eq!(payload["launch"]["program"], "/usr/bin/vesktop");
    assert_eq!(
        payload["launch"]["args"],
        serde_json::json!(["--proxy-server=socks5://127.0.0.1:9050"])
    );
    assert_eq!(
        payload["launch"]["proxy_env"]["https_proxy"],
        "socks5://127.0.0.1:9050"
    );
    assert!(!config_path.exists(), "dry-run must not save");
    Ok(())
}

#[test]
fn dry_run_prefills_from_saved_configuration() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "proxy_type": "HTTP", "ip": "10.0.0.5", "port": "3128" }"#,
    )?;

    let output = run_warpcord(&config_path, &["--dry-run"])?;

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let payload = stdout_json(&output)?;
    assert_eq!(payload["launch"]["proxy_url"], "http://10.0.0.5:3128");
    Ok(())
}

#[test]
fn corrupt_configuration_falls_back_to_direct_launch() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.json");
    fs::write(&config_path, "{ this is not json")?;

    let output = run_warpcord(&config_path, &["--dry-run"])?;

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let payload = stdout_json(&output)?;
    assert_eq!(payload["status"], "direct");
    assert_eq!(payload["launch"]["args"], serde_json::json!([]));
    Ok(())
}

#[test]
fn missing_home_does_not_block_direct_launch_plan() -> Result<()> {
    let temp = tempdir()?;

    let output = run_warpcord_without_env(temp.path(), &["--dry-run", "--proxy-type", "none"])?;

    assert!(
        output.status.success(),
        "exit status: {:?}, stderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    let payload = stdout_json(&output)?;
    assert_eq!(payload["status"], "direct");
    assert_eq!(payload["config_path"], ".config/warpcord/config.json");
    Ok(())
}
