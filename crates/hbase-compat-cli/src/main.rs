//! Binary entrypoint: report which HBase compat layer this process would load.
//!
//! Configuration comes from the YAML file named by `HBASE_COMPAT_CONFIG`
//! (optional) with `HBASE_COMPAT_CLASS` / `HBASE_VERSION` taking precedence.
//! `--dry-run` resolves the name without constructing the layer.
use anyhow::Context;
use hbase_compat_loader::{CompatConfig, CompatLoader};
use serde_json::json;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH_VAR: &str = "HBASE_COMPAT_CONFIG";

fn load_config() -> anyhow::Result<CompatConfig> {
    let file = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => CompatConfig::from_file(&path)
            .with_context(|| format!("loading {} from {}", CONFIG_PATH_VAR, path))?,
        Err(_) => CompatConfig::default(),
    };
    Ok(file.merge(CompatConfig::from_env()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let dry_run = std::env::args().skip(1).any(|arg| arg == "--dry-run");
    let config = load_config()?;
    let loader = CompatLoader::from_config(&config);

    let report = if dry_run {
        let selection = loader.resolve(config.override_name())?;
        json!({ "selection": selection, "constructed": false })
    } else {
        let loaded = loader.load(config.override_name())?;
        json!({
            "selection": loaded.selection,
            "constructed": true,
            "hbase_line": loaded.compat.hbase_line(),
        })
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
