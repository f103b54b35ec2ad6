use super::{config_path, json_pretty, EXIT_SUCCESS};
use patchwork_schema::Config;
use std::path::Path;

/// Write the built-in configuration so it can be edited.
pub fn run(explicit: Option<&Path>, force: bool, json: bool) -> Result<u8, String> {
    let dest = config_path(explicit);
    if dest.exists() && !force {
        return Err(format!(
            "refusing to overwrite existing {} (pass --force)",
            dest.display()
        ));
    }
    let toml = Config::default()
        .to_toml()
        .map_err(|e| format!("config error: {e}"))?;
    patchwork_pbxproj::write_atomic(dest, &toml).map_err(|e| e.to_string())?;

    if json {
        let payload = serde_json::json!({
            "status": "written",
            "path": dest,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("wrote {}", dest.display());
    }
    Ok(EXIT_SUCCESS)
}

