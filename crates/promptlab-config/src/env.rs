use std::path::Path;

use promptlab_core::LabError;

/// Load environment variables from a `.env`-style file.
///
/// Each `KEY=VALUE` line sets a process environment variable, overriding
/// any existing value. Blank lines, `#` comments, and lines without `=`
/// are skipped. A missing file is not an error; nothing is set.
///
/// Returns the number of variables set.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<usize, LabError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(0);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| LabError::Config(format!("cannot read {}: {e}", path.display())))?;

    let mut loaded = 0;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        std::env::set_var(key, value.trim());
        loaded += 1;
    }
    tracing::debug!("loaded {loaded} variables from {}", path.display());
    Ok(loaded)
}

/// Look up an API key (or any required variable) in the process environment.
pub fn api_key_from_env(var: &str) -> Result<String, LabError> {
    std::env::var(var).map_err(|_| LabError::Config(format!("{var} environment variable not set")))
}
