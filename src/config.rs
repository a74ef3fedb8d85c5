use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
pub const DEFAULT_IMAGE_SIZE: &str = "2k";

const CONFIG_FILE_NAME: &str = "prompt_image_gen.conf";

/// Fixed config location next to the installed binary
/// (`<exe_dir>/../config/prompt_image_gen.conf`), independent of the
/// caller's working directory.
pub fn default_config_path() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("..").join("config").join(CONFIG_FILE_NAME)
}

fn strip_quotes(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| {
            value
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
        });
    stripped.unwrap_or(value)
}

/// Reads a flat `KEY=VALUE` file into a map. A missing or unreadable file
/// yields an empty map; blank lines, `#` comments, and lines without `=`
/// are skipped. One layer of matching surrounding quotes is stripped from
/// each value.
pub fn read_config(path: &Path) -> HashMap<String, String> {
    let raw = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!("No config file at {}; using defaults", path.display());
            return HashMap::new();
        }
    };

    let mut cfg = HashMap::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        cfg.insert(
            key.trim().to_string(),
            strip_quotes(value.trim()).to_string(),
        );
    }
    cfg
}
