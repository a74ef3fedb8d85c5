use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::classify::{is_too_simple, optimize_prompt};
use crate::config::{DEFAULT_ASPECT_RATIO, DEFAULT_IMAGE_SIZE};
use crate::detect::{detect_ratio, detect_size};

const SOURCE_PROMPT: &str = "prompt";
const SOURCE_CONFIG: &str = "config";

#[derive(Debug, Clone, Serialize)]
pub struct FieldSources {
    pub aspect_ratio: &'static str,
    pub image_size: &'static str,
}

/// The request descriptor handed to the downstream generation call.
/// Serialized field order is part of the contract.
#[derive(Debug, Clone, Serialize)]
pub struct OutputRecord {
    pub prompt: String,
    pub used_prompt: String,
    pub optimized: bool,
    pub aspect_ratio: String,
    pub image_size: String,
    pub source: FieldSources,
}

/// Assembles the full record from the positional prompt, the two
/// environment inputs, and the loaded config. Pure; all I/O stays in main.
pub fn build_record(
    prompt: &str,
    original_prompt: &str,
    used_prompt_env: &str,
    cfg: &HashMap<String, String>,
) -> OutputRecord {
    let detected_ratio = detect_ratio(prompt);
    let detected_size = detect_size(prompt);
    debug!(
        "Detection: ratio={:?} size={:?}",
        detected_ratio, detected_size
    );

    // Hardcoded fallbacks are also attributed to "config"; downstream
    // consumers only ever see the two provenance values.
    let ratio_source = if detected_ratio.is_some() {
        SOURCE_PROMPT
    } else {
        SOURCE_CONFIG
    };
    let size_source = if detected_size.is_some() {
        SOURCE_PROMPT
    } else {
        SOURCE_CONFIG
    };

    let ratio = detected_ratio.unwrap_or_else(|| {
        cfg.get("ASPECT_RATIO")
            .cloned()
            .unwrap_or_else(|| DEFAULT_ASPECT_RATIO.to_string())
    });
    let size = detected_size.unwrap_or_else(|| {
        cfg.get("IMAGE_SIZE")
            .cloned()
            .unwrap_or_else(|| DEFAULT_IMAGE_SIZE.to_string())
    });

    // Normalize whichever source the values came from.
    let ratio = ratio.replace('：', ":");
    let size = size.to_lowercase();

    let (used_prompt, optimized) = if !used_prompt_env.is_empty() {
        // The caller already ran its own optimization pass; trust it. It
        // only counts as optimized when it differs from a known original.
        let optimized = !original_prompt.is_empty() && used_prompt_env != original_prompt;
        (used_prompt_env.to_string(), optimized)
    } else if is_too_simple(prompt) {
        (optimize_prompt(prompt), true)
    } else {
        (prompt.to_string(), false)
    };

    let reported_prompt = if original_prompt.is_empty() {
        prompt
    } else {
        original_prompt
    };

    OutputRecord {
        prompt: reported_prompt.to_string(),
        used_prompt,
        optimized,
        aspect_ratio: ratio,
        image_size: size,
        source: FieldSources {
            aspect_ratio: ratio_source,
            image_size: size_source,
        },
    }
}
