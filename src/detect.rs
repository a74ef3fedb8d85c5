use once_cell::sync::Lazy;
use regex::Regex;

// Accepts 16:9, 16：9, 16/9, 16x9, and 16比9, with optional spaces.
static RATIO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})\s*(?:[:：/xX]|比)\s*(\d{1,2})").expect("valid ratio regex")
});
static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[124]\s*[kK]").expect("valid size regex"));

/// Finds the first aspect-ratio token in the text and normalizes it to
/// `"W:H"` with an ASCII colon. The ratio is taken as written; no sanity
/// check on the proportions.
pub fn detect_ratio(text: &str) -> Option<String> {
    let caps = RATIO_RE.captures(text)?;
    Some(format!("{}:{}", &caps[1], &caps[2]))
}

/// Finds the first resolution tier (`1k`/`2k`/`4k`, any case) not followed
/// by an ASCII letter, so `4k分辨率` counts but `4kg` does not. Returns the
/// lowercase token.
pub fn detect_size(text: &str) -> Option<String> {
    for found in SIZE_RE.find_iter(text) {
        let followed_by_letter = text[found.end()..]
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphabetic());
        if followed_by_letter {
            continue;
        }
        let digit = found.as_str().chars().next()?;
        return Some(format!("{digit}k"));
    }
    None
}
