use once_cell::sync::Lazy;
use regex::Regex;

/// Quality descriptors appended to under-specified prompts. Downstream
/// consumers match on this exact literal; do not reword it.
pub const QUALITY_SUFFIX: &str = "高清细节，真实光影，层次清晰，构图平衡，质感自然";

const MIN_DETAILED_CHARS: usize = 40;
const MAX_SIMPLE_ASCII_WORDS: usize = 4;

// A generation verb followed within 8 characters by a "一张" object count,
// i.e. "draw me a picture of X" with nothing else said about X.
static BARE_REQUEST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(生成|画|绘制|制作).{0,8}一张").expect("valid bare request regex"));
static QUALITY_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(风格|光影|构图|色彩|质感|氛围|材质|写实|插画|电影感|景深|留白)")
        .expect("valid quality keyword regex")
});

/// Decides whether a prompt is under-specified and should be expanded.
/// The gate is deliberately false-positive tolerant: over-expanding a
/// short prompt is cheaper than leaving a generic one untouched.
pub fn is_too_simple(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    // Character count, not bytes; CJK text counts one per character.
    if trimmed.chars().count() < MIN_DETAILED_CHARS {
        return true;
    }
    if BARE_REQUEST_RE.is_match(trimmed) && !QUALITY_KEYWORD_RE.is_match(trimmed) {
        return true;
    }
    if trimmed.is_ascii() && trimmed.split_whitespace().count() <= MAX_SIMPLE_ASCII_WORDS {
        return true;
    }
    false
}

/// Rule-based expansion, no model call. Joins with a CJK comma unless the
/// prompt already ends in a full stop.
pub fn optimize_prompt(text: &str) -> String {
    if text.ends_with('。') || text.ends_with('.') {
        format!("{text}{QUALITY_SUFFIX}")
    } else {
        format!("{text}，{QUALITY_SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_prompts_are_simple() {
        assert!(is_too_simple(""));
        assert!(is_too_simple("   \n\t"));
    }

    #[test]
    fn short_prompts_are_simple_by_character_count() {
        assert!(is_too_simple("a cat"));
        // 14 characters, far more than 40 bytes in UTF-8.
        assert!(is_too_simple("生成一张猫的图片的高清壁纸图"));
    }

    #[test]
    fn long_bare_generation_request_is_simple() {
        let prompt = "生成一张小猫的图片，小猫是橘色的，背景是绿色的草地，天空有很多白云，还有一些蝴蝶在飞";
        assert!(prompt.chars().count() >= 40);
        assert!(is_too_simple(prompt));
    }

    #[test]
    fn quality_keywords_rescue_a_bare_request() {
        let prompt = "生成一张小猫的图片，写实风格，柔和光影，三分法构图，色彩温暖，毛发质感细腻，清晨氛围";
        assert!(prompt.chars().count() >= 40);
        assert!(!is_too_simple(prompt));
    }

    #[test]
    fn long_ascii_prompt_with_few_words_is_simple() {
        assert!(is_too_simple(
            "hyperrealistic extraordinarily-detailed cinematographic masterpiece"
        ));
    }

    #[test]
    fn long_ascii_prompt_with_many_words_is_not_simple() {
        assert!(!is_too_simple(
            "a ginger cat sleeping on a sunlit windowsill, soft morning light, shallow depth of field"
        ));
    }

    #[test]
    fn detailed_cjk_prompt_is_not_simple() {
        let prompt = "请生成城市夜景壁纸，画面比例16:9，4k高清，霓虹光影层次分明，构图饱满，氛围浓郁，色彩鲜明，充满未来感";
        assert!(prompt.chars().count() >= 40);
        assert!(!is_too_simple(prompt));
    }

    #[test]
    fn expansion_joins_with_cjk_comma() {
        assert_eq!(
            optimize_prompt("一只猫"),
            format!("一只猫，{QUALITY_SUFFIX}")
        );
    }

    #[test]
    fn expansion_appends_directly_after_a_full_stop() {
        assert_eq!(
            optimize_prompt("一只猫。"),
            format!("一只猫。{QUALITY_SUFFIX}")
        );
        assert_eq!(
            optimize_prompt("a cat."),
            format!("a cat.{QUALITY_SUFFIX}")
        );
    }

    #[test]
    fn suffix_literal_is_stable() {
        assert!(optimize_prompt("x").ends_with("高清细节，真实光影，层次清晰，构图平衡，质感自然"));
    }
}
