use tracing::debug;

/// Sentinel the extraction prompt mandates for "no location in this title".
pub const NO_PLACE_SENTINEL: &str = "none";

/// Longest reply still accepted as a bare place name.
const MAX_PLACE_CHARS: usize = 80;

/// Punctuation stripped from extracted place names, on top of control
/// characters.
const STRIPPED_PUNCTUATION: &[char] = &[
    '「', '」', '『', '』', '【', '】', '（', '）', '(', ')', '"', '\'', '、', '。', ',', '.',
    '：', ':',
];

/// Interpret a raw extraction reply.
///
/// The contract is a bare place name or the literal sentinel; any other
/// shape is invalid and treated as a miss. The sentinel check is an exact
/// comparison on the trimmed reply, so a real place name that merely
/// contains "none" is not swallowed.
pub fn parse_place_response(response: &str) -> Option<String> {
    let trimmed = response.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_PLACE_SENTINEL) {
        return None;
    }

    if trimmed.lines().count() > 1 || trimmed.chars().count() > MAX_PLACE_CHARS {
        debug!("Rejecting malformed extraction reply: {:?}", trimmed);
        return None;
    }

    let cleaned = clean_place_name(trimmed);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Strip control characters and the fixed punctuation set from a place
/// name.
pub fn clean_place_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() && !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_place_name_passes_through() {
        assert_eq!(parse_place_response("札幌市"), Some("札幌市".to_string()));
    }

    #[test]
    fn sentinel_is_a_miss() {
        assert_eq!(parse_place_response("none"), None);
        assert_eq!(parse_place_response("None"), None);
        assert_eq!(parse_place_response("  NONE \n"), None);
    }

    #[test]
    fn sentinel_check_is_exact_not_substring() {
        // A name containing the sentinel letters is still a valid place.
        assert_eq!(
            parse_place_response("Nonequit Township"),
            Some("Nonequit Township".to_string())
        );
    }

    #[test]
    fn multi_line_reply_is_invalid() {
        assert_eq!(parse_place_response("札幌市\n北海道にある都市です"), None);
    }

    #[test]
    fn overlong_reply_is_invalid() {
        let reply = "あ".repeat(81);
        assert_eq!(parse_place_response(&reply), None);
    }

    #[test]
    fn empty_reply_is_a_miss() {
        assert_eq!(parse_place_response("   "), None);
    }

    #[test]
    fn cleaning_strips_brackets_and_control_chars() {
        assert_eq!(clean_place_name("「札幌市」"), "札幌市");
        assert_eq!(clean_place_name("札幌市\t"), "札幌市");
        assert_eq!(clean_place_name("(青森県)"), "青森県");
    }

    #[test]
    fn reply_that_cleans_to_nothing_is_a_miss() {
        assert_eq!(parse_place_response("「」"), None);
    }
}
