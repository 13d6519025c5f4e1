/// Characters removed by [`normalize_page_name`].
///
/// This list is matched literally. It is not the same as the non-word class
/// used by [`crate::strip::strip_special_characters`]: `.`, `'`, `,`, `~` and
/// non-Latin punctuation all survive.
pub const PAGE_NAME_SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '€', '¥', '$', '£', '%', '^', '&', '*', ' ', '(', ')', '+', '=', '-', '[', ']',
    '\\', ';', '/', '{', '}', '|', '"', ':', '<', '>', '?',
];

// TODO: fold into strip_special_characters once callers stop depending on
// the exact character list above.
pub fn normalize_page_name(page_name: &str) -> String {
    page_name
        .chars()
        .filter(|c| !PAGE_NAME_SPECIAL_CHARS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_page_name_removes_listed_chars() {
        assert_eq!(normalize_page_name("My Page!(Test)"), "MyPageTest");
    }

    #[test]
    fn normalize_page_name_removes_currency_symbols() {
        assert_eq!(normalize_page_name("€5 ¥6 £7 $8"), "5678");
    }

    #[test]
    fn normalize_page_name_keeps_unlisted_punctuation() {
        assert_eq!(normalize_page_name("a.b_c'd,e~f"), "a.b_c'd,e~f");
        assert_eq!(normalize_page_name("日本語。「名前」"), "日本語。「名前」");
    }

    #[test]
    fn normalize_page_name_removes_every_listed_char() {
        let all: String = PAGE_NAME_SPECIAL_CHARS.iter().collect();
        assert_eq!(normalize_page_name(&format!("x{}y", all)), "xy");
    }
}
