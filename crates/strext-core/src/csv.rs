use memchr::memchr_iter;

/// Split a comma-separated string, dropping empty fields.
///
/// Fields are returned as slices of `s`, in order and untrimmed. Leading,
/// trailing and repeated commas produce no entries, so `""` and `",,"` both
/// give an empty vector.
pub fn split_csv(s: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;

    // ',' is ASCII, so every match is a char boundary.
    for pos in memchr_iter(b',', s.as_bytes()) {
        if pos > start {
            fields.push(&s[start..pos]);
        }
        start = pos + 1;
    }

    if start < s.len() {
        fields.push(&s[start..]);
    }

    fields
}
