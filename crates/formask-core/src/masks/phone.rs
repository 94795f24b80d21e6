/// Progressive US phone mask.
///
/// Given the raw text currently in the field and the previously accepted
/// display value, produces the next display value. Punctuation is only
/// inserted while the input is growing; `None` means no new display value
/// was produced and the caller decides what to keep.
pub fn format_phone(value: &str, previous_value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(String::new());
    }

    let digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();

    // Raw lengths, not digit counts: deleting a punctuation character also
    // counts as shrinking and must not re-punctuate.
    if !previous_value.is_empty() && char_len(value) <= char_len(previous_value) {
        return None;
    }

    // Exactly 3 and exactly 6 are matched first so the display never ends
    // in a dangling space or hyphen at a group boundary.
    Some(match digits.len() {
        3 => format!("({})", digits),
        6 => format!("({}) {}", &digits[..3], &digits[3..]),
        n if n < 3 => digits,
        n if n < 6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    })
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
