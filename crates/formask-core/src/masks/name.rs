pub fn uppercase_letters(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
