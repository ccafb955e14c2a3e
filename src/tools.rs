pub fn empty_string_as_option(value: &str) -> Option<String> {
    match value.trim().len() {
        0 => None,
        _ => Some(value.trim().to_string()),
    }
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
