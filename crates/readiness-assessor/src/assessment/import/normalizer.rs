use super::super::domain::{LIKERT_MAX, LIKERT_MIN};

pub(crate) fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.trim().to_lowercase()
}

/// Yes/no answers in either supported locale.
pub(crate) fn check_answer(value: &str) -> Option<bool> {
    match normalize_token(value).as_str() {
        "yes" | "y" | "true" | "t" | "1" | "oo" | "opo" => Some(true),
        "no" | "n" | "false" | "f" | "0" | "hindi" => Some(false),
        _ => None,
    }
}

pub(crate) fn likert_answer(value: &str) -> Option<u8> {
    let token = normalize_token(value);
    match token.as_str() {
        "low" | "mababa" => Some(LIKERT_MIN),
        "medium" | "katamtaman" => Some(2),
        "high" | "mataas" => Some(LIKERT_MAX),
        numeric => numeric
            .parse::<u8>()
            .ok()
            .filter(|score| (LIKERT_MIN..=LIKERT_MAX).contains(score)),
    }
}
