//! Element name extraction

use crate::domain::instruction::Instruction;

const STOP_WORDS: &[&str] = &["create", "add", "make", "a", "an", "the"];
const MAX_NAME_WORDS: usize = 3;

pub const FALLBACK_NAME: &str = "New Element";

/// Quoted text verbatim, else the first three non-stop-words capitalized
pub fn extract_name(instruction: &Instruction<'_>) -> String {
    if let Some(quoted) = instruction.quoted() {
        return quoted.to_string();
    }

    let words: Vec<String> = instruction
        .normalized()
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .take(MAX_NAME_WORDS)
        .map(capitalize)
        .collect();

    if words.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
