//! Input cleaning
//!
//! Turns a raw input line into lowercase words.

/// Splits `text` on whitespace and lowercases every word.
///
/// Leading, trailing and repeated whitespace produce no empty words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
