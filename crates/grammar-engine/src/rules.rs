//! Regex-driven guideline rules.
//!
//! Every rule reports matches as character-indexed spans into the checked
//! text, ordered left to right, each with zero or more suggested
//! replacements and a stable rule id.

use std::collections::HashMap;

use analysis_engine::engine::GrammarMatch;
use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?").unwrap();
    static ref LOWERCASE_SENTENCE_START: Regex =
        Regex::new(r"(?:^\s*|[.!?]\s+)([a-z][A-Za-z']*)").unwrap();
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r"[ \t]+([,;:.!?])").unwrap();
    static ref MISSPELLING_MAP: HashMap<&'static str, &'static str> =
        lexicon::MISSPELLINGS.iter().copied().collect();
}

/// Run every rule and return the matches ordered by position in the text.
/// Ties keep rule priority order (spelling first).
pub fn check_all(text: &str) -> Vec<GrammarMatch> {
    let mut matches = check_spelling(text);
    matches.extend(check_repeated_words(text));
    matches.extend(check_article_agreement(text));
    matches.extend(check_sentence_start(text));
    matches.extend(check_space_before_punctuation(text));
    matches.sort_by_key(|m| m.offset);
    matches
}

/// Apply the first replacement of each match, skipping matches that overlap
/// an earlier one, splicing over a char vector so multi-byte text keeps the
/// engine's character indexing.
pub fn apply_matches(text: &str, matches: &[GrammarMatch]) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut shift: isize = 0;
    let mut last_end = 0;

    for m in matches {
        if m.replacements.is_empty() || m.offset < last_end {
            continue;
        }
        let replacement: Vec<char> = m.replacements[0].chars().collect();
        let start = (m.offset as isize + shift) as usize;
        let end = ((m.offset + m.length) as isize + shift) as usize;
        chars.splice(start..end, replacement.iter().copied());
        shift += replacement.len() as isize - m.length as isize;
        last_end = m.offset + m.length;
    }

    chars.into_iter().collect()
}

fn check_spelling(text: &str) -> Vec<GrammarMatch> {
    let mut matches = Vec::new();
    for word in WORD.find_iter(text) {
        let lower = word.as_str().to_lowercase();
        if let Some(&correction) = MISSPELLING_MAP.get(lower.as_str()) {
            matches.push(GrammarMatch {
                message: "Possible spelling mistake found.".to_string(),
                offset: char_offset(text, word.start()),
                length: word.as_str().chars().count(),
                rule_id: "MORFOLOGIK_RULE_EN_US".to_string(),
                replacements: vec![match_case(word.as_str(), correction)],
            });
        }
    }
    matches
}

fn check_repeated_words(text: &str) -> Vec<GrammarMatch> {
    let words: Vec<_> = WORD.find_iter(text).collect();
    let mut matches = Vec::new();

    for pair in words.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        let gap = &text[first.end()..second.start()];
        if !gap.is_empty()
            && gap.chars().all(char::is_whitespace)
            && !gap.contains('\n')
            && first.as_str().eq_ignore_ascii_case(second.as_str())
        {
            let offset = char_offset(text, first.start());
            matches.push(GrammarMatch {
                message: "Possible typo: you repeated a word.".to_string(),
                offset,
                length: char_offset(text, second.end()) - offset,
                rule_id: "ENGLISH_WORD_REPEAT_RULE".to_string(),
                replacements: vec![first.as_str().to_string()],
            });
        }
    }
    matches
}

fn check_article_agreement(text: &str) -> Vec<GrammarMatch> {
    let words: Vec<_> = WORD.find_iter(text).collect();
    let mut matches = Vec::new();

    for pair in words.windows(2) {
        let (article, next) = (&pair[0], &pair[1]);
        let next_lower = next.as_str().to_lowercase();
        let vowel_initial = next_lower.starts_with(['a', 'e', 'i', 'o', 'u']);

        let suggestion = match article.as_str().to_lowercase().as_str() {
            "a" if vowel_initial && !starts_with_any(&next_lower, lexicon::A_BEFORE_VOWEL_LETTER) => {
                Some(("an", "Use 'an' before words starting with a vowel sound."))
            }
            "an" if !vowel_initial
                && !starts_with_any(&next_lower, lexicon::AN_BEFORE_CONSONANT_LETTER) =>
            {
                Some(("a", "Use 'a' before words starting with a consonant sound."))
            }
            _ => None,
        };

        if let Some((replacement, message)) = suggestion {
            matches.push(GrammarMatch {
                message: message.to_string(),
                offset: char_offset(text, article.start()),
                length: article.as_str().chars().count(),
                rule_id: "EN_A_VS_AN".to_string(),
                replacements: vec![match_case(article.as_str(), replacement)],
            });
        }
    }
    matches
}

fn check_sentence_start(text: &str) -> Vec<GrammarMatch> {
    LOWERCASE_SENTENCE_START
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|word| GrammarMatch {
            message: "This sentence does not start with an uppercase letter.".to_string(),
            offset: char_offset(text, word.start()),
            length: word.as_str().chars().count(),
            rule_id: "UPPERCASE_SENTENCE_START".to_string(),
            replacements: vec![capitalize(word.as_str())],
        })
        .collect()
}

fn check_space_before_punctuation(text: &str) -> Vec<GrammarMatch> {
    SPACE_BEFORE_PUNCT
        .captures_iter(text)
        .map(|cap| {
            let whole = cap.get(0).unwrap();
            let punct = cap.get(1).unwrap();
            GrammarMatch {
                message: "Remove the space before the punctuation mark.".to_string(),
                offset: char_offset(text, whole.start()),
                length: whole.as_str().chars().count(),
                rule_id: "COMMA_PARENTHESIS_WHITESPACE".to_string(),
                replacements: vec![punct.as_str().to_string()],
            }
        })
        .collect()
}

// Regex spans are byte-indexed; the engine contract is char-indexed.
fn char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

fn match_case(source: &str, replacement: &str) -> String {
    if source.chars().next().map_or(false, char::is_uppercase) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn starts_with_any(word: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| word.starts_with(p))
}
