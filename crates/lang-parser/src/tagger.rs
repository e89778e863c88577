//! Part-of-speech tagging and dependency labeling.
//!
//! A lexicon-and-suffix tagger: closed-class words come from the word lists
//! in [`crate::lexicon`], everything else falls back to suffix heuristics.
//! Passive constructions (a form of *be*, optionally separated by adverbs or
//! negation, followed by a past participle) receive the `auxpass` /
//! `nsubjpass` labels the downstream detector keys on.

use std::collections::HashSet;

use lazy_static::lazy_static;
use shared_types::Token;
use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon;

// Adverbs or negation may sit between the auxiliary and the participle
// ("was not fully tested"); anything else ends the candidate verb group.
const MAX_AUX_GAP: usize = 3;

lazy_static! {
    static ref IRREGULAR_PARTICIPLES: HashSet<&'static str> =
        lexicon::IRREGULAR_PARTICIPLES.iter().copied().collect();
}

/// Tokenize one sentence and assign part-of-speech and dependency labels.
pub fn tag_sentence(raw: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = raw
        .split_word_bounds()
        .filter(|w| !w.trim().is_empty())
        .enumerate()
        .map(|(i, w)| base_token(w, i == 0))
        .collect();
    mark_passive(&mut tokens);
    tokens
}

fn base_token(text: &str, sentence_initial: bool) -> Token {
    let lower = text.to_lowercase();
    let word = lower.as_str();

    let (pos, dep) = if text.chars().all(|c| !c.is_alphanumeric()) {
        ("PUNCT", "punct")
    } else if text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    {
        ("NUM", "nummod")
    } else if lexicon::DETERMINERS.contains(&word) {
        ("DET", "det")
    } else if lexicon::PRONOUNS.contains(&word) {
        ("PRON", "dep")
    } else if lexicon::BE_FORMS.contains(&word)
        || lexicon::HAVE_FORMS.contains(&word)
        || lexicon::MODALS.contains(&word)
    {
        ("AUX", "aux")
    } else if lexicon::PREPOSITIONS.contains(&word) {
        ("ADP", "prep")
    } else if lexicon::CONJUNCTIONS.contains(&word) {
        ("CCONJ", "cc")
    } else if lexicon::SUBORDINATORS.contains(&word) {
        ("SCONJ", "mark")
    } else if lexicon::NEGATIONS.contains(&word) {
        ("PART", "neg")
    } else if word.ends_with("ly") {
        ("ADV", "advmod")
    } else if is_participle(word) || word.ends_with("ing") {
        ("VERB", "dep")
    } else if !sentence_initial && text.chars().next().is_some_and(char::is_uppercase) {
        ("PROPN", "dep")
    } else {
        ("NOUN", "dep")
    };

    Token {
        text: text.to_string(),
        pos: pos.to_string(),
        dep: dep.to_string(),
    }
}

fn is_participle(word: &str) -> bool {
    IRREGULAR_PARTICIPLES.contains(word) || (word.len() > 3 && word.ends_with("ed"))
}

fn is_be_form(token: &Token) -> bool {
    lexicon::BE_FORMS.contains(&token.text.to_lowercase().as_str())
}

/// Scan each *be* auxiliary for a following past participle and relabel the
/// construction: the auxiliary becomes `auxpass`, the nearest preceding
/// noun-like token `nsubjpass`.
fn mark_passive(tokens: &mut [Token]) {
    let mut i = 0;
    while i < tokens.len() {
        if is_be_form(&tokens[i]) {
            let mut j = i + 1;
            let mut gap = 0;
            while j < tokens.len() && gap < MAX_AUX_GAP {
                if is_participle(&tokens[j].text.to_lowercase()) {
                    tokens[i].dep = "auxpass".to_string();
                    if let Some(subject) = subject_index(tokens, i) {
                        tokens[subject].dep = "nsubjpass".to_string();
                    }
                    i = j;
                    break;
                }
                if tokens[j].pos == "ADV" || tokens[j].pos == "PART" {
                    j += 1;
                    gap += 1;
                    continue;
                }
                break;
            }
        }
        i += 1;
    }
}

// Nearest noun-like token to the left of the auxiliary.
fn subject_index(tokens: &[Token], aux: usize) -> Option<usize> {
    tokens[..aux]
        .iter()
        .rposition(|t| matches!(t.pos.as_str(), "NOUN" | "PROPN" | "PRON"))
}
