//! Closed-class word lists used by the tagger.

/// Determiners
pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "another", "both", "either", "neither",
];

/// Personal and relative pronouns
pub const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "who", "whom",
    "which", "someone", "anyone", "everyone", "nobody",
];

/// Forms of "be", including common contractions
pub const BE_FORMS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "isn't", "aren't", "wasn't",
    "weren't",
];

/// Forms of "have"
pub const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "hasn't", "haven't", "hadn't"];

/// Modal auxiliaries
pub const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "won't",
    "wouldn't", "can't", "couldn't", "shouldn't",
];

/// Common prepositions
pub const PREPOSITIONS: &[&str] = &[
    "of", "in", "to", "for", "with", "on", "at", "by", "from", "about", "into", "over", "after",
    "under", "between", "through", "during", "before", "against", "among", "without", "within",
];

/// Coordinating conjunctions
pub const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "so", "yet"];

/// Subordinating conjunctions and complementizers
pub const SUBORDINATORS: &[&str] = &[
    "because", "although", "while", "since", "unless", "whereas", "if", "when", "that", "whether",
];

/// Negation particles
pub const NEGATIONS: &[&str] = &["not", "never", "n't"];

/// Irregular past participles that do not end in -ed. Regular participles
/// are recognized by suffix.
pub const IRREGULAR_PARTICIPLES: &[&str] = &[
    "been", "begun", "bought", "broken", "brought", "built", "caught", "chosen", "done", "drawn",
    "driven", "eaten", "fallen", "felt", "forgotten", "found", "given", "gone", "grown", "heard",
    "held", "hidden", "kept", "known", "laid", "led", "left", "lent", "lost", "made", "meant",
    "met", "paid", "proven", "put", "read", "run", "said", "seen", "sent", "set", "shown", "sold",
    "sought", "spent", "spoken", "taken", "taught", "thought", "told", "understood", "won", "worn",
    "written",
];
