//! Commonly misspelled words with their corrections.

pub const MISSPELLINGS: &[(&str, &str)] = &[
    ("accomodate", "accommodate"),
    ("acheive", "achieve"),
    ("adress", "address"),
    ("alot", "a lot"),
    ("arguement", "argument"),
    ("beleive", "believe"),
    ("calender", "calendar"),
    ("definately", "definitely"),
    ("embarass", "embarrass"),
    ("enviroment", "environment"),
    ("existance", "existence"),
    ("foriegn", "foreign"),
    ("gaurd", "guard"),
    ("goverment", "government"),
    ("independant", "independent"),
    ("liason", "liaison"),
    ("maintainance", "maintenance"),
    ("neccessary", "necessary"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("publically", "publicly"),
    ("recieve", "receive"),
    ("recieved", "received"),
    ("recomend", "recommend"),
    ("refered", "referred"),
    ("seperate", "separate"),
    ("succesful", "successful"),
    ("teh", "the"),
    ("truely", "truly"),
    ("untill", "until"),
    ("wich", "which"),
];

/// Vowel-initial words that take "a" (consonant sound).
pub const A_BEFORE_VOWEL_LETTER: &[&str] = &[
    "one", "once", "euro", "european", "eulogy", "uniform", "union", "unique", "unit", "united",
    "universal", "university", "usage", "useful", "user", "usual",
];

/// Consonant-initial words that take "an" (silent h).
pub const AN_BEFORE_CONSONANT_LETTER: &[&str] = &["heir", "honest", "honor", "honour", "hour"];
