//! Rule-based noun lemmatizer: irregular plurals first, then suffix rules.
//! Words it does not recognise as plurals are returned unchanged.

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "people"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("data", "data"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("buses", "bus"),
    ("bonuses", "bonus"),
    ("campuses", "campus"),
    ("viruses", "virus"),
    ("statuses", "status"),
    ("geniuses", "genius"),
];

/// Singular nouns that happen to end in "men".
const MEN_SINGULARS: &[&str] = &[
    "amen", "omen", "abdomen", "specimen", "regimen", "stamen", "semen", "hymen", "acumen",
    "albumen", "cognomen",
];

/// Lemma of a lowercase word.
pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(w, _)| *w == word) {
        return (*lemma).to_string();
    }
    // too short or not alphabetic: leave alone
    if word.chars().count() <= 3 || !word.chars().all(|c| c.is_alphabetic()) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("men") && !MEN_SINGULARS.contains(&word) {
        return format!("{}man", &word[..word.len() - 3]);
    }
    if word.ends_with('s') && !["ss", "us", "is", "ous"].iter().any(|s| word.ends_with(s)) {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
