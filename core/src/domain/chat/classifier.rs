use crate::domain::chat::value_objects::{INTENT_KEYWORDS, Intent};

/// Scores `query` against every intent by counting contained keyword
/// phrases. The highest score wins; on a tie the intent declared first wins.
pub fn classify(query: &str) -> Intent {
    let query = query.to_lowercase();

    let mut best = Intent::Unknown;
    let mut best_score = 0;

    for (intent, keywords) in INTENT_KEYWORDS {
        let score = keywords
            .iter()
            .filter(|keyword| query.contains(*keyword))
            .count();
        if score > best_score {
            best = *intent;
            best_score = score;
        }
    }

    best
}
