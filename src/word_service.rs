use std::collections::HashSet;
use std::time::Duration;

use futures_util::{stream, StreamExt};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::models::{MatchPosition, Operator};
use crate::translator::Translate;
use crate::word_store::WordStore;

/// Cap on store positions considered during the translation phase.
const TRANSLATION_SAMPLE_LIMIT: usize = 500;
/// Stride through the sampled positions, to bound external calls.
const TRANSLATION_SAMPLE_STRIDE: usize = 10;
/// In-flight translation requests for the candidate batch.
const TRANSLATE_CONCURRENCY: usize = 8;
/// Overall deadline for the translation phase; hits collected before the
/// deadline are still returned.
const TRANSLATION_PHASE_DEADLINE: Duration = Duration::from_secs(30);
/// Translations this short are also compared by edit distance.
const EDIT_DISTANCE_MAX_LEN: usize = 5;

/// Finds store words that start or end with a substring of the input word.
///
/// The pattern is the first (`start`) or last (`end`) `match_length`
/// characters of the input word, with `match_length` clamped to the input's
/// character length. The store is scanned once in order; the input word
/// itself never matches. When `word_length` is present, candidates must also
/// satisfy `len(candidate) <operator> word_length` in characters.
pub fn find_matching_words(
    store: &WordStore,
    input_word: &str,
    match_length: usize,
    word_length: Option<usize>,
    operator: Operator,
    match_position: MatchPosition,
) -> Vec<String> {
    let input_chars: Vec<char> = input_word.chars().collect();
    let match_length = match_length.min(input_chars.len());

    let pattern: String = match match_position {
        MatchPosition::Start => input_chars[..match_length].iter().collect(),
        MatchPosition::End => input_chars[input_chars.len() - match_length..].iter().collect(),
    };

    let mut matching = Vec::new();
    for word in store.words() {
        if word == input_word {
            continue;
        }
        let matches = match match_position {
            MatchPosition::Start => word.starts_with(&pattern),
            MatchPosition::End => word.ends_with(&pattern),
        };
        if matches && length_condition(word.chars().count(), word_length, operator) {
            matching.push(word.clone());
        }
    }
    matching
}

fn length_condition(word_len: usize, target: Option<usize>, operator: Operator) -> bool {
    let Some(target) = target else { return true };
    match operator {
        Operator::Eq => word_len == target,
        Operator::Gt => word_len > target,
        Operator::Lt => word_len < target,
        Operator::Ge => word_len >= target,
        Operator::Le => word_len <= target,
    }
}

/// Finds up to `max_results` words judged similar to the input word.
///
/// Two strategies run in succession. First a scan for words containing the
/// input's root as a substring; then, only if the budget is not yet filled,
/// a translation comparison over a strided sample of the store. Translation
/// failures are recoverable: a failed input-word translation skips the
/// second phase entirely, a failed candidate translation skips just that
/// candidate.
pub async fn find_synonyms<T: Translate>(
    store: &WordStore,
    translator: &T,
    word: &str,
    max_results: usize,
) -> Vec<String> {
    let mut synonyms = Vec::new();

    let root = extract_root(word);
    if !root.is_empty() {
        for candidate in store.words() {
            if synonyms.len() >= max_results {
                break;
            }
            if candidate == word {
                continue;
            }
            if candidate.contains(&root) {
                synonyms.push(candidate.clone());
            }
        }
    }

    if synonyms.len() >= max_results {
        return synonyms;
    }

    let reference = match translator.translate(word).await {
        Ok(translation) => translation.to_lowercase(),
        Err(err) => {
            warn!(%word, %err, "input word translation failed, skipping translation phase");
            return synonyms;
        }
    };

    let words = store.words();
    let sample_size = words.len().min(TRANSLATION_SAMPLE_LIMIT);
    let candidates: Vec<String> = (0..sample_size)
        .step_by(TRANSLATION_SAMPLE_STRIDE)
        .map(|position| words[position].clone())
        .filter(|candidate| candidate.as_str() != word && !synonyms.contains(candidate))
        .collect();

    // Candidates translate concurrently (bounded), but arrive in sample
    // order so the result stays deterministic.
    let lookups = stream::iter(candidates.into_iter().map(|candidate| async move {
        match translator.translate(&candidate).await {
            Ok(translation) => Some((candidate, translation.to_lowercase())),
            Err(err) => {
                debug!(%candidate, %err, "candidate translation failed, skipped");
                None
            }
        }
    }))
    .buffered(TRANSLATE_CONCURRENCY);

    let collect = async {
        futures_util::pin_mut!(lookups);
        while let Some(lookup) = lookups.next().await {
            let Some((candidate, translation)) = lookup else {
                continue;
            };
            if is_similar(&reference, &translation) && !synonyms.contains(&candidate) {
                synonyms.push(candidate);
                if synonyms.len() >= max_results {
                    break;
                }
            }
        }
    };
    if tokio::time::timeout(TRANSLATION_PHASE_DEADLINE, collect)
        .await
        .is_err()
    {
        warn!(%word, "translation phase deadline hit, returning partial results");
    }

    synonyms.truncate(max_results);
    synonyms
}

/// First 5 characters of the word when it has at least 5, else the first 3
/// when it has at least 3, else the word itself. A crude stand-in for a
/// morphological stem.
fn extract_root(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() >= 5 {
        chars[..5].iter().collect()
    } else if chars.len() >= 3 {
        chars[..3].iter().collect()
    } else {
        word.to_string()
    }
}

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Similarity between two translated strings: equal after punctuation
/// stripping, or sharing a whitespace token, or one containing the other,
/// or both short with edit distance at most 1.
fn is_similar(first: &str, second: &str) -> bool {
    let first = PUNCTUATION.replace_all(first, "");
    let first = first.trim();
    let second = PUNCTUATION.replace_all(second, "");
    let second = second.trim();

    if first == second {
        return true;
    }

    let first_tokens: HashSet<&str> = first.split_whitespace().collect();
    if second.split_whitespace().any(|token| first_tokens.contains(token)) {
        return true;
    }

    if first.contains(second) || second.contains(first) {
        return true;
    }

    first.chars().count() <= EDIT_DISTANCE_MAX_LEN
        && second.chars().count() <= EDIT_DISTANCE_MAX_LEN
        && levenshtein(first, second) <= 1
}

/// Classic insert/delete/substitute distance, unit costs, two-row iterative
/// form. Inputs are bounded to a handful of characters by the caller.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return longer.len();
    }

    let mut previous: Vec<usize> = (0..=shorter.len()).collect();
    for (i, &c1) in longer.iter().enumerate() {
        let mut current = vec![i + 1];
        for (j, &c2) in shorter.iter().enumerate() {
            let insertions = previous[j + 1] + 1;
            let deletions = current[j] + 1;
            let substitutions = previous[j] + usize::from(c1 != c2);
            current.push(insertions.min(deletions).min(substitutions));
        }
        previous = current;
    }
    previous[shorter.len()]
}
