//! Prompt interpretation.
//!
//! Extracts a budget and a set of (category, quantity) requests from
//! free-text user messages like "Budget 5.000.000, butuh sofa 1 dan chair 2".
//!
//! The largest number in the text is taken as the budget; every other number
//! is a candidate quantity and is assigned to the nearest category mention
//! within a fixed character window. The nearest-unused assignment is a greedy
//! approximation: with several numbers close to several category mentions the
//! pairing can differ from what the user meant.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::DesiredCategory;

/// Maximum distance (in characters) between a number and a category mention
/// for the number to be read as that mention's quantity.
const PROXIMITY_THRESHOLD: usize = 30;

/// Matches thousands-separated groups ("5.000.000") before plain digit runs.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}(?:\.\d{3})+|\d+").expect("valid number regex"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromptError {
    #[error("Budget tidak ditemukan dalam pesan Anda.")]
    BudgetNotFound,
}

/// Budget and desired categories extracted from a user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrompt {
    /// Budget in IDR: the largest number mentioned.
    pub budget: u64,
    /// Requested categories in first-mention order, quantities accumulated
    /// across repeated mentions.
    pub desired: Vec<DesiredCategory>,
}

/// A numeric token found in the text, with its character span.
#[derive(Debug, Clone, Copy)]
struct NumberToken {
    value: u64,
    start: usize,
    end: usize,
}

/// Parse a user message against the known category vocabulary.
///
/// `categories` must be lowercased (see [`crate::catalog::unique_categories`]).
/// Returns [`PromptError::BudgetNotFound`] when the text contains no number;
/// callers degrade to a no-recommendation reply rather than failing the
/// request.
pub fn parse_user_prompt(
    prompt: &str,
    categories: &[String],
) -> Result<ParsedPrompt, PromptError> {
    let lower = prompt.to_lowercase();

    let tokens: Vec<NumberToken> = NUMBER_RE
        .find_iter(&lower)
        .filter_map(|m| {
            let value = m.as_str().replace('.', "").parse().ok()?;
            Some(NumberToken {
                value,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect();

    if tokens.is_empty() {
        return Err(PromptError::BudgetNotFound);
    }

    // The budget is the first occurrence of the maximum value. Exclusion is
    // by token, not by value: a later duplicate of the maximum still counts
    // as a quantity candidate.
    let budget_idx = tokens
        .iter()
        .enumerate()
        .max_by_key(|(i, t)| (t.value, std::cmp::Reverse(*i)))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let budget = tokens[budget_idx].value;

    let candidates: Vec<NumberToken> = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != budget_idx)
        .map(|(_, t)| *t)
        .collect();
    let mut used = vec![false; candidates.len()];

    let mut desired: Vec<DesiredCategory> = Vec::new();

    for cat in categories {
        let word_re = match Regex::new(&format!(r"\b{}\b", regex::escape(cat))) {
            Ok(re) => re,
            Err(_) => continue,
        };

        for mention in word_re.find_iter(&lower) {
            let pos = mention.start();

            // Nearest unused candidate by distance from either end of its
            // span; first-scanned wins ties.
            let mut nearest: Option<usize> = None;
            let mut min_distance = usize::MAX;
            for (i, num) in candidates.iter().enumerate() {
                if used[i] {
                    continue;
                }
                let distance = num.start.abs_diff(pos).min(num.end.abs_diff(pos));
                if distance < min_distance {
                    min_distance = distance;
                    nearest = Some(i);
                }
            }

            let quantity = match nearest {
                Some(i) if min_distance < PROXIMITY_THRESHOLD => {
                    used[i] = true;
                    // Quantities saturate rather than wrap for absurd inputs.
                    u32::try_from(candidates[i].value).unwrap_or(u32::MAX)
                }
                _ => 1,
            };

            match desired
                .iter_mut()
                .find(|d| d.category.eq_ignore_ascii_case(cat))
            {
                Some(existing) => existing.quantity += quantity,
                None => desired.push(DesiredCategory {
                    category: cat.clone(),
                    quantity,
                }),
            }
        }
    }

    Ok(ParsedPrompt { budget, desired })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extracts_budget_and_quantities() {
        let parsed = parse_user_prompt(
            "Budget 5.000.000, butuh sofa 1 dan chair 2",
            &cats(&["sofa", "chair"]),
        )
        .unwrap();

        assert_eq!(parsed.budget, 5_000_000);
        assert_eq!(
            parsed.desired,
            vec![
                DesiredCategory {
                    category: "sofa".into(),
                    quantity: 1
                },
                DesiredCategory {
                    category: "chair".into(),
                    quantity: 2
                },
            ]
        );
    }

    #[test]
    fn budget_is_the_largest_number() {
        let parsed =
            parse_user_prompt("2 chair dengan budget 300000", &cats(&["chair"])).unwrap();
        assert_eq!(parsed.budget, 300_000);
        assert_eq!(parsed.desired[0].quantity, 2);
    }

    #[test]
    fn no_number_is_a_soft_error() {
        let err = parse_user_prompt("saya mau sofa yang bagus", &cats(&["sofa"])).unwrap_err();
        assert_eq!(err, PromptError::BudgetNotFound);
    }

    #[test]
    fn thousands_separators_are_collapsed() {
        let parsed = parse_user_prompt("budget saya 1.250.000", &cats(&[])).unwrap();
        assert_eq!(parsed.budget, 1_250_000);
        assert!(parsed.desired.is_empty());
    }

    #[test]
    fn distant_numbers_default_quantity_to_one() {
        // The 2 sits more than 30 characters from the sofa mention.
        let parsed = parse_user_prompt(
            "sofa untuk ruang tamu yang luas dan nyaman sekali, ada 2 anak, budget 1000000",
            &cats(&["sofa"]),
        )
        .unwrap();
        assert_eq!(parsed.desired[0].quantity, 1);
    }

    #[test]
    fn repeated_mentions_accumulate() {
        let parsed = parse_user_prompt(
            "chair 2 untuk dapur dan chair 3 untuk teras, budget 9000000",
            &cats(&["chair"]),
        )
        .unwrap();
        assert_eq!(parsed.desired.len(), 1);
        assert_eq!(parsed.desired[0].quantity, 5);
    }

    #[test]
    fn a_number_feeds_at_most_one_mention() {
        // One candidate, two mentions: the second mention defaults to 1.
        let parsed = parse_user_prompt(
            "sofa 2 dan juga chair, budget 5000000",
            &cats(&["sofa", "chair"]),
        )
        .unwrap();
        assert_eq!(parsed.desired[0].quantity, 2);
        assert_eq!(parsed.desired[1].quantity, 1);
    }

    #[test]
    fn duplicate_of_the_maximum_stays_a_candidate() {
        // Both numbers are 100; the first is the budget, the second remains
        // available as a quantity.
        let parsed = parse_user_prompt("100 dan 100 chair", &cats(&["chair"])).unwrap();
        assert_eq!(parsed.budget, 100);
        assert_eq!(parsed.desired[0].quantity, 100);
    }

    #[test]
    fn oversized_quantities_saturate() {
        // The second number exceeds u32::MAX; the larger one is the budget.
        let parsed = parse_user_prompt(
            "budget 99.999.999.999.999, chair 55555555555",
            &cats(&["chair"]),
        )
        .unwrap();
        assert_eq!(parsed.budget, 99_999_999_999_999);
        assert_eq!(parsed.desired[0].quantity, u32::MAX);
    }

    #[test]
    fn matches_whole_words_only() {
        // "sofabed" must not count as a "sofa" mention.
        let parsed = parse_user_prompt("sofabed 2, budget 4000000", &cats(&["sofa"])).unwrap();
        assert!(parsed.desired.is_empty());
    }

    #[test]
    fn category_matching_is_case_insensitive() {
        let parsed = parse_user_prompt("Butuh SOFA 1, budget 2000000", &cats(&["sofa"])).unwrap();
        assert_eq!(parsed.desired[0].category, "sofa");
        assert_eq!(parsed.desired[0].quantity, 1);
    }
}
