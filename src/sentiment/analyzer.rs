//! Lexicon-based polarity scoring.
//!
//! A deliberately small, deterministic scorer: count positive and negative
//! lexicon hits in the text, flip a hit's sign when a negation word appears
//! shortly before it, and normalize by the number of hits so the score always
//! lands in `[-1, 1]`. No I/O, no model downloads.

use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "bullish", "rally", "surge", "gain", "gains", "profit", "growth", "beat",
    "beats", "upgrade", "upgraded", "outperform", "strong", "positive", "rise",
    "rises", "increase", "breakthrough", "innovation", "success", "exceed",
    "exceeds", "momentum", "buy", "recommend", "optimistic", "record", "advance",
    "dividend", "buyback", "upside", "recovery", "rebound", "expansion",
    "robust", "accelerating", "overweight", "raised", "tailwind", "soar",
    "soars", "jumps", "win", "wins",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bearish", "decline", "declines", "loss", "losses", "fall", "falls",
    "plunge", "plunges", "crash", "miss", "misses", "downgrade", "downgraded",
    "underperform", "weak", "negative", "drop", "drops", "decrease", "concern",
    "concerns", "risk", "fail", "fails", "disappoint", "disappointing", "slump",
    "sell", "selloff", "warning", "pessimistic", "retreat", "fear", "trouble",
    "headwind", "lawsuit", "litigation", "recall", "investigation", "probe",
    "default", "bankruptcy", "layoff", "layoffs", "downside", "overvalued",
    "underweight", "lowered", "suspended", "tumble", "tumbles",
];

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "aren't",
    "wasn't", "weren't", "won't", "wouldn't", "couldn't", "shouldn't",
    "hardly", "barely", "neither", "nor", "without",
];

/// How many tokens back a negation word still flips a lexicon hit.
const NEGATION_WINDOW: usize = 3;

/// Scores a text's polarity in `[-1, 1]`.
///
/// Negative values read as negative sentiment, positive as positive, and
/// `0.0` as neutral (including any text with no lexicon hits at all).
pub struct SentimentAnalyzer {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    negation: HashSet<&'static str>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Creates an analyzer with the built-in financial-news lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(POSITIVE_WORDS, NEGATIVE_WORDS)
    }

    /// Creates an analyzer with custom positive/negative word lists.
    pub fn with_lexicon(positive: &[&'static str], negative: &[&'static str]) -> Self {
        Self {
            positive: positive.iter().copied().collect(),
            negative: negative.iter().copied().collect(),
            negation: NEGATION_WORDS.iter().copied().collect(),
        }
    }

    /// Scores `text`, returning a polarity in `[-1, 1]`.
    pub fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '.' | '!' | '?' | ':' | '"' | '(' | ')'))
            .filter(|w| !w.is_empty())
            .collect();

        let negation_positions: Vec<usize> = words
            .iter()
            .enumerate()
            .filter(|(_, w)| self.negation.contains(*w))
            .map(|(i, _)| i)
            .collect();

        let mut signed: i32 = 0;
        let mut hits: u32 = 0;

        for (i, word) in words.iter().enumerate() {
            let is_positive = self.positive.contains(word);
            let is_negative = self.negative.contains(word);
            if !is_positive && !is_negative {
                continue;
            }

            let negated = negation_positions
                .iter()
                .any(|&neg| neg < i && (i - neg) <= NEGATION_WINDOW);

            hits += 1;
            if is_positive {
                signed += if negated { -1 } else { 1 };
            } else {
                signed += if negated { 1 } else { -1 };
            }
        }

        if hits == 0 {
            0.0
        } else {
            f64::from(signed) / f64::from(hits)
        }
    }
}
