use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use lexa_types::{QuestionKind, QuizQuestion};

use crate::bank::{WordBank, WordBankEntry};
use crate::session::QuizSession;
use crate::QuizError;

const MAX_OPTIONS: usize = 4;

/// Builds quiz sessions from a word bank.
///
/// Unseeded in production; tests pass a seeded rng to make sampling and
/// option order reproducible.
pub struct QuizGenerator<R = StdRng> {
    rng: R,
}

impl QuizGenerator<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for QuizGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Sample up to `count` distinct entries and turn each into a question.
    /// Entries without any synonyms or antonyms are skipped and replaced by
    /// the next unused one.
    pub fn generate(&mut self, bank: &WordBank, count: usize) -> Vec<QuizQuestion> {
        let mut order: Vec<&WordBankEntry> = bank.entries().iter().collect();
        order.shuffle(&mut self.rng);

        let mut questions = Vec::with_capacity(count.min(order.len()));
        for entry in order {
            if questions.len() == count {
                break;
            }
            match self.question_for(entry) {
                Ok(question) => questions.push(question),
                Err(e) => tracing::warn!("Skipping quiz word: {}", e),
            }
        }
        questions
    }

    pub fn generate_session(
        &mut self,
        bank: &WordBank,
        count: usize,
    ) -> Result<QuizSession, QuizError> {
        let questions = self.generate(bank, count);
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        tracing::debug!("Generated quiz with {} questions", questions.len());
        Ok(QuizSession::new(questions))
    }

    pub fn question_for(&mut self, entry: &WordBankEntry) -> Result<QuizQuestion, QuizError> {
        let prefer_synonym = self.rng.gen_bool(0.5);
        let kind = if (prefer_synonym && !entry.synonyms.is_empty()) || entry.antonyms.is_empty() {
            QuestionKind::Synonym
        } else {
            QuestionKind::Antonym
        };

        let (same, other) = match kind {
            QuestionKind::Synonym => (&entry.synonyms, &entry.antonyms),
            QuestionKind::Antonym => (&entry.antonyms, &entry.synonyms),
        };
        let Some(correct) = same.first() else {
            return Err(QuizError::InsufficientData(entry.word.clone()));
        };

        // One more from the asked list and two from the other one; the
        // synonym fallback for entries without antonyms keeps everything
        let distractors: Vec<&String> = if prefer_synonym || kind == QuestionKind::Antonym {
            same.iter().skip(1).take(1).chain(other.iter().take(2)).collect()
        } else {
            same.iter().skip(1).chain(other.iter()).collect()
        };

        let mut options = vec![correct.clone()];
        for option in distractors {
            if !options.contains(option) {
                options.push(option.clone());
            }
        }

        // The correct answer must survive truncation
        let mut wrong = options.split_off(1);
        wrong.shuffle(&mut self.rng);
        wrong.truncate(MAX_OPTIONS - 1);
        options.extend(wrong);
        options.shuffle(&mut self.rng);

        Ok(QuizQuestion {
            word: entry.word.clone(),
            kind,
            correct: correct.clone(),
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn entry(word: &str, synonyms: &[&str], antonyms: &[&str]) -> WordBankEntry {
        WordBankEntry {
            word: word.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            antonyms: antonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn seeded(seed: u64) -> QuizGenerator<StdRng> {
        QuizGenerator::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_session_shape_holds_across_seeds() {
        let bank = WordBank::embedded().unwrap();

        for seed in 0..50 {
            let questions = seeded(seed).generate(&bank, 5);
            assert_eq!(questions.len(), 5);

            let words: HashSet<_> = questions.iter().map(|q| q.word.as_str()).collect();
            assert_eq!(words.len(), 5, "words must not repeat");

            for q in &questions {
                assert!(q.options.contains(&q.correct));
                assert!((2..=MAX_OPTIONS).contains(&q.options.len()));
                let unique: HashSet<_> = q.options.iter().collect();
                assert_eq!(unique.len(), q.options.len());
            }
        }
    }

    #[test]
    fn test_single_synonym_never_asks_antonym() {
        let lonely = entry("glad", &["happy"], &[]);

        for seed in 0..50 {
            let q = seeded(seed).question_for(&lonely).unwrap();
            assert_eq!(q.kind, QuestionKind::Synonym);
            assert_eq!(q.correct, "happy");
            assert_eq!(q.options, vec!["happy".to_string()]);
        }
    }

    #[test]
    fn test_antonym_only_entry_asks_antonym() {
        let e = entry("up", &[], &["down", "below"]);

        for seed in 0..20 {
            let q = seeded(seed).question_for(&e).unwrap();
            assert_eq!(q.kind, QuestionKind::Antonym);
            assert_eq!(q.correct, "down");
        }
    }

    #[test]
    fn test_kind_matches_correct_answer() {
        let e = entry("big", &["large", "huge", "vast", "giant"], &["small", "tiny", "minute"]);

        let mut kinds = HashSet::new();
        for seed in 0..50 {
            let q = seeded(seed).question_for(&e).unwrap();
            match q.kind {
                QuestionKind::Synonym => assert_eq!(q.correct, "large"),
                QuestionKind::Antonym => assert_eq!(q.correct, "small"),
            }
            assert!(q.options.len() <= MAX_OPTIONS);
            assert!(q.options.contains(&q.correct));
            kinds.insert(q.kind);
        }
        assert_eq!(kinds.len(), 2, "coin flip should pick both kinds");
    }

    #[test]
    fn test_duplicate_options_are_collapsed() {
        let e = entry("odd", &["strange", "strange"], &["strange"]);

        for seed in 0..20 {
            let q = seeded(seed).question_for(&e).unwrap();
            assert_eq!(q.options, vec!["strange".to_string()]);
        }
    }

    #[test]
    fn test_insufficient_entries_are_replaced() {
        let bank = WordBank::new(vec![
            entry("void", &[], &[]),
            entry("hot", &["warm"], &["cold"]),
            entry("null", &[], &[]),
            entry("wet", &["damp"], &["dry"]),
        ]);

        for seed in 0..20 {
            let questions = seeded(seed).generate(&bank, 2);
            let mut words: Vec<_> = questions.iter().map(|q| q.word.as_str()).collect();
            words.sort();
            assert_eq!(words, vec!["hot", "wet"]);
        }
    }

    #[test]
    fn test_small_bank_caps_question_count() {
        let bank = WordBank::new(vec![entry("hot", &["warm"], &["cold"])]);
        assert_eq!(seeded(1).generate(&bank, 5).len(), 1);
    }

    #[test]
    fn test_unusable_bank_is_an_error() {
        let bank = WordBank::new(vec![entry("void", &[], &[])]);
        assert!(matches!(
            seeded(1).generate_session(&bank, 5),
            Err(QuizError::EmptyBank)
        ));
        assert!(matches!(
            seeded(1).question_for(&bank.entries()[0]),
            Err(QuizError::InsufficientData(word)) if word == "void"
        ));
    }

    #[test]
    fn test_same_seed_same_session() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(seeded(42).generate(&bank, 5), seeded(42).generate(&bank, 5));
    }
}
