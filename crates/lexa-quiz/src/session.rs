use lexa_types::{OptionMark, QuizQuestion};
use uuid::Uuid;

/// Result of locking in an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerVerdict {
    pub marks: Vec<(String, OptionMark)>,
    pub correct: bool,
    pub score: usize,
}

/// One run through a generated set of questions.
///
/// After an answer the current question stays locked until [`QuizSession::advance`],
/// so repeated submissions cannot change the score.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<QuizQuestion>,
    index: usize,
    score: usize,
    showing: Option<String>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            id: Uuid::new_v4(),
            questions,
            index: 0,
            score: 0,
            showing: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn is_showing_result(&self) -> bool {
        self.showing.is_some()
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    /// Lock in `choice` for the current question. `None` when a result is
    /// already showing, the session is over or `choice` is not an option.
    pub fn answer(&mut self, choice: &str) -> Option<AnswerVerdict> {
        if self.showing.is_some() {
            tracing::debug!("Answer ignored, result already showing");
            return None;
        }
        let question = self.questions.get(self.index)?;
        if !question.options.iter().any(|o| o == choice) {
            return None;
        }

        let correct = choice == question.correct;
        let marks = question
            .options
            .iter()
            .map(|option| {
                let mark = if *option == question.correct {
                    OptionMark::Correct
                } else if option == choice {
                    OptionMark::Wrong
                } else {
                    OptionMark::Neutral
                };
                (option.clone(), mark)
            })
            .collect();

        if correct {
            self.score += 1;
        }
        self.showing = Some(choice.to_string());

        Some(AnswerVerdict {
            marks,
            correct,
            score: self.score,
        })
    }

    /// Move past an answered question. Returns false if nothing was answered.
    pub fn advance(&mut self) -> bool {
        if self.showing.take().is_none() {
            return false;
        }
        self.index += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use lexa_types::QuestionKind;

    use super::*;

    fn question(word: &str, correct: &str, wrong: &[&str]) -> QuizQuestion {
        let mut options = vec![correct.to_string()];
        options.extend(wrong.iter().map(|w| w.to_string()));
        QuizQuestion {
            word: word.to_string(),
            kind: QuestionKind::Synonym,
            correct: correct.to_string(),
            options,
        }
    }

    fn session() -> QuizSession {
        QuizSession::new(vec![
            question("big", "large", &["small", "tiny"]),
            question("fast", "quick", &["slow"]),
        ])
    }

    #[test]
    fn test_double_answer_scores_once() {
        let mut quiz = session();

        let verdict = quiz.answer("large").unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.score, 1);

        assert!(quiz.answer("large").is_none());
        assert!(quiz.answer("small").is_none());
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_marks_for_wrong_answer() {
        let mut quiz = session();

        let verdict = quiz.answer("small").unwrap();

        assert!(!verdict.correct);
        assert_eq!(verdict.score, 0);
        assert_eq!(
            verdict.marks,
            vec![
                ("large".to_string(), OptionMark::Correct),
                ("small".to_string(), OptionMark::Wrong),
                ("tiny".to_string(), OptionMark::Neutral),
            ]
        );
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        let mut quiz = session();
        assert!(quiz.answer("enormous").is_none());
        assert!(!quiz.is_showing_result());
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut quiz = session();
        assert!(!quiz.advance());
        assert_eq!(quiz.index(), 0);

        quiz.answer("tiny");
        assert!(quiz.advance());
        assert_eq!(quiz.current().unwrap().word, "fast");
        assert!(!quiz.is_showing_result());
    }

    #[test]
    fn test_completion_reports_score() {
        let mut quiz = session();

        quiz.answer("large");
        quiz.advance();
        quiz.answer("slow");
        quiz.advance();

        assert!(quiz.is_complete());
        assert!(quiz.current().is_none());
        assert_eq!((quiz.score(), quiz.total()), (1, 2));
        assert!(quiz.answer("quick").is_none());
    }

    #[test]
    fn test_new_session_gets_fresh_id() {
        assert_ne!(session().id(), session().id());
    }
}
