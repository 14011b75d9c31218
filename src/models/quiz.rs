//! "Which character are you?" quiz.

use crate::error::{AppError, Result};

/// Character a quiz answer scores toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Luke,
    Leia,
    Han,
    Vader,
}

impl Archetype {
    /// Declaration order, which is also the tie-break order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Luke,
        Archetype::Leia,
        Archetype::Han,
        Archetype::Vader,
    ];

    fn index(self) -> usize {
        match self {
            Archetype::Luke => 0,
            Archetype::Leia => 1,
            Archetype::Han => 2,
            Archetype::Vader => 3,
        }
    }

    pub fn character_name(self) -> &'static str {
        match self {
            Archetype::Luke => "Luke Skywalker",
            Archetype::Leia => "Leia Organa",
            Archetype::Han => "Han Solo",
            Archetype::Vader => "Darth Vader",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Archetype::Luke => {
                "You are most like Luke Skywalker: hopeful, principled, and drawn to adventure."
            }
            Archetype::Leia => {
                "You are most like Leia Organa: strategic, brave, and an inspiring leader."
            }
            Archetype::Han => {
                "You are most like Han Solo: witty, independent, but loyal when it counts."
            }
            Archetype::Vader => {
                "You are most like Darth Vader: powerful, driven, and wrestling with destiny."
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuizAnswer {
    pub text: &'static str,
    pub archetype: Archetype,
}

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub text: &'static str,
    pub answers: [QuizAnswer; 4],
}

const fn answer(text: &'static str, archetype: Archetype) -> QuizAnswer {
    QuizAnswer { text, archetype }
}

pub const QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        text: "What role do you naturally take in a group?",
        answers: [
            answer("Leader with a moral compass", Archetype::Luke),
            answer("Strategic diplomat", Archetype::Leia),
            answer("Charming rogue", Archetype::Han),
            answer("Calculated enforcer", Archetype::Vader),
        ],
    },
    QuizQuestion {
        text: "How do you approach risk?",
        answers: [
            answer("I trust in hope and take the leap", Archetype::Luke),
            answer("I weigh every angle first", Archetype::Leia),
            answer("Never tell me the odds", Archetype::Han),
            answer("Risk is a tool to gain power", Archetype::Vader),
        ],
    },
    QuizQuestion {
        text: "Pick a preferred weapon:",
        answers: [
            answer("Blue lightsaber", Archetype::Luke),
            answer("Sharp mind and sharp words", Archetype::Leia),
            answer("Blaster at my side", Archetype::Han),
            answer("Red lightsaber", Archetype::Vader),
        ],
    },
];

/// Progress through [`QUESTIONS`] and the running score sheet.
#[derive(Debug, Clone, Default)]
pub struct Quiz {
    position: usize,
    scores: [u32; 4],
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question awaiting an answer, or `None` once finished.
    pub fn current(&self) -> Option<&'static QuizQuestion> {
        QUESTIONS.get(self.position)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= QUESTIONS.len()
    }

    /// Record the answer at `choice` for the current question and advance.
    pub fn answer(&mut self, choice: usize) -> Result<Archetype> {
        let question = self
            .current()
            .ok_or_else(|| AppError::validation("Quiz is already finished"))?;
        let picked = question.answers.get(choice).ok_or_else(|| {
            AppError::validation(format!(
                "Answer {choice} is out of range (0..{})",
                question.answers.len()
            ))
        })?;

        self.scores[picked.archetype.index()] += 1;
        self.position += 1;
        Ok(picked.archetype)
    }

    pub fn score(&self, archetype: Archetype) -> u32 {
        self.scores[archetype.index()]
    }

    /// Highest-scoring archetype; ties go to the one declared first.
    pub fn result(&self) -> Archetype {
        let mut best = Archetype::Luke;
        for archetype in Archetype::ALL {
            if self.score(archetype) > self.score(best) {
                best = archetype;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_run_picks_majority() {
        let mut quiz = Quiz::new();
        quiz.answer(2).unwrap();
        quiz.answer(2).unwrap();
        quiz.answer(3).unwrap();

        assert!(quiz.is_finished());
        assert!(quiz.current().is_none());
        assert_eq!(quiz.score(Archetype::Han), 2);
        assert_eq!(quiz.result(), Archetype::Han);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let mut quiz = Quiz::new();
        quiz.answer(3).unwrap();
        quiz.answer(1).unwrap();
        quiz.answer(2).unwrap();
        assert_eq!(quiz.result(), Archetype::Leia);
    }

    #[test]
    fn test_empty_sheet_defaults_to_luke() {
        assert_eq!(Quiz::new().result(), Archetype::Luke);
    }

    #[test]
    fn test_rejects_bad_choice_and_extra_answers() {
        let mut quiz = Quiz::new();
        assert!(quiz.answer(4).is_err());
        assert_eq!(quiz.current().unwrap().text, QUESTIONS[0].text);

        for _ in 0..QUESTIONS.len() {
            quiz.answer(0).unwrap();
        }
        assert!(quiz.answer(0).is_err());
    }
}
