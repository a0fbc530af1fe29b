use crate::models::{ChoiceOption, Question, QuestionType};

const JUDGMENT_WORDS: [&str; 2] = ["正确", "错误"];

/// Decides whether a selected option answers the question correctly.
///
/// Defined for SINGLE_CHOICE and JUDGMENT questions; SHORT_ANSWER cards are
/// never submitted for grading. Callers gate submission on a non-empty
/// selection, so there is no "no answer" case here.
///
/// Judgment questions accept two encodings of the canonical answer: the
/// judgment word itself (`正确`/`错误`), matched as a substring of the
/// selected option, or a plain letter, matched against the option's label.
/// Malformed options degrade to comparing the whole string as the label,
/// which yields incorrect rather than an error.
pub fn evaluate(question: &Question, selected: &ChoiceOption) -> bool {
    let correct_raw = question.correct_answer.trim().to_uppercase();

    if question.question_type == QuestionType::Judgment
        && JUDGMENT_WORDS.contains(&correct_raw.as_str())
    {
        return selected.contains(&correct_raw);
    }

    selected.letter() == correct_raw
}
