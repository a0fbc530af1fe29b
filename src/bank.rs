use crate::models::{ChoiceOption, Question, QuestionType};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the bank files under `questions/`, sorted so the concatenated bank
/// order is stable across runs.
pub fn get_bank_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.exists()
        && dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

/// Loads one bank file: a JSON array of questions.
pub fn load_bank_file(path: &Path) -> io::Result<Vec<Question>> {
    let content = fs::read_to_string(path)?;
    let questions: Vec<Question> = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(questions.into_iter().map(normalize).collect())
}

/// Loads and concatenates every bank file in the directory. A missing
/// directory yields an empty bank; a malformed file is an error.
pub fn load_bank(dir: &Path) -> io::Result<Vec<Question>> {
    let mut bank = Vec::new();
    for path in get_bank_files(dir) {
        bank.extend(load_bank_file(&path)?);
    }
    Ok(bank)
}

/// Judgment questions may omit their options in the bank files; the standard
/// pair is synthesized at ingest so downstream code always sees options.
fn normalize(mut question: Question) -> Question {
    if question.question_type == QuestionType::Judgment && question.options.is_empty() {
        question.options = vec![
            ChoiceOption::new("A", "正确"),
            ChoiceOption::new("B", "错误"),
        ];
    }
    question
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const CHOICE_JSON: &str = r#"[
        {
            "id": "q1",
            "type": "SINGLE_CHOICE",
            "question": "项目章程由谁批准?",
            "options": ["A、项目经理", "B、发起人", "C、团队"],
            "correctAnswer": "B",
            "category": "整合"
        }
    ]"#;

    const JUDGMENT_JSON: &str = r#"[
        {
            "id": "j1",
            "type": "JUDGMENT",
            "question": "范围说明书是项目章程的输入。",
            "correctAnswer": "错误",
            "category": "范围"
        }
    ]"#;

    #[test]
    fn test_load_bank_file_parses_options() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_file(temp_dir.path(), "choice.json", CHOICE_JSON);

        let bank = load_bank_file(&path).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].options[1], ChoiceOption::new("B", "发起人"));
    }

    #[test]
    fn test_judgment_options_synthesized_when_absent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_file(temp_dir.path(), "judgment.json", JUDGMENT_JSON);

        let bank = load_bank_file(&path).unwrap();
        assert_eq!(
            bank[0].options,
            vec![
                ChoiceOption::new("A", "正确"),
                ChoiceOption::new("B", "错误"),
            ]
        );
    }

    #[test]
    fn test_explicit_judgment_options_kept() {
        let temp_dir = tempfile::tempdir().unwrap();
        let json = r#"[
            {
                "id": "j2",
                "type": "JUDGMENT",
                "question": "判断。",
                "options": ["A、对", "B、不对"],
                "correctAnswer": "A",
                "category": "范围"
            }
        ]"#;
        let path = write_file(temp_dir.path(), "judgment.json", json);

        let bank = load_bank_file(&path).unwrap();
        assert_eq!(bank[0].options[0], ChoiceOption::new("A", "对"));
    }

    #[test]
    fn test_load_bank_concatenates_in_sorted_file_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(temp_dir.path(), "b_judgment.json", JUDGMENT_JSON);
        write_file(temp_dir.path(), "a_choice.json", CHOICE_JSON);
        write_file(temp_dir.path(), "notes.txt", "ignored");

        let bank = load_bank(temp_dir.path()).unwrap();
        let ids: Vec<&str> = bank.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "j1"]);
    }

    #[test]
    fn test_missing_directory_yields_empty_bank() {
        let bank = load_bank(Path::new("/nonexistent/pm-quiz-bank")).unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_file(temp_dir.path(), "bad.json", "{not an array");
        let err = load_bank_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
