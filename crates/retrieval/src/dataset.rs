//! Corpus and dataset loading.

use factoid_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Load paragraphs from a text file or a directory of `.txt` files.
///
/// Each non-empty trimmed line is one paragraph. Directory entries are read
/// in sorted path order so paragraph indices are stable across runs.
pub fn load_paragraphs(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Err(AppError::Corpus(format!("Corpus not found: {:?}", path)));
    }

    if path.is_file() {
        return read_paragraphs(path);
    }

    let mut files: Vec<_> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "txt"))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    let mut paragraphs = Vec::new();
    for file in &files {
        paragraphs.extend(read_paragraphs(file)?);
    }

    tracing::info!(
        "Loaded {} paragraphs from {} files under {:?}",
        paragraphs.len(),
        files.len(),
        path
    );
    Ok(paragraphs)
}

fn read_paragraphs(file: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(file)
        .map_err(|e| AppError::Corpus(format!("Failed to read {:?}: {}", file, e)))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// SQuAD-style question-answering dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadDataset {
    pub data: Vec<Topic>,
}

/// One article: its paragraphs and their questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub paragraphs: Vec<SquadParagraph>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadParagraph {
    pub context: String,
    #[serde(default)]
    pub qas: Vec<QuestionAnswers>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswers {
    pub question: String,
    #[serde(default)]
    pub answers: Vec<GoldAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldAnswer {
    pub text: String,
}

impl SquadDataset {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Corpus(format!("Failed to read dataset {:?}: {}", path, e)))?;
        let dataset: Self = serde_json::from_str(&content)?;
        tracing::debug!("Loaded dataset with {} topics from {:?}", dataset.data.len(), path);
        Ok(dataset)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.data.iter().map(|t| t.title.as_str()).collect()
    }

    pub fn topic(&self, title: &str) -> Option<&Topic> {
        self.data.iter().find(|t| t.title == title)
    }

    /// Paragraph contexts of a topic, empty for an unknown title.
    pub fn paragraphs(&self, title: &str) -> Vec<String> {
        self.topic(title).map(Topic::paragraphs).unwrap_or_default()
    }

    /// Questions of a topic, empty for an unknown title.
    pub fn questions(&self, title: &str) -> Vec<&QuestionAnswers> {
        self.topic(title)
            .map(|t| t.questions().collect())
            .unwrap_or_default()
    }
}

impl Topic {
    pub fn paragraphs(&self) -> Vec<String> {
        self.paragraphs.iter().map(|p| p.context.clone()).collect()
    }

    pub fn questions(&self) -> impl Iterator<Item = &QuestionAnswers> {
        self.paragraphs.iter().flat_map(|p| p.qas.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SQUAD: &str = r#"{
        "version": "1.1",
        "data": [
            {
                "title": "Paris",
                "paragraphs": [
                    {
                        "context": "Paris is the capital of France.",
                        "qas": [
                            {
                                "id": "q1",
                                "question": "What is the capital of France?",
                                "answers": [{"answer_start": 0, "text": "Paris"}]
                            }
                        ]
                    },
                    {"context": "The Seine flows through Paris.", "qas": []}
                ]
            },
            {"title": "Empty", "paragraphs": []}
        ]
    }"#;

    #[test]
    fn test_load_paragraphs_from_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("corpus.txt");
        fs::write(&file, "First paragraph.\n\n   \n  Second paragraph.  \n").unwrap();

        let paragraphs = load_paragraphs(&file).unwrap();
        assert_eq!(paragraphs, vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn test_load_paragraphs_from_directory_in_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("b.txt"), "From b.").unwrap();
        fs::write(temp.path().join("a.txt"), "From a.").unwrap();
        fs::write(temp.path().join("nested").join("c.txt"), "From c.").unwrap();
        fs::write(temp.path().join("notes.md"), "Ignored.").unwrap();

        let paragraphs = load_paragraphs(temp.path()).unwrap();
        assert_eq!(paragraphs, vec!["From a.", "From b.", "From c."]);
    }

    #[test]
    fn test_missing_corpus() {
        let temp = TempDir::new().unwrap();
        let result = load_paragraphs(&temp.path().join("missing"));
        assert!(matches!(result, Err(AppError::Corpus(_))));
    }

    #[test]
    fn test_squad_dataset() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dev.json");
        fs::write(&path, SQUAD).unwrap();

        let dataset = SquadDataset::load(&path).unwrap();
        assert_eq!(dataset.titles(), vec!["Paris", "Empty"]);
        assert_eq!(dataset.paragraphs("Paris").len(), 2);

        let questions = dataset.questions("Paris");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answers[0].text, "Paris");

        assert!(dataset.questions("Empty").is_empty());
        assert!(dataset.paragraphs("Unknown").is_empty());
    }

    #[test]
    fn test_malformed_dataset() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{\"data\": 3}").unwrap();

        assert!(matches!(
            SquadDataset::load(&path),
            Err(AppError::Serialization(_))
        ));
    }
}
