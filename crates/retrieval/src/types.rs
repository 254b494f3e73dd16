//! Retrieval type definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Normalized token → occurrence count, for one paragraph or one query.
pub type TermFrequencyMap = HashMap<String, u32>;

/// Token → frequency for a processed question.
///
/// Must be built with the same normalization policy as the corpus index it
/// is ranked against; a mismatch is not detected and only lowers scores.
pub type QueryVector = HashMap<String, u32>;

/// A paragraph with its ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedParagraph {
    /// Ordinal position of the paragraph in the corpus
    pub index: usize,

    /// Cosine similarity against the query
    pub score: f64,
}

/// A candidate sentence with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    pub text: String,
    pub score: f64,
}

/// Expected answer type, produced by question processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerType {
    Person,
    Location,
    Organization,
    Date,
    #[serde(rename = "NN")]
    Nn,
    #[serde(rename = "NNP")]
    Nnp,
    Definition,
    Quantity,
    LinearMeasure,
    Full,
    #[serde(rename = "YESNO")]
    YesNo,
}

impl AnswerType {
    /// Tag used on the wire and in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Location => "LOCATION",
            Self::Organization => "ORGANIZATION",
            Self::Date => "DATE",
            Self::Nn => "NN",
            Self::Nnp => "NNP",
            Self::Definition => "DEFINITION",
            Self::Quantity => "QUANTITY",
            Self::LinearMeasure => "LINEAR_MEASURE",
            Self::Full => "FULL",
            Self::YesNo => "YESNO",
        }
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerType {
    type Err = std::convert::Infallible;

    /// Unrecognized tags map to `Full`, which answers with the top sentence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "PERSON" => Self::Person,
            "LOCATION" => Self::Location,
            "ORGANIZATION" => Self::Organization,
            "DATE" => Self::Date,
            "NN" => Self::Nn,
            "NNP" => Self::Nnp,
            "DEFINITION" => Self::Definition,
            "QUANTITY" => Self::Quantity,
            "LINEAR_MEASURE" => Self::LinearMeasure,
            "YESNO" => Self::YesNo,
            _ => Self::Full,
        })
    }
}

/// Coarse question type derived from wh-word POS tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    /// who, what, whom
    #[serde(rename = "WP")]
    Wp,
    /// which, what (determiner use)
    #[serde(rename = "WDT")]
    Wdt,
    /// whose
    #[serde(rename = "WP$")]
    WpPossessive,
    /// where, when, why, how
    #[serde(rename = "WRB")]
    Wrb,
    /// More than one wh-word
    Complex,
    /// No wh-word
    None,
}

impl QuestionType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "WP" => Some(Self::Wp),
            "WDT" => Some(Self::Wdt),
            "WP$" => Some(Self::WpPossessive),
            "WRB" => Some(Self::Wrb),
            _ => None,
        }
    }
}

/// A question ready to be answered: text, routing and query vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedQuestion {
    /// Question text; definition questions are rewritten ("What Python is")
    pub question: String,

    pub question_type: QuestionType,

    /// Tokens kept for retrieval (wh-words dropped, synonyms appended)
    pub search_query: Vec<String>,

    pub query_vector: QueryVector,

    pub answer_type: AnswerType,
}
