//! Container checklist: its fixed questions and the answers-or-comment content of a response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::validation::{is_blank, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// Answered with `sim` or `nao`.
    YesNo,
    Number,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: QuestionKind,
}

pub const CONTAINER_QUESTIONS: [Question; 10] = [
    Question {
        id: "q1",
        label: "Equipamento está funcionando corretamente?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: "q2",
        label: "Há sinais de vazamento?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: "q3",
        label: "Temperatura interna (°C)",
        kind: QuestionKind::Number,
    },
    Question {
        id: "q4",
        label: "Umidade interna (%)",
        kind: QuestionKind::Number,
    },
    Question {
        id: "q5",
        label: "Porta está selando corretamente?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: "q6",
        label: "Ruídos anormais detectados?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: "q7",
        label: "Limpeza está em dia?",
        kind: QuestionKind::YesNo,
    },
    Question {
        id: "q8",
        label: "Nível de combustível/energia",
        kind: QuestionKind::Text,
    },
    Question {
        id: "q9",
        label: "Observações do técnico",
        kind: QuestionKind::Text,
    },
    Question {
        id: "q10",
        label: "Checklist adicional (se houver)",
        kind: QuestionKind::Text,
    },
];

impl Question {
    /// Checks a trimmed, non-blank answer against the question kind.
    fn accepts(&self, answer: &str) -> bool {
        match self.kind {
            QuestionKind::YesNo => matches!(answer, YES | NO),
            QuestionKind::Number => answer.parse::<f64>().is_ok_and(f64::is_finite),
            QuestionKind::Text => true,
        }
    }
}

/// Stored value of a "Sim" answer.
pub const YES: &str = "sim";
/// Stored value of a "Não" answer.
pub const NO: &str = "nao";

fn find_question(id: &str) -> Option<&'static Question> {
    CONTAINER_QUESTIONS.iter().find(|q| q.id == id)
}

/// Label for a stored question id, falling back to `Pergunta (<id>)` for unknown ids.
pub fn question_label(id: &str) -> String {
    find_question(id)
        .map(|q| q.label.to_string())
        .unwrap_or_else(|| format!("Pergunta ({})", id))
}

/// What a container checklist response carries: answers, or an auditor comment, never both.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ResponseContent {
    /// Question id to answer.
    Answers(BTreeMap<String, String>),
    AuditorComment(String),
}

impl ResponseContent {
    /// Rebuilds the content from the two nullable columns it is stored in.
    ///
    /// Returns `None` when both or neither are present.
    pub fn from_columns(
        answers: Option<BTreeMap<String, String>>,
        auditor_comment: Option<String>,
    ) -> Option<ResponseContent> {
        match (answers, auditor_comment) {
            (Some(answers), None) => Some(ResponseContent::Answers(answers)),
            (None, Some(comment)) => Some(ResponseContent::AuditorComment(comment)),
            _ => None,
        }
    }

    pub fn is_auditor_comment(&self) -> bool {
        matches!(self, ResponseContent::AuditorComment(_))
    }

    /// Drops blank answers and trims the comment, then rejects content with nothing left.
    ///
    /// Answers must use the ids of [`CONTAINER_QUESTIONS`]; yes/no questions take `sim` or
    /// `nao` and number questions a finite decimal.
    pub fn validated(&self) -> Result<ResponseContent, ValidationError> {
        match self {
            ResponseContent::Answers(answers) => {
                let mut kept = BTreeMap::new();

                for (id, answer) in answers {
                    let question = find_question(id)
                        .ok_or_else(|| ValidationError::UnknownQuestion(id.clone()))?;

                    let answer = answer.trim();
                    if answer.is_empty() {
                        continue;
                    }
                    if !question.accepts(answer) {
                        return Err(ValidationError::InvalidAnswer(question.label));
                    }

                    kept.insert(id.clone(), answer.to_string());
                }

                if kept.is_empty() {
                    return Err(ValidationError::EmptyChecklist);
                }

                Ok(ResponseContent::Answers(kept))
            }
            ResponseContent::AuditorComment(comment) => {
                if is_blank(comment) {
                    return Err(ValidationError::EmptyAuditorComment);
                }

                Ok(ResponseContent::AuditorComment(comment.trim().to_string()))
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateFormResponseDto {
    pub container_id: i32,
    pub content: ResponseContent,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FormResponseDto {
    pub id: i32,
    /// `None` once the container has been deleted.
    pub container_id: Option<i32>,
    pub container_name: String,
    pub container_location: Option<String>,
    pub content: ResponseContent,
    pub submitted_by: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
