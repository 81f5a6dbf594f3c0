use serde::Deserialize;
use serde_json::Value;

use super::{GenerationError, QuestionBatch};
use crate::models::GeneratedQuestion;

#[derive(Deserialize)]
struct Envelope {
    questions: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    question_type: Option<String>,
}

/// Parses a 2xx body into canonical question records.
///
/// A body without a `questions` array is malformed. Entries without
/// non-empty `question` and `answer` strings are dropped and counted in
/// [`QuestionBatch::rejected`].
pub fn normalize(body: &[u8]) -> Result<QuestionBatch, GenerationError> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("generation response is not a question envelope: {e}");
        GenerationError::Malformed
    })?;

    let total = envelope.questions.len();
    let questions: Vec<_> = envelope.questions.into_iter().filter_map(record).collect();
    let rejected = total - questions.len();
    if rejected > 0 {
        tracing::warn!("dropped {rejected} of {total} generated questions without text");
    }

    Ok(QuestionBatch {
        questions,
        rejected,
    })
}

fn record(entry: Value) -> Option<GeneratedQuestion> {
    let raw: RawQuestion = serde_json::from_value(entry).ok()?;
    Some(GeneratedQuestion {
        question: non_empty(raw.question)?,
        answer: non_empty(raw.answer)?,
        context: non_empty(raw.context),
        question_type: non_empty(raw.question_type),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_entries_keep_order_and_fields() {
        let body = br#"{"questions":[
            {"question":"Q1","answer":"A1"},
            {"question":"Q2","answer":"A2","context":"ctx","questionType":"mcq"}
        ]}"#;

        let batch = normalize(body).unwrap();

        assert_eq!(batch.rejected, 0);
        assert_eq!(batch.questions.len(), 2);
        assert_eq!(batch.questions[0].question, "Q1");
        assert_eq!(batch.questions[0].context, None);
        assert_eq!(batch.questions[1].context.as_deref(), Some("ctx"));
        assert_eq!(batch.questions[1].question_type.as_deref(), Some("mcq"));
    }

    #[test]
    fn entries_missing_text_are_rejected_not_filled() {
        let body = br#"{"questions":[
            {"question":"Q1","answer":""},
            {"answer":"A2"},
            {"question":"  ","answer":"A3"},
            "not an object",
            {"question":7,"answer":"A5"},
            {"question":"Q6","answer":"A6","context":""}
        ]}"#;

        let batch = normalize(body).unwrap();

        assert_eq!(batch.rejected, 5);
        assert_eq!(batch.questions.len(), 1);
        assert_eq!(batch.questions[0].question, "Q6");
        assert_eq!(batch.questions[0].context, None);
    }

    #[test]
    fn empty_array_is_an_empty_batch() {
        let batch = normalize(br#"{"questions":[]}"#).unwrap();
        assert_eq!(batch, QuestionBatch::default());
    }

    #[test]
    fn missing_or_non_array_questions_is_malformed() {
        let bodies: [&[u8]; 4] = [
            br#"{"error":"Error reading the PDF file"}"#,
            br#"{"questions":"none"}"#,
            br#"[]"#,
            b"plain text",
        ];
        for body in bodies {
            assert!(matches!(normalize(body), Err(GenerationError::Malformed)));
        }
    }
}
