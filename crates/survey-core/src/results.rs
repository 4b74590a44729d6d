//! Results aggregation
//!
//! Turns a question's raw answer rows into a label → count distribution.
//! Buckets follow scale order ("Strongly Disagree" first), with
//! "No Response" last for any stored value outside 1..=5. Buckets with no
//! answers are omitted, so an empty answer set gives an empty distribution.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::model::likert::NO_RESPONSE_LABEL;
use crate::model::{Answer, LikertValue, Question, Survey};

/// Grouping key for one answer value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResponseBucket {
    Scale(LikertValue),
    NoResponse,
}

impl ResponseBucket {
    pub fn for_value(value: i64) -> Self {
        LikertValue::try_from(value)
            .map(ResponseBucket::Scale)
            .unwrap_or(ResponseBucket::NoResponse)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResponseBucket::Scale(v) => v.label(),
            ResponseBucket::NoResponse => NO_RESPONSE_LABEL,
        }
    }
}

/// Ordered label → count mapping for one question
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    counts: BTreeMap<ResponseBucket, u64>,
}

impl Distribution {
    /// Count raw stored values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut counts = BTreeMap::new();
        for value in values {
            *counts.entry(ResponseBucket::for_value(value)).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of non-empty buckets
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Total answers counted
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, bucket: ResponseBucket) -> u64 {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Count by display label; unknown labels count zero
    pub fn count_label(&self, label: &str) -> u64 {
        self.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, n)| n)
            .unwrap_or(0)
    }

    /// `(label, count)` pairs in scale order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counts.iter().map(|(bucket, n)| (bucket.label(), *n))
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|(label, _)| label).collect()
    }

    /// One `"<label>: <count>"` line per bucket
    pub fn to_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(label, n)| format!("{}: {}", label, n))
            .collect()
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (label, n) in self.iter() {
            map.serialize_entry(label, &n)?;
        }
        map.end()
    }
}

/// Aggregate all answers for one question
pub fn aggregate_answers(answers: &[Answer]) -> Distribution {
    Distribution::from_values(answers.iter().map(|a| a.answer_value))
}

/// One question with its aggregated answers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionResult {
    pub question: Question,
    pub distribution: Distribution,
}

impl QuestionResult {
    pub fn new(question: Question, answers: &[Answer]) -> Self {
        Self {
            question,
            distribution: aggregate_answers(answers),
        }
    }
}

/// Results for every question of a survey, in question order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyResults {
    pub survey: Survey,
    pub questions: Vec<QuestionResult>,
}

impl SurveyResults {
    /// Total answers across all questions
    pub fn total_answers(&self) -> u64 {
        self.questions.iter().map(|q| q.distribution.total()).sum()
    }

    /// Plain-text report: survey header, then each question and its lines
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.survey.title, self.survey.description);
        for result in &self.questions {
            out.push('\n');
            out.push_str(&result.question.text);
            out.push('\n');
            if result.distribution.is_empty() {
                out.push_str("  (no answers yet)\n");
            }
            for line in result.distribution.to_lines() {
                out.push_str("  ");
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[i64]) -> Vec<Answer> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Answer::new(i as i64 + 1, 1, 1, *v))
            .collect()
    }

    #[test]
    fn test_mixed_answers() {
        let dist = aggregate_answers(&answers(&[3, 3, 5, 1, 3]));

        let pairs: Vec<_> = dist.iter().collect();
        assert_eq!(
            pairs,
            vec![("Strongly Disagree", 1), ("Neutral", 3), ("Strongly Agree", 1)]
        );
        assert_eq!(dist.count_label("Disagree"), 0);
        assert_eq!(dist.count_label("Agree"), 0);
    }

    #[test]
    fn test_empty_input() {
        let dist = aggregate_answers(&[]);
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0);
        assert!(dist.to_lines().is_empty());
    }

    #[test]
    fn test_off_scale_values_are_no_response_and_last() {
        let dist = Distribution::from_values([0, 5, 7, 2]);

        assert_eq!(
            dist.labels(),
            vec!["Disagree", "Strongly Agree", NO_RESPONSE_LABEL]
        );
        assert_eq!(dist.count(ResponseBucket::NoResponse), 2);
    }

    #[test]
    fn test_to_lines_format() {
        let dist = Distribution::from_values([4, 4]);
        assert_eq!(dist.to_lines(), vec!["Agree: 2".to_string()]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let dist = Distribution::from_values([5, 1, 1]);
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"Strongly Disagree":2,"Strongly Agree":1}"#);
    }

    #[test]
    fn test_render_text_marks_unanswered_questions() {
        let results = SurveyResults {
            survey: Survey::new(1, "Lunch", "Cafeteria feedback"),
            questions: vec![
                QuestionResult::new(Question::new(1, 1, "Food was hot"), &answers(&[4])),
                QuestionResult::new(Question::new(2, 1, "Staff were friendly"), &[]),
            ],
        };

        let text = results.render_text();
        assert!(text.contains("Food was hot\n  Agree: 1"));
        assert!(text.contains("Staff were friendly\n  (no answers yet)"));
        assert_eq!(results.total_answers(), 1);
    }
}
