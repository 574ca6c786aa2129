//! In-memory QA transcript
//!
//! The transcript is append-only: turns are never edited or removed within
//! a session, and a failed ask appends a visible failure turn instead of
//! dropping the exchange. Nothing is persisted across sessions.

use crate::api::qa::SourcePassage;
use chrono::{DateTime, Utc};

/// One transcript entry
#[derive(Debug, Clone)]
pub enum Turn {
    /// A question the user asked
    Question { text: String, at: DateTime<Utc> },
    /// A backend answer with citations
    Answer {
        /// Markdown answer text
        text: String,
        sources: Vec<SourcePassage>,
        confidence: f32,
        model: String,
        at: DateTime<Utc>,
    },
    /// A failed ask, kept visible in place of the missing answer
    Failure { message: String, at: DateTime<Utc> },
}

/// Append-only list of QA turns
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push_question(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::Question {
            text: text.into(),
            at: Utc::now(),
        });
    }

    pub fn push_answer(&mut self, answer: &crate::api::qa::Answer) {
        self.turns.push(Turn::Answer {
            text: answer.answer.clone(),
            sources: answer.sources.clone(),
            confidence: answer.confidence,
            model: answer.model.clone(),
            at: Utc::now(),
        });
    }

    pub fn push_failure(&mut self, message: impl Into<String>) {
        self.turns.push(Turn::Failure {
            message: message.into(),
            at: Utc::now(),
        });
    }
}

/// Confidence display bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,   // >= 0.8, green
    Good,   // >= 0.6, blue
    Fair,   // >= 0.4, orange
    Low,    // below, red
}

impl ConfidenceBand {
    pub fn of(confidence: f32) -> Self {
        if confidence >= 0.8 {
            Self::High
        } else if confidence >= 0.6 {
            Self::Good
        } else if confidence >= 0.4 {
            Self::Fair
        } else {
            Self::Low
        }
    }
}
