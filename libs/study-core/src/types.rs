//! Core types for the study assistant.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A question/answer/explanation triple used for self-quizzing.
///
/// Produced by parsing generated text. The parser accepts units with empty
/// fields; callers filter with [`Flashcard::is_complete`] before display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub explanation: String,
}

impl Flashcard {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Whether all three fields carry text. An empty question or answer is
    /// useless for quizzing even though it parses.
    pub fn is_complete(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty() && !self.explanation.is_empty()
    }
}

/// A heading's content within an outline: ordered topic lines (key/value-like
/// statements containing a colon) and ordered subtopic lines (bullet points
/// with their markers stripped).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub topics: Vec<String>,
    pub subtopics: Vec<String>,
}

/// Headings mapped to their content, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    nodes: IndexMap<String, OutlineNode>,
}

impl Outline {
    pub(crate) fn from_nodes(nodes: IndexMap<String, OutlineNode>) -> Self {
        Self { nodes }
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, heading: &str) -> Option<&OutlineNode> {
        self.nodes.get(heading)
    }

    /// Headings with their nodes, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutlineNode)> + '_ {
        self.nodes.iter().map(|(heading, node)| (heading.as_str(), node))
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    /// How many slides a deck built from this outline will contain: per
    /// heading, one overview slide, one slide per topic, and one grouped
    /// subtopic slide when the heading has any subtopics. Callers use this
    /// for progress reporting.
    pub fn estimated_slide_count(&self) -> usize {
        self.nodes
            .values()
            .map(|node| 1 + node.topics.len() + usize::from(!node.subtopics.is_empty()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_flashcard() {
        let card = Flashcard::new("What is Rust?", "A language.", "Systems programming.");
        assert!(card.is_complete());
    }

    #[test]
    fn incomplete_flashcard() {
        assert!(!Flashcard::new("", "A", "E").is_complete());
        assert!(!Flashcard::new("Q", "", "E").is_complete());
        assert!(!Flashcard::new("Q", "A", "").is_complete());
    }

    #[test]
    fn empty_outline_has_no_slides() {
        let outline = Outline::default();
        assert!(outline.is_empty());
        assert_eq!(outline.estimated_slide_count(), 0);
    }
}
