//! Slide deck planning.
//!
//! Produces a structured, serializable deck plan from an outline or a batch
//! of flashcards. Rendering the plan into a presentation file is the
//! exporter's job, not ours.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::generate::TextGenerator;
use crate::prompts;
use crate::types::{Flashcard, Outline};

/// Bullet points and keywords generated for a single topic slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    pub bullets: Vec<String>,
    pub keywords: Vec<String>,
}

/// One planned slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slide {
    /// Title slide opening a heading's section.
    Overview { heading: String },
    /// A topic line with its generated bullets and keywords.
    Topic {
        title: String,
        bullets: Vec<String>,
        keywords: Vec<String>,
    },
    /// All of a heading's subtopics grouped on one slide.
    Subtopics { heading: String, items: Vec<String> },
    /// A flashcard rendered as a slide.
    Card {
        question: String,
        answer: String,
        explanation: String,
    },
}

/// An ordered slide plan ready for an exporter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    pub slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Parse generated slide content of the form
/// `Bullets:\n- point\n...\nKeywords: a, b, c`.
///
/// Total: a missing marker yields the corresponding empty list rather than
/// an error.
pub fn parse_slide_content(raw: &str) -> SlideContent {
    let Some((_, after_bullets)) = raw.split_once("Bullets:") else {
        return SlideContent::default();
    };

    let (bullet_text, keyword_text) = match after_bullets.split_once("Keywords:") {
        Some((bullets, keywords)) => (bullets, Some(keywords)),
        None => (after_bullets, None),
    };

    let bullets = bullet_text
        .lines()
        .map(|line| line.trim_matches(|c: char| c == '-' || c == '•' || c == '*' || c.is_whitespace()))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let keywords = keyword_text
        .map(|text| {
            text.split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    SlideContent { bullets, keywords }
}

/// Turn complete flashcards into a card-per-slide deck.
pub fn flashcard_deck(cards: &[Flashcard]) -> SlideDeck {
    let slides = cards
        .iter()
        .filter(|card| card.is_complete())
        .map(|card| Slide::Card {
            question: card.question.clone(),
            answer: card.answer.clone(),
            explanation: card.explanation.clone(),
        })
        .collect();

    SlideDeck { slides }
}

/// Plan a deck from an outline: per heading an overview slide, a slide per
/// topic with generated bullets and keywords, and one grouped subtopic slide
/// when the heading has subtopics.
///
/// `progress` is invoked after each planned slide with (done, total), where
/// total is [`Outline::estimated_slide_count`]. Generation failures
/// propagate and abandon the partial plan.
pub async fn plan_deck(
    generator: &dyn TextGenerator,
    outline: &Outline,
    mut progress: Option<&mut (dyn FnMut(usize, usize) + Send)>,
) -> Result<SlideDeck, GenerateError> {
    let total = outline.estimated_slide_count();
    let mut done = 0;
    let mut report = |done: usize| {
        if let Some(callback) = progress.as_deref_mut() {
            callback(done, total);
        }
    };

    let mut slides = Vec::with_capacity(total);

    for (heading, node) in outline.iter() {
        slides.push(Slide::Overview {
            heading: heading.to_string(),
        });
        done += 1;
        report(done);

        for topic in &node.topics {
            let raw = generator
                .generate(&prompts::slide_content_prompt(topic))
                .await?;
            let content = parse_slide_content(&raw);
            slides.push(Slide::Topic {
                title: topic.clone(),
                bullets: content.bullets,
                keywords: content.keywords,
            });
            done += 1;
            report(done);
        }

        if !node.subtopics.is_empty() {
            slides.push(Slide::Subtopics {
                heading: heading.to_string(),
                items: node.subtopics.clone(),
            });
            done += 1;
            report(done);
        }
    }

    Ok(SlideDeck { slides })
}
