//! Core study-assistant library shared by the backend application.
//!
//! Provides:
//! - Parser turning generated flashcard text into structured records
//! - Outline builder turning summary text into a heading/topic/subtopic tree
//! - Lenient answer matching for quiz grading
//! - Prompt builders and generation orchestration (retry on under-production)
//! - Slide deck planning for the presentation exporter
//! - A Pomodoro timer widget

pub mod error;
pub mod generate;
pub mod matching;
pub mod outline;
pub mod parser;
pub mod pomodoro;
pub mod prompts;
pub mod slides;
pub mod types;

pub use error::{GenerateError, OutlineError};
pub use generate::{
    answer_question, generate_flashcards, generate_summary, TextGenerator,
    DEFAULT_GENERATION_ATTEMPTS,
};
pub use matching::{
    check_answer, is_similar, sequence_ratio, MatchResult, MatchRule,
    DEFAULT_SIMILARITY_THRESHOLD,
};
pub use outline::build_outline;
pub use parser::parse_flashcards;
pub use pomodoro::{Phase, Pomodoro};
pub use slides::{flashcard_deck, parse_slide_content, plan_deck, Slide, SlideContent, SlideDeck};
pub use types::{Flashcard, Outline, OutlineNode};
