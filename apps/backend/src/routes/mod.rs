pub mod ask;
pub mod flashcards;
pub mod quiz;
pub mod slides;
pub mod summary;
