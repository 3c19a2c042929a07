//! Prompt builders for the text generator.
//!
//! The flashcard and slide-content prompts pin down the output format that
//! [`crate::parser`] and [`crate::slides`] parse; changing a marker here
//! breaks the corresponding pattern there.

/// Prompt for generating `count` flashcards from a summary.
pub fn flashcard_prompt(summary: &str, count: usize) -> String {
    format!(
        "You are a flashcard generator. From the summary below:\n\
         \n\
         {summary}\n\
         \n\
         Create exactly {count} well-formed flashcards using this format:\n\
         \n\
         ---\n\
         Q: <One-line question>\n\
         A: <One-line answer>\n\
         Explanation: <Brief explanation>\n\
         \n\
         ---\n\
         \n\
         Important rules:\n\
         - DO NOT include any extra explanation outside the format.\n\
         - DO NOT add introduction or closing remarks.\n\
         - FOLLOW the format strictly.\n"
    )
}

/// Prompt for a topic-sectioned summary of a document.
pub fn summary_prompt(document_text: &str) -> String {
    format!(
        "You are a helpful assistant. Given the following document text, \
         divide it into topics based on headings or logical sections, and \
         generate a short bullet point summary for each topic:\n\
         \n\
         Document:\n\
         {document_text}\n\
         \n\
         Summarized by topics:\n"
    )
}

/// Prompt for answering a free-form question about a document.
pub fn question_prompt(question: &str, context: &str) -> String {
    format!(
        "Based on the following context from the uploaded document, answer \
         the user's question expressively:\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         Question: {question}\n\
         \n\
         Answer:\n"
    )
}

/// Prompt for the bullet points and keywords of a single topic slide.
pub fn slide_content_prompt(topic: &str) -> String {
    format!(
        "You are an academic assistant preparing a presentation.\n\
         \n\
         Topic: {topic}\n\
         \n\
         Provide:\n\
         1. 3 concise bullet points explaining the topic clearly for students.\n\
         \x20  (Make it simple and memorable like quick-glance notes.)\n\
         \n\
         2. A list of 4-5 important keywords.\n\
         \n\
         Format:\n\
         Bullets:\n\
         - point 1\n\
         - point 2\n\
         ...\n\
         \n\
         Keywords: keyword1, keyword2, ...\n"
    )
}
