//! Outline builder for topic-sectioned summaries.
//!
//! # Format
//! ```text
//! Photosynthesis
//! Inputs: light, water, CO2
//! - happens in chloroplasts
//! Cell Respiration
//! Output: ATP
//! ```
//! A line with no bullet marker and no colon starts a heading; a line
//! containing a colon is a topic of the current heading; anything else is a
//! subtopic with its bullet marker stripped.

use indexmap::IndexMap;

use crate::error::OutlineError;
use crate::types::{Outline, OutlineNode};

/// Build an outline from summary text.
///
/// Lines are trimmed and empty lines skipped; ordering of headings, topics,
/// and subtopics follows the input. A topic or subtopic line appearing before
/// any heading has no owner and is rejected, as is a repeated heading.
/// Deterministic and stateless: identical input yields identical output.
pub fn build_outline(summary_text: &str) -> Result<Outline, OutlineError> {
    let mut builder = OutlineBuilder::new();

    for (idx, raw_line) in summary_text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        builder.process_line(line, idx + 1)?;
    }

    Ok(builder.finish())
}

enum LineKind<'a> {
    Heading(&'a str),
    Topic(&'a str),
    Subtopic(&'a str),
}

fn classify(line: &str) -> LineKind<'_> {
    let bulleted = line.starts_with('-') || line.starts_with('*');
    if !bulleted && !line.contains(':') {
        LineKind::Heading(line)
    } else if line.contains(':') {
        LineKind::Topic(line)
    } else {
        LineKind::Subtopic(line)
    }
}

struct OutlineBuilder {
    nodes: IndexMap<String, OutlineNode>,
    current: Option<(String, OutlineNode)>,
}

impl OutlineBuilder {
    fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            current: None,
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<(), OutlineError> {
        match classify(line) {
            LineKind::Heading(heading) => self.start_heading(heading, line_num),
            LineKind::Topic(topic) => {
                self.node_mut(line, line_num)?.topics.push(topic.to_string());
                Ok(())
            }
            LineKind::Subtopic(subtopic) => {
                let stripped = strip_bullet(subtopic);
                self.node_mut(line, line_num)?.subtopics.push(stripped);
                Ok(())
            }
        }
    }

    fn start_heading(&mut self, heading: &str, line_num: usize) -> Result<(), OutlineError> {
        self.flush();
        if self.nodes.contains_key(heading) {
            return Err(OutlineError::DuplicateHeading {
                heading: heading.to_string(),
                line: line_num,
            });
        }
        self.current = Some((heading.to_string(), OutlineNode::default()));
        Ok(())
    }

    fn node_mut(&mut self, line: &str, line_num: usize) -> Result<&mut OutlineNode, OutlineError> {
        match self.current {
            Some((_, ref mut node)) => Ok(node),
            None => Err(OutlineError::UnattributedLine {
                line: line_num,
                content: line.to_string(),
            }),
        }
    }

    fn flush(&mut self) {
        // Duplicates were rejected in start_heading, so this never overwrites.
        if let Some((heading, node)) = self.current.take() {
            self.nodes.insert(heading, node);
        }
    }

    fn finish(mut self) -> Outline {
        self.flush();
        Outline::from_nodes(self.nodes)
    }
}

fn strip_bullet(line: &str) -> String {
    line.trim_matches(|c: char| c == '-' || c == '•' || c == '*' || c.is_whitespace())
        .to_string()
}
