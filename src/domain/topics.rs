//! Course topics parsed from the free-text topic outline.
//!
//! The outline is Markdown: each `## Topic <n>: <name>` heading opens a topic
//! and the `- ` bullets under it are its learning outcomes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// 1-based position in the outline.
    pub number: usize,
    pub name: String,
    /// Bullet text under the heading, one outcome per line.
    pub learning_outcome: String,
}

impl Topic {
    pub fn new(number: usize, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            learning_outcome: String::new(),
        }
    }
}

/// Returns the topic name if `line` is a `## Topic <n>: <name>` heading.
fn heading_name(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix("##")?.trim_start();
    let keyword = rest.get(..5)?;
    if !keyword.eq_ignore_ascii_case("topic") {
        return None;
    }
    let rest = rest[5..].trim_start();
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let name = rest[digits..].strip_prefix(':')?.trim();
    (!name.is_empty()).then_some(name)
}

fn bullet_text(line: &str) -> Option<&str> {
    let t = line.trim();
    t.strip_prefix("- ")
        .or_else(|| t.strip_prefix("* "))
        .or_else(|| t.strip_prefix('\u{2022}'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parse topics in outline order. Lines outside a topic are ignored.
pub fn parse_topics(markdown: &str) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::new();
    let mut outcomes: Vec<&str> = Vec::new();
    let mut in_topic = false;

    for line in markdown.lines() {
        if let Some(name) = heading_name(line) {
            if let Some(last) = topics.last_mut() {
                last.learning_outcome = outcomes.join("\n");
            }
            outcomes.clear();
            topics.push(Topic::new(topics.len() + 1, name));
            in_topic = true;
        } else if line.trim_start().starts_with('#') {
            // Any other heading closes the current topic.
            in_topic = false;
        } else if in_topic {
            if let Some(text) = bullet_text(line) {
                outcomes.push(text);
            }
        }
    }
    if let Some(last) = topics.last_mut() {
        last.learning_outcome = outcomes.join("\n");
    }
    topics
}

/// Parsed topics, or `Topic 1..=fallback_count` placeholders when the outline
/// has no topic headings.
pub fn topics_or_placeholders(markdown: &str, fallback_count: usize) -> Vec<Topic> {
    let parsed = parse_topics(markdown);
    if !parsed.is_empty() {
        return parsed;
    }
    (1..=fallback_count)
        .map(|n| Topic::new(n, format!("Topic {}", n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTLINE: &str = "\
## Topic 1: Strategic Marketing Principles
- Explain core marketing frameworks and models
- Identify target market segments

## Topic 2:   Consumer Behaviour Analysis
- Describe consumer decision-making processes

### Notes
- not an outcome
";

    #[test]
    fn test_parse_topics() {
        let topics = parse_topics(OUTLINE);
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].number, 1);
        assert_eq!(topics[0].name, "Strategic Marketing Principles");
        assert_eq!(
            topics[0].learning_outcome,
            "Explain core marketing frameworks and models\nIdentify target market segments"
        );
        assert_eq!(topics[1].name, "Consumer Behaviour Analysis");
        assert_eq!(
            topics[1].learning_outcome,
            "Describe consumer decision-making processes"
        );
    }

    #[test]
    fn test_heading_variants() {
        assert_eq!(heading_name("##Topic 3: X"), Some("X"));
        assert_eq!(heading_name("## topic 12 : Y"), None);
        assert_eq!(heading_name("## Topic: Z"), None);
        assert_eq!(heading_name("### Topic 1: Deep"), None);
        assert_eq!(heading_name("## Topic 1:"), None);
    }

    #[test]
    fn test_numbering_is_positional() {
        let topics = parse_topics("## Topic 5: A\n## Topic 2: B");
        assert_eq!(
            topics.iter().map(|t| t.number).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_placeholders_when_no_headings() {
        let topics = topics_or_placeholders("just some text", 3);
        assert_eq!(
            topics.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["Topic 1", "Topic 2", "Topic 3"]
        );
        assert_eq!(topics_or_placeholders(OUTLINE, 9).len(), 2);
    }
}
