//! Mock text generator for running without API calls.
//!
//! Returns canned text built from the prompt's `Course Title:` line.

use crate::domain::DomainError;
use crate::ports::TextGenerator;
use std::time::Duration;
use tracing::info;

/// Mock generator for development and tests.
///
/// Simulates network latency with configurable delay.
pub struct MockTextGenerator {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockTextGenerator {
    /// Create a new mock generator with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock generator with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Value of the first `<label>: value` line in the prompt.
fn field<'a>(prompt: &'a str, label: &str) -> Option<&'a str> {
    prompt.lines().find_map(|line| {
        line.strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(':'))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    })
}

#[async_trait::async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(prompt_len = prompt.len(), "[MOCK] Simulating text generation");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let title = field(prompt, "Course Title").unwrap_or("this course");

        // Topic-outline prompts carry a day count; answer with a parseable outline.
        if let Some(days) = field(prompt, "Number of Days").and_then(|d| d.parse::<usize>().ok()) {
            let outline = (1..=days.max(1) * 2)
                .map(|n| {
                    format!(
                        "## Topic {}: {} Module {}\n- Explain the key ideas of module {}\n- Apply module {} in a workplace scenario",
                        n, title, n, n, n
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n");
            return Ok(outline);
        }

        let method = field(prompt, "Instructional Method").or_else(|| field(prompt, "Assessment Method"));
        Ok(match method {
            Some(m) => format!(
                "[MOCK] {} suits {} because it lets participants practise each topic \
                 against realistic workplace tasks.",
                m, title
            ),
            None => format!(
                "[MOCK] This section describes {}. In production, the text generator \
                 drafts it from the course title and topic outline.",
                title
            ),
        })
    }
}
