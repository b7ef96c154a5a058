//! Turns raw model output into clean recipe item lines.
//!
//! Model responses are loosely structured: markdown bullets, numbered
//! steps, section headings and filler sentences all show up in practice.
//! `extract_items` cleans one block of text into item lines;
//! `split_sections` divides a full response into ingredients and steps.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading markers stripped from item lines. Markers can stack
/// (`- 1. item`), so cleanup loops until the line is stable.
static MARKER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^[-*•‣◦]\s+",
        r"^\d+\.\s+",
        r"^\(\d+\)\s+",
        r"^#+\s+",
        r"^[☐✅❌]\s*",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid marker pattern"))
    .collect()
});

/// Inline section label glued to an item, e.g. `**Ingredients:** 2 cups
/// flour`. The label is dropped and the item kept.
static INLINE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[*_`~]*(?:ingredients?|instructions?|directions?|steps?)[*_`~]*:[*_`~]*\s+")
        .expect("Invalid label pattern")
});

/// Section labels and filler lines that are never items themselves.
const BANNED_TOKENS: &[&str] = &[
    "sure!",
    "here's",
    "here is",
    "recipe:",
    "ingredients",
    "ingredient",
    "instructions",
    "instruction",
    "directions",
    "direction",
    "steps",
    "step",
];

/// Markdown emphasis and stray punctuation trimmed from line ends.
const EMPHASIS_TRIM: &str = "*_`~:;\u{2014}- ";

/// Wider punctuation set used when normalizing a line for the
/// banned-token check.
const LABEL_TRIM: &str = " :*-_`~!()[]{}.,\"'\t";

/// Extract cleaned item lines from a block of text.
///
/// Lines are trimmed, leading list markers and inline section labels are
/// stripped, emphasis characters are removed from both ends, and lines
/// that are section headings or filler (`Ingredients`, `Here's your
/// recipe:`) are discarded. Order of surviving lines is preserved and no
/// returned item is empty.
pub fn extract_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(clean_line)
        .filter(|line| !line.is_empty() && !is_section_label(line))
        .collect()
}

/// Split a full model response into ingredient lines and step lines.
///
/// The canonical response format puts ingredients first, then a line
/// containing exactly `---`, then steps. When the delimiter is missing,
/// an `Instructions`/`Directions` heading line is used as the boundary
/// instead; with neither cue the whole text parses as a single
/// ingredient list and steps come back empty. The delimiter always wins
/// over the heading heuristic.
pub fn split_sections(text: &str) -> (Vec<String>, Vec<String>) {
    let normalized = text.replace("\r\n", "\n");
    let parts: Vec<&str> = normalized.split("\n---\n").collect();

    let (ingredients_block, steps_block) = if parts.len() >= 2 {
        (parts[0].to_string(), parts[1..].join("\n"))
    } else {
        let lines: Vec<&str> = normalized.lines().collect();
        let heading = lines.iter().position(|line| {
            let trimmed = line.trim().to_lowercase();
            trimmed.starts_with("instruction") || trimmed.starts_with("direction")
        });
        match heading {
            Some(index) => (lines[..index].join("\n"), lines[index..].join("\n")),
            None => return (extract_items(&normalized), Vec::new()),
        }
    };

    (extract_items(&ingredients_block), extract_items(&steps_block))
}

/// Strip markers, inline labels and emphasis until the line stops
/// changing. Running to a fixpoint keeps cleanup idempotent: cleaning an
/// already-clean line is a no-op.
fn clean_line(line: &str) -> String {
    let mut current = line.trim().to_string();
    loop {
        let mut next = current.clone();
        for pattern in MARKER_PATTERNS.iter() {
            next = pattern.replace(&next, "").into_owned();
        }
        next = INLINE_LABEL.replace(&next, "").into_owned();
        next = next
            .trim_matches(|c: char| EMPHASIS_TRIM.contains(c) || c.is_whitespace())
            .to_string();
        if next == current {
            return next;
        }
        current = next;
    }
}

fn is_section_label(line: &str) -> bool {
    let lower = line.to_lowercase();
    let normalized = lower.trim_matches(|c: char| LABEL_TRIM.contains(c) || c.is_whitespace());
    BANNED_TOKENS.iter().any(|token| normalized.starts_with(token))
}
