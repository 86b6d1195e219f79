//! Markdown parser for recipe collection documents.
//!
//! # Format
//! ```markdown
//! ### 1. Kimchi Stew (Korean)
//! **Mood:** cozy
//!
//! **Ingredients:**
//! - kimchi
//! - pork
//!
//! **Instructions:**
//! 1. Simmer
//! 2. Serve
//!
//! ---
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{RecipeDraft, IMPORT_SOURCE};

static SECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s+\d+\.\s*(.+)$").unwrap());

static MOOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\*\*Mood:\*\*\s*(.+)$").unwrap());

static ING_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\*\*Ingredients:\*\*\s*$").unwrap());

static INS_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\*\*Instructions:\*\*\s*$").unwrap());

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^-{3,}\s*$").unwrap());

static STEP_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:\d+[.)]\s*|[-•]\s*)").unwrap());

static TRAILING_PAREN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s*\(([^)]+)\)\s*$").unwrap());

/// Parse a recipe collection document into structured drafts.
///
/// Returns one draft per recognized section header, in document order.
/// Never fails: malformed input yields fewer or emptier fields, and text
/// with no headers yields an empty vec.
pub fn parse(text: &str) -> Vec<RecipeDraft> {
    let headers: Vec<(usize, &str)> = SECTION_RE
        .captures_iter(text)
        .map(|caps| {
            let start = caps.get(0).unwrap().start();
            (start, caps.get(1).unwrap().as_str())
        })
        .collect();

    let mut drafts = Vec::with_capacity(headers.len());
    for (i, &(start, raw_title)) in headers.iter().enumerate() {
        // Section span: from this header to the next one, or document end.
        let end = headers.get(i + 1).map_or(text.len(), |&(next, _)| next);
        let chunk = &text[start..end];

        let mood = MOOD_RE.captures(chunk).map(|caps| caps[1].trim().to_string());
        let ingredients = ingredient_lines(chunk);
        let instructions = instruction_lines(chunk);
        let (title, cuisine) = split_title(raw_title);

        drafts.push(RecipeDraft {
            title,
            cuisine,
            mood,
            ingredients: join_nonempty(ingredients),
            instructions: join_nonempty(instructions),
            source: IMPORT_SOURCE.to_string(),
        });
    }

    drafts
}

/// Strip one leading enumeration marker (`1.`, `2)`) or bullet (`-`, `•`)
/// plus following whitespace from an instruction step.
pub fn strip_step_marker(line: &str) -> &str {
    match STEP_MARKER_RE.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}

/// Substring of `chunk` between a block header line and the nearest
/// terminator. The block ends at the minimum offset over all terminators
/// that match, or at chunk end when none do.
fn block_after<'a>(chunk: &'a str, header: &Regex, terminators: &[&Regex]) -> Option<&'a str> {
    let start = header.find(chunk)?.end();
    let end = terminators
        .iter()
        .filter_map(|re| re.find_at(chunk, start))
        .map(|m| m.start())
        .min()
        .unwrap_or(chunk.len());
    Some(&chunk[start..end])
}

fn ingredient_lines(chunk: &str) -> Vec<String> {
    let Some(block) = block_after(chunk, &ING_HEADER_RE, &[&INS_HEADER_RE, &SEPARATOR_RE]) else {
        return Vec::new();
    };
    block
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| matches!(c, '-' | '•' | ' ' | '\t'))
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn instruction_lines(chunk: &str) -> Vec<String> {
    let Some(block) = block_after(chunk, &INS_HEADER_RE, &[&SEPARATOR_RE, &SECTION_RE]) else {
        return Vec::new();
    };
    block
        .lines()
        .map(|line| strip_step_marker(line.trim()))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a trailing parenthetical off the raw title into a cuisine.
/// A parenthetical anywhere else leaves the title untouched.
fn split_title(raw: &str) -> (String, Option<String>) {
    let trimmed = raw.trim();
    match TRAILING_PAREN_RE.captures(trimmed) {
        Some(caps) => (caps[1].trim().to_string(), Some(caps[2].trim().to_string())),
        None => (trimmed.to_string(), None),
    }
}

fn join_nonempty(lines: Vec<String>) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn parse_no_headers() {
        let input = "Just some notes.\n**Mood:** irrelevant\n- not a recipe\n";
        assert!(parse(input).is_empty());
    }

    #[test]
    fn parse_sections_in_document_order() {
        let input = "### 1. Alpha\ntext\n### 2. Beta\n### 3. Gamma\n";
        let drafts = parse(input);
        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts[0].title, "Alpha");
        assert_eq!(drafts[1].title, "Beta");
        assert_eq!(drafts[2].title, "Gamma");
    }

    #[test]
    fn split_trailing_parenthetical_into_cuisine() {
        let drafts = parse("### 1. Mapo Tofu (Chinese-Sichuan Style)\n");
        assert_eq!(drafts[0].title, "Mapo Tofu");
        assert_eq!(drafts[0].cuisine.as_deref(), Some("Chinese-Sichuan Style"));
    }

    #[test]
    fn non_trailing_parenthetical_keeps_title() {
        let drafts = parse("### 1. Tacos (al pastor) deluxe\n");
        assert_eq!(drafts[0].title, "Tacos (al pastor) deluxe");
        assert_eq!(drafts[0].cuisine, None);
    }

    #[test]
    fn empty_title_section_still_produced() {
        let drafts = parse("### 7. (Thai)\n");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "");
        assert_eq!(drafts[0].cuisine.as_deref(), Some("Thai"));
    }

    #[test]
    fn mood_is_first_match_trimmed() {
        let input = "### 1. A\n**Mood:**   fiery and fast  \n**Mood:** second\n";
        let drafts = parse(input);
        assert_eq!(drafts[0].mood.as_deref(), Some("fiery and fast"));
    }

    #[test]
    fn mood_absent_when_no_mood_line() {
        let drafts = parse("### 1. A\nsome text\n");
        assert_eq!(drafts[0].mood, None);
    }

    #[test]
    fn ingredients_strip_bullets_and_whitespace() {
        let input = "### 1. A\n**Ingredients:**\n- tofu\n• chili oil\n  scallions\n";
        let drafts = parse(input);
        assert_eq!(drafts[0].ingredients.as_deref(), Some("tofu\nchili oil\nscallions"));
    }

    #[test]
    fn ingredients_absent_when_only_blank_lines() {
        let input = "### 1. A\n**Ingredients:**\n\n   \n---\n";
        let drafts = parse(input);
        assert_eq!(drafts[0].ingredients, None);
    }

    #[test]
    fn ingredients_stop_at_instructions_header() {
        let input = "### 1. A\n**Ingredients:**\n- x\n**Instructions:**\n1. cook x\n";
        let drafts = parse(input);
        assert_eq!(drafts[0].ingredients.as_deref(), Some("x"));
        assert_eq!(drafts[0].instructions.as_deref(), Some("cook x"));
    }

    #[test]
    fn ingredients_stop_at_separator() {
        let input = "### 1. A\n**Ingredients:**\n- x\n---\n- leftover\n";
        let drafts = parse(input);
        assert_eq!(drafts[0].ingredients.as_deref(), Some("x"));
    }

    #[test]
    fn longer_separator_lines_also_terminate() {
        let input = "### 1. A\n**Instructions:**\n1. go\n------\nstray tail\n";
        let drafts = parse(input);
        assert_eq!(drafts[0].instructions.as_deref(), Some("go"));
    }

    #[test]
    fn instructions_strip_enumeration_markers() {
        let input = "### 1. A\n**Instructions:**\n1. Heat oil\n2) Add tofu\n- Serve hot\n";
        let drafts = parse(input);
        assert_eq!(drafts[0].instructions.as_deref(), Some("Heat oil\nAdd tofu\nServe hot"));
    }

    #[test]
    fn instructions_run_to_document_end_when_unterminated() {
        let input = "### 1. A\n**Instructions:**\n1. Go";
        let drafts = parse(input);
        assert_eq!(drafts[0].instructions.as_deref(), Some("Go"));
    }

    #[test]
    fn no_leakage_across_sections() {
        let input = "### 1. A\n**Ingredients:**\n- a1\n### 2. B\n**Ingredients:**\n- b1\n";
        let drafts = parse(input);
        assert_eq!(drafts[0].ingredients.as_deref(), Some("a1"));
        assert_eq!(drafts[1].ingredients.as_deref(), Some("b1"));
    }

    #[test]
    fn section_without_blocks_has_absent_fields() {
        let drafts = parse("### 1. Bare\n");
        let draft = &drafts[0];
        assert_eq!(draft.mood, None);
        assert_eq!(draft.ingredients, None);
        assert_eq!(draft.instructions, None);
        assert_eq!(draft.source, IMPORT_SOURCE);
    }

    #[test]
    fn reparsing_joined_output_is_idempotent() {
        let input = "### 1. Mapo Tofu (Chinese-Sichuan Style)\n**Mood:** fiery\n\n\
                     **Ingredients:**\n- tofu\n• chili oil\n\n\
                     **Instructions:**\n1. Heat oil\n2) Serve\n\n---\n";
        let first = &parse(input)[0];

        let rebuilt = format!(
            "### 1. {}\n**Mood:** {}\n\n**Ingredients:**\n{}\n\n**Instructions:**\n{}\n\n---\n",
            first.title,
            first.mood.as_deref().unwrap(),
            first.ingredients.as_deref().unwrap(),
            first.instructions.as_deref().unwrap(),
        );
        let second = &parse(&rebuilt)[0];

        assert_eq!(second.title, first.title);
        assert_eq!(second.mood, first.mood);
        assert_eq!(second.ingredients, first.ingredients);
        assert_eq!(second.instructions, first.instructions);
    }

    #[test]
    fn end_to_end_scenario() {
        let input = "### 1. Kimchi Stew (Korean)\n**Mood:** cozy\n\n**Ingredients:**\n- kimchi\n- pork\n\n**Instructions:**\n1. Simmer\n2. Serve\n\n---\n";
        let drafts = parse(input);
        assert_eq!(drafts.len(), 1);

        let draft = &drafts[0];
        assert_eq!(draft.title, "Kimchi Stew");
        assert_eq!(draft.cuisine.as_deref(), Some("Korean"));
        assert_eq!(draft.mood.as_deref(), Some("cozy"));
        assert_eq!(draft.ingredients.as_deref(), Some("kimchi\npork"));
        assert_eq!(draft.instructions.as_deref(), Some("Simmer\nServe"));
    }

    #[test]
    fn strip_step_marker_variants() {
        assert_eq!(strip_step_marker("1. Heat oil"), "Heat oil");
        assert_eq!(strip_step_marker("12) Stir"), "Stir");
        assert_eq!(strip_step_marker("- Serve"), "Serve");
        assert_eq!(strip_step_marker("• Rest"), "Rest");
        assert_eq!(strip_step_marker("Plain step"), "Plain step");
    }
}
