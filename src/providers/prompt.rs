/// The system prompt used when asking a model for a recipe.
///
/// The prompt pins down the response shape the parser expects:
/// ingredients one per line, a single `---` delimiter line, then steps
/// one per line, with no markdown or numbering.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_PROMPT: &str = include_str!("prompt.txt");

const STRICT_SAFETY_SUFFIX: &str = "STRICT SAFETY: Keep content universally safe. Do not include hazardous activities; phrase cutting/slicing as careful, standard culinary technique.";

/// Build the stricter prompt used on the single automatic retry after a
/// response yields no parseable lines.
pub fn stricter_safety_prompt() -> String {
    format!("{}\n{}", RECIPE_PROMPT.trim_end(), STRICT_SAFETY_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        assert!(!RECIPE_PROMPT.is_empty());

        // Verify it pins the response shape the parser relies on
        assert!(RECIPE_PROMPT.contains("---"));
        assert!(RECIPE_PROMPT.contains("ONE per line"));
        assert!(RECIPE_PROMPT.contains("No Markdown"));
    }

    #[test]
    fn test_stricter_prompt_extends_base() {
        let stricter = stricter_safety_prompt();
        assert!(stricter.starts_with(RECIPE_PROMPT.trim_end()));
        assert!(stricter.contains("STRICT SAFETY"));
    }
}
