// Shared prompt fragments.
// Each service that needs LLM calls builds its own prompts alongside it;
// this file holds the cross-cutting pieces.

/// Appended to every prompt that expects a JSON reply.
pub const NO_EXTRA_TEXT: &str = "No extra text outside JSON.";

/// Joins prompt lines with newlines, the way every rewrite prompt is assembled.
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The model sees a single text: instruction block, blank line, user content.
pub fn with_content(instructions: &str, content: &str) -> String {
    format!("{instructions}\n\n{content}")
}
