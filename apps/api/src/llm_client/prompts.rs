// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts alongside it.
// This file contains cross-cutting pieces.

/// Appended to every system prompt that expects a JSON object back.
pub const JSON_OBJECT_ONLY: &str = "Return ONLY valid JSON.";

/// Appended to every system prompt that expects a JSON array back.
pub const JSON_ARRAY_ONLY: &str = "Return ONLY a valid JSON array.";

/// Joins items for prompt interpolation, taking at most `limit` of them.
pub fn join_limited<S: AsRef<str>>(items: &[S], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truncates to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Substitutes `{key}` tokens in a single left-to-right pass, so values that
/// themselves contain `{...}` text are never re-expanded.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = vars.iter().find(|(key, _)| {
            tail.len() > key.len() + 1
                && tail[1..].starts_with(key)
                && tail[1 + key.len()..].starts_with('}')
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_single_pass() {
        let out = fill_template(
            "A={a} B={b} json={\"k\":1}",
            &[("a", "{b}"), ("b", "two")],
        );
        assert_eq!(out, "A={b} B=two json={\"k\":1}");
    }

    #[test]
    fn test_fill_template_repeated_and_unknown_keys() {
        let out = fill_template("{x}-{x}-{y}-{", &[("x", "1")]);
        assert_eq!(out, "1-1-{y}-{");
    }

    #[test]
    fn test_join_limited() {
        let items = vec!["Rust", "Go", "Python"];
        assert_eq!(join_limited(&items, 2), "Rust, Go");
        assert_eq!(join_limited(&items, 10), "Rust, Go, Python");
        assert_eq!(join_limited::<&str>(&[], 3), "");
    }

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("résumé", 3), "rés");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
