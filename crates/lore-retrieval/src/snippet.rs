//! Display snippets: a window of the record content around the first query term.

const ELLIPSIS: char = '…';

/// Up to `max_chars` characters of `content`, starting shortly before the
/// first case-insensitive occurrence of any of `terms`.
///
/// Falls back to the head of the content when no term occurs. Clipped ends
/// are marked with an ellipsis.
pub fn snippet(content: &str, terms: &[String], max_chars: usize) -> String {
    let content = content.trim();
    let chars: Vec<char> = content.chars().collect();
    if max_chars == 0 {
        return String::new();
    }
    if chars.len() <= max_chars {
        return content.to_string();
    }

    let lowered: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();
    let first_hit = terms
        .iter()
        .filter_map(|term| find(&lowered, term))
        .min()
        .unwrap_or(0);

    let lead = max_chars / 4;
    let start = first_hit
        .saturating_sub(lead)
        .min(chars.len() - max_chars);
    let end = start + max_chars;

    let mut out = String::with_capacity(max_chars + 8);
    if start > 0 {
        out.push(ELLIPSIS);
    }
    out.push_str(chars[start..end].iter().collect::<String>().trim());
    if end < chars.len() {
        out.push(ELLIPSIS);
    }
    out
}

fn find(haystack: &[char], term: &str) -> Option<usize> {
    let needle: Vec<char> = term.to_lowercase().chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn short_content_is_returned_whole() {
        assert_eq!(snippet("  Around hooks  ", &terms(&["hooks"]), 100), "Around hooks");
    }

    #[test]
    fn window_centers_on_first_term() {
        let content = format!(
            "{} Hooks are registered per service. {}",
            "x".repeat(200),
            "y".repeat(200)
        );
        let s = snippet(&content, &terms(&["hooks"]), 60);
        assert!(s.starts_with(ELLIPSIS));
        assert!(s.ends_with(ELLIPSIS));
        assert!(s.contains("Hooks are registered"));
    }

    #[test]
    fn no_term_hit_uses_head() {
        let content = "abcdefghij".repeat(10);
        let s = snippet(&content, &terms(&["zzz"]), 20);
        assert!(s.starts_with("abcdefghij"));
        assert!(s.ends_with(ELLIPSIS));
    }

    #[test]
    fn multibyte_content_is_safe() {
        let content = "é".repeat(50) + " hooks " + &"ü".repeat(50);
        let s = snippet(&content, &terms(&["hooks"]), 20);
        assert!(s.contains("hooks"));
    }
}
