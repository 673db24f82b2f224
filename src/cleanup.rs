//! Final pass over assembled transcript text.

/// Remove every occurrence of each artifact string from `text`.
///
/// Matching ignores ASCII case: the assembler lowercases non-terminal captions, so a leaked
/// `"No results found Tap to retry"` prompt reaches this pass as `"No results found tap to
/// retry"`. Removal repeats until nothing matches, which makes the pass idempotent even when a
/// removal splices two halves of another occurrence together.
pub fn strip_artifacts<S: AsRef<str>>(text: &str, artifacts: &[S]) -> String {
    let mut out = text.to_owned();
    loop {
        let mut changed = false;
        for artifact in artifacts {
            if let Some(stripped) = remove_ignore_ascii_case(&out, artifact.as_ref()) {
                out = stripped;
                changed = true;
            }
        }
        if !changed {
            return out;
        }
    }
}

/// Strip artifacts, trim, and prefix the `# title` heading.
pub fn finalize<S: AsRef<str>>(assembled: &str, title: &str, artifacts: &[S]) -> String {
    let stripped = strip_artifacts(assembled, artifacts);
    format!("# {title}\n\n{}", stripped.trim())
}

/// Returns `None` when `needle` does not occur.
fn remove_ignore_ascii_case(haystack: &str, needle: &str) -> Option<String> {
    if needle.is_empty() {
        return None;
    }

    // ASCII lowercasing keeps byte offsets (and char boundaries) identical to `haystack`.
    let folded = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();

    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (idx, _) in folded.match_indices(&needle) {
        out.push_str(&haystack[last..idx]);
        last = idx + needle.len();
    }

    if last == 0 {
        return None;
    }

    out.push_str(&haystack[last..]);
    Some(out)
}
