use unicode_normalization::UnicodeNormalization;

/// Normalize text assembled from markup runs or spreadsheet cells: NFKC
/// normalization, per-line trimming, internal whitespace collapsed to single
/// spaces, blank lines dropped.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();

    let mut result = String::with_capacity(normalized.len());
    let mut first_content = true;

    for line in normalized.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !first_content {
            result.push('\n');
        }
        collapse_internal_whitespace(trimmed, &mut result);
        first_content = false;
    }

    result
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
