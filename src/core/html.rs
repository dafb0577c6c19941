// src/core/html.rs
// Case-insensitive tag scanning over raw HTML text.
// `to_lower` only touches ASCII, so byte offsets found in the lowered copy
// are valid in the original.

use super::sanitize::normalize_ws;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

fn is_name_end(b: Option<&u8>) -> bool {
    matches!(b, None | Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n'))
}

/// Position of the next `<tag` (exact name, so `<th` never matches `<thead`).
/// `lc` must already be lowercased, `tag` is given without `<`.
pub fn find_open_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = format!("<{tag}");
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(&pat) {
        let at = pos + rel;
        if is_name_end(lc.as_bytes().get(at + pat.len())) {
            return Some(at);
        }
        pos = at + pat.len();
    }
    None
}

/// Position of the next `</tag`.
pub fn find_close_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = format!("</{tag}");
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(&pat) {
        let at = pos + rel;
        if is_name_end(lc.as_bytes().get(at + pat.len())) {
            return Some(at);
        }
        pos = at + pat.len();
    }
    None
}

/// For an element opening at `start`, return `(inner_start, inner_end, end)`
/// where `end` is just past the matching close tag. Nested elements of the
/// same name are skipped. A missing close tag runs the element to end of input.
pub fn element_span(lc: &str, tag: &str, start: usize) -> Option<(usize, usize, usize)> {
    let inner_start = lc[start..].find('>')? + start + 1;
    let mut depth = 1usize;
    let mut pos = inner_start;

    loop {
        let next_open = find_open_tag(lc, tag, pos);
        let next_close = find_close_tag(lc, tag, pos);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos = o + 1;
            }
            (_, Some(c)) => {
                depth -= 1;
                let end = lc[c..].find('>').map_or(lc.len(), |g| c + g + 1);
                if depth == 0 {
                    return Some((inner_start, c, end));
                }
                pos = end;
            }
            (_, None) => return Some((inner_start, lc.len(), lc.len())),
        }
    }
}

/// Inner HTML of the `n`-th (0-based) top-level `<tag>` element.
pub fn nth_element_inner<'a>(s: &'a str, tag: &str, n: usize) -> Option<&'a str> {
    let lc = to_lower(s);
    let mut pos = 0usize;
    let mut seen = 0usize;
    while let Some(start) = find_open_tag(&lc, tag, pos) {
        let (inner_s, inner_e, end) = element_span(&lc, tag, start)?;
        if seen == n {
            return Some(&s[inner_s..inner_e]);
        }
        seen += 1;
        pos = end;
    }
    None
}

/// Drop every `<tag ...>...</tag>` block, e.g. inline `<style>` or `<sup>` content.
pub fn remove_elements_ci(s: &str, tag: &str) -> String {
    let lc = to_lower(s);
    let mut out = String::with_capacity(s.len());
    let mut pos = 0usize;
    while let Some(start) = find_open_tag(&lc, tag, pos) {
        out.push_str(&s[pos..start]);
        pos = match element_span(&lc, tag, start) {
            Some((_, _, end)) => end,
            None => s.len(),
        };
    }
    out.push_str(&s[pos..]);
    out
}

/// Value of `name` inside an opening tag such as `<td colspan="2" class=x>`.
/// Quoted and bare values are both accepted.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let bytes = lc.as_bytes();
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(name) {
        let at = pos + rel;
        pos = at + name.len();
        // whole attribute name only
        let before_ok = at > 0 && bytes[at - 1].is_ascii_whitespace();
        let rest = lc[pos..].trim_start();
        if !before_ok || !rest.starts_with('=') {
            continue;
        }
        let value_at = lc.len() - rest.len() + 1;
        let raw = open_tag[value_at..].trim_start();
        let value = match raw.chars().next() {
            Some(q @ ('"' | '\'')) => raw[1..].split(q).next().unwrap_or(""),
            _ => raw
                .split(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .next()
                .unwrap_or(""),
        };
        return Some(value.to_string());
    }
    None
}

/// Remove all tags `<...>`, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}
