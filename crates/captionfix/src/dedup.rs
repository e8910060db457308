// ABOUTME: Detection of doubled caption text of the exact form "A A".
// ABOUTME: Pure string logic, counted in chars so multi-byte captions split at the right place.

/// Returns the de-duplicated half when `text` is exactly `A + " " + A`.
///
/// `text` is expected to be trimmed already. The length test runs on Unicode
/// scalar values: the total must be odd and greater than one, the middle char
/// must be a plain space, and the halves on either side must be identical.
pub fn dedupe(text: &str) -> Option<&str> {
    let len = text.chars().count();
    if len <= 1 || len % 2 == 0 {
        return None;
    }

    let (mid, sep) = text.char_indices().nth(len / 2)?;
    if sep != ' ' {
        return None;
    }

    let part1 = &text[..mid];
    let part2 = &text[mid + sep.len_utf8()..];
    if part1 == part2 {
        Some(part1)
    } else {
        None
    }
}
