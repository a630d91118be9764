/// Map a byte offset in a text buffer to its 1-based line number.
///
/// Counts newline bytes strictly before `offset`. Offsets past the end of the
/// buffer clamp to the total line count rather than erroring.
pub fn line_number(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
