use std::fmt;

/// UTF-16 text for appending to a line.
///
/// Unpaired surrogates render as U+FFFD rather than failing the append.
#[derive(Debug, Clone, Copy)]
pub struct Wide<'a>(pub &'a [u16]);

impl fmt::Display for Wide<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        for c in char::decode_utf16(self.0.iter().copied()) {
            f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}
