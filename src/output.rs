use std::io::{self, Write};

/// Write the rewritten buffer, closing it with a newline when it doesn't already end
/// in one. Empty output stays empty.
pub fn write_output<W: Write>(out: &mut W, text: &[u8]) -> io::Result<()> {
    out.write_all(text)?;
    if !text.is_empty() && !text.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    out.flush()
}
