use std::fmt::Write as _;

use crossterm::style::Stylize;

/// Renders one dump line: offset field, two spaces, hex field, one space,
/// and the `|...|` ASCII field. The hex field always spans `bytes_per_line`
/// slots; slots past the end of the chunk become three-space pads so columns
/// stay aligned on the final short line.
pub fn render_line(
    offset: usize,
    chunk: &[u8],
    bytes_per_line: usize,
    color: bool,
) -> String {
    let offset = offset_field(offset);
    let hex = hex_field(chunk, bytes_per_line);
    let ascii = format!("|{}|", ascii_field(chunk));
    if color {
        format!(
            "{}  {} {}",
            offset.as_str().cyan(),
            hex.as_str().yellow(),
            ascii.as_str().green()
        )
    } else {
        format!("{offset}  {hex} {ascii}")
    }
}

/// Lowercase hex, zero-padded to at least 8 digits, no `0x` prefix.
fn offset_field(offset: usize) -> String {
    format!("{offset:08x}")
}

fn hex_field(
    chunk: &[u8],
    bytes_per_line: usize,
) -> String {
    let mut field = String::with_capacity(bytes_per_line * 3);
    for slot in 0..bytes_per_line {
        match chunk.get(slot) {
            // Infallible for String, but write! keeps the formatting inline.
            Some(byte) => {
                let _ = write!(field, "{byte:02x} ");
            }
            None => field.push_str("   "),
        }
    }
    field
}

fn ascii_field(chunk: &[u8]) -> String {
    chunk
        .iter()
        .map(|&b| if is_printable(b) { b as char } else { '.' })
        .collect()
}

// Printable ASCII: space through tilde.
fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}
