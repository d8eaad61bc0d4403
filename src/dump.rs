use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::render;

/// Formatting knobs for one dump run.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub bytes_per_line: usize,
    pub color: bool,
}

/// Opens the configured file and dumps it to stdout. Color decoration is
/// applied only when stdout is a terminal, so piped output stays plain.
pub fn dump_file(config: &Config) -> Result<()> {
    let file = File::open(&config.filename)
        .with_context(|| format!("could not open file: {}", config.filename.display()))?;
    let stdout = io::stdout();
    let opts = DumpOptions {
        bytes_per_line: config.bytes_per_line.get(),
        color: stdout.is_terminal(),
    };
    tracing::debug!(
        file = %config.filename.display(),
        bytes_per_line = opts.bytes_per_line,
        color = opts.color,
        "starting dump"
    );
    let mut out = BufWriter::new(stdout.lock());
    let total = dump(BufReader::new(file), &mut out, &opts)?;
    out.flush()?;
    tracing::debug!(bytes = total, "dump complete");
    Ok(())
}

/// Reads `reader` in chunks of `bytes_per_line` bytes and writes one rendered
/// line per non-empty chunk. Only the final chunk may be short; a zero-byte
/// read ends the loop without rendering. Returns the total byte count.
pub fn dump<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    opts: &DumpOptions,
) -> io::Result<usize> {
    let mut buf = vec![0u8; opts.bytes_per_line];
    let mut offset = 0usize;
    loop {
        let count = fill_chunk(&mut reader, &mut buf)?;
        if count == 0 {
            break;
        }
        let line = render::render_line(offset, &buf[..count], opts.bytes_per_line, opts.color);
        writeln!(writer, "{line}")?;
        offset += count;
    }
    Ok(offset)
}

/// Fills `buf` from the reader, retrying short reads until the buffer is
/// full or EOF. A short return therefore always means end of input.
fn fill_chunk<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn plain(bytes_per_line: usize) -> DumpOptions {
        DumpOptions {
            bytes_per_line,
            color: false,
        }
    }

    fn dump_to_string(
        input: &[u8],
        bytes_per_line: usize,
    ) -> String {
        let mut out = Vec::new();
        dump(Cursor::new(input), &mut out, &plain(bytes_per_line)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(dump_to_string(&[], 16), "");
    }

    #[test]
    fn exact_multiple_of_width_has_no_padded_line() {
        let input: Vec<u8> = (0..32).collect();
        let out = dump_to_string(&input, 16);
        assert_eq!(out.lines().count(), 2);
        assert!(!out.contains("   \n"));
        assert!(out.lines().nth(1).unwrap().starts_with("00000010  "));
    }

    #[test]
    fn final_short_chunk_is_rendered_once() {
        let input: Vec<u8> = (0..20).collect();
        let out = dump_to_string(&input, 16);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        // 4 real groups, 12 pads.
        assert!(lines[1].starts_with("00000010  10 11 12 13 "));
        assert!(lines[1].ends_with(&format!("{} |....|", "   ".repeat(11))));
    }

    #[test]
    fn width_one_emits_one_line_per_byte() {
        let out = dump_to_string(b"Hi!", 1);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "00000000  48  |H|",
                "00000001  69  |i|",
                "00000002  21  |!|",
            ]
        );
    }

    /// Reader that trickles out one byte per read() call.
    struct OneByteReader<R>(R);

    impl<R: Read> Read for OneByteReader<R> {
        fn read(
            &mut self,
            buf: &mut [u8],
        ) -> io::Result<usize> {
            let len = buf.len().min(1);
            self.0.read(&mut buf[..len])
        }
    }

    #[test]
    fn short_reads_mid_file_still_fill_full_lines() {
        let input: Vec<u8> = (0..40).collect();
        let mut out = Vec::new();
        dump(
            OneByteReader(Cursor::new(&input)),
            &mut out,
            &plain(16),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        // First two lines are full width even though every read returned one byte.
        assert_eq!(lines[0].matches(' ').count(), lines[1].matches(' ').count());
        assert!(lines[2].starts_with("00000020  "));
    }

    #[test]
    fn returns_total_byte_count() {
        let mut out = Vec::new();
        let total = dump(Cursor::new(&[0u8; 37]), &mut out, &plain(16)).unwrap();
        assert_eq!(total, 37);
    }
}
