use std::io::{self, Write};

/// Writes `text` to stdout, treating a closed pipe (`txfeed demo | head`) as
/// success.
pub fn write_stdout_text(text: &str) -> io::Result<()> {
    write_stdout_bytes(&[text.as_bytes()])
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    write_stdout_bytes(&[text.as_bytes(), b"\n"])
}

fn write_stdout_bytes(chunks: &[&[u8]]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    let written = chunks
        .iter()
        .try_for_each(|chunk| stdout.write_all(chunk))
        .and_then(|()| stdout.flush());
    match written {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
