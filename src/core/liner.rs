// ─── Stream Liner ───
// Turns arbitrarily chunked output (child process pipes, sockets) into lines.

use std::borrow::Cow;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::core::error::LauncherResult;

const READ_CHUNK: usize = 8 * 1024;

/// Incremental line splitter.
///
/// Every `\n` terminates a line unless it is immediately preceded by a
/// backslash, in which case both characters stay in the line. The trailing
/// partial line is kept across calls and is never flushed automatically.
///
/// Input is buffered as bytes, so a UTF-8 sequence cut in half by a chunk
/// boundary is decoded correctly once the line completes.
pub struct Liner<F> {
    buffer: Vec<u8>,
    consumer: F,
}

impl<F: FnMut(&str)> Liner<F> {
    pub fn new(consumer: F) -> Self {
        Self {
            buffer: Vec::new(),
            consumer,
        }
    }

    /// Feed the next chunk. Emits every line completed by it, in order.
    pub fn push(&mut self, data: impl AsRef<[u8]>) {
        let Self { buffer, consumer } = self;

        let scan_from = buffer.len();
        buffer.extend_from_slice(data.as_ref());

        let mut start = 0;
        for i in scan_from..buffer.len() {
            if buffer[i] != b'\n' {
                continue;
            }
            if i > 0 && buffer[i - 1] == b'\\' {
                continue;
            }
            let line = String::from_utf8_lossy(&buffer[start..i]);
            consumer(&*line);
            start = i + 1;
        }

        buffer.drain(..start);
    }

    /// The buffered partial line.
    pub fn remainder(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buffer)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the liner, returning the partial line for the caller to flush.
    pub fn into_remainder(self) -> String {
        match String::from_utf8(self.buffer) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

/// Drain `reader` through a [`Liner`] until EOF.
///
/// Returns the unterminated tail, which is *not* passed to `consumer`.
pub async fn pipe_lines<R, F>(mut reader: R, consumer: F) -> LauncherResult<String>
where
    R: AsyncRead + Unpin,
    F: FnMut(&str),
{
    let mut liner = Liner::new(consumer);
    let mut chunk = vec![0u8; READ_CHUNK];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        liner.push(&chunk[..n]);
    }

    Ok(liner.into_remainder())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(chunks: &[&str]) -> (Vec<String>, String) {
        let mut lines = Vec::new();
        let mut liner = Liner::new(|line: &str| lines.push(line.to_string()));
        for chunk in chunks {
            liner.push(chunk);
        }
        let rest = liner.into_remainder();
        (lines, rest)
    }

    #[test]
    fn emits_only_completed_lines() {
        let mut lines = Vec::new();
        {
            let mut liner = Liner::new(|line: &str| lines.push(line.to_string()));
            liner.push("ab");
            assert!(!liner.is_empty());
            liner.push("c\nde");
            assert_eq!(liner.remainder(), "de");
            liner.push("f\n");
            assert!(liner.is_empty());
        }
        assert_eq!(lines, vec!["abc", "def"]);
    }

    #[test]
    fn nothing_emitted_before_newline() {
        let (lines, rest) = collect(&["partial", " line"]);
        assert!(lines.is_empty());
        assert_eq!(rest, "partial line");
    }

    #[test]
    fn escaped_newline_is_content() {
        let (lines, rest) = collect(&["x\\\n"]);
        assert!(lines.is_empty());
        assert_eq!(rest, "x\\\n");

        let (lines, rest) = collect(&["a\\\nb\nc"]);
        assert_eq!(lines, vec!["a\\\nb"]);
        assert_eq!(rest, "c");
    }

    #[test]
    fn escape_spanning_chunk_boundary() {
        let (lines, rest) = collect(&["x\\", "\ny\n"]);
        assert_eq!(lines, vec!["x\\\ny"]);
        assert_eq!(rest, "");
    }

    #[test]
    fn empty_lines_are_emitted() {
        let (lines, _) = collect(&["\n\nz\n"]);
        assert_eq!(lines, vec!["", "", "z"]);
    }

    #[test]
    fn multibyte_split_across_chunks() {
        let bytes = "día\n".as_bytes();
        let mut lines = Vec::new();
        {
            let mut liner = Liner::new(|line: &str| lines.push(line.to_string()));
            liner.push(&bytes[..2]);
            liner.push(&bytes[2..]);
        }
        assert_eq!(lines, vec!["día"]);
    }

    #[tokio::test]
    async fn pipe_lines_returns_unflushed_tail() {
        let input: &[u8] = b"[main] starting\n[main] ready\ntrailing";
        let mut lines = Vec::new();

        let rest = pipe_lines(input, |line| lines.push(line.to_string()))
            .await
            .unwrap();

        assert_eq!(lines, vec!["[main] starting", "[main] ready"]);
        assert_eq!(rest, "trailing");
    }
}
