use bytes::BytesMut;

/// Reassembles newline-delimited records from an arbitrarily chunked byte
/// stream.
///
/// Chunks are buffered as raw bytes and only complete, newline-terminated
/// segments are decoded to text. A multi-byte character split across a chunk
/// seam therefore stays intact in the residual buffer until its line
/// completes; `\n` is a single byte and can never appear inside a multi-byte
/// UTF-8 sequence.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buf: BytesMut,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one transport chunk, draining every candidate record it
    /// completes, in arrival order. An empty chunk yields no candidates.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut candidates = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let segment = self.buf.split_to(pos + 1);
            candidates.push(String::from_utf8_lossy(&segment[..pos]).into_owned());
        }
        candidates
    }

    /// Close the stream. A residual that is non-blank after trimming becomes
    /// one final candidate; a blank residual is discarded silently.
    pub fn finish(self) -> Option<String> {
        let residual = String::from_utf8_lossy(&self.buf).into_owned();
        if residual.trim().is_empty() {
            None
        } else {
            Some(residual)
        }
    }
}
