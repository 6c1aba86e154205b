//! Fixed-width chunk helpers over byte slices.
//!
//! The chunked scanner and the buffered rewriter work on groups of
//! [`CHUNK_WIDTH`] bytes. Scanning goes through `chunks_exact`, so a chunk
//! never extends past the end of its slice and the remainder shorter than
//! one chunk is handled one byte at a time. Copying works on `str` ranges
//! and stops only on char boundaries.

/// Bytes compared or copied per step.
pub const CHUNK_WIDTH: usize = 16;

/// True when every byte of `chunk` equals `needle`.
#[inline]
pub fn chunk_matches(chunk: &[u8; CHUNK_WIDTH], needle: u8) -> bool {
    // fold without early exit so LLVM can lower this to a vector compare
    chunk.iter().fold(true, |acc, &b| acc & (b == needle))
}

/// Length of the run of `needle` at the start of `bytes`.
pub fn leading_run(bytes: &[u8], needle: u8) -> usize {
    let mut count = 0usize;
    let mut chunks = bytes.chunks_exact(CHUNK_WIDTH);
    for chunk in chunks.by_ref() {
        let Ok(chunk) = <&[u8; CHUNK_WIDTH]>::try_from(chunk) else {
            break;
        };
        if chunk_matches(chunk, needle) {
            count += CHUNK_WIDTH;
            continue;
        }
        // mismatch somewhere in this chunk: locate it byte by byte
        return count + chunk.iter().take_while(|&&b| b == needle).count();
    }
    count + chunks.remainder().iter().take_while(|&&b| b == needle).count()
}

/// Append `src` to `dst` in pieces of about [`CHUNK_WIDTH`] bytes.
///
/// A piece that would end inside a multi-byte char is extended to the next
/// char boundary, so every piece is itself valid UTF-8.
pub fn copy_chunked(src: &str, dst: &mut String) {
    let mut start = 0usize;
    while start < src.len() {
        let mut end = (start + CHUNK_WIDTH).min(src.len());
        while !src.is_char_boundary(end) {
            end += 1;
        }
        dst.push_str(&src[start..end]);
        start = end;
    }
}
