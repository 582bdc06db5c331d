//! Byte-budget text splitting.
//!
//! The translation API caps each request by encoded size, so oversized text
//! is cut into contiguous pieces that each fit. Cuts always land on a char
//! boundary, and the pieces concatenate back to the input exactly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("chunk budget must be greater than zero")]
    ZeroBudget,

    /// The character starting at `offset` is wider than the whole budget.
    #[error("character at byte {offset} needs {width} bytes, budget is {max_size}")]
    CharacterExceedsBudget {
        offset: usize,
        width: usize,
        max_size: usize,
    },
}

/// Split `text` into chunks of at most `max_size` UTF-8 bytes.
///
/// Text already within budget comes back as a single chunk (an empty input
/// yields one empty chunk).
pub fn split_text(text: &str, max_size: usize) -> Result<Vec<&str>, ChunkError> {
    if max_size == 0 {
        return Err(ChunkError::ZeroBudget);
    }

    let mut chunks = Vec::with_capacity(text.len() / max_size + 1);
    let mut rest = text;
    let mut offset = 0;

    while rest.len() > max_size {
        let mut end = max_size;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }

        if end == 0 {
            let width = rest.chars().next().map(char::len_utf8).unwrap_or_default();
            return Err(ChunkError::CharacterExceedsBudget {
                offset,
                width,
                max_size,
            });
        }

        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
        offset += end;
    }

    chunks.push(rest);
    Ok(chunks)
}
