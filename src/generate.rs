//! Word generation for mkwords.
//!
//! `write_words` is the core loop: it pulls 4 bytes at a time from a random
//! source and appends them to any writer. `generate_file` wraps that loop
//! with the file lifecycle (create/truncate, buffer, flush, close) and maps
//! each failing step to its own [`Error`] variant.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::RngCore;

use crate::error::Error;

/// Number of bytes in one word.
pub const WORD_LEN: usize = 4;

/// Append `count` random words from `rng` to `out`.
///
/// Words are written in generation order with no separators. Stops at the
/// first write error, so `out` may hold a prefix of the requested words.
///
/// Returns the number of bytes written, always `count * WORD_LEN` on success.
pub fn write_words<W, R>(out: &mut W, count: u64, rng: &mut R) -> std::io::Result<u64>
where
    W: Write + ?Sized,
    R: RngCore + ?Sized,
{
    let mut word = [0u8; WORD_LEN];
    for _ in 0..count {
        rng.fill_bytes(&mut word);
        out.write_all(&word)?;
    }
    Ok(count * WORD_LEN as u64)
}

/// Create (or truncate) `path` and fill it with `count` random words.
///
/// The file handle is released only after a successful flush. Before the
/// handle is dropped, `sync_all` reports deferred write-back errors as
/// [`Error::Close`]; the result of the final `close(2)` itself is still
/// discarded by `File`'s drop. On any error the partially written file is
/// left in place.
pub fn generate_file<R>(path: &Path, count: u64, rng: &mut R) -> Result<u64, Error>
where
    R: RngCore + ?Sized,
{
    let file = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let written = write_words(&mut writer, count, rng).map_err(Error::Write)?;

    writer.flush().map_err(Error::Flush)?;
    let file = writer
        .into_inner()
        .map_err(|e| Error::Flush(e.into_error()))?;
    file.sync_all().map_err(Error::Close)?;

    Ok(written)
}
