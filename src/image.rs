//! Program image decoding

use crate::consts::WORD_SIZE;
use crate::error::ImageError;
use crate::types::Word;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

/// Decode a program image out of a byte source.
///
/// The image is a flat sequence of big-endian words with no header or
/// metadata; a trailing partial word makes the image malformed.
pub fn read_image<R>(mut source: R) -> Result<Vec<Word>, ImageError>
where
    R: Read,
{
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;

    if bytes.len() % WORD_SIZE != 0 {
        return Err(ImageError::TruncatedImage { len: bytes.len() });
    }

    let program = bytes
        .chunks_exact(WORD_SIZE)
        .map(|group| Word::from_be_bytes([group[0], group[1], group[2], group[3]]))
        .collect::<Vec<Word>>();

    debug!("decoded image of {} platters", program.len());

    Ok(program)
}

/// Read and decode the program image at `path`.
pub fn read_image_file<P>(path: P) -> Result<Vec<Word>, ImageError>
where
    P: AsRef<Path>,
{
    File::open(path).map_err(ImageError::from).and_then(read_image)
}
