use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// SHA-256 of an in-memory buffer, as lowercase hex.
pub fn digest(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// SHA-256 of a file's contents, streamed from disk.
pub fn digest_file(path: &Path) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
