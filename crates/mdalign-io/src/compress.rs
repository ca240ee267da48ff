//! Transparent gzip handling
//!
//! Pose files handed over from docking runs frequently arrive as `.pdb.gz`;
//! the loader decompresses them on the fly based on the file extension.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::IoResult;

/// Check if a path indicates a gzip file (by extension)
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Open a file for reading, decompressing when the extension says gzip
pub fn open_file(path: &Path) -> IoResult<Box<dyn Read>> {
    let file = File::open(path)?;

    if is_gzip_path(path) {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gzip_path() {
        assert!(is_gzip_path(Path::new("pose.pdb.gz")));
        assert!(is_gzip_path(Path::new("pose.GZ")));
        assert!(!is_gzip_path(Path::new("pose.pdb")));
    }
}
