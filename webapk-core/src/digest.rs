use crate::error::Result;
use std::fs;
use std::path::Path;

pub fn file_blake3(path: &Path) -> Result<[u8; 32]> {
    let bytes = fs::read(path)?;
    Ok(*blake3::hash(&bytes).as_bytes())
}

pub fn to_hex(digest: &[u8; 32]) -> String {
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_of_empty_file_digest() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("empty");
        fs::write(&p, b"").unwrap();
        assert_eq!(
            to_hex(&file_blake3(&p).unwrap()),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }
}
