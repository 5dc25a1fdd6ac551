// webapk_core/src/domain.rs
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct EntryRow {
    pub name: String,
    pub size: u64,
    pub compressed: u64,
    pub crc32: u32,
}

#[derive(Clone, Debug)]
pub struct BuildReport {
    /// Scaffolded sources plus the HTML asset, in write order.
    pub files: Vec<PathBuf>,
    pub unsigned_apk: PathBuf,
    pub signed_apk: PathBuf,
    pub apk_size: u64,
    pub apk_blake3: [u8; 32],
}

#[derive(Clone, Debug)]
pub struct VerifyReport {
    pub outputs_checked: usize,
    pub entries: Vec<EntryRow>,
    pub apk_blake3: [u8; 32],
}
