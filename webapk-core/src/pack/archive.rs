use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const META_MANIFEST: &str = "META-INF/MANIFEST.MF";
pub const BINARY_MANIFEST: &str = "AndroidManifest.xml";
pub const CLASSES_DEX: &str = "classes.dex";
pub const RESOURCES_ARSC: &str = "resources.arsc";
pub const ASSET_HTML: &str = "assets/index.html";

/// Entry names in write order.
pub const ENTRY_NAMES: [&str; 5] = [
    META_MANIFEST,
    BINARY_MANIFEST,
    CLASSES_DEX,
    RESOURCES_ARSC,
    ASSET_HTML,
];

// Filler sizes for the placeholder binaries.
pub const BINARY_MANIFEST_LEN: usize = 100;
pub const CLASSES_DEX_LEN: usize = 500;
pub const RESOURCES_ARSC_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// `len` bytes from the OS random source.
    pub fn filler(name: impl Into<String>, len: usize) -> Result<Self> {
        let mut data = vec![0u8; len];
        getrandom::getrandom(&mut data)?;
        Ok(Self::new(name, data))
    }
}

pub fn manifest_mf(app_name: &str) -> String {
    format!("Manifest-Version: 1.0\nCreated-By: {app_name} Converter\nBuilt-By: Automated System\n")
}

/// The five entries of a placeholder APK. Only the first and last carry
/// meaningful content; the binaries in between are random filler.
pub fn placeholder_entries(app_name: &str, html: &[u8]) -> Result<Vec<ArchiveEntry>> {
    Ok(vec![
        ArchiveEntry::new(META_MANIFEST, manifest_mf(app_name).into_bytes()),
        ArchiveEntry::filler(BINARY_MANIFEST, BINARY_MANIFEST_LEN)?,
        ArchiveEntry::filler(CLASSES_DEX, CLASSES_DEX_LEN)?,
        ArchiveEntry::filler(RESOURCES_ARSC, RESOURCES_ARSC_LEN)?,
        ArchiveEntry::new(ASSET_HTML, html.to_vec()),
    ])
}

/// Write `entries` in order as a deflated zip at `out`. Returns the archive size.
pub fn write_archive(out: &Path, entries: &[ArchiveEntry]) -> Result<u64> {
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zw = ZipWriter::new(File::create(out)?);
    for e in entries {
        zw.start_file(e.name.as_str(), opts)?;
        zw.write_all(&e.data)?;
    }
    let f = zw.finish()?;
    Ok(f.metadata()?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn filler_has_requested_len() {
        let e = ArchiveEntry::filler("x.bin", 37).unwrap();
        assert_eq!(e.data.len(), 37);
    }

    #[test]
    fn placeholder_entries_order_and_sizes() {
        let entries = placeholder_entries("SpiderAPP", b"<html></html>").unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ENTRY_NAMES);
        assert_eq!(entries[1].data.len(), 100);
        assert_eq!(entries[2].data.len(), 500);
        assert_eq!(entries[3].data.len(), 200);
        assert_eq!(
            entries[0].data,
            b"Manifest-Version: 1.0\nCreated-By: SpiderAPP Converter\nBuilt-By: Automated System\n"
        );
    }

    #[test]
    fn written_archive_is_readable() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("a.apk");
        let entries = placeholder_entries("SpiderAPP", b"<p>x</p>").unwrap();
        let size = write_archive(&out, &entries).unwrap();
        assert_eq!(size, std::fs::metadata(&out).unwrap().len());

        let mut za = ZipArchive::new(File::open(&out).unwrap()).unwrap();
        assert_eq!(za.len(), 5);
        for (i, want) in entries.iter().enumerate() {
            let mut zf = za.by_index(i).unwrap();
            assert_eq!(zf.name(), want.name);
            let mut got = Vec::new();
            zf.read_to_end(&mut got).unwrap();
            assert_eq!(got, want.data);
        }
    }
}
