use crate::domain::EntryRow;
use crate::error::{Result, WebApkError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// Entries in archive order.
pub fn list_entries(apk: &Path) -> Result<Vec<EntryRow>> {
    let mut za = ZipArchive::new(File::open(apk)?)?;
    let mut rows = Vec::with_capacity(za.len());
    for i in 0..za.len() {
        let zf = za.by_index(i)?;
        rows.push(EntryRow {
            name: zf.name().to_string(),
            size: zf.size(),
            compressed: zf.compressed_size(),
            crc32: zf.crc32(),
        });
    }
    Ok(rows)
}

pub fn read_entry(apk: &Path, name: &str) -> Result<Vec<u8>> {
    let mut za = ZipArchive::new(File::open(apk)?)?;
    let mut zf = match za.by_name(name) {
        Ok(zf) => zf,
        Err(ZipError::FileNotFound) => {
            return Err(WebApkError::Format(format!(
                "{} has no entry '{name}'",
                apk.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };
    let mut buf = Vec::new();
    zf.read_to_end(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::archive::{ArchiveEntry, write_archive};

    #[test]
    fn lists_and_reads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let apk = tmp.path().join("t.apk");
        write_archive(
            &apk,
            &[
                ArchiveEntry::new("b.txt", b"bbb".to_vec()),
                ArchiveEntry::new("a/a.txt", b"aaaa".to_vec()),
            ],
        )
        .unwrap();

        let rows = list_entries(&apk).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "b.txt");
        assert_eq!(rows[1].size, 4);
        assert_eq!(read_entry(&apk, "a/a.txt").unwrap(), b"aaaa");
    }

    #[test]
    fn missing_entry_is_format_error() {
        let tmp = tempfile::tempdir().unwrap();
        let apk = tmp.path().join("t.apk");
        write_archive(&apk, &[ArchiveEntry::new("x", vec![1])]).unwrap();
        assert!(matches!(
            read_entry(&apk, "y"),
            Err(WebApkError::Format(_))
        ));
    }

    #[test]
    fn non_zip_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let apk = tmp.path().join("bogus.apk");
        std::fs::write(&apk, b"not a zip at all").unwrap();
        assert!(matches!(list_entries(&apk), Err(WebApkError::Zip(_))));
    }
}
