use crate::digest::{file_blake3, to_hex};
use crate::domain::VerifyReport;
use crate::error::{Result, WebApkError};
use crate::layout::ProjectLayout;
use crate::pack::archive::{ASSET_HTML, ENTRY_NAMES};
use crate::read::inspect::{list_entries, read_entry};
use std::fs;

/// Check a generated project: outputs present, archive shape, signed copy
/// matching, and the packaged page equal to the one on disk.
pub fn verify(layout: &ProjectLayout) -> Result<VerifyReport> {
    let outputs = layout.outputs();
    for p in &outputs {
        if !p.is_file() {
            return Err(WebApkError::Format(format!("missing output {}", p.display())));
        }
    }

    let unsigned = layout.unsigned_apk();
    let entries = list_entries(&unsigned)?;
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    if names != ENTRY_NAMES {
        return Err(WebApkError::Format(format!(
            "unexpected archive entries: {names:?}"
        )));
    }

    let unsigned_hash = file_blake3(&unsigned)?;
    let signed_hash = file_blake3(&layout.signed_apk())?;
    if unsigned_hash != signed_hash {
        return Err(WebApkError::Format(format!(
            "signed archive differs from unsigned ({} != {})",
            to_hex(&signed_hash),
            to_hex(&unsigned_hash)
        )));
    }

    let on_disk = fs::read(layout.index_html())?;
    if read_entry(&unsigned, ASSET_HTML)? != on_disk {
        return Err(WebApkError::Format(format!(
            "{ASSET_HTML} does not match {}",
            layout.index_html().display()
        )));
    }

    tracing::debug!(digest = %to_hex(&signed_hash), "verified");
    Ok(VerifyReport {
        outputs_checked: outputs.len(),
        entries,
        apk_blake3: signed_hash,
    })
}
