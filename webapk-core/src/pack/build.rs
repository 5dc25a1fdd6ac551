use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::pack::archive::{placeholder_entries, write_archive};
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Stand-in for a compiler run: wait, then emit the unsigned placeholder APK.
pub fn simulate_build(
    layout: &ProjectLayout,
    app_name: &str,
    html: &[u8],
    delay: Duration,
) -> Result<PathBuf> {
    tracing::info!("compiling project");
    thread::sleep(delay);

    fs::create_dir_all(layout.release_dir())?;
    let out = layout.unsigned_apk();
    let entries = placeholder_entries(app_name, html)?;
    let size = write_archive(&out, &entries)?;
    tracing::warn!(
        "placeholder build: AndroidManifest.xml, classes.dex and resources.arsc hold random bytes"
    );
    tracing::info!(path = %out.display(), size, "unsigned archive written");
    Ok(out)
}
