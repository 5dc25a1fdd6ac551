use crate::config::ProjectConfig;
use crate::digest::file_blake3;
use crate::domain::BuildReport;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::pack::build::simulate_build;
use crate::project::assets::write_html_asset;
use crate::project::scaffold::scaffold_project;
use crate::sign::Signer;
use crate::sign::copy::CopySigner;
use crate::template::{TemplateSet, TemplateVars, current_year};
use std::path::{Path, PathBuf};
use std::time::Duration;

struct Prepared {
    layout: ProjectLayout,
    files: Vec<PathBuf>,
    html: Vec<u8>,
}

fn prepare(out_root: &Path, cfg: &ProjectConfig) -> Result<Prepared> {
    cfg.validate()?;
    let supplied = cfg.supplied_html()?;

    let layout = ProjectLayout::new(out_root, cfg);
    let templates = TemplateSet::new(cfg.templates.dir.as_deref());
    let vars = TemplateVars::from_config(cfg, current_year());

    let mut files = scaffold_project(&layout, cfg, &templates, &vars)?;
    let html = write_html_asset(&layout, supplied, &templates, &vars)?;
    files.push(layout.index_html());
    Ok(Prepared {
        layout,
        files,
        html,
    })
}

/// Scaffold the project and write the HTML asset; no build, no signing.
pub fn scaffold(out_root: &Path, cfg: &ProjectConfig) -> Result<Vec<PathBuf>> {
    Ok(prepare(out_root, cfg)?.files)
}

/// Full run: scaffold, asset, simulated build, simulated signing.
/// Stops at the first failure; nothing already written is removed.
pub fn generate(out_root: &Path, cfg: &ProjectConfig) -> Result<BuildReport> {
    tracing::info!(app = %cfg.project.app_name, "starting HTML to APK conversion");
    let Prepared {
        layout,
        files,
        html,
    } = prepare(out_root, cfg)?;

    let unsigned = simulate_build(
        &layout,
        &cfg.project.app_name,
        &html,
        Duration::from_millis(cfg.simulation.build_delay_ms),
    )?;

    let signer = CopySigner {
        delay: Duration::from_millis(cfg.simulation.sign_delay_ms),
    };
    let signed = layout.signed_apk();
    let apk_size = signer.sign(&unsigned, &signed)?;
    let apk_blake3 = file_blake3(&signed)?;

    tracing::info!(apk = %signed.display(), "conversion finished");
    Ok(BuildReport {
        files,
        unsigned_apk: unsigned,
        signed_apk: signed,
        apk_size,
        apk_blake3,
    })
}
