use crate::config::ProjectConfig;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::template::{Template, TemplateSet, TemplateVars};
use std::fs;
use std::path::PathBuf;

/// Create the project tree and write the five source files.
/// Returns the written paths in write order.
pub fn scaffold_project(
    layout: &ProjectLayout,
    cfg: &ProjectConfig,
    templates: &TemplateSet,
    vars: &TemplateVars,
) -> Result<Vec<PathBuf>> {
    tracing::info!(root = %layout.root.display(), "creating project structure");
    for d in layout.scaffold_dirs() {
        fs::create_dir_all(&d)?;
    }

    let files = [
        (layout.strings(), Template::Strings),
        (layout.manifest(), Template::Manifest),
        (layout.main_activity(), Template::activity(cfg.activity.language)),
        (layout.build_gradle(), Template::BuildGradle),
        (layout.activity_layout(), Template::ActivityLayout),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (path, t) in files {
        tracing::info!("writing {}", t.file_name());
        let body = templates.render(t, vars)?;
        fs::write(&path, body)?;
        tracing::debug!(path = %path.display(), "wrote");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;

    #[test]
    fn writes_five_files_under_package_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = ProjectConfig::default();
        cfg.project.package = "net.demo.shell".into();
        cfg.activity.language = Language::Kotlin;
        let layout = ProjectLayout::new(tmp.path(), &cfg);
        let vars = TemplateVars::from_config(&cfg, 2030);

        let written = scaffold_project(&layout, &cfg, &TemplateSet::default(), &vars).unwrap();
        assert_eq!(written.len(), 5);
        for p in &written {
            assert!(p.is_file(), "{} missing", p.display());
        }
        assert!(layout.assets_dir().is_dir());

        let kt = fs::read_to_string(layout.main_activity()).unwrap();
        assert!(kt.starts_with("package net.demo.shell\n"));
        let gradle = fs::read_to_string(layout.build_gradle()).unwrap();
        assert!(gradle.contains("applicationId \"net.demo.shell\""));
    }
}
