use std::path::PathBuf;

use webapk_core::config::Language;
use webapk_core::digest::to_hex;
use webapk_core::error::Result;
use webapk_core::{ProjectConfig, ProjectLayout, generate, list_entries, scaffold, verify};

use crate::presentation::cli::ProjectArgs;

/// Defaults, then the config file, then flags.
fn config_from_args(args: &ProjectArgs) -> Result<ProjectConfig> {
    let mut cfg = match &args.config {
        Some(path) => ProjectConfig::load(path)?,
        None => ProjectConfig::default(),
    };
    if let Some(html) = &args.html {
        cfg.html.file = Some(html.clone());
        cfg.html.inline = None;
    }
    if let Some(dir) = &args.project_dir {
        cfg.project.dir = dir.clone();
    }
    if let Some(name) = &args.app_name {
        cfg.project.app_name = name.clone();
    }
    if let Some(pkg) = &args.package {
        cfg.project.package = pkg.clone();
    }
    if let Some(v) = &args.version_name {
        cfg.project.version_name = v.clone();
    }
    if let Some(code) = args.version_code {
        cfg.project.version_code = code;
    }
    if args.kotlin {
        cfg.activity.language = Language::Kotlin;
    }
    if let Some(t) = &args.templates {
        cfg.templates.dir = Some(t.clone());
    }
    tracing::debug!(?cfg, "effective config");
    Ok(cfg)
}

pub fn handle_generate(
    project: ProjectArgs,
    build_delay_ms: Option<u64>,
    sign_delay_ms: Option<u64>,
) -> Result<()> {
    let mut cfg = config_from_args(&project)?;
    if let Some(ms) = build_delay_ms {
        cfg.simulation.build_delay_ms = ms;
    }
    if let Some(ms) = sign_delay_ms {
        cfg.simulation.sign_delay_ms = ms;
    }
    let report = generate(&project.out, &cfg)?;
    println!("APK: {}", report.signed_apk.display());
    println!(
        "size={} blake3={}",
        report.apk_size,
        to_hex(&report.apk_blake3)
    );
    Ok(())
}

pub fn handle_scaffold(project: ProjectArgs) -> Result<()> {
    let cfg = config_from_args(&project)?;
    for p in scaffold(&project.out, &cfg)? {
        println!("{}", p.display());
    }
    Ok(())
}

pub fn handle_list(apk: PathBuf) -> Result<()> {
    for r in list_entries(&apk)? {
        println!(
            "{:<24} {:>8} bytes  c={:<8} crc={:08x}",
            r.name, r.size, r.compressed, r.crc32
        );
    }
    Ok(())
}

pub fn handle_verify(project: ProjectArgs) -> Result<()> {
    let cfg = config_from_args(&project)?;
    cfg.validate()?;
    let layout = ProjectLayout::new(&project.out, &cfg);
    let report = verify(&layout)?;
    println!(
        "{} outputs, {} entries, blake3={}",
        report.outputs_checked,
        report.entries.len(),
        to_hex(&report.apk_blake3)
    );
    println!("verify: OK");
    Ok(())
}
