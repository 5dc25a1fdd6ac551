use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "webapkdev: wrap an HTML page in an Android WebView project", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Project options shared by `generate` and `scaffold`. Flags win over the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct ProjectArgs {
    /// Directory the project folder is created in
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// HTML document to package (default: built-in page)
    #[arg(long)]
    pub html: Option<PathBuf>,

    #[arg(long = "project-dir")]
    pub project_dir: Option<String>,

    #[arg(long = "app-name")]
    pub app_name: Option<String>,

    /// Application id, e.g. com.example.app
    #[arg(long)]
    pub package: Option<String>,

    #[arg(long = "version-name")]
    pub version_name: Option<String>,

    #[arg(long = "version-code")]
    pub version_code: Option<u32>,

    /// Emit MainActivity.kt instead of MainActivity.java
    #[arg(long)]
    pub kotlin: bool,

    /// Directory of template overrides (matched by file name)
    #[arg(long)]
    pub templates: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold the project, then run the simulated build and signing
    Generate {
        #[command(flatten)]
        project: ProjectArgs,

        /// Simulated compile time in milliseconds
        #[arg(long = "build-delay-ms")]
        build_delay_ms: Option<u64>,

        /// Simulated signing time in milliseconds
        #[arg(long = "sign-delay-ms")]
        sign_delay_ms: Option<u64>,
    },

    /// Write the project sources and HTML asset only
    Scaffold {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// List entries of an APK
    List { apk: PathBuf },

    /// Check a generated project's outputs and archives
    Verify {
        #[command(flatten)]
        project: ProjectArgs,
    },
}
