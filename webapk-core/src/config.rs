use crate::error::{Result, WebApkError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_PROJECT_DIR: &str = "AndroidProject";
pub const DEFAULT_APP_NAME: &str = "SpiderAPP";
pub const DEFAULT_PACKAGE: &str = "com.spiderapp.app";

/// Everything the pipeline needs to know about the project it generates.
/// Loaded from an optional TOML file; unset fields fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub project: ProjectSection,
    pub sdk: SdkSection,
    pub activity: ActivitySection,
    pub html: HtmlSection,
    pub templates: TemplatesSection,
    pub simulation: SimulationSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSection {
    pub dir: String,
    pub app_name: String,
    pub package: String,
    pub version_name: String,
    pub version_code: u32,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            dir: DEFAULT_PROJECT_DIR.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            version_name: "1.0".to_string(),
            version_code: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdkSection {
    pub compile: u32,
    pub min: u32,
    pub target: u32,
}

impl Default for SdkSection {
    fn default() -> Self {
        Self {
            compile: 33,
            min: 21,
            target: 33,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Kotlin,
}

impl Language {
    pub fn extension(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kt",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActivitySection {
    pub language: Language,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlSection {
    /// Path to an HTML document. Relative paths resolve against the config file.
    pub file: Option<PathBuf>,
    /// Inline HTML; takes precedence over `file`.
    pub inline: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesSection {
    /// Directory whose files override the embedded templates by name.
    pub dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    pub build_delay_ms: u64,
    pub sign_delay_ms: u64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            build_delay_ms: 2000,
            sign_delay_ms: 1000,
        }
    }
}

impl ProjectConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| WebApkError::Config(format!("invalid config: {e}")))
    }

    /// Read a config file. Relative `html.file` and `templates.dir` entries are
    /// rebased onto the directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            WebApkError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut cfg = Self::from_toml_str(&text)?;
        let base = path.parent().unwrap_or(Path::new("."));
        if let Some(f) = cfg.html.file.as_mut() {
            if f.is_relative() {
                *f = base.join(&*f);
            }
        }
        if let Some(d) = cfg.templates.dir.as_mut() {
            if d.is_relative() {
                *d = base.join(&*d);
            }
        }
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        validate_package(&self.project.package)?;
        validate_project_dir(&self.project.dir)?;
        if self.project.app_name.trim().is_empty() {
            return Err(WebApkError::Config("app_name must not be empty".into()));
        }
        // app_name lands in MANIFEST.MF headers, one per line
        if self.project.app_name.chars().any(char::is_control) {
            return Err(WebApkError::Config(
                "app_name must not contain control characters".into(),
            ));
        }
        let v = &self.project.version_name;
        if v.is_empty() || v.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
            return Err(WebApkError::Config(format!(
                "version_name {v:?} must be non-empty without quotes, backslashes or control characters"
            )));
        }
        if let Some(dir) = &self.templates.dir {
            if !dir.is_dir() {
                return Err(WebApkError::Config(format!(
                    "templates dir {} is not a directory",
                    dir.display()
                )));
            }
        }
        if self.sdk.min > self.sdk.target {
            return Err(WebApkError::Config(format!(
                "sdk.min ({}) exceeds sdk.target ({})",
                self.sdk.min, self.sdk.target
            )));
        }
        Ok(())
    }

    /// Supplied HTML, or `None` when the built-in page should be used.
    /// Empty documents count as not supplied.
    /// File contents are taken as raw bytes, whatever their encoding.
    pub fn supplied_html(&self) -> Result<Option<Vec<u8>>> {
        if let Some(s) = &self.html.inline {
            if !s.is_empty() {
                return Ok(Some(s.clone().into_bytes()));
            }
        }
        if let Some(p) = &self.html.file {
            let bytes = fs::read(p)?;
            if !bytes.is_empty() {
                return Ok(Some(bytes));
            }
        }
        Ok(None)
    }
}

fn validate_package(pkg: &str) -> Result<()> {
    let segments: Vec<&str> = pkg.split('.').collect();
    if segments.len() < 2 {
        return Err(WebApkError::Config(format!(
            "package '{pkg}' needs at least two segments"
        )));
    }
    for seg in segments {
        let mut chars = seg.chars();
        let ok = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if !ok {
            return Err(WebApkError::Config(format!(
                "package '{pkg}' has invalid segment '{seg}'"
            )));
        }
    }
    Ok(())
}

fn validate_project_dir(dir: &str) -> Result<()> {
    let mut comps = Path::new(dir).components();
    match (comps.next(), comps.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(WebApkError::Config(format!(
            "project dir '{dir}' must be a single relative path component"
        ))),
    }
}
