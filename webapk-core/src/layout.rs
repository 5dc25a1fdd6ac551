use crate::config::ProjectConfig;
use std::path::{Path, PathBuf};

pub const UNSIGNED_APK: &str = "app-release-unsigned.apk";
pub const SIGNED_APK: &str = "app-release.apk";

/// Every path the pipeline touches, derived from an output root and the config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    package_path: PathBuf,
    activity_ext: &'static str,
}

impl ProjectLayout {
    pub fn new(out_root: &Path, cfg: &ProjectConfig) -> Self {
        let package_path = cfg.project.package.split('.').collect::<PathBuf>();
        Self {
            root: out_root.join(&cfg.project.dir),
            package_path,
            activity_ext: cfg.activity.language.extension(),
        }
    }

    pub fn app_dir(&self) -> PathBuf {
        self.root.join("app")
    }

    pub fn main_dir(&self) -> PathBuf {
        self.app_dir().join("src").join("main")
    }

    pub fn java_dir(&self) -> PathBuf {
        self.main_dir().join("java").join(&self.package_path)
    }

    pub fn layout_dir(&self) -> PathBuf {
        self.main_dir().join("res").join("layout")
    }

    pub fn values_dir(&self) -> PathBuf {
        self.main_dir().join("res").join("values")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.main_dir().join("assets")
    }

    pub fn manifest(&self) -> PathBuf {
        self.main_dir().join("AndroidManifest.xml")
    }

    pub fn main_activity(&self) -> PathBuf {
        self.java_dir().join(format!("MainActivity.{}", self.activity_ext))
    }

    pub fn build_gradle(&self) -> PathBuf {
        self.app_dir().join("build.gradle")
    }

    pub fn activity_layout(&self) -> PathBuf {
        self.layout_dir().join("activity_main.xml")
    }

    pub fn strings(&self) -> PathBuf {
        self.values_dir().join("strings.xml")
    }

    pub fn index_html(&self) -> PathBuf {
        self.assets_dir().join("index.html")
    }

    pub fn release_dir(&self) -> PathBuf {
        self.app_dir()
            .join("build")
            .join("outputs")
            .join("apk")
            .join("release")
    }

    pub fn unsigned_apk(&self) -> PathBuf {
        self.release_dir().join(UNSIGNED_APK)
    }

    pub fn signed_apk(&self) -> PathBuf {
        self.release_dir().join(SIGNED_APK)
    }

    /// Directories the scaffolder creates, parents first.
    pub fn scaffold_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.java_dir(),
            self.layout_dir(),
            self.values_dir(),
            self.assets_dir(),
        ]
    }

    /// The eight files a successful run leaves behind.
    pub fn outputs(&self) -> [PathBuf; 8] {
        [
            self.index_html(),
            self.manifest(),
            self.main_activity(),
            self.build_gradle(),
            self.activity_layout(),
            self.strings(),
            self.unsigned_apk(),
            self.signed_apk(),
        ]
    }
}
