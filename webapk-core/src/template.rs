use crate::config::{Language, ProjectConfig};
use crate::error::Result;
use quick_xml::escape::escape;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Template {
    Manifest,
    ActivityLayout,
    Strings,
    JavaActivity,
    KotlinActivity,
    BuildGradle,
    DefaultHtml,
}

impl Template {
    /// Name looked up in an override directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Template::Manifest => "AndroidManifest.xml",
            Template::ActivityLayout => "activity_main.xml",
            Template::Strings => "strings.xml",
            Template::JavaActivity => "MainActivity.java",
            Template::KotlinActivity => "MainActivity.kt",
            Template::BuildGradle => "build.gradle",
            Template::DefaultHtml => "index.html",
        }
    }

    pub fn activity(lang: Language) -> Self {
        match lang {
            Language::Java => Template::JavaActivity,
            Language::Kotlin => Template::KotlinActivity,
        }
    }

    /// XML/HTML templates get their substituted values escaped.
    pub fn is_markup(self) -> bool {
        matches!(
            self,
            Template::Manifest
                | Template::ActivityLayout
                | Template::Strings
                | Template::DefaultHtml
        )
    }

    fn embedded(self) -> &'static str {
        match self {
            Template::Manifest => include_str!("../templates/AndroidManifest.xml"),
            Template::ActivityLayout => include_str!("../templates/activity_main.xml"),
            Template::Strings => include_str!("../templates/strings.xml"),
            Template::JavaActivity => include_str!("../templates/MainActivity.java"),
            Template::KotlinActivity => include_str!("../templates/MainActivity.kt"),
            Template::BuildGradle => include_str!("../templates/build.gradle"),
            Template::DefaultHtml => include_str!("../templates/index.html"),
        }
    }
}

/// Values substituted for `{{key}}` placeholders.
#[derive(Clone, Debug)]
pub struct TemplateVars {
    pairs: Vec<(&'static str, String)>,
}

impl TemplateVars {
    pub fn from_config(cfg: &ProjectConfig, year: i32) -> Self {
        let p = &cfg.project;
        Self {
            pairs: vec![
                ("package", p.package.clone()),
                ("app_name", p.app_name.clone()),
                ("version_name", p.version_name.clone()),
                ("version_code", p.version_code.to_string()),
                ("compile_sdk", cfg.sdk.compile.to_string()),
                ("min_sdk", cfg.sdk.min.to_string()),
                ("target_sdk", cfg.sdk.target.to_string()),
                ("year", year.to_string()),
            ],
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Embedded templates, optionally shadowed by files in an override directory.
#[derive(Clone, Debug, Default)]
pub struct TemplateSet {
    override_dir: Option<PathBuf>,
}

impl TemplateSet {
    pub fn new(override_dir: Option<&Path>) -> Self {
        Self {
            override_dir: override_dir.map(Path::to_path_buf),
        }
    }

    pub fn source(&self, t: Template) -> Result<Cow<'static, str>> {
        if let Some(dir) = &self.override_dir {
            let p = dir.join(t.file_name());
            if p.is_file() {
                tracing::debug!(template = t.file_name(), path = %p.display(), "using override");
                return Ok(Cow::Owned(fs::read_to_string(&p)?));
            }
        }
        Ok(Cow::Borrowed(t.embedded()))
    }

    pub fn render(&self, t: Template, vars: &TemplateVars) -> Result<String> {
        let src = self.source(t)?;
        Ok(if t.is_markup() {
            substitute(&src, vars, true)
        } else {
            render(&src, vars)
        })
    }
}

/// Replace every `{{key}}` that `vars` knows; anything else is copied through.
pub fn render(src: &str, vars: &TemplateVars) -> String {
    substitute(src, vars, false)
}

fn substitute(src: &str, vars: &TemplateVars, markup: bool) -> String {
    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) => match vars.get(after[..close].trim()) {
                Some(v) if markup => {
                    out.push_str(&escape(v));
                    rest = &after[close + 2..];
                }
                Some(v) => {
                    out.push_str(v);
                    rest = &after[close + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            },
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Footer year, taken in UTC; may differ from local time around New Year.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars {
        TemplateVars::from_config(&ProjectConfig::default(), 2031)
    }

    #[test]
    fn placeholders_are_substituted() {
        assert_eq!(
            render("id {{package}} v{{ version_code }}", &vars()),
            "id com.spiderapp.app v1"
        );
    }

    #[test]
    fn unknown_and_unterminated_placeholders_pass_through() {
        assert_eq!(render("a {{nope}} b", &vars()), "a {{nope}} b");
        assert_eq!(render("tail {{year", &vars()), "tail {{year");
        assert_eq!(render("{{{{year}}", &vars()), "{{2031");
    }

    #[test]
    fn default_strings_render() {
        let s = TemplateSet::default().render(Template::Strings, &vars()).unwrap();
        assert_eq!(
            s,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n    <string name=\"app_name\">SpiderAPP</string>\n</resources>"
        );
    }

    #[test]
    fn default_html_carries_year() {
        let html = TemplateSet::default().render(Template::DefaultHtml, &vars()).unwrap();
        assert!(html.contains("<title>SpiderAPP</title>"));
        assert!(html.contains("&copy; 2031 SpiderAPP"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn markup_templates_escape_values() {
        let mut cfg = ProjectConfig::default();
        cfg.project.app_name = "Tom & <Jerry's>".into();
        let vars = TemplateVars::from_config(&cfg, 2031);
        let set = TemplateSet::default();

        let strings = set.render(Template::Strings, &vars).unwrap();
        assert!(strings.contains(
            "<string name=\"app_name\">Tom &amp; &lt;Jerry&apos;s&gt;</string>"
        ));
        // plain-text templates are left alone
        assert_eq!(render("{{app_name}}", &vars), "Tom & <Jerry's>");
    }

    #[test]
    fn override_dir_shadows_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("strings.xml"), "<r>{{app_name}}</r>").unwrap();
        let set = TemplateSet::new(Some(dir.path()));
        assert_eq!(set.render(Template::Strings, &vars()).unwrap(), "<r>SpiderAPP</r>");
        // not overridden
        assert!(
            set.render(Template::Manifest, &vars())
                .unwrap()
                .contains("package=\"com.spiderapp.app\"")
        );
    }
}
