use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::template::{Template, TemplateSet, TemplateVars};
use std::fs;

/// Write `index.html` into the assets directory and return its bytes.
/// `None` selects the built-in page. Supplied bytes are written untouched.
pub fn write_html_asset(
    layout: &ProjectLayout,
    supplied: Option<Vec<u8>>,
    templates: &TemplateSet,
    vars: &TemplateVars,
) -> Result<Vec<u8>> {
    let bytes = match supplied {
        Some(h) => h,
        None => {
            tracing::info!("no HTML supplied, using default page");
            templates.render(Template::DefaultHtml, vars)?.into_bytes()
        }
    };
    tracing::info!("saving HTML asset");
    fs::create_dir_all(layout.assets_dir())?;
    fs::write(layout.index_html(), &bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;

    #[test]
    fn supplied_html_is_written_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = ProjectConfig::default();
        let layout = ProjectLayout::new(tmp.path(), &cfg);
        let vars = TemplateVars::from_config(&cfg, 2030);
        // windows-1252 e-acute; not valid UTF-8
        let doc = b"<html>{{year}} caf\xe9</html>".to_vec();

        let bytes =
            write_html_asset(&layout, Some(doc.clone()), &TemplateSet::default(), &vars).unwrap();
        assert_eq!(bytes, doc);
        assert_eq!(fs::read(layout.index_html()).unwrap(), doc);
    }

    #[test]
    fn default_page_gets_year() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = ProjectConfig::default();
        let layout = ProjectLayout::new(tmp.path(), &cfg);
        let vars = TemplateVars::from_config(&cfg, 2030);

        let bytes = write_html_asset(&layout, None, &TemplateSet::default(), &vars).unwrap();
        let s = String::from_utf8(bytes).unwrap();
        assert!(s.contains("&copy; 2030 SpiderAPP"));
    }
}
