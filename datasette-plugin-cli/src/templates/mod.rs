//! Plugin template rendering

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;
use std::path::PathBuf;

use crate::config::ScaffoldConfig;
use crate::names::PluginNames;

pub mod files;
pub use files::*;

/// A file in the generated project, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project root
    pub relative_path: PathBuf,
    /// Handlebars source
    pub template: &'static str,
}

/// Plugin template renderer
pub struct PluginTemplate {
    names: PluginNames,
    context: serde_json::Value,
    handlebars: Handlebars<'static>,
}

impl PluginTemplate {
    /// Create a new plugin template
    #[must_use]
    pub fn new(names: PluginNames, config: &ScaffoldConfig) -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        // Prose templates append their own period
        let sentence = config
            .description
            .strip_suffix('.')
            .unwrap_or(&config.description);

        let context = json!({
            "plugin_name": names.plugin_name(),
            "module_name": names.module_name(),
            "entry_point": names.entry_point(),
            "description": sentence,
            "description_toml": toml_string(&config.description),
            "author_toml": format!(
                "{{name = {}, email = {}}}",
                toml_string(&config.author_name),
                toml_string(&config.author_email)
            ),
        });

        Self {
            names,
            context,
            handlebars,
        }
    }

    /// Names this template renders for
    #[must_use]
    pub const fn names(&self) -> &PluginNames {
        &self.names
    }

    /// Every file of the project, in write order
    #[must_use]
    pub fn files(&self) -> Vec<TemplateFile> {
        let module_dir = PathBuf::from(self.names.module_name());
        let tests_dir = PathBuf::from("tests");

        vec![
            TemplateFile {
                relative_path: PathBuf::from("pyproject.toml"),
                template: PYPROJECT_TOML,
            },
            TemplateFile {
                relative_path: PathBuf::from("README.md"),
                template: README_MD,
            },
            TemplateFile {
                relative_path: module_dir.join("__init__.py"),
                template: MODULE_INIT_PY,
            },
            TemplateFile {
                relative_path: tests_dir.join("__init__.py"),
                template: TESTS_INIT_PY,
            },
            TemplateFile {
                relative_path: tests_dir.join(self.names.test_file_name()),
                template: TEST_PLUGIN_PY,
            },
            TemplateFile {
                relative_path: PathBuf::from("pytest.ini"),
                template: PYTEST_INI,
            },
            TemplateFile {
                relative_path: PathBuf::from(".gitignore"),
                template: GITIGNORE,
            },
        ]
    }

    /// Render a single template against the plugin context
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to parse or render.
    pub fn render(&self, file: &TemplateFile) -> Result<String> {
        self.handlebars
            .render_template(file.template, &self.context)
            .with_context(|| {
                format!(
                    "Failed to render template: {}",
                    file.relative_path.display()
                )
            })
    }
}

/// Quote a value as a TOML string literal
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str) -> PluginTemplate {
        PluginTemplate::new(PluginNames::new(name).unwrap(), &ScaffoldConfig::default())
    }

    fn render(template: &PluginTemplate, path: &str) -> String {
        let file = template
            .files()
            .into_iter()
            .find(|f| f.relative_path == PathBuf::from(path))
            .unwrap();
        template.render(&file).unwrap()
    }

    #[test]
    fn test_file_order() {
        let paths: Vec<_> = template("datasette-my-feature")
            .files()
            .into_iter()
            .map(|f| f.relative_path)
            .collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("pyproject.toml"),
                PathBuf::from("README.md"),
                PathBuf::from("datasette_my_feature/__init__.py"),
                PathBuf::from("tests/__init__.py"),
                PathBuf::from("tests/test_datasette_my_feature.py"),
                PathBuf::from("pytest.ini"),
                PathBuf::from(".gitignore"),
            ]
        );
    }

    #[test]
    fn test_pyproject_rendering() {
        let rendered = render(&template("datasette-my-feature"), "pyproject.toml");

        assert!(rendered.starts_with("[project]\nname = \"datasette-my-feature\"\n"));
        assert!(rendered.contains("version = \"0.1.0\""));
        assert!(rendered.contains("license = {text = \"Apache-2.0\"}"));
        assert!(rendered.contains("{name = \"Your Name\", email = \"you@example.com\"}"));
        assert!(rendered.contains("dependencies = [\n    \"datasette\"\n]"));
        assert!(rendered.contains("dev = [\n    \"pytest\",\n    \"pytest-asyncio\"\n]"));
        assert!(rendered.contains(
            "[project.entry-points.datasette]\nmy_feature = \"datasette_my_feature\"\n"
        ));
    }

    #[test]
    fn test_pyproject_parses_as_toml() {
        let rendered = render(&template("datasette-my-feature"), "pyproject.toml");
        let parsed: toml::Value = toml::from_str(&rendered).unwrap();

        assert_eq!(parsed["project"]["name"].as_str(), Some("datasette-my-feature"));
        assert_eq!(
            parsed["project"]["entry-points"]["datasette"]["my_feature"].as_str(),
            Some("datasette_my_feature")
        );
        assert_eq!(
            parsed["build-system"]["build-backend"].as_str(),
            Some("setuptools.build_meta")
        );
    }

    #[test]
    fn test_module_stub_rendering() {
        let rendered = render(&template("datasette-my-feature"), "datasette_my_feature/__init__.py");

        assert!(rendered.starts_with("\"\"\"\ndatasette-my-feature\n\nA Datasette plugin.\n\"\"\""));
        assert!(rendered.contains("from datasette import hookimpl"));
        assert!(rendered.contains("__version__ = \"0.1.0\""));
        assert!(rendered.contains("@hookimpl\ndef prepare_connection(conn):"));
        assert!(rendered.contains("# @hookimpl\n# def register_routes():"));
        assert!(rendered.contains("datasette.plugin_config(\"datasette-my-feature\") or {}"));
        assert!(rendered.contains("{\"href\": datasette.urls.path(\"/-/my-page\"), \"label\": \"My Feature\"}"));
    }

    #[test]
    fn test_smoke_test_rendering() {
        let rendered = render(
            &template("datasette-my-feature"),
            "tests/test_datasette_my_feature.py",
        );

        assert!(rendered.starts_with("\"\"\"Tests for datasette-my-feature.\"\"\""));
        assert!(rendered.contains("installed_plugins = {p[\"name\"] for p in response.json()}"));
        assert!(rendered.contains("assert \"datasette-my-feature\" in installed_plugins"));
    }

    #[test]
    fn test_readme_rendering() {
        let rendered = render(&template("datasette-my-feature"), "README.md");

        assert!(rendered.starts_with("# datasette-my-feature\n\nA Datasette plugin.\n"));
        assert!(rendered.contains("pip install datasette-my-feature\n"));
        assert!(rendered.contains("plugins:\n  datasette-my-feature:\n    option1: value1"));
    }

    #[test]
    fn test_static_files_render_verbatim() {
        let template = template("datasette-my-feature");
        assert_eq!(render(&template, "pytest.ini"), PYTEST_INI);
        assert_eq!(render(&template, ".gitignore"), GITIGNORE);
        assert_eq!(render(&template, "tests/__init__.py"), "");
    }

    #[test]
    fn test_config_values_substituted() {
        let config = ScaffoldConfig::default().with_overrides(
            Some("Maps for Datasette".to_string()),
            Some("Jane Doe".to_string()),
            Some("jane@example.com".to_string()),
        );
        let template =
            PluginTemplate::new(PluginNames::new("datasette-maps").unwrap(), &config);
        let rendered = render(&template, "pyproject.toml");

        assert!(rendered.contains("description = \"Maps for Datasette\""));
        assert!(rendered.contains("{name = \"Jane Doe\", email = \"jane@example.com\"}"));
    }

    #[test]
    fn test_quoted_metadata_stays_valid_toml() {
        let config = ScaffoldConfig::default().with_overrides(
            Some("My \"cool\" plugin".to_string()),
            Some("O'Brien \\ Co".to_string()),
            Some("dev@example.com".to_string()),
        );
        let template =
            PluginTemplate::new(PluginNames::new("datasette-cool").unwrap(), &config);
        let rendered = render(&template, "pyproject.toml");
        let parsed: toml::Value = toml::from_str(&rendered).unwrap();

        assert_eq!(
            parsed["project"]["description"].as_str(),
            Some("My \"cool\" plugin")
        );
        assert_eq!(
            parsed["project"]["authors"][0]["name"].as_str(),
            Some("O'Brien \\ Co")
        );
        assert_eq!(
            parsed["project"]["authors"][0]["email"].as_str(),
            Some("dev@example.com")
        );
    }

    #[test]
    fn test_trailing_period_not_doubled() {
        let config = ScaffoldConfig::default().with_overrides(
            Some("Adds maps.".to_string()),
            None,
            None,
        );
        let template =
            PluginTemplate::new(PluginNames::new("datasette-maps").unwrap(), &config);

        let readme = render(&template, "README.md");
        assert!(readme.contains("\n\nAdds maps.\n"));
        assert!(!readme.contains("maps.."));

        let module = render(&template, "datasette_maps/__init__.py");
        assert!(module.contains("\n\nAdds maps.\n\"\"\""));

        let pyproject = render(&template, "pyproject.toml");
        assert!(pyproject.contains("description = \"Adds maps.\""));
    }

    #[test]
    fn test_no_html_escaping() {
        let config = ScaffoldConfig::default().with_overrides(
            Some("Charts & <graphs>".to_string()),
            None,
            None,
        );
        let template =
            PluginTemplate::new(PluginNames::new("datasette-charts").unwrap(), &config);
        assert!(render(&template, "README.md").contains("Charts & <graphs>."));
    }
}
