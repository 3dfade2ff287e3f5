use crate::config::types::ScaffoldConfig;
use crate::error::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Directories created under the project root
pub const DIRECTORIES: &[&str] = &[
    "app/api/v1",
    "app/core",
    "app/models",
    "app/schemas",
    "app/services",
    "app/db",
    "tests",
    "migrations",
];

/// Empty package markers
pub const INIT_FILES: &[&str] = &[
    "app/__init__.py",
    "app/api/__init__.py",
    "app/api/v1/__init__.py",
    "app/core/__init__.py",
    "app/models/__init__.py",
    "app/schemas/__init__.py",
    "app/services/__init__.py",
    "app/db/__init__.py",
    "tests/__init__.py",
];

/// (output path, template name, template source)
const TEMPLATES: &[(&str, &str, &str)] = &[
    (
        "app/main.py",
        "main.py",
        include_str!("../../templates/fastapi/main.py.tera"),
    ),
    (
        "app/api/v1/router.py",
        "router.py",
        include_str!("../../templates/fastapi/router.py.tera"),
    ),
    (
        "requirements.txt",
        "requirements.txt",
        include_str!("../../templates/fastapi/requirements.txt.tera"),
    ),
    (
        ".env.example",
        "env.example",
        include_str!("../../templates/fastapi/env.example.tera"),
    ),
    (
        "README.md",
        "README.md",
        include_str!("../../templates/fastapi/README.md.tera"),
    ),
];

/// A file to write, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldFile {
    pub path: String,
    pub content: String,
}

/// Fully rendered project skeleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldLayout {
    pub directories: Vec<String>,
    pub files: Vec<ScaffoldFile>,
}

/// Values substituted into the templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValues {
    pub title: String,
    pub version: String,
    pub venv_dir: String,
}

impl Default for TemplateValues {
    fn default() -> Self {
        let config = ScaffoldConfig::default();
        Self::from(&config)
    }
}

impl From<&ScaffoldConfig> for TemplateValues {
    fn from(config: &ScaffoldConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            venv_dir: config.venv_dir.clone(),
        }
    }
}

impl ScaffoldLayout {
    /// Render the FastAPI layout. Init files come first, as empty files.
    pub fn fastapi(values: &TemplateValues) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.add_raw_templates(
            TEMPLATES
                .iter()
                .map(|(_, name, source)| (*name, *source)),
        )?;

        let mut context = Context::new();
        context.insert("title", &values.title);
        context.insert("version", &values.version);
        context.insert("venv_dir", &values.venv_dir);

        let mut files: Vec<ScaffoldFile> = INIT_FILES
            .iter()
            .map(|path| ScaffoldFile {
                path: path.to_string(),
                content: String::new(),
            })
            .collect();

        for (path, name, _) in TEMPLATES {
            files.push(ScaffoldFile {
                path: path.to_string(),
                content: tera.render(name, &context)?,
            });
        }

        Ok(Self {
            directories: DIRECTORIES.iter().map(|d| d.to_string()).collect(),
            files,
        })
    }

    pub fn file(&self, path: &str) -> Option<&ScaffoldFile> {
        self.files.iter().find(|f| f.path == path)
    }
}
