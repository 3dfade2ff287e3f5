use crate::{
    config::types::Config,
    scaffold::{self, EnvironmentSetup, TemplateValues},
};
use std::path::PathBuf;

pub async fn handle_fastapi(
    path: Option<PathBuf>,
    dry_run: bool,
    skip_venv: bool,
    skip_install: bool,
    config: &Config,
) -> crate::Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from(&config.scaffold.project_dir));
    let values = TemplateValues::from(&config.scaffold);

    let mut setup = EnvironmentSetup::from(&config.scaffold);
    setup.create_venv = !skip_venv;
    setup.install_dependencies = !skip_install;

    scaffold::scaffold_fastapi(&root, &values, &setup, dry_run).await?;
    Ok(())
}
