use std::sync::Arc;

use anyhow::{Context, Result};
use deploy_recorder::config::Config;
use deploy_recorder::domain::ports::DeployEventSink;
use deploy_recorder::infrastructure::JsonEventSink;
use deploy_recorder::presentation::{create_deploy_use_case, Cli};

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

/// Run one deployment as described by the flags, config file and environment.
///
/// Returns the context the run was presented with so the caller can render
/// a failure the same way.
pub async fn cmd_deploy(cli: &Cli) -> (UiContext, Result<()>) {
    let mut ui = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());
    let result = run(cli, &mut ui).await;
    (ui, result)
}

async fn run(cli: &Cli, ui: &mut UiContext) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let loaded = Config::load_or_default(cli.config.as_deref(), &cwd)?;
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "loaded config");
    }

    let config = loaded.with_env_overrides(|key| std::env::var(key).ok());
    *ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    for warning in &loaded.warnings {
        tracing::warn!(key = %warning.key, file = %warning.file.display(), "unknown config key");
    }
    if !loaded.warnings.is_empty() && !ui.json {
        eprint!(
            "{}",
            WarningBlock::from_config_warnings(&loaded.warnings).render(ui.color, ui.unicode)
        );
    }

    let network = config.resolve_network(cli.network.as_deref())?;
    let options = config.deploy_options(network.clone())?;
    let use_case = create_deploy_use_case(&config, &network, |key| std::env::var(key).ok())?;
    tracing::debug!(
        network = %network,
        artifacts = %config.paths.artifacts.display(),
        deployments = %config.paths.deployments.display(),
        "resolved deployment target"
    );

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(*ui))
    };

    use_case.execute_with_events(&options, sink).await?;
    Ok(())
}
