use std::io::Write;

use deploy_recorder::domain::entities::DEFAULT_LABEL_KEY;
use deploy_recorder::{ConfigError, DeployError};

use crate::ui::blocks::failure::FailureBlock;
use crate::ui::context::UiContext;

/// Step name reported for errors raised before the pipeline starts
const CONFIG_STEP: &str = "config";

fn failure_step(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<DeployError>() {
        Some(deploy) => deploy.step().as_str(),
        None => CONFIG_STEP,
    }
}

/// A concrete next action for errors the user can fix locally
pub fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return match deploy {
            DeployError::ArtifactNotFound { .. } => {
                Some("Compile the contracts first (e.g. `npx hardhat compile`)".to_string())
            }
            DeployError::Persistence { path, .. } => Some(format!(
                "Check that {} is writable; the contract is deployed but unrecorded",
                path.parent().unwrap_or(path.as_path()).display()
            )),
            _ => None,
        };
    }

    match err.downcast_ref::<ConfigError>()? {
        ConfigError::UnknownNetwork { name, .. } => Some(format!(
            "Add a [networks.{name}] table with a `url` to deployer.toml"
        )),
        ConfigError::MissingPrivateKey { var } => {
            Some(format!("Export {var} with the deployer's hex private key"))
        }
        ConfigError::InvalidLabelKey { .. } => Some(format!(
            "Pick another `label_key`, e.g. \"{}\"",
            DEFAULT_LABEL_KEY
        )),
        ConfigError::EmptyVerification => {
            Some("Remove `verification = []` to use the default reads".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let mut block = FailureBlock::new(failure_step(err), format!("{err:#}"));
    if let Some(hint) = hint_for(err) {
        block = block.with_hint(hint);
    }
    block.render(ui.color, ui.unicode)
}

/// Report a failed run.
///
/// Pipeline failures were already emitted as an `error` event by the JSON
/// sink; configuration failures happen earlier and get their own event here.
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if !ui.json {
        eprint!("{}", format_error(err, ui));
        return;
    }

    if err.downcast_ref::<DeployError>().is_none() {
        let event = serde_json::json!({
            "event": "error",
            "command": "deploy",
            "status": "failed",
            "step": CONFIG_STEP,
            "message": format!("{err:#}"),
        });
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{}", event);
        let _ = stdout.flush();
    }
    eprintln!("Error: {err:#}");
}
