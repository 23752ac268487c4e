//! Console narration of a deployment run

use std::io::{self, Write};
use std::sync::Mutex;

use deploy_recorder::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::deploy::{
    render_deploy_header, render_deploy_summary, render_deployed, render_failure_line,
    render_pending, render_step, render_verified, DeployHeader,
};

/// Event sink that narrates each step for a human reader
pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn render(&self, event: DeployEvent) -> String {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            DeployEvent::Started {
                artifact,
                network,
                label,
                deployer,
                balance,
            } => {
                let header = DeployHeader {
                    artifact: &artifact,
                    network: network.as_str(),
                    label: &label,
                    deployer,
                    balance,
                };
                format!("{}\n", render_deploy_header(&header, color, unicode))
            }
            DeployEvent::Submitting { .. } => render_step(
                Icon::Progress,
                "Sending deployment transaction...",
                color,
                unicode,
            ),
            DeployEvent::AwaitingConfirmation { tx_hash } => render_pending(tx_hash, color, unicode),
            DeployEvent::Deployed { address, .. } => render_deployed(address, color, unicode),
            DeployEvent::VerificationStarted { field_count } => format!(
                "\n{}",
                render_step(
                    Icon::Verify,
                    &format!("Verifying deployment ({field_count} reads)"),
                    color,
                    unicode,
                )
            ),
            DeployEvent::Verified(value) => {
                render_verified(&value, self.ui.verbose > 0, color, unicode)
            }
            DeployEvent::RecordSaved { path } => format!(
                "\n{}",
                render_step(
                    Icon::Record,
                    &format!("Deployment info saved to {}", path.display()),
                    color,
                    unicode,
                )
            ),
            DeployEvent::Completed {
                record,
                path,
                next_steps,
            } => format!(
                "\n{}",
                render_deploy_summary(&record, &path, &next_steps, color, unicode)
            ),
            DeployEvent::Failed { message, .. } => {
                format!("\n{}", render_failure_line(&message, color, unicode))
            }
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let text = self.render(event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }
}
