//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                artifact,
                network,
                label,
                deployer,
                balance,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "artifact": artifact,
                    "network": network.as_str(),
                    "label": label,
                    "deployer": deployer.to_checksum(None),
                    "balance_wei": balance.to_string(),
                })
            }

            DeployEvent::Submitting { artifact } => {
                serde_json::json!({
                    "event": "submitting",
                    "command": "deploy",
                    "artifact": artifact,
                })
            }

            DeployEvent::AwaitingConfirmation { tx_hash } => {
                serde_json::json!({
                    "event": "pending",
                    "command": "deploy",
                    "transaction_hash": tx_hash.to_string(),
                })
            }

            DeployEvent::Deployed {
                address,
                tx_hash,
                gas_limit,
            } => {
                serde_json::json!({
                    "event": "deployed",
                    "command": "deploy",
                    "contract_address": address.to_checksum(None),
                    "transaction_hash": tx_hash.to_string(),
                    "gas_limit": gas_limit.to_string(),
                })
            }

            DeployEvent::VerificationStarted { field_count } => {
                serde_json::json!({
                    "event": "verify_start",
                    "command": "deploy",
                    "field_count": field_count,
                })
            }

            DeployEvent::Verified(value) => {
                serde_json::json!({
                    "event": "verified",
                    "command": "deploy",
                    "label": value.label,
                    "function": value.function,
                    "value": value.value,
                })
            }

            DeployEvent::RecordSaved { path } => {
                serde_json::json!({
                    "event": "record_saved",
                    "command": "deploy",
                    "path": path.display().to_string(),
                })
            }

            DeployEvent::Completed {
                record,
                path,
                next_steps,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "success",
                    "path": path.display().to_string(),
                    "record": record,
                    "next_steps": next_steps,
                })
            }

            DeployEvent::Failed { step, message } => {
                serde_json::json!({
                    "event": "error",
                    "command": "deploy",
                    "status": "failed",
                    "step": step.as_str(),
                    "message": message,
                })
            }
        };

        self.write_event(json);
    }
}
