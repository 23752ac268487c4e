use std::path::Path;

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, TxHash, U256};
use deploy_recorder::domain::value_objects::VerifiedValue;
use deploy_recorder::DeploymentRecord;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::DeploymentSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct DeployHeader<'a> {
    pub artifact: &'a str,
    pub network: &'a str,
    pub label: &'a str,
    pub deployer: Address,
    pub balance: U256,
}

pub fn render_deploy_header(
    header: &DeployHeader<'_>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = CommandHeader::new(Icon::Deploy, format!("Deploying {}", header.artifact));
    block.add("Network", header.network);
    block.add("Label", header.label);
    block.add("Deployer", header.deployer.to_checksum(None));
    block.add("Balance", format!("{} ETH", format_ether(header.balance)));
    block.render(supports_color, supports_unicode)
}

/// One progress line, e.g. `● Sending deployment transaction...`
pub fn render_step(icon: Icon, message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!("{} {}\n", icon.colored(supports_color, supports_unicode), message)
}

pub fn render_pending(tx_hash: TxHash, supports_color: bool, supports_unicode: bool) -> String {
    render_step(
        Icon::Pending,
        &format!(
            "Waiting for confirmation {}",
            ColoredText::dim(tx_hash.to_string()).render(supports_color)
        ),
        supports_color,
        supports_unicode,
    )
}

pub fn render_deployed(address: Address, supports_color: bool, supports_unicode: bool) -> String {
    render_step(
        Icon::Success,
        &format!(
            "Contract deployed at {}",
            ColoredText::success(address.to_checksum(None))
                .bold()
                .render(supports_color)
        ),
        supports_color,
        supports_unicode,
    )
}

pub fn render_verified(
    value: &VerifiedValue,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let label = if verbose {
        format!("{} ({}())", value.label, value.function)
    } else {
        value.label.clone()
    };
    format!(
        "  {} {}: {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(label).render(supports_color),
        value.value
    )
}

pub fn render_deploy_summary(
    record: &DeploymentRecord,
    path: &Path,
    next_steps: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = DeploymentSummary::new("Deployment Complete");
    summary.add_field("Network", record.network().as_str());
    summary.add_field("Contract", record.contract_address().to_checksum(None));
    summary.add_field("Transaction", record.transaction_hash().to_string());
    summary.add_field(record.label_key(), record.label());
    summary.add_field("Deployer", record.deployer().to_checksum(None));
    summary.add_field("Deployed At", record.deployment_time_iso());
    summary.add_field("Gas Used", record.gas_used().to_string());
    summary.with_record_path(path.display().to_string());
    summary.with_next_steps(next_steps);
    summary.render(supports_color, supports_unicode)
}

pub fn render_failure_line(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Deployment failed:").bold().render(supports_color),
        message
    )
}
