//! Deploy Options
//!
//! Explicit inputs of a deployment run. Replaces any ambient network
//! context: everything the pipeline needs to know is in here.

use crate::domain::entities::DEFAULT_LABEL_KEY;
use crate::domain::value_objects::{ConstructorArgs, Environment, VerificationPlan};

/// Next steps printed after deploying `VotingSystem`
pub const VOTING_SYSTEM_NEXT_STEPS: &[&str] = &[
    "Add candidates using addCandidate() function",
    "Register voters using registerVoter() function",
    "Start voting using startVoting() function",
    "Monitor voting and get results using getWinner() function",
];

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Contract name in the build output
    pub artifact: String,
    /// Constructor arguments, coerced against the constructor ABI
    pub constructor_args: ConstructorArgs,
    /// Target network; also the record key
    pub network: Environment,
    /// Explicit human-readable label (falls back to the first constructor argument)
    pub label: Option<String>,
    /// JSON key the label is stored under
    pub label_key: String,
    /// Read-only accessors checked after deployment
    pub verification: VerificationPlan,
    /// Suggested manual follow-ups shown after success
    pub next_steps: Vec<String>,
}

impl DeployOptions {
    pub fn new(artifact: impl Into<String>, network: Environment) -> Self {
        Self {
            artifact: artifact.into(),
            constructor_args: ConstructorArgs::default(),
            network,
            label: None,
            label_key: DEFAULT_LABEL_KEY.to_string(),
            verification: VerificationPlan::voting_system(),
            next_steps: Vec::new(),
        }
    }

    /// The `VotingSystem` deployment for "Presidential Election 2024"
    pub fn voting_system(network: Environment) -> Self {
        Self::new("VotingSystem", network)
            .with_constructor_args(ConstructorArgs::new(["Presidential Election 2024"]))
            .with_next_steps(VOTING_SYSTEM_NEXT_STEPS.iter().map(|s| s.to_string()))
    }

    pub fn with_constructor_args(mut self, args: ConstructorArgs) -> Self {
        self.constructor_args = args;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    pub fn with_verification(mut self, plan: VerificationPlan) -> Self {
        self.verification = plan;
        self
    }

    pub fn with_next_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Label written to the record
    pub fn resolved_label(&self) -> String {
        self.label
            .clone()
            .or_else(|| self.constructor_args.first().map(str::to_string))
            .unwrap_or_else(|| self.artifact.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localhost() -> Environment {
        Environment::new("localhost").unwrap()
    }

    #[test]
    fn label_defaults_to_first_constructor_arg() {
        let options = DeployOptions::voting_system(localhost());
        assert_eq!(options.resolved_label(), "Presidential Election 2024");
    }

    #[test]
    fn explicit_label_wins() {
        let options = DeployOptions::voting_system(localhost()).with_label("Mayor 2025");
        assert_eq!(options.resolved_label(), "Mayor 2025");
    }

    #[test]
    fn label_falls_back_to_artifact_name() {
        let options = DeployOptions::new("Counter", localhost());
        assert_eq!(options.resolved_label(), "Counter");
    }

    #[test]
    fn voting_system_has_four_next_steps() {
        let options = DeployOptions::voting_system(localhost());
        assert_eq!(options.next_steps.len(), 4);
        assert_eq!(options.label_key, "electionName");
    }
}
