//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Resolve the contract factory from the build output
//! 2. Resolve the deployer account and its balance
//! 3. Submit the deployment transaction (once, never retried)
//! 4. Wait for confirmation
//! 5. Read back the verification fields
//! 6. Assemble the record and persist it (last write wins)
//!
//! Strictly sequential: each step consumes the previous step's output.
//! The first failure aborts the run, so a record exists if and only if
//! every step before it succeeded.

use std::error::Error as _;
use std::sync::Arc;

use alloy::primitives::Address;

use crate::domain::entities::{ContractFactory, DeploymentRecord};
use crate::domain::ports::{
    ArtifactRegistry, Clock, DeployEvent, DeployEventSink, Ledger, NoopEventSink,
    RecordRepository, SystemClock,
};
use crate::domain::value_objects::{VerificationPlan, VerifiedValue};
use crate::error::{BoxError, DeployError, DeployResult};

use super::options::DeployOptions;
use super::result::DeployOutcome;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so tests can substitute an in-memory ledger
/// and artifact registry.
pub struct DeployUseCase<AR, L, RR>
where
    AR: ArtifactRegistry,
    L: Ledger,
    RR: RecordRepository,
{
    artifacts: AR,
    ledger: L,
    records: RR,
    clock: Arc<dyn Clock>,
}

impl<AR, L, RR> DeployUseCase<AR, L, RR>
where
    AR: ArtifactRegistry,
    L: Ledger,
    RR: RecordRepository,
{
    pub fn new(artifacts: AR, ledger: L, records: RR) -> Self {
        Self {
            artifacts,
            ledger,
            records,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock used for the record timestamp
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn records(&self) -> &RR {
        &self.records
    }

    /// Execute the deploy use case silently
    pub async fn execute(&self, options: &DeployOptions) -> DeployResult<DeployOutcome> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
            .await
    }

    /// Execute the deploy use case with event reporting
    ///
    /// On failure a single `DeployEvent::Failed` is emitted before the
    /// error is returned.
    pub async fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult<DeployOutcome> {
        match self.run(options, event_sink.as_ref()).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                event_sink.on_event(DeployEvent::Failed {
                    step: err.step(),
                    message: error_chain(&err),
                });
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
    ) -> DeployResult<DeployOutcome> {
        // Step 1: Resolve artifact (no network access before this succeeds)
        let factory = self.resolve_artifact(&options.artifact)?;
        let code = factory
            .deploy_code(&options.constructor_args)
            .map_err(|e| {
                DeployError::submit(
                    format!("invalid constructor arguments for {}", factory.name()),
                    e,
                )
            })?;

        // Step 2: Deployer account
        let deployer = self
            .ledger
            .active_account()
            .await
            .map_err(|e| DeployError::submit("could not resolve deployer account", e))?;
        let balance = self
            .ledger
            .balance(deployer)
            .await
            .map_err(|e| DeployError::submit("could not query deployer balance", e))?;

        let label = options.resolved_label();
        sink.on_event(DeployEvent::Started {
            artifact: factory.name().to_string(),
            network: options.network.clone(),
            label: label.clone(),
            deployer,
            balance,
        });

        // Step 3: Submit
        sink.on_event(DeployEvent::Submitting {
            artifact: factory.name().to_string(),
        });
        let pending = self
            .ledger
            .submit_deployment(deployer, code)
            .await
            .map_err(|e| {
                DeployError::submit(
                    format!("could not send {} deployment transaction", factory.name()),
                    e,
                )
            })?;
        tracing::debug!(tx_hash = %pending.tx_hash, gas_limit = pending.gas_limit, "deployment submitted");

        // Step 4: Confirm
        sink.on_event(DeployEvent::AwaitingConfirmation {
            tx_hash: pending.tx_hash,
        });
        let deployment = self
            .ledger
            .wait_for_confirmation(&pending)
            .await
            .map_err(|e| {
                DeployError::confirm(
                    format!("transaction {} was not confirmed", pending.tx_hash),
                    e,
                )
            })?;
        sink.on_event(DeployEvent::Deployed {
            address: deployment.address,
            tx_hash: deployment.tx_hash,
            gas_limit: deployment.gas_limit,
        });

        // Step 5: Verify
        let verification = self
            .verify(&factory, deployment.address, &options.verification, sink)
            .await?;

        // Step 6: Assemble and persist
        let record = DeploymentRecord::new(
            options.network.clone(),
            &deployment,
            options.label_key.as_str(),
            label,
            deployer,
            self.clock.now(),
        );
        let record_path = self
            .records
            .save(&record)
            .map_err(|source| DeployError::Persistence {
                path: self.records.record_path(&options.network),
                source,
            })?;
        tracing::info!(path = %record_path.display(), network = %options.network, "deployment record saved");

        sink.on_event(DeployEvent::RecordSaved {
            path: record_path.clone(),
        });
        sink.on_event(DeployEvent::Completed {
            record: record.clone(),
            path: record_path.clone(),
            next_steps: options.next_steps.clone(),
        });

        Ok(DeployOutcome {
            record,
            record_path,
            verification,
            deployer_balance: balance,
        })
    }

    fn resolve_artifact(&self, name: &str) -> DeployResult<ContractFactory> {
        self.artifacts
            .factory(name)
            .map_err(|e| DeployError::ArtifactNotFound {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Each field is an independent read; the first failure fails the step.
    async fn verify(
        &self,
        factory: &ContractFactory,
        address: Address,
        plan: &VerificationPlan,
        sink: &dyn DeployEventSink,
    ) -> DeployResult<Vec<VerifiedValue>> {
        sink.on_event(DeployEvent::VerificationStarted {
            field_count: plan.len(),
        });

        let mut values = Vec::with_capacity(plan.len());
        for field in plan.fields() {
            let failed = |source: BoxError| DeployError::Verification {
                field: field.function.clone(),
                source,
            };

            let calldata = factory
                .encode_call(&field.function)
                .map_err(|e| failed(e.into()))?;
            let output = self
                .ledger
                .call(address, calldata)
                .await
                .map_err(|e| failed(e.into()))?;
            let value = factory
                .decode_output(&field.function, field.kind, &output)
                .map_err(|e| failed(e.into()))?;

            let verified = VerifiedValue {
                label: field.label.clone(),
                function: field.function.clone(),
                value,
            };
            sink.on_event(DeployEvent::Verified(verified.clone()));
            values.push(verified);
        }

        Ok(values)
    }
}

/// `err: cause: cause` on one line
pub(crate) fn error_chain(err: &DeployError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
