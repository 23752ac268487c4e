//! CONTRACT: a record exists only for a run that finished every step.
//!
//! Whatever step fails, the deployments directory is left exactly as it
//! was and the error names that step.

use std::path::Path;

use deploy_recorder::domain::ports::ArtifactRegistry;
use deploy_recorder::infrastructure::{HardhatArtifactRegistry, JsonRecordRepository, LocalFs};
use deploy_recorder::{Config, DeployError, DeployStep, DeployUseCase, Environment};

use crate::common::ledger::{Breakage, ScriptedLedger};
use crate::common::{VOTING_SYSTEM_ARTIFACT, VOTING_SYSTEM_ARTIFACT_PATH};

async fn run_broken(root: &Path, breakage: Breakage) -> DeployError {
    let artifact = root.join(VOTING_SYSTEM_ARTIFACT_PATH);
    std::fs::create_dir_all(artifact.parent().unwrap()).unwrap();
    std::fs::write(artifact, VOTING_SYSTEM_ARTIFACT).unwrap();

    let artifacts = HardhatArtifactRegistry::new(root.join("artifacts"));
    let factory = artifacts.factory("VotingSystem").unwrap();
    let ledger = ScriptedLedger::voting_system(&factory, "Presidential Election 2024")
        .breaking_at(breakage);
    let records = JsonRecordRepository::new(LocalFs::new(), root.join("deployments"));
    let use_case = DeployUseCase::new(artifacts, ledger, records);

    let options = Config::default()
        .deploy_options(Environment::new("localhost").unwrap())
        .unwrap();
    use_case.execute(&options).await.unwrap_err()
}

#[tokio::test]
async fn contract_failures_never_write_a_record() {
    let cases = [
        (Breakage::Accounts, DeployStep::Submit),
        (Breakage::Submit, DeployStep::Submit),
        (Breakage::Revert, DeployStep::Confirm),
        (Breakage::Read("owner"), DeployStep::Verify),
        (Breakage::Read("totalVotes"), DeployStep::Verify),
    ];

    for (breakage, step) in cases {
        let dir = tempfile::tempdir().unwrap();
        let err = run_broken(dir.path(), breakage.clone()).await;

        assert_eq!(err.step(), step, "{breakage:?}");
        assert!(
            !dir.path().join("deployments").exists(),
            "{breakage:?} must not create the deployments directory"
        );
    }
}

#[tokio::test]
async fn contract_failed_redeploy_keeps_previous_record() {
    let dir = tempfile::tempdir().unwrap();
    let previous = dir.path().join("deployments/localhost_deployment.json");
    std::fs::create_dir_all(previous.parent().unwrap()).unwrap();
    std::fs::write(&previous, "{\"network\": \"localhost\"}\n").unwrap();

    let err = run_broken(dir.path(), Breakage::Revert).await;

    assert!(matches!(err, DeployError::Deployment { .. }));
    assert_eq!(
        std::fs::read_to_string(&previous).unwrap(),
        "{\"network\": \"localhost\"}\n"
    );
}

#[tokio::test]
async fn contract_verification_error_names_the_field() {
    let dir = tempfile::tempdir().unwrap();

    let err = run_broken(dir.path(), Breakage::Read("votingOpen")).await;

    match err {
        DeployError::Verification { field, .. } => assert_eq!(field, "votingOpen"),
        other => panic!("expected a verification error, got {other:?}"),
    }
}
