//! CONTRACT: the record for network N lives at `<deployments>/N_deployment.json`
//! and a later successful run for N replaces it in full.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use deploy_recorder::domain::ports::{ArtifactRegistry, Clock};
use deploy_recorder::infrastructure::{HardhatArtifactRegistry, JsonRecordRepository, LocalFs};
use deploy_recorder::{Config, DeployUseCase, Environment};

use crate::common::ledger::ScriptedLedger;
use crate::common::{VOTING_SYSTEM_ARTIFACT, VOTING_SYSTEM_ARTIFACT_PATH};

struct Offset(i64);

impl Clock for Offset {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(self.0)
    }
}

#[tokio::test]
async fn contract_redeploy_replaces_record() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join(VOTING_SYSTEM_ARTIFACT_PATH);
    std::fs::create_dir_all(artifact.parent().unwrap()).unwrap();
    std::fs::write(artifact, VOTING_SYSTEM_ARTIFACT).unwrap();

    let network = Environment::new("sepolia").unwrap();
    let mut config = Config::default();
    config.networks.insert(
        "sepolia".to_string(),
        deploy_recorder::config::NetworkConfig::local(),
    );

    for (minute, label) in [(0, "First Election"), (5, "Second Election")] {
        config.artifact.constructor_args = vec![label.to_string()];
        let artifacts = HardhatArtifactRegistry::new(dir.path().join("artifacts"));
        let factory = artifacts.factory("VotingSystem").unwrap();
        let ledger = ScriptedLedger::voting_system(&factory, label);
        let records = JsonRecordRepository::new(LocalFs::new(), dir.path().join("deployments"));
        let use_case =
            DeployUseCase::new(artifacts, ledger, records).with_clock(Arc::new(Offset(minute)));

        let outcome = use_case
            .execute(&config.deploy_options(network.clone()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            outcome.record_path,
            dir.path().join("deployments/sepolia_deployment.json")
        );
    }

    let entries = std::fs::read_dir(dir.path().join("deployments")).unwrap().count();
    assert_eq!(entries, 1, "no temp files or backups are left behind");

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("deployments/sepolia_deployment.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["electionName"], "Second Election");
    assert_eq!(json["deploymentTime"], "2024-01-01T00:05:00.000Z");
    assert_eq!(json.as_object().unwrap().len(), 7);
}
