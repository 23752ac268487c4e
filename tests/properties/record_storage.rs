//! Property tests for record persistence.

use alloy::primitives::{Address, B256};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use deploy_recorder::domain::entities::ConfirmedDeployment;
use deploy_recorder::domain::ports::RecordRepository;
use deploy_recorder::infrastructure::{JsonRecordRepository, LocalFs};
use deploy_recorder::{DeploymentRecord, Environment};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whatever the label text, the stored record is valid JSON
    /// with exactly 7 fields and the label survives unchanged.
    #[test]
    fn property_any_label_is_stored_verbatim(
        label in "(?s).{0,64}",
        network in "[a-z][a-z0-9_-]{0,15}",
        addr in any::<[u8; 20]>(),
        gas in any::<u64>(),
        millis in 0i64..4_102_444_800_000,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonRecordRepository::new(LocalFs::new(), dir.path());
        let environment = Environment::new(network).unwrap();
        let deployment = ConfirmedDeployment {
            address: Address::from(addr),
            tx_hash: B256::repeat_byte(0xab),
            gas_limit: gas,
            gas_used: gas,
            block_number: None,
        };
        let record = DeploymentRecord::new(
            environment.clone(),
            &deployment,
            "electionName",
            label.clone(),
            Address::ZERO,
            Utc.timestamp_millis_opt(millis).unwrap(),
        );

        let path = repo.save(&record).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        prop_assert_eq!(json.as_object().unwrap().len(), 7);
        prop_assert_eq!(json["electionName"].as_str(), Some(label.as_str()));
        let gas_str = gas.to_string();
        prop_assert_eq!(json["gasUsed"].as_str(), Some(gas_str.as_str()));

        let loaded = repo.load(&environment, "electionName").unwrap();
        prop_assert_eq!(loaded, record);
    }
}
