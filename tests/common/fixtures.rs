//! Reusable test content.

/// Hardhat artifact for `VotingSystem(string _electionName)`
pub const VOTING_SYSTEM_ARTIFACT: &str =
    include_str!("../fixtures/artifacts/contracts/VotingSystem.sol/VotingSystem.json");

/// Where Hardhat puts the artifact, relative to the project root
pub const VOTING_SYSTEM_ARTIFACT_PATH: &str =
    "artifacts/contracts/VotingSystem.sol/VotingSystem.json";

/// A network whose RPC port refuses connections
pub const OFFLINE_NETWORK_CONFIG: &str = r#"
[networks.offline]
url = "http://127.0.0.1:1"
"#;

/// A network that signs with a key from `DEPLOYER_PRIVATE_KEY`
pub const SIGNED_NETWORK_CONFIG: &str = r#"
[networks.sepolia]
url = "https://rpc.sepolia.org"
accounts = { private_key = { env = "DEPLOYER_PRIVATE_KEY" } }
"#;

/// Hardhat's well-known first development key
pub const HARDHAT_DEV_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
