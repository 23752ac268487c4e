//! Hardhat Artifact Registry
//!
//! Resolves contract factories from a compiler output tree. Understands the
//! Hardhat layout (`artifacts/contracts/<File>.sol/<Name>.json`, bytecode as
//! a hex string) and the Foundry layout (`out/<File>.sol/<Name>.json`,
//! bytecode under `bytecode.object`).

use std::path::{Path, PathBuf};

use alloy::json_abi::JsonAbi;
use alloy::primitives::{hex, Bytes};
use ignore::WalkBuilder;
use serde::Deserialize;

use crate::domain::entities::ContractFactory;
use crate::domain::ports::artifact_registry::{ArtifactError, ArtifactRegistry};

/// Directory of compiler metadata that never holds contract artifacts
const BUILD_INFO_DIR: &str = "build-info";

#[derive(Deserialize)]
struct RawArtifact {
    abi: JsonAbi,
    #[serde(default)]
    bytecode: Option<RawBytecode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

impl RawBytecode {
    fn as_hex(&self) -> &str {
        match self {
            RawBytecode::Hex(s) => s,
            RawBytecode::Object { object } => object,
        }
    }
}

/// Artifact registry backed by a compiler output directory
#[derive(Debug, Clone)]
pub struct HardhatArtifactRegistry {
    root: PathBuf,
}

impl HardhatArtifactRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every `<name>.json` below the root, sorted
    fn candidates(&self, name: &str) -> Result<Vec<PathBuf>, ArtifactError> {
        let wanted = format!("{name}.json");

        // Build outputs are usually gitignored, so the standard filters stay off.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .filter_entry(|entry| entry.file_name() != BUILD_INFO_DIR)
            .build();

        let mut found = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| ArtifactError::Scan {
                root: self.root.clone(),
                message: e.to_string(),
            })?;
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && entry.file_name() == wanted.as_str() {
                found.push(entry.into_path());
            }
        }
        found.sort();
        Ok(found)
    }

    fn load(&self, name: &str, path: &Path) -> Result<ContractFactory, ArtifactError> {
        let invalid = |message: String| ArtifactError::Invalid {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let raw: RawArtifact = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;

        let code = raw
            .bytecode
            .as_ref()
            .map(RawBytecode::as_hex)
            .map(|s| s.strip_prefix("0x").unwrap_or(s))
            .unwrap_or_default();
        if code.is_empty() {
            return Err(ArtifactError::NoBytecode {
                name: name.to_string(),
            });
        }
        if code.contains("__") {
            return Err(invalid("bytecode has unlinked library placeholders".to_string()));
        }

        let bytecode = hex::decode(code).map_err(|e| invalid(format!("bytecode: {e}")))?;
        tracing::debug!(artifact = name, path = %path.display(), bytes = bytecode.len(), "loaded artifact");

        Ok(ContractFactory::new(name, raw.abi, Bytes::from(bytecode)).with_source(path))
    }
}

impl ArtifactRegistry for HardhatArtifactRegistry {
    fn factory(&self, name: &str) -> Result<ContractFactory, ArtifactError> {
        if !self.root.is_dir() {
            return Err(ArtifactError::NotFound {
                name: name.to_string(),
                root: self.root.clone(),
            });
        }

        let mut candidates = self.candidates(name)?;
        match candidates.len() {
            0 => Err(ArtifactError::NotFound {
                name: name.to_string(),
                root: self.root.clone(),
            }),
            1 => {
                let path = candidates.remove(0);
                self.load(name, &path)
            }
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_string(),
                paths: candidates,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ABI: &str = r#"[{"type":"function","name":"owner","stateMutability":"view","inputs":[],"outputs":[{"name":"","type":"address"}]}]"#;

    fn write_artifact(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    fn hardhat(bytecode: &str) -> String {
        format!(r#"{{"contractName":"VotingSystem","abi":{ABI},"bytecode":"{bytecode}"}}"#)
    }

    #[test]
    fn resolves_hardhat_artifact() {
        let dir = tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/VotingSystem.sol/VotingSystem.json",
            &hardhat("0x6080604052"),
        );
        let registry = HardhatArtifactRegistry::new(dir.path());

        let factory = registry.factory("VotingSystem").unwrap();

        assert_eq!(factory.name(), "VotingSystem");
        assert_eq!(factory.bytecode().as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert!(factory.abi().function("owner").is_some());
    }

    #[test]
    fn resolves_foundry_artifact() {
        let dir = tempdir().unwrap();
        write_artifact(
            dir.path(),
            "VotingSystem.sol/VotingSystem.json",
            &format!(r#"{{"abi":{ABI},"bytecode":{{"object":"0x6080","sourceMap":""}}}}"#),
        );
        let registry = HardhatArtifactRegistry::new(dir.path());

        let factory = registry.factory("VotingSystem").unwrap();
        assert_eq!(factory.bytecode().as_ref(), &[0x60, 0x80]);
    }

    #[test]
    fn ignores_debug_files_and_build_info() {
        let dir = tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/VotingSystem.sol/VotingSystem.json",
            &hardhat("0x60"),
        );
        write_artifact(
            dir.path(),
            "contracts/VotingSystem.sol/VotingSystem.dbg.json",
            r#"{"buildInfo":"../../build-info/abc.json"}"#,
        );
        write_artifact(dir.path(), "build-info/VotingSystem.json", "{}");
        let registry = HardhatArtifactRegistry::new(dir.path());

        assert!(registry.factory("VotingSystem").is_ok());
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let dir = tempdir().unwrap();
        let registry = HardhatArtifactRegistry::new(dir.path());

        let err = registry.factory("VotingSystem").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn missing_root_is_not_found() {
        let dir = tempdir().unwrap();
        let registry = HardhatArtifactRegistry::new(dir.path().join("artifacts"));

        let err = registry.factory("VotingSystem").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn same_name_in_two_sources_is_ambiguous() {
        let dir = tempdir().unwrap();
        write_artifact(dir.path(), "contracts/A.sol/VotingSystem.json", &hardhat("0x60"));
        write_artifact(dir.path(), "contracts/B.sol/VotingSystem.json", &hardhat("0x60"));
        let registry = HardhatArtifactRegistry::new(dir.path());

        let err = registry.factory("VotingSystem").unwrap_err();
        assert!(matches!(err, ArtifactError::Ambiguous { ref paths, .. } if paths.len() == 2));
    }

    #[test]
    fn interface_without_bytecode_is_rejected() {
        let dir = tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/IVoting.sol/IVoting.json",
            &format!(r#"{{"abi":{ABI},"bytecode":"0x"}}"#),
        );
        let registry = HardhatArtifactRegistry::new(dir.path());

        let err = registry.factory("IVoting").unwrap_err();
        assert!(matches!(err, ArtifactError::NoBytecode { .. }));
    }

    #[test]
    fn malformed_json_is_invalid() {
        let dir = tempdir().unwrap();
        write_artifact(dir.path(), "contracts/V.sol/VotingSystem.json", "{ not json");
        let registry = HardhatArtifactRegistry::new(dir.path());

        let err = registry.factory("VotingSystem").unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid { .. }));
    }
}
