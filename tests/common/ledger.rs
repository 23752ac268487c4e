//! In-memory chain for library-level tests.

use std::collections::HashMap;
use std::sync::Mutex;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{address, b256, Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use deploy_recorder::domain::entities::{ConfirmedDeployment, ContractFactory, PendingDeployment};
use deploy_recorder::domain::ports::{Ledger, LedgerError};

pub const DEPLOYER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
pub const CONTRACT: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
pub const TX_HASH: TxHash =
    b256!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
pub const GAS_LIMIT: u64 = 1_234_567;

/// Where a `ScriptedLedger` breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breakage {
    None,
    Accounts,
    Submit,
    Revert,
    Read(&'static str),
}

/// Chain that answers the VotingSystem reads for a fresh deployment
pub struct ScriptedLedger {
    /// function name -> (calldata, return data)
    reads: HashMap<&'static str, (Bytes, Bytes)>,
    breakage: Breakage,
    submitted: Mutex<Vec<Bytes>>,
}

impl ScriptedLedger {
    pub fn voting_system(factory: &ContractFactory, election_name: &str) -> Self {
        let read = |function: &'static str, value: DynSolValue| {
            let calldata = factory.encode_call(function).unwrap();
            let output = Bytes::from(DynSolValue::Tuple(vec![value]).abi_encode_params());
            (function, (calldata, output))
        };
        let reads = HashMap::from([
            read("owner", DynSolValue::Address(DEPLOYER)),
            read("electionName", DynSolValue::String(election_name.to_string())),
            read("votingOpen", DynSolValue::Bool(false)),
            read("candidateCount", DynSolValue::Uint(U256::ZERO, 256)),
            read("totalVotes", DynSolValue::Uint(U256::ZERO, 256)),
        ]);
        Self {
            reads,
            breakage: Breakage::None,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn breaking_at(mut self, breakage: Breakage) -> Self {
        self.breakage = breakage;
        self
    }

    /// Deployment payloads received, in order
    pub fn submitted(&self) -> Vec<Bytes> {
        self.submitted.lock().unwrap().clone()
    }
}

fn rpc_down(operation: &'static str) -> LedgerError {
    LedgerError::rpc(operation, std::io::Error::other("connection refused"))
}

#[async_trait]
impl Ledger for ScriptedLedger {
    async fn active_account(&self) -> Result<Address, LedgerError> {
        if self.breakage == Breakage::Accounts {
            return Err(rpc_down("eth_accounts"));
        }
        Ok(DEPLOYER)
    }

    async fn balance(&self, _account: Address) -> Result<U256, LedgerError> {
        Ok(U256::from(10u64).pow(U256::from(22u64)))
    }

    async fn submit_deployment(
        &self,
        _from: Address,
        code: Bytes,
    ) -> Result<PendingDeployment, LedgerError> {
        if self.breakage == Breakage::Submit {
            return Err(rpc_down("eth_sendTransaction"));
        }
        self.submitted.lock().unwrap().push(code);
        Ok(PendingDeployment {
            tx_hash: TX_HASH,
            gas_limit: GAS_LIMIT,
        })
    }

    async fn wait_for_confirmation(
        &self,
        pending: &PendingDeployment,
    ) -> Result<ConfirmedDeployment, LedgerError> {
        if self.breakage == Breakage::Revert {
            return Err(LedgerError::Reverted {
                tx_hash: pending.tx_hash,
            });
        }
        Ok(ConfirmedDeployment {
            address: CONTRACT,
            tx_hash: pending.tx_hash,
            gas_limit: pending.gas_limit,
            gas_used: 987_654,
            block_number: Some(1),
        })
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, LedgerError> {
        assert_eq!(to, CONTRACT, "reads must target the new contract");
        self.reads
            .iter()
            .find(|(function, (calldata, _))| {
                *calldata == data && self.breakage != Breakage::Read(**function)
            })
            .map(|(_, (_, output))| output.clone())
            .ok_or_else(|| rpc_down("eth_call"))
    }
}
