//! Contract Factory Entity
//!
//! A compiled contract ready to be deployed: its ABI plus creation bytecode.
//! Owns all ABI encoding and decoding so that ledger adapters only move bytes.

use std::path::{Path, PathBuf};

use alloy::dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt, Specifier};
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::{hex, Bytes};
use thiserror::Error;

use crate::domain::value_objects::{ConstructorArgs, FieldKind};

/// ABI encoding/decoding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("constructor expects {expected} argument(s), got {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("constructor argument #{index} ('{value}') is not a valid {ty}: {message}")]
    InvalidArgument {
        index: usize,
        ty: String,
        value: String,
        message: String,
    },

    #[error("function '{name}' not found in ABI")]
    UnknownFunction { name: String },

    #[error("function '{name}' takes arguments and cannot be used as a read-only field")]
    NotAnAccessor { name: String },

    #[error("failed to encode call: {0}")]
    Encode(String),

    #[error("failed to decode output of '{function}': {message}")]
    Decode { function: String, message: String },

    #[error("'{function}' returned {found} value(s), expected exactly one")]
    OutputCount { function: String, found: usize },

    #[error("'{function}' returned {found}, expected {expected}")]
    UnexpectedType {
        function: String,
        expected: &'static str,
        found: String,
    },
}

/// Deployable contract artifact
#[derive(Debug, Clone)]
pub struct ContractFactory {
    name: String,
    abi: JsonAbi,
    bytecode: Bytes,
    source: Option<PathBuf>,
}

impl ContractFactory {
    pub fn new(name: impl Into<String>, abi: JsonAbi, bytecode: Bytes) -> Self {
        Self {
            name: name.into(),
            abi,
            bytecode,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Creation code followed by the ABI-encoded constructor arguments
    pub fn deploy_code(&self, args: &ConstructorArgs) -> Result<Bytes, AbiError> {
        let inputs = self
            .abi
            .constructor()
            .map(|c| c.inputs.as_slice())
            .unwrap_or(&[]);

        if inputs.len() != args.len() {
            return Err(AbiError::ArgumentCount {
                expected: inputs.len(),
                found: args.len(),
            });
        }

        let values = inputs
            .iter()
            .zip(args.iter())
            .enumerate()
            .map(|(index, (param, arg))| {
                let invalid = |message: String| AbiError::InvalidArgument {
                    index,
                    ty: param.ty.clone(),
                    value: arg.to_string(),
                    message,
                };
                let ty = param.resolve().map_err(|e| invalid(e.to_string()))?;
                ty.coerce_str(arg).map_err(|e| invalid(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut code = self.bytecode.to_vec();
        if let Some(constructor) = self.abi.constructor() {
            let encoded = constructor
                .abi_encode_input(&values)
                .map_err(|e| AbiError::Encode(e.to_string()))?;
            code.extend_from_slice(&encoded);
        }
        Ok(code.into())
    }

    /// Calldata for a zero-argument read-only accessor
    pub fn encode_call(&self, function: &str) -> Result<Bytes, AbiError> {
        let accessor = self.accessor(function)?;
        accessor
            .abi_encode_input(&[])
            .map(Into::into)
            .map_err(|e| AbiError::Encode(e.to_string()))
    }

    /// Decode the single return value of `function` and render it as text
    pub fn decode_output(
        &self,
        function: &str,
        kind: FieldKind,
        data: &[u8],
    ) -> Result<String, AbiError> {
        let accessor = self.accessor(function)?;
        let mut values = accessor
            .abi_decode_output(data)
            .map_err(|e| AbiError::Decode {
                function: function.to_string(),
                message: e.to_string(),
            })?;

        if values.len() != 1 {
            return Err(AbiError::OutputCount {
                function: function.to_string(),
                found: values.len(),
            });
        }

        render_value(function, kind, &values.remove(0))
    }

    fn accessor(&self, name: &str) -> Result<&Function, AbiError> {
        let overloads = self
            .abi
            .function(name)
            .ok_or_else(|| AbiError::UnknownFunction {
                name: name.to_string(),
            })?;

        overloads
            .iter()
            .find(|f| f.inputs.is_empty())
            .ok_or_else(|| AbiError::NotAnAccessor {
                name: name.to_string(),
            })
    }
}

fn render_value(function: &str, kind: FieldKind, value: &DynSolValue) -> Result<String, AbiError> {
    let unexpected = |expected: &'static str| AbiError::UnexpectedType {
        function: function.to_string(),
        expected,
        found: value_type_name(value),
    };

    match (kind, value) {
        (FieldKind::Status, DynSolValue::Bool(open)) => {
            Ok(if *open { "Open" } else { "Closed" }.to_string())
        }
        (FieldKind::Status, _) => Err(unexpected("bool")),
        (FieldKind::Identity, DynSolValue::Address(address)) => Ok(address.to_checksum(None)),
        (FieldKind::Identity, _) => Err(unexpected("address")),
        (FieldKind::Counter, DynSolValue::Uint(n, _)) => Ok(n.to_string()),
        (FieldKind::Counter, DynSolValue::Int(n, _)) => Ok(n.to_string()),
        (FieldKind::Counter, _) => Err(unexpected("integer")),
        (FieldKind::Other, v) => Ok(render_any(v)),
    }
}

fn render_any(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_checksum(None),
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Uint(n, _) => n.to_string(),
        DynSolValue::Int(n, _) => n.to_string(),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::FixedBytes(word, size) => hex::encode_prefixed(&word[..*size]),
        DynSolValue::Bytes(bytes) => hex::encode_prefixed(bytes),
        other => format!("{other:?}"),
    }
}

fn value_type_name(value: &DynSolValue) -> String {
    value
        .as_type()
        .map(|ty| ty.sol_type_name().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}
