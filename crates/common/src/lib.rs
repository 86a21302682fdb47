//! Common types and utilities for the gRPC README generator
//!
//! This crate contains the shared data structures and error types used
//! across the extractor, generator, and CLI components.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during README generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("generated directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("no generated stub files found in {0}")]
    NoCandidates(PathBuf),

    #[error("no gRPC service stub found in {0}")]
    ServiceNotFound(PathBuf),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// True for the "nothing to generate" conditions: missing directory,
    /// no candidate files, or a candidate with no matching stub patterns.
    /// These are handled with a message, not a crash.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            GeneratorError::DirectoryNotFound(_)
                | GeneratorError::NoCandidates(_)
                | GeneratorError::ServiceNotFound(_)
        )
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// A single RPC method recovered from a stub file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Method name as declared (e.g., "SayHello")
    pub name: String,
    /// Request message type (e.g., "HelloRequest")
    pub request_type: String,
    /// Response message type, when the signature declares one
    pub response_type: Option<String>,
}

/// Metadata extracted from one generated betterproto stub file
///
/// Only constructed when both the service-class pattern and at least one
/// method pattern matched; a partial match yields no `ServiceStub` at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStub {
    /// Service name without the "Stub" suffix (e.g., "Greeter")
    pub service_name: String,
    /// Python module the stub lives in (candidate file stem)
    pub module_name: String,
    /// Methods in first-occurrence order, duplicates preserved
    pub methods: Vec<MethodSignature>,
}

impl ServiceStub {
    /// First declared method, used for the usage example.
    ///
    /// Total by construction: `methods` is never empty.
    pub fn first_method(&self) -> &MethodSignature {
        &self.methods[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stub() -> ServiceStub {
        ServiceStub {
            service_name: "Greeter".to_string(),
            module_name: "greeter_pb2".to_string(),
            methods: vec![
                MethodSignature {
                    name: "SayHello".to_string(),
                    request_type: "HelloRequest".to_string(),
                    response_type: Some("HelloReply".to_string()),
                },
                MethodSignature {
                    name: "SayGoodbye".to_string(),
                    request_type: "GoodbyeRequest".to_string(),
                    response_type: None,
                },
            ],
        }
    }

    #[test]
    fn test_first_method() {
        let stub = sample_stub();
        assert_eq!(stub.first_method().name, "SayHello");
        assert_eq!(stub.first_method().request_type, "HelloRequest");
    }

    #[test]
    fn test_absence_classification() {
        assert!(GeneratorError::DirectoryNotFound("generated".into()).is_absence());
        assert!(GeneratorError::NoCandidates("generated".into()).is_absence());
        assert!(GeneratorError::ServiceNotFound("generated/foo.py".into()).is_absence());
        assert!(!GeneratorError::Generation("template error".to_string()).is_absence());
        assert!(!GeneratorError::Pattern("bad regex".to_string()).is_absence());
    }

    #[test]
    fn test_stub_round_trips_through_json() {
        let stub = sample_stub();
        let json = serde_json::to_string(&stub).unwrap();
        let back: ServiceStub = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stub);
    }
}
