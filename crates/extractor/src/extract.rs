//! Regex extraction of service metadata from stub file text

use grpc_readme_generator_common::{GeneratorError, MethodSignature, Result, ServiceStub};
use regex::Regex;
use std::path::Path;

/// Matches the betterproto service stub class declaration
const SERVICE_PATTERN: &str = r"class (\w+)Stub\(betterproto\.ServiceStub\):";

/// Matches both generator shapes of an async RPC method:
/// `(self, request: Type)` and `(self, *, param: Type)`, each with an
/// optional `-> ReturnType` annotation. Quoted forward references are
/// accepted around the type names.
const METHOD_PATTERN: &str =
    r#"async def (\w+)\(self,\s*(?:\*,\s*)?\w+:\s*"?(\w+)"?[^)\n]*\)(?:\s*->\s*"?(\w+)"?)?"#;

/// Apply the stub patterns to the text of one candidate file
///
/// Both patterns must match for a result to exist: a service class with
/// zero method signatures, or method signatures with no service class,
/// yield `ServiceNotFound` rather than a partially populated stub.
/// Methods are collected in first-occurrence order, duplicates preserved.
pub fn extract_service(content: &str, module_name: &str, source: &Path) -> Result<ServiceStub> {
    let service_re = compile(SERVICE_PATTERN)?;
    let method_re = compile(METHOD_PATTERN)?;

    let service_name = service_re.captures(content).map(|caps| caps[1].to_string());

    let methods: Vec<MethodSignature> = method_re
        .captures_iter(content)
        .map(|caps| MethodSignature {
            name: caps[1].to_string(),
            request_type: caps[2].to_string(),
            response_type: caps.get(3).map(|m| m.as_str().to_string()),
        })
        .collect();

    match service_name {
        Some(service_name) if !methods.is_empty() => Ok(ServiceStub {
            service_name,
            module_name: module_name.to_string(),
            methods,
        }),
        _ => Err(GeneratorError::ServiceNotFound(source.to_path_buf())),
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| GeneratorError::Pattern(e.to_string()))
}
