//! Integration tests for README rendering

use grpc_readme_generator_common::{MethodSignature, ServiceStub};
use grpc_readme_generator_generator::{generate_readme, ReadmeGenerator};
use tempfile::TempDir;

fn method(name: &str, request: &str, response: Option<&str>) -> MethodSignature {
    MethodSignature {
        name: name.to_string(),
        request_type: request.to_string(),
        response_type: response.map(String::from),
    }
}

fn foo_stub() -> ServiceStub {
    ServiceStub {
        service_name: "Foo".to_string(),
        module_name: "foo_pb2".to_string(),
        methods: vec![method("Bar", "BarReq", Some("BarResp"))],
    }
}

#[test]
fn test_render_fidelity() {
    let generator = ReadmeGenerator::new(foo_stub(), "foo_client").unwrap();
    let readme = generator.render().unwrap();

    // Usage example instantiates the stub and imports it alongside the
    // first request type.
    assert!(readme.contains("FooStub(\"your.api.endpoint:443\")"));
    assert!(readme.contains("from generated.foo_pb2 import FooStub, BarReq"));
    assert!(readme.contains("request = BarReq(param=\"value\")"));
    assert!(readme.contains("response = await client.Bar(request)"));

    // Method list entry with response type.
    assert!(readme.contains("- Bar(BarReq) -> BarResp"));
}

#[test]
fn test_render_is_deterministic() {
    let generator = ReadmeGenerator::new(foo_stub(), "foo_client").unwrap();
    let first = generator.render().unwrap();
    let second = generator.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_method_without_response_type_has_no_arrow() {
    let stub = ServiceStub {
        service_name: "Foo".to_string(),
        module_name: "foo_pb2".to_string(),
        methods: vec![method("Bar", "BarReq", None)],
    };

    let generator = ReadmeGenerator::new(stub, "foo_client").unwrap();
    let readme = generator.render().unwrap();

    assert!(readme.contains("- Bar(BarReq)\n"));
    assert!(!readme.contains("->"));
}

#[test]
fn test_method_list_preserves_order() {
    let stub = ServiceStub {
        service_name: "Thing".to_string(),
        module_name: "things".to_string(),
        methods: vec![
            method("M1", "R1", Some("P1")),
            method("M2", "R2", Some("P2")),
            method("M3", "R3", Some("P3")),
        ],
    };

    let generator = ReadmeGenerator::new(stub, "things_client").unwrap();
    let readme = generator.render().unwrap();

    let m1 = readme.find("- M1(R1) -> P1").expect("M1 entry missing");
    let m2 = readme.find("- M2(R2) -> P2").expect("M2 entry missing");
    let m3 = readme.find("- M3(R3) -> P3").expect("M3 entry missing");
    assert!(m1 < m2 && m2 < m3, "methods listed out of order");

    // Usage example is built from the first method.
    assert!(readme.contains("response = await client.M1(request)"));
}

#[test]
fn test_generate_to_file_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("README.md");
    std::fs::write(&output, "stale contents from a previous run").unwrap();

    generate_readme(foo_stub(), "foo_client", &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("# foo_client\n"));
    assert!(!written.contains("stale contents"));
}
