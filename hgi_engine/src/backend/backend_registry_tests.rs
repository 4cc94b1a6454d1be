/// Unit tests for BackendRegistry and the Hgi trait's provided methods
///
/// Uses MockHgi, so no GPU is required.

use crate::backend::mock_hgi::MockHgi;
use crate::backend::*;
use crate::error::Error;

fn registry_with_mock(kind: DeviceKind) -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry.register(kind, move |config| Ok(Box::new(MockHgi::new(kind, config.clone())) as Box<dyn Hgi>));
    registry
}

fn vertex_desc(code: &str) -> ShaderFunctionDesc {
    ShaderFunctionDesc {
        debug_name: "vs".to_string(),
        stage: ShaderStage::VERTEX,
        shader_code: code.to_string(),
    }
}

// ============================================================================
// REGISTRY TESTS
// ============================================================================

#[test]
fn test_empty_registry_supports_nothing() {
    let registry = BackendRegistry::new();
    assert!(!registry.supports(DeviceKind::OpenGl));
    assert!(!registry.supports(DeviceKind::Vulkan));
}

#[test]
fn test_create_unregistered_kind_fails() {
    let registry = registry_with_mock(DeviceKind::Vulkan);
    let result = registry.create(DeviceKind::Metal, &Config::default());
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_create_registered_kind() {
    let registry = registry_with_mock(DeviceKind::Vulkan);
    assert!(registry.supports(DeviceKind::Vulkan));

    let hgi = registry.create(DeviceKind::Vulkan, &Config::default()).unwrap();
    assert_eq!(hgi.device_kind(), DeviceKind::Vulkan);
}

#[test]
fn test_factory_receives_config() {
    let registry = registry_with_mock(DeviceKind::Metal);
    let config = Config { allow_empty_shader_programs: true, ..Config::default() };

    let mut hgi = registry.create(DeviceKind::Metal, &config).unwrap();
    let program = hgi.create_shader_program(ShaderProgramDesc::new("empty", Vec::new()));

    assert!(hgi.shader_program(program).unwrap().is_valid());
}

#[test]
fn test_factory_error_propagates() {
    let mut registry = BackendRegistry::new();
    registry.register(DeviceKind::OpenGl, |_config| {
        Err(Error::BackendError("no GL context".to_string()))
    });

    let result = registry.create(DeviceKind::OpenGl, &Config::default());
    assert_eq!(result.err(), Some(Error::BackendError("no GL context".to_string())));
}

#[test]
fn test_register_replaces_previous_factory() {
    let mut registry = registry_with_mock(DeviceKind::OpenGl);
    registry.register(DeviceKind::OpenGl, |_config| {
        Err(Error::BackendError("replaced".to_string()))
    });

    assert!(registry.create(DeviceKind::OpenGl, &Config::default()).is_err());
}

// ============================================================================
// DEVICE KIND TESTS
// ============================================================================

#[test]
fn test_submission_models() {
    assert_eq!(DeviceKind::OpenGl.submission_model(), SubmissionModel::Immediate);
    assert_eq!(DeviceKind::Vulkan.submission_model(), SubmissionModel::Deferred);
    assert_eq!(DeviceKind::Metal.submission_model(), SubmissionModel::Deferred);
}

#[test]
fn test_shader_stage_helpers() {
    assert!(ShaderStage::VERTEX.is_single());
    assert!(!(ShaderStage::VERTEX | ShaderStage::FRAGMENT).is_single());
    assert!(!ShaderStage::empty().is_single());
    assert!(ShaderStage::GRAPHICS.contains(ShaderStage::GEOMETRY));
    assert!(!ShaderStage::GRAPHICS.contains(ShaderStage::COMPUTE));
}

// ============================================================================
// REQUIRE VALID PROGRAM TESTS
// ============================================================================

#[test]
fn test_require_valid_program_ok() {
    let mut hgi = MockHgi::new(DeviceKind::Vulkan, Config::default());
    let vs = hgi.create_shader_function(vertex_desc("void main() {}"));
    let program = hgi.create_shader_program(ShaderProgramDesc::new("ok", vec![vs]));

    let found = hgi.require_valid_program(program).unwrap();
    assert_eq!(found.debug_name(), "ok");
    assert_eq!(found.shader_functions(), &[vs]);
}

#[test]
fn test_require_valid_program_reports_compile_failure() {
    let mut hgi = MockHgi::new(DeviceKind::Vulkan, Config::default());
    let program = hgi.create_shader_program(ShaderProgramDesc::new("empty", Vec::new()));

    match hgi.require_valid_program(program) {
        Err(Error::CompileFailure(msg)) => {
            assert!(msg.contains("empty"));
            assert!(msg.contains("no shader functions"));
        }
        _ => panic!("expected CompileFailure"),
    }
}

#[test]
fn test_require_valid_program_unknown_handle() {
    let mut hgi = MockHgi::new(DeviceKind::Vulkan, Config::default());
    let program = hgi.create_shader_program(ShaderProgramDesc::new("p", Vec::new()));
    hgi.destroy_shader_program(program).unwrap();

    assert!(matches!(hgi.require_valid_program(program), Err(Error::InvalidResource(_))));
}
