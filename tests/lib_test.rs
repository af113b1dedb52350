//! Library integration tests.

use appdoctor::DoctorError;

#[test]
fn error_types_are_public() {
    let err = DoctorError::UnknownWorkflow {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> appdoctor::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use appdoctor::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["appdoctor", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn custom_validators_plug_into_the_doctor() {
    use appdoctor::doctor::Doctor;
    use appdoctor::platform::HostPlatform;
    use appdoctor::validation::{DoctorValidator, ValidationPass, ValidationResult};
    use appdoctor::workflows::Workflow;

    struct Flutter;

    impl DoctorValidator for Flutter {
        fn title(&self) -> &str {
            "Flutter"
        }

        fn validate(&self) -> ValidationResult {
            let mut pass = ValidationPass::new();
            let sdk = pass.aspect("flutter");
            pass.present(sdk, "Flutter 3.22.0");
            pass.finish()
        }
    }

    struct FlutterWorkflow;

    impl Workflow for FlutterWorkflow {
        fn name(&self) -> &str {
            "flutter"
        }

        fn applies_to_host_platform(&self) -> bool {
            true
        }

        fn validators(&self) -> Vec<Box<dyn DoctorValidator + '_>> {
            let flutter: Box<dyn DoctorValidator> = Box::new(Flutter);
            vec![flutter]
        }
    }

    let workflow: Box<dyn Workflow> = Box::new(FlutterWorkflow);
    let doctor = Doctor::new(HostPlatform::Linux, vec![workflow]);
    let report = doctor.run();
    assert!(report.is_healthy());
    assert_eq!(report.validators[0].title, "Flutter");
}

#[test]
fn config_round_trips_through_files() {
    use appdoctor::config::load_config;
    use std::fs;
    use tempfile::TempDir;

    let temp = TempDir::new().unwrap();
    let extra = temp.path().join("ci.yml");
    fs::write(
        temp.path().join(".appdoctor.yml"),
        "xcode:\n  minimum_version: \"15.0\"\ncocoapods:\n  recommended_version: \"1.14.0\"\n",
    )
    .unwrap();
    fs::write(&extra, "xcode:\n  minimum_version: \"16.1\"\n").unwrap();

    let config = load_config(temp.path(), Some(&extra)).unwrap();
    assert_eq!(config.xcode_minimum_version().to_string(), "16.1");
    assert_eq!(config.cocoapods_recommended_version().to_string(), "1.14.0");
}
