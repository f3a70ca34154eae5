use assert_fs::prelude::*;
use predicates::prelude::*;
use stackctx::{Project, StackctxError, load_document};

const FIXTURE: &str = include_str!("fixtures/cdk.json");

/// Helper: a temp project with the fixture document at `cdk.json`.
fn setup_project() -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("cdk.json").write_str(FIXTURE).unwrap();
    dir
}

#[test]
fn open_without_tool_config_defaults_to_dev() {
    let dir = setup_project();

    let project = Project::open(dir.path()).unwrap();
    let resolved = project.resolve(None).unwrap();

    assert_eq!(resolved.environment_name(), "dev");
    assert_eq!(project.config().stackctx.document, "cdk.json");
}

#[test]
fn tool_config_sets_default_env_and_document() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("infra").create_dir_all().unwrap();
    dir.child("infra/context.json").write_str(FIXTURE).unwrap();
    dir.child("stackctx.toml")
        .write_str("[stackctx]\ndocument = \"infra/context.json\"\ndefault_env = \"prod\"\n")
        .unwrap();

    let project = Project::open(dir.path()).unwrap();

    assert_eq!(project.resolve(None).unwrap().environment_name(), "prod");
    assert_eq!(project.resolve(Some("dev")).unwrap().environment_name(), "dev");
}

#[test]
fn tool_config_variables_reach_substitution() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("cdk.json")
        .write_str(&FIXTURE.replace("\"v\"", "\"${releasePrefix}\""))
        .unwrap();
    dir.child("stackctx.toml")
        .write_str("[variables]\nreleasePrefix = \"rel-\"\n")
        .unwrap();

    let project = Project::open(dir.path()).unwrap();
    let prod = project.resolve(Some("prod")).unwrap();

    assert_eq!(prod.cleanup().ecr.tag_prefixes, vec!["rel-", "release-"]);
}

#[test]
fn resolve_all_covers_dev_and_prod() {
    let dir = setup_project();

    let all = Project::open(dir.path()).unwrap().resolve_all().unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].resource_name("cluster").as_deref(), Some("marti-ai-dev-cluster"));
    assert_eq!(all[1].resource_name("cluster").as_deref(), Some("marti-ai-prod-cluster"));
}

#[test]
fn missing_document_is_file_not_found() {
    let dir = assert_fs::TempDir::new().unwrap();

    let err = Project::open(dir.path()).unwrap_err();

    assert!(matches!(err, StackctxError::FileNotFound { .. }));
    assert!(predicate::str::contains("cdk.json").eval(&err.to_string()));
}

#[test]
fn malformed_document_is_parse_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("cdk.json").write_str("{ \"context\": ").unwrap();

    let err = load_document(&dir.path().join("cdk.json")).unwrap_err();

    assert!(matches!(err, StackctxError::ParseError { .. }));
}

#[test]
fn unsupported_format_version_fails_open() {
    let dir = setup_project();
    dir.child("stackctx.toml")
        .write_str("[stackctx]\nformat_version = 9\n")
        .unwrap();

    let err = Project::open(dir.path()).unwrap_err();

    assert!(matches!(err, StackctxError::FormatVersionTooNew { .. }));
}

#[test]
fn unsupported_document_extension_is_rejected() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("cdk.yaml").write_str(FIXTURE).unwrap();

    let err = load_document(&dir.path().join("cdk.yaml")).unwrap_err();

    assert!(matches!(err, StackctxError::ParseError { .. }));
    assert!(predicate::str::contains("'.yaml'").eval(&err.to_string()));
}

#[test]
fn resolve_all_fails_if_one_environment_is_incomplete() {
    let dir = assert_fs::TempDir::new().unwrap();
    let document = FIXTURE.replacen(
        "\"network\": { \"max_azs\": 3",
        "\"vpc\": { \"max_azs\": 3",
        1,
    );
    dir.child("cdk.json").write_str(&document).unwrap();

    let err = Project::open(dir.path()).unwrap().resolve_all().unwrap_err();

    assert!(matches!(
        err,
        StackctxError::MissingSection { ref environment, ref section }
            if environment == "prod" && section == "network"
    ));
}
