//! Runs every JSON known-answer suite through the dispatcher

use shanext_tests::suites::kat::{
    load_all_suites, load_suite_by_name, parse_suite, KatEngine, Runner, ShanextEngine,
    SuiteKind, TestCase, TestGroup,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn run_named(name: &str) {
    init_tracing();
    let suite = load_suite_by_name(name).unwrap();
    let tally = Runner::new(&ShanextEngine).run_suite(&suite);
    assert!(tally.failed.is_empty(), "{:#?}", tally.failed);
    assert!(tally.passed > 0);
}

#[test]
fn digest_vectors() {
    run_named("digest");
}

#[test]
fn hmac_vectors() {
    run_named("hmac");
}

#[test]
fn kdf_vectors() {
    run_named("kdf");
}

#[test]
fn all_suites_load() {
    let suites = load_all_suites().unwrap();
    let kinds: Vec<SuiteKind> = suites.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SuiteKind::Digest, SuiteKind::Mac, SuiteKind::Kdf]);
}

#[test]
fn mismatch_is_reported() {
    let suite = parse_suite(
        r#"{
            "kind": "digest",
            "testGroups": [
                { "algorithm": "SHA_256", "tests": [
                    { "tcId": 1, "msg": "616263", "md": "00" },
                    { "tcId": 2, "msg": "",
                      "md": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855" }
                ] }
            ]
        }"#,
    )
    .unwrap();

    let tally = Runner::new(&ShanextEngine).run_suite(&suite);
    assert_eq!(tally.passed, 1);
    assert_eq!(tally.failed.len(), 1);
    assert!(tally.failed[0].contains("case 1"));
}

#[test]
fn unknown_algorithm_is_unsupported() {
    let suite = parse_suite(
        r#"{ "kind": "mac", "testGroups": [
            { "algorithm": "WHIRLPOOL", "tests": [ { "tcId": 7, "key": "", "msg": "", "mac": "" } ] }
        ] }"#,
    )
    .unwrap();

    let group: &TestGroup = &suite.groups[0];
    let case: &TestCase = &group.tests[0];
    let err = ShanextEngine.run(SuiteKind::Mac, group, case).unwrap_err();
    assert!(err.contains("unsupported"), "{}", err);
}

#[test]
fn missing_field_is_reported() {
    let suite = parse_suite(
        r#"{ "kind": "kdf", "testGroups": [
            { "algorithm": "SCRYPT", "tests": [ { "tcId": 1, "password": "", "salt": "" } ] }
        ] }"#,
    )
    .unwrap();

    let err = ShanextEngine
        .run(SuiteKind::Kdf, &suite.groups[0], &suite.groups[0].tests[0])
        .unwrap_err();
    assert!(err.contains("missing required field"), "{}", err);
}
