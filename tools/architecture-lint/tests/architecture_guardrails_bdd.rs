//! Behaviour tests for the architecture guardrails.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use architecture_lint::{ArchitectureLintError, LintSource, Violation};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

#[derive(Debug, Default)]
struct LintWorld {
    sources: Vec<LintSource>,
    result: Option<Result<(), ArchitectureLintError>>,
}

#[fixture]
fn world() -> Mutex<LintWorld> {
    Mutex::new(LintWorld::default())
}

fn add_source(world: &Mutex<LintWorld>, file: &str, contents: &str) {
    let mut world = world.lock().expect("world lock");
    world.sources.push(LintSource {
        file: PathBuf::from(file),
        contents: contents.to_owned(),
    })
}

const INBOUND_USING_OUTBOUND: &str = "use chat_backend::outbound::memory::MemoryUserStore; \
     fn state() { let _ = MemoryUserStore::default(); }";

const DOMAIN_USING_ACTIX: &str =
    "use actix_web::HttpResponse; fn handler() { let _ = HttpResponse::Ok(); }";

#[given("an inbound module that imports the outbound layer")]
fn inbound_imports_outbound(world: &Mutex<LintWorld>) {
    add_source(world, "src/inbound/http/accounts.rs", INBOUND_USING_OUTBOUND);
}

#[given("a domain module that imports Actix Web")]
fn domain_imports_actix(world: &Mutex<LintWorld>) {
    add_source(world, "src/domain/accounts.rs", DOMAIN_USING_ACTIX);
}

#[given("an outbound module that imports the inbound layer")]
fn outbound_imports_inbound(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "src/outbound/memory.rs",
        "use crate::inbound::http::HttpReply; fn store() { let _ = 1; }",
    );
}

#[given("a domain service that catches unwinding panics itself")]
fn domain_catches_panics(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "src/domain/accounts.rs",
        "fn provision() { let _ = std::panic::catch_unwind(|| ()); }",
    );
}

#[given("an HTTP adapter that selects on the authentication failure kind")]
fn adapter_selects_on_authentication(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "src/inbound/http/reply.rs",
        "use outcome::FailureKind; \
         fn unauthorised(kind: FailureKind) -> bool { kind == FailureKind::Authentication }",
    );
}

#[given("valid domain, inbound, outbound, and outcome modules")]
fn valid_modules(world: &Mutex<LintWorld>) {
    add_valid_modules(world);
}

#[given("valid modules mixed with multiple boundary violations")]
fn valid_modules_with_multiple_violations(world: &Mutex<LintWorld>) {
    add_valid_modules(world);
    add_source(
        world,
        "src/inbound/http/bad_cross_boundary.rs",
        INBOUND_USING_OUTBOUND,
    );
    add_source(world, "src/domain/bad.rs", DOMAIN_USING_ACTIX);
}

fn add_valid_modules(world: &Mutex<LintWorld>) {
    add_source(
        world,
        "src/domain/user.rs",
        "pub struct UserId(String); impl UserId { pub fn new(v: &str) -> Self { Self(v.to_owned()) } }",
    );
    add_source(
        world,
        "src/inbound/http/accounts.rs",
        "use crate::domain::user::UserId; use outcome::OutcomeFuture; \
         fn handler() { let _id = UserId::new(\"ok\"); }",
    );
    add_source(
        world,
        "src/outbound/memory.rs",
        "use crate::domain::user::UserId; pub struct Store; impl Store { pub fn save(&self, _id: UserId) {} }",
    );
    add_source(
        world,
        "crates/outcome/src/chain.rs",
        "fn guard() { let _ = std::panic::catch_unwind(|| ()); }",
    );
    add_source(
        world,
        "crates/outcome/src/transport.rs",
        "fn status(kind: FailureKind) -> u16 { if kind == FailureKind::Authentication { 401 } else { 400 } }",
    );
}

#[when("the architecture lint runs")]
fn run_architecture_lint(world: &Mutex<LintWorld>) {
    let sources = {
        let world = world.lock().expect("world lock");
        world.sources.clone()
    };

    let temp_dir = TempDir::new().expect("tempdir");
    let backend_dir = temp_dir.path().join("backend");
    for source in &sources {
        let path = backend_dir.join(&source.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, &source.contents).expect("write source file");
    }

    let result = architecture_lint::lint_backend_sources(&backend_dir);
    let mut world = world.lock().expect("world lock");
    world.result = Some(result);
}

#[then("the lint succeeds")]
fn lint_succeeds(world: &Mutex<LintWorld>) {
    let world = world.lock().expect("world lock");
    let outcome = world.result.as_ref().expect("lint must have run");
    assert!(outcome.is_ok(), "expected success, got: {outcome:?}");
}

fn assert_violation_in_file_contains(
    world: &Mutex<LintWorld>,
    expected_file: &str,
    expected_substring: &str,
) {
    let expected_file = PathBuf::from(expected_file);
    let violations = violations(world);
    assert!(
        violations.iter().any(|violation| {
            violation.file == expected_file && violation.message.contains(expected_substring)
        }),
        "expected violation in '{expected_file:?}' containing '{expected_substring}', got: {violations:?}"
    );
}

fn violations(world: &Mutex<LintWorld>) -> Vec<Violation> {
    let world = world.lock().expect("world lock");
    let outcome = world.result.as_ref().expect("lint must have run");
    extract_violations(outcome).expect("expected violations")
}

#[then("the lint fails due to outbound access from inbound")]
fn lint_fails_due_to_outbound_access(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(world, "src/inbound/http/accounts.rs", "crate::outbound");
}

#[then("the lint fails due to inbound access from outbound")]
fn lint_fails_due_to_inbound_access(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(world, "src/outbound/memory.rs", "crate::inbound");
}

#[then("the lint fails due to framework crate usage in the domain")]
fn lint_fails_due_to_framework_crate(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(
        world,
        "src/domain/accounts.rs",
        "external crate `actix_web`",
    );
}

#[then("the lint fails due to panic capture outside the combinators")]
fn lint_fails_due_to_panic_capture(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(world, "src/domain/accounts.rs", "catch_unwind");
}

#[then("the lint fails due to authentication selection outside the transport adapter")]
fn lint_fails_due_to_authentication_selection(world: &Mutex<LintWorld>) {
    assert_violation_in_file_contains(
        world,
        "src/inbound/http/reply.rs",
        "FailureKind::Authentication",
    );
}

#[then("the lint fails")]
fn lint_fails(world: &Mutex<LintWorld>) {
    let world = world.lock().expect("world lock");
    let outcome = world.result.as_ref().expect("lint must have run");
    assert!(outcome.is_err(), "expected failure, got: {outcome:?}");
}

#[then("all boundary violations are reported")]
fn all_boundary_violations_are_reported(world: &Mutex<LintWorld>) {
    let violations = violations(world);
    assert!(
        violations.len() >= 2,
        "expected at least 2 violations, got: {violations:?}"
    );
    assert_violation_in_file_contains(
        world,
        "src/inbound/http/bad_cross_boundary.rs",
        "crate::outbound",
    );
    assert_violation_in_file_contains(world, "src/domain/bad.rs", "external crate `actix_web`");
}

fn extract_violations(outcome: &Result<(), ArchitectureLintError>) -> Option<Vec<Violation>> {
    match outcome {
        Ok(()) => None,
        Err(ArchitectureLintError::Violations(violations)) => Some(violations.clone()),
        Err(other) => panic!("expected violations error, got: {other:?}"),
    }
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Well-layered sources pass"
)]
fn well_layered_sources_pass(world: Mutex<LintWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Inbound handlers must not reach the outbound layer"
)]
fn inbound_handlers_must_not_reach_the_outbound_layer(world: Mutex<LintWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "The domain stays framework free"
)]
fn the_domain_stays_framework_free(world: Mutex<LintWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Outbound adapters must not reach the inbound layer"
)]
fn outbound_adapters_must_not_reach_the_inbound_layer(world: Mutex<LintWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Panic capture outside the combinators is rejected"
)]
fn panic_capture_outside_the_combinators_is_rejected(world: Mutex<LintWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Status selection outside the transport adapter is rejected"
)]
fn status_selection_outside_the_transport_adapter_is_rejected(world: Mutex<LintWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/architecture_guardrails.feature",
    name = "Every violation is reported"
)]
fn every_violation_is_reported(world: Mutex<LintWorld>) {
    drop(world);
}
