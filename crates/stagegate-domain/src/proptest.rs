//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Report aggregation (overall verdict and counts)
//! - Sequential short-circuiting on the first failure
//! - Determinism of built-in checks over arbitrary contexts

use crate::checks::{BuiltinCheck, CodeQualityCheck, CodeQualityConfig};
use crate::test_support::{Behavior, scripted};
use crate::{Check, CheckSettings, Context, Outcome, Report, Runner, RunnerOptions};
use proptest::prelude::*;
use serde_json::{Value, json};
use stagegate_types::ids;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_behavior() -> impl Strategy<Value = Behavior> {
    prop_oneof![
        4 => Just(Behavior::Pass),
        3 => Just(Behavior::Fail),
        1 => "[a-z ]{1,12}".prop_map(Behavior::Error),
        1 => "[a-z ]{1,12}".prop_map(Behavior::Panic),
    ]
}

fn arb_behaviors() -> impl Strategy<Value = Vec<Behavior>> {
    prop::collection::vec(arb_behavior(), 0..12)
}

/// Values of every JSON shape, so checks see both well-typed and mistyped inputs.
fn arb_json_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (0u32..200).prop_map(Value::from),
        (0.0f64..2000.0).prop_map(|f| json!(f)),
        prop_oneof![Just("http"), Just("https"), Just("ftp")].prop_map(Value::from),
        prop::collection::vec(
            prop_oneof![Just("GDPR"), Just("SOC-2"), Just("ISO-27001")],
            0..3
        )
        .prop_map(|items| json!(items)),
        prop::collection::vec(
            prop_oneof![Just("critical"), Just("high"), Just("low")],
            0..4
        )
        .prop_map(|levels| {
            Value::Array(levels.into_iter().map(|s| json!({ "severity": s })).collect())
        }),
    ]
}

const CONTEXT_KEYS: &[&str] = &[
    ids::KEY_COVERAGE,
    ids::KEY_COMPLEXITY,
    ids::KEY_PROTOCOL,
    ids::KEY_VULNERABILITIES,
    ids::KEY_HAS_SECRETS,
    ids::KEY_RESPONSE_TIME,
    ids::KEY_MEMORY_USAGE,
    ids::KEY_HAS_README,
    ids::KEY_HAS_API_DOCS,
    ids::KEY_DOC_COVERAGE,
    ids::KEY_HAS_LICENSE,
    ids::KEY_STANDARDS,
    ids::KEY_REQUIRE_AUDIT_LOGS,
    ids::KEY_HAS_AUDIT_LOGS,
];

fn arb_context() -> impl Strategy<Value = Context> {
    prop::collection::vec(
        (prop::sample::select(CONTEXT_KEYS), arb_json_scalar()),
        0..10,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .fold(Context::new(), |ctx, (key, value)| ctx.with(key, value))
    })
}

fn runner_for(behaviors: &[Behavior], options: RunnerOptions) -> Runner {
    let mut runner = Runner::new(options);
    for (i, behavior) in behaviors.iter().enumerate() {
        runner.register(scripted(&format!("check-{i}")).behaving(behavior.clone()));
    }
    runner
}

fn fails(behavior: &Behavior) -> bool {
    !matches!(behavior, Behavior::Pass)
}

// ============================================================================
// Aggregation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn report_passes_iff_every_outcome_passes(verdicts in prop::collection::vec(any::<bool>(), 0..20)) {
        let outcomes: Vec<Outcome> = verdicts
            .iter()
            .enumerate()
            .map(|(i, passed)| Outcome::new(format!("c{i}"), *passed, "m", Value::Null))
            .collect();
        let report = Report::new(outcomes, 0);

        prop_assert_eq!(report.passed(), verdicts.iter().all(|p| *p));
        prop_assert_eq!(report.total() as usize, verdicts.len());
        prop_assert_eq!(report.passed_count() + report.failed_count(), report.total());
        prop_assert_eq!(
            report.failed_count() as usize,
            verdicts.iter().filter(|p| !**p).count()
        );
    }

    #[test]
    fn sequential_runs_report_every_check_in_order(behaviors in arb_behaviors()) {
        let runner = runner_for(&behaviors, RunnerOptions::sequential());
        let report = runner.execute_blocking(&Context::new());

        prop_assert_eq!(report.total() as usize, behaviors.len());
        for (i, (outcome, behavior)) in report.outcomes().iter().zip(&behaviors).enumerate() {
            prop_assert_eq!(outcome.name(), format!("check-{i}"));
            prop_assert_eq!(outcome.passed(), !fails(behavior));
        }
    }

    #[test]
    fn stop_on_first_failure_keeps_the_passing_prefix(behaviors in arb_behaviors()) {
        let runner = runner_for(
            &behaviors,
            RunnerOptions::sequential().stop_on_first_failure(true),
        );
        let report = runner.execute_blocking(&Context::new());

        let expected = match behaviors.iter().position(fails) {
            Some(first_failure) => first_failure + 1,
            None => behaviors.len(),
        };
        prop_assert_eq!(report.outcomes().len(), expected);

        let (last, prefix) = match report.outcomes().split_last() {
            Some(split) => split,
            None => return Ok(()),
        };
        prop_assert!(prefix.iter().all(Outcome::passed));
        prop_assert_eq!(last.passed(), !behaviors.iter().any(fails));
    }

    #[test]
    fn concurrent_runs_agree_with_sequential_on_content(behaviors in arb_behaviors()) {
        let ctx = Context::new();
        let sequential = runner_for(&behaviors, RunnerOptions::sequential()).execute_blocking(&ctx);
        let concurrent = runner_for(&behaviors, RunnerOptions::concurrent()).execute_blocking(&ctx);

        prop_assert_eq!(sequential.passed(), concurrent.passed());
        prop_assert_eq!(sequential.passed_count(), concurrent.passed_count());

        let mut left: Vec<_> = sequential.outcomes().iter().map(Outcome::fingerprint).collect();
        let mut right: Vec<_> = concurrent.outcomes().iter().map(Outcome::fingerprint).collect();
        left.sort();
        right.sort();
        prop_assert_eq!(left, right);
    }
}

// ============================================================================
// Built-in checks
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn builtin_checks_are_deterministic(ctx in arb_context()) {
        for id in ids::ALL_CHECKS {
            let builtin = BuiltinCheck::default_for(id).expect("known id");
            let check = builtin.into_check(CheckSettings::default());
            let first = futures::executor::block_on(check.evaluate(&ctx));
            let second = futures::executor::block_on(check.evaluate(&ctx));

            let (first, second) = match (first, second) {
                (Ok(a), Ok(b)) => (a, b),
                _ => return Err(TestCaseError::fail(format!("{id} faulted"))),
            };
            prop_assert!(first.same_content(&second));
            prop_assert_eq!(first.passed(), first.issues().is_empty());
        }
    }

    #[test]
    fn coverage_verdict_matches_threshold(
        min in 0.0f64..100.0,
        coverage in 0.0f64..100.0,
    ) {
        let check = CodeQualityCheck::new(CodeQualityConfig {
            min_coverage: min,
            ..CodeQualityConfig::default()
        });
        let outcome = check.inspect(&Context::new().with(ids::KEY_COVERAGE, coverage));
        prop_assert_eq!(outcome.passed(), coverage >= min);
    }
}
