use crate::check::{Check, CheckMetadata};
use crate::context::Context;
use crate::error::CheckError;
use crate::outcome::Outcome;
use crate::report::Report;
use futures::FutureExt;
use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use stagegate_types::ids;
use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

/// Execution policy, fixed when the runner is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerOptions {
    /// Sequential mode only: stop after the first failing outcome.
    ///
    /// Ignored when `concurrent` is set, because every check has already started by the
    /// time any of them fails.
    pub stop_on_first_failure: bool,

    /// Start every active check at once and wait for all of them. Outcomes are reported
    /// in completion order, which need not match registration order.
    pub concurrent: bool,
}

impl RunnerOptions {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn concurrent() -> Self {
        Self {
            concurrent: true,
            ..Self::default()
        }
    }

    pub fn stop_on_first_failure(self, stop: bool) -> Self {
        Self {
            stop_on_first_failure: stop,
            ..self
        }
    }
}

/// Holds registered checks and executes them against a context.
///
/// Registration is append-only and does not deduplicate names. `execute` borrows the
/// runner immutably, so it may be called repeatedly (or from several tasks) with
/// different contexts; registering or clearing requires `&mut self` and therefore cannot
/// overlap an in-flight execution.
#[derive(Default)]
pub struct Runner {
    checks: Vec<Box<dyn Check>>,
    options: RunnerOptions,
}

impl fmt::Debug for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.checks.iter().map(|c| c.name()).collect();
        f.debug_struct("Runner")
            .field("checks", &names)
            .field("options", &self.options)
            .finish()
    }
}

impl Runner {
    pub fn new(options: RunnerOptions) -> Self {
        Self {
            checks: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> RunnerOptions {
        self.options
    }

    pub fn register<C: Check + 'static>(&mut self, check: C) -> &mut Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn register_boxed(&mut self, check: Box<dyn Check>) -> &mut Self {
        self.checks.push(check);
        self
    }

    pub fn register_many<I>(&mut self, checks: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<dyn Check>>,
    {
        self.checks.extend(checks);
        self
    }

    /// Drop every registered check. Reports already produced are unaffected.
    pub fn clear(&mut self) {
        self.checks.clear();
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(Box::as_ref)
    }

    pub fn metadata(&self) -> Vec<CheckMetadata> {
        self.checks().map(Check::metadata).collect()
    }

    /// Run every active check and aggregate the outcomes.
    ///
    /// Never fails: a check that errors or panics contributes a failing outcome named
    /// after it, and the remaining checks still run.
    ///
    /// Panics are caught after the process panic hook has run, so the default hook
    /// still prints the panic message to stderr. Embedders that want a quiet run
    /// install their own hook with [`std::panic::set_hook`].
    ///
    /// Takes `&self`, so one runner can serve several executions at the same time.
    pub async fn execute(&self, ctx: &Context) -> Report {
        let started = Instant::now();

        let active: Vec<&dyn Check> = self
            .checks()
            .filter(|check| {
                let run = check.should_run(ctx);
                if !run {
                    log::debug!("skipping check {}", check.name());
                }
                run
            })
            .collect();

        let outcomes = if self.options.concurrent {
            if self.options.stop_on_first_failure {
                log::debug!("stop_on_first_failure has no effect under concurrent execution");
            }
            run_concurrent(&active, ctx).await
        } else {
            run_sequential(&active, ctx, self.options.stop_on_first_failure).await
        };

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        log::debug!(
            "executed {} of {} checks in {}ms",
            outcomes.len(),
            self.checks.len(),
            duration_ms
        );

        Report::new(outcomes, duration_ms)
    }

    /// Drive [`Runner::execute`] to completion on the current thread.
    pub fn execute_blocking(&self, ctx: &Context) -> Report {
        futures::executor::block_on(self.execute(ctx))
    }
}

async fn run_sequential(active: &[&dyn Check], ctx: &Context, stop_on_failure: bool) -> Vec<Outcome> {
    let mut outcomes = Vec::with_capacity(active.len());

    for check in active {
        let outcome = evaluate_isolated(*check, ctx).await;
        let failed = !outcome.passed();
        outcomes.push(outcome);

        if stop_on_failure && failed {
            log::debug!("stopping after failing check {}", check.name());
            break;
        }
    }

    outcomes
}

async fn run_concurrent(active: &[&dyn Check], ctx: &Context) -> Vec<Outcome> {
    let mut pending: FuturesUnordered<_> = active
        .iter()
        .map(|check| evaluate_isolated(*check, ctx))
        .collect();

    let mut outcomes = Vec::with_capacity(active.len());
    while let Some(outcome) = pending.next().await {
        outcomes.push(outcome);
    }
    outcomes
}

/// Evaluate one check, converting errors and panics into a failing outcome.
async fn evaluate_isolated(check: &dyn Check, ctx: &Context) -> Outcome {
    log::debug!("running check {}", check.name());

    // A hand-written impl may panic before it hands back its future.
    let result = match std::panic::catch_unwind(AssertUnwindSafe(|| check.evaluate(ctx))) {
        Ok(fut) => match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(CheckError::Panicked(panic_message(payload.as_ref()))),
        },
        Err(payload) => Err(CheckError::Panicked(panic_message(payload.as_ref()))),
    };

    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            match err {
                CheckError::Panicked(_) => log::error!("check {} {err}", check.name()),
                _ => log::warn!("check {} failed with error: {err}", check.name()),
            }
            fault_outcome(check.name(), &err)
        }
    }
}

fn fault_outcome(name: &str, err: &CheckError) -> Outcome {
    let description = err.to_string();
    let mut details = Map::new();
    details.insert(ids::DETAIL_ISSUES.to_string(), json!([description]));
    details.insert(ids::DETAIL_ERROR.to_string(), json!(description));
    details.insert(ids::DETAIL_FAULT_KIND.to_string(), json!(err.kind()));

    Outcome::fail(name, format!("Check failed with error: {description}"))
        .with_details(Value::Object(details))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
