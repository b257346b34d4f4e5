use crate::check::{Check, CheckSettings};
use crate::context::Context;
use crate::error::CheckError;
use crate::outcome::Outcome;
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context as TaskContext, Poll};

#[derive(Clone, Debug)]
pub enum Behavior {
    Pass,
    Fail,
    Error(String),
    Panic(String),
}

/// Check with a fixed behavior, an invocation counter, and optional suspension points.
pub struct ScriptedCheck {
    name: String,
    behavior: Behavior,
    settings: CheckSettings,
    yields: usize,
    calls: Arc<AtomicUsize>,
}

pub fn scripted(name: &str) -> ScriptedCheck {
    ScriptedCheck {
        name: name.to_string(),
        behavior: Behavior::Pass,
        settings: CheckSettings::default(),
        yields: 0,
        calls: Arc::new(AtomicUsize::new(0)),
    }
}

impl ScriptedCheck {
    pub fn passing(self) -> Self {
        self.behaving(Behavior::Pass)
    }

    pub fn failing(self) -> Self {
        self.behaving(Behavior::Fail)
    }

    pub fn erroring(self, message: &str) -> Self {
        self.behaving(Behavior::Error(message.to_string()))
    }

    pub fn panicking(self, message: &str) -> Self {
        self.behaving(Behavior::Panic(message.to_string()))
    }

    pub fn behaving(self, behavior: Behavior) -> Self {
        Self { behavior, ..self }
    }

    pub fn disabled(self) -> Self {
        Self {
            settings: CheckSettings::disabled(),
            ..self
        }
    }

    /// Suspend `n` times before producing an outcome.
    pub fn yielding(self, n: usize) -> Self {
        Self { yields: n, ..self }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Check for ScriptedCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn settings(&self) -> CheckSettings {
        self.settings
    }

    async fn evaluate(&self, _ctx: &Context) -> Result<Outcome, CheckError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for _ in 0..self.yields {
            YieldNow::default().await;
        }
        match &self.behavior {
            Behavior::Pass => Ok(Outcome::pass(&self.name, "ok")),
            Behavior::Fail => Ok(Outcome::fail(&self.name, "rule violated")),
            Behavior::Error(message) => Err(CheckError::fault(message.clone())),
            Behavior::Panic(message) => panic!("{message}"),
        }
    }
}

/// Never overrides `evaluate`.
pub struct Unimplemented(pub &'static str);

#[async_trait]
impl Check for Unimplemented {
    fn name(&self) -> &str {
        self.0
    }
}

/// Passing check that only runs when `key` is `true` in the context.
pub struct Gated {
    name: String,
    key: String,
}

pub fn gated_on(name: &str, key: &str) -> Gated {
    Gated {
        name: name.to_string(),
        key: key.to_string(),
    }
}

#[async_trait]
impl Check for Gated {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.flag(&self.key).unwrap_or(false)
    }

    async fn evaluate(&self, _ctx: &Context) -> Result<Outcome, CheckError> {
        Ok(Outcome::pass(&self.name, "gated check ran"))
    }
}

/// Returns `Pending` once, waking itself so the executor polls again.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
