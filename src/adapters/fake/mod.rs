//! Fake adapters with scripted responses, for tests.
//!
//! Each fake is configured up front with the exit codes, outputs, or
//! failures it should produce, and records the calls made against it so
//! tests can assert that halting checks stop the sequence.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod id_gen;
pub mod interpreter;
pub mod probe;
pub mod railway;

pub use clock::FixedClock;
pub use filesystem::FakeFileSystem;
pub use git::FakeGitRepo;
pub use id_gen::SequentialIdGenerator;
pub use interpreter::FakeInterpreter;
pub use probe::FakeHealthProbe;
pub use railway::FakeRailwayCli;

use std::sync::{Arc, Mutex};

use crate::context::ServiceContext;

/// Shared call log handed out by recording fakes.
///
/// Cloning before the fake is boxed into a `ServiceContext` keeps a
/// handle for assertions after the run.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    /// The recorded entries, in order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

/// Builds a `ServiceContext` where every port is a default fake.
///
/// Tests replace individual fields to script the scenario under test.
#[must_use]
pub fn context() -> ServiceContext {
    ServiceContext {
        clock: Box::new(FixedClock::at("2024-06-15T10:30:00Z")),
        fs: Box::new(FakeFileSystem::new()),
        git: Box::new(FakeGitRepo::clean()),
        interpreter: Box::new(FakeInterpreter::ok()),
        railway: Box::new(FakeRailwayCli::logged_in("dev@example.com")),
        probe: Box::new(FakeHealthProbe::healthy()),
        id_gen: Box::new(SequentialIdGenerator::new("run")),
    }
}
