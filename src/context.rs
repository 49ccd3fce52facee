//! Service context bundling all port trait objects.

use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitRepo;
use crate::ports::id_gen::IdGenerator;
use crate::ports::interpreter::Interpreter;
use crate::ports::probe::HealthProbe;
use crate::ports::railway::RailwayCli;
use crate::settings::CheckSettings;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external collaborator. Commands
/// construct a live context; tests assemble one from fakes.
pub struct ServiceContext {
    /// Clock for report timestamps.
    pub clock: Box<dyn Clock>,
    /// Filesystem for project inspection and config generation.
    pub fs: Box<dyn FileSystem>,
    /// Git repository for push automation.
    pub git: Box<dyn GitRepo>,
    /// Python interpreter for syntax and import checks.
    pub interpreter: Box<dyn Interpreter>,
    /// Railway CLI for deployment operations.
    pub railway: Box<dyn RailwayCli>,
    /// HTTP probe for the deployed health endpoint.
    pub probe: Box<dyn HealthProbe>,
    /// ID generator for verification run identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    ///
    /// The interpreter adapter takes its command and timeout from the
    /// check settings.
    #[must_use]
    pub fn live(settings: &CheckSettings) -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::git::LiveGitRepo;
        use crate::adapters::live::id_gen::LiveIdGenerator;
        use crate::adapters::live::interpreter::LiveInterpreter;
        use crate::adapters::live::probe::LiveHealthProbe;
        use crate::adapters::live::railway::LiveRailwayCli;

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            git: Box::new(LiveGitRepo),
            interpreter: Box::new(LiveInterpreter::new(
                settings.interpreter.clone(),
                settings.interpreter_timeout_secs,
            )),
            railway: Box::new(LiveRailwayCli),
            probe: Box::new(LiveHealthProbe::new()),
            id_gen: Box::new(LiveIdGenerator),
        }
    }
}
