mod fake_environment;
mod fixtures;
mod journal;
mod memory_project;
mod recording_runner;
mod scripted_prompter;

#[allow(unused_imports)]
pub use fake_environment::FakeEnvironment;
#[allow(unused_imports)]
pub use fixtures::{APP_CONFIG, ENV_EXAMPLE, SITES, TestContext, seeded_project};
#[allow(unused_imports)]
pub use journal::Journal;
#[allow(unused_imports)]
pub use memory_project::MemoryProject;
#[allow(unused_imports)]
pub use recording_runner::RecordingRunner;
#[allow(unused_imports)]
pub use scripted_prompter::{Answer, ScriptedPrompter};
