mod command_runner;
mod environment;
mod project_files;
mod prompter;

pub use command_runner::CommandRunner;
pub use environment::Environment;
pub use project_files::ProjectFiles;
pub use prompter::Prompter;
