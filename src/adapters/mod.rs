pub mod answers_file_prompter;
pub mod dialoguer_prompter;
pub mod process_command_runner;
pub mod process_environment;
pub mod project_filesystem;

pub use answers_file_prompter::AnswersFilePrompter;
pub use dialoguer_prompter::DialoguerPrompter;
pub use process_command_runner::ProcessCommandRunner;
pub use process_environment::ProcessEnvironment;
pub use project_filesystem::FilesystemProject;
