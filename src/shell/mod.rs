pub mod console;
pub mod debounce;
pub mod msg;
pub mod runtime;
pub mod state;
pub mod update;
pub mod view;

pub use runtime::{PromptPort, ShellDeps, ShellRuntime};
