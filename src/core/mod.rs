pub mod commands;
pub mod env;
pub mod resolver;
pub mod tokenizer;

pub use commands::{CommandError, Dispatcher, Flow};
pub use env::ShellEnv;
pub use tokenizer::Tokenizer;
