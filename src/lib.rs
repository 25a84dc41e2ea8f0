pub mod config;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod output;
pub mod record;
pub mod validator;
