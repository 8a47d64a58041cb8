use crate::cmds::{build_cli, run};
use crate::orchestrator::Fatal;
use clap::{App, ArgMatches};

use utility::Error;

pub mod cmds;
pub(crate) mod deploy;
pub(crate) mod describe;
pub(crate) mod error;
pub(crate) mod fndeploy;
pub(crate) mod invoke;
pub mod orchestrator;
pub(crate) mod priority;
pub(crate) mod secret;
pub(crate) mod secret_set;
pub mod settings;

type Result = std::result::Result<(), State>;

#[derive(thiserror::Error, Debug)]
pub enum State {
    #[error("command matched")]
    Matched,
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Error(#[from] Error),
    #[error("{0}")]
    Deploy(#[from] Fatal),
}

/// parses the command line, runs the matched command and returns the process exit code
pub async fn exec() -> i32 {
    let app = build_cli();
    let args: ArgMatches = app.get_matches();
    match run(&args).await {
        Ok(()) => 0,
        Err(err) => {
            colour::red_ln!("{}", err.to_string());
            1
        }
    }
}

pub(crate) trait CommandAppend {
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static>;
}
pub(crate) trait SubCommandAppend {
    fn append_subcommand() -> App<'static, 'static>;
}
