use crate::deploy::Deploy;
use crate::describe::Describe;
use crate::fndeploy::FnDeploy;
use crate::invoke::Invoke;
use crate::secret::Secret;
use crate::{CommandAppend, State};
use clap::{App, AppSettings, ArgMatches};
use utility::{Error, Result};

const WELCOME_MSG: &str = r#"Deploy serverless functions to a hosted backend platform, set their secrets
and check they answer"#;

pub fn build_cli() -> App<'static, 'static> {
    let app = App::new("fndeploy")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::VersionlessSubcommands)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::DeriveDisplayOrder)
        .global_settings(&[AppSettings::ColoredHelp])
        .about(WELCOME_MSG);

    let app = FnDeploy::append_subcommand(app);
    let app = Deploy::append_subcommand(app);
    let app = Describe::append_subcommand(app);
    let app = Invoke::append_subcommand(app);
    let app = Secret::append_subcommand(app);
    app
}

pub async fn run(args: &ArgMatches<'_>) -> Result<()> {
    match dispatch_command(args).await {
        Ok(_) => Err(Error::Custom(
            "command not matched, run fndeploy --help".to_string(),
        )),
        Err(s) => match s {
            State::Matched => Ok(()),
            state => Err(Error::Custom(state.to_string())),
        },
    }
}

pub async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
    Deploy::dispatch_command(args).await?;
    Describe::dispatch_command(args).await?;
    Invoke::dispatch_command(args).await?;
    Secret::dispatch_command(args).await?;
    Ok(())
}
