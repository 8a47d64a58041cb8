use crate::secret_set::SecretSet;
use crate::{CommandAppend, State, SubCommandAppend};
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct Secret;

impl CommandAppend for Secret {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("secret")
                .about(r#"Manage function secrets"#)
                .subcommand(SecretSet::append_subcommand()),
        );
        app
    }
}

impl Secret {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(s_args) = args.subcommand_matches("secret") {
            SecretSet::dispatch_command(s_args).await?;

            let usage = s_args.usage();
            Err(State::Custom(format!(
                "secret command must be followed by a sub command\n{}\n\
                 Example: fndeploy secret set handle-telegram-callback TELEGRAM_BOT_TOKEN=123:abc",
                usage
            )))
        } else {
            Ok(())
        }
    }
}
