use crate::error::check_tls_insecure;
use crate::orchestrator::{DeployReport, Orchestrator};
use crate::settings::{Settings, SettingsBuilder};
use crate::{CommandAppend, State};
use clap::{App, Arg, ArgMatches, SubCommand};
use proxy::auth::BearerToken;
use proxy::proxy::make_http_client;

pub(crate) struct Deploy;

impl CommandAppend for Deploy {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("deploy")
                .about(r#"Creates the function if needed, uploads its source, sets its secrets and invokes it`,
	Example: `fndeploy deploy --project abc123
fndeploy deploy handle-telegram-callback --url http://127.0.0.1:54321 --secret TELEGRAM_BOT_TOKEN=123:abc
fndeploy deploy echo --source ./echo/index.ts --data '{"hello":"world"}'
fndeploy deploy -f deploy.yml --skip-test`"#)
                .args_from_usage(
                    "
                    [NAME]                   'Slug of the function, defaults to the deployment file or handle-telegram-callback'
                    -s, --source [source]    'Path of the function source, defaults to supabase/functions/<NAME>/index.ts'
                    -d, --data [data]        'JSON payload posted to the function by the smoke test'
                    --verify-jwt             'Require a valid JWT to invoke the function, only used on creation'
                    --skip-test              'Do not invoke the function after deploying it'
                    ",
                )
                .arg(
                    Arg::with_name("secret")
                        .long("secret")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .help("Environment variable set on the function as KEY=VALUE, repeatable"),
                ),
        );
        app
    }
}

impl Deploy {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(d_args) = args.subcommand_matches("deploy") {
            let settings = SettingsBuilder::from_args(d_args)?.build()?;
            let auth = BearerToken::new(settings.token.as_str())?;
            let client = authenticated_client(&auth, &settings)?;

            let report = Orchestrator::new(&client).run(&settings.plan()).await?;
            print_summary(&report);

            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

/// control plane client for `settings`, warns when the key would travel unencrypted
pub(crate) fn authenticated_client<'a>(
    auth: &'a BearerToken,
    settings: &Settings,
) -> utility::Result<proxy::client::Client<'a>> {
    let msg = check_tls_insecure(settings.base_url.as_str(), settings.tls_insecure);
    if !msg.is_empty() {
        colour::yellow_ln!("{}", msg);
    }
    let http_client = make_http_client(settings.timeout, settings.tls_insecure)?;
    Ok(auth
        .get_client(settings.base_url.as_str())?
        .with_http_client(http_client))
}

fn print_summary(report: &DeployReport) {
    let degraded = report.degraded_steps();
    if !degraded.is_empty() {
        println!();
        colour::yellow_ln!(
            "Steps that need attention: {}",
            degraded.join(", ")
        );
    }
}
