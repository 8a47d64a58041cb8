use crate::error::check_tls_insecure;
use crate::settings::SettingsBuilder;
use crate::{CommandAppend, State};
use clap::{App, ArgMatches, SubCommand};
use proxy::auth::Anonymous;
use proxy::proxy::make_http_client;
use std::io::Write;
use utility::platform::model::DEFAULT_SMOKE_TEST_PAYLOAD;

pub(crate) struct Invoke;

impl CommandAppend for Invoke {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("invoke")
                .about(r#"Posts a JSON payload to a deployed function and prints its answer`,
	Example: `fndeploy invoke handle-telegram-callback --project abc123
fndeploy invoke echo --url http://127.0.0.1:54321 --data '{"hello":"world"}'`"#)
                .args_from_usage(
                    "
                    <NAME>                'Slug of the function'
                    -d, --data [data]     'JSON payload, defaults to the smoke test payload'
                    ",
                ),
        );
        app
    }
}

impl Invoke {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(i_args) = args.subcommand_matches("invoke") {
            let builder = SettingsBuilder::from_args(i_args)?;
            let base_url = builder.base_url()?;
            let slug = builder.slug()?;
            let payload = builder
                .smoke_test_payload()?
                .unwrap_or_else(|| DEFAULT_SMOKE_TEST_PAYLOAD.to_string());
            let tls_insecure = i_args.is_present("tls-no-verify");

            let msg = check_tls_insecure(base_url.as_str(), tls_insecure);
            if !msg.is_empty() {
                colour::yellow_ln!("{}", msg);
            }
            let auth = Anonymous;
            let client = auth
                .get_client(base_url.as_str())?
                .with_http_client(make_http_client(builder.timeout()?, tls_insecure)?);

            let resp = client.invoke_function(slug.as_str(), payload.as_str()).await?;
            std::io::stdout()
                .write_all(resp.body.as_bytes())
                .map_err(|e| State::Custom(e.to_string()))?;
            println!();

            if resp.status != 200 {
                return Err(State::Custom(format!(
                    "function {} answered unexpected status {}",
                    slug, resp.status
                )));
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
