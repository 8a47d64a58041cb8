use crate::deploy::authenticated_client;
use crate::settings::{parse_secret_pairs, Settings, SettingsBuilder};
use crate::{State, SubCommandAppend};
use clap::{App, Arg, ArgMatches, SubCommand};
use proxy::auth::BearerToken;
use proxy::ControlPlane;
use utility::truncate_body;

pub(crate) struct SecretSet;

impl SubCommandAppend for SecretSet {
    #[inline(always)]
    fn append_subcommand() -> App<'static, 'static> {
        let app = SubCommand::with_name("set")
            .about(r#"Sets environment variables on a deployed function`,
	Example: `fndeploy secret set handle-telegram-callback TELEGRAM_BOT_TOKEN=123:abc --project abc123
fndeploy secret set echo A=1 B=2 --url http://127.0.0.1:54321`"#)
            .arg(
                Arg::with_name("NAME")
                    .index(1)
                    .required(true)
                    .help("Slug of the function"),
            )
            .arg(
                Arg::with_name("SECRETS")
                    .index(2)
                    .required(true)
                    .multiple(true)
                    .help("Variables to set as KEY=VALUE"),
            );
        app
    }
}

impl SecretSet {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(s_args) = args.subcommand_matches("set") {
            let pairs: Vec<&str> = s_args.values_of("SECRETS").unwrap_or_default().collect();
            let env = parse_secret_pairs(&pairs)?;

            let builder = SettingsBuilder::from_args(s_args)?;
            let settings = Settings {
                base_url: builder.base_url()?,
                token: builder.token(),
                slug: builder.slug()?,
                tls_insecure: s_args.is_present("tls-no-verify"),
                timeout: builder.timeout()?,
                ..Default::default()
            };
            let auth = BearerToken::new(settings.token.as_str())?;
            let client = authenticated_client(&auth, &settings)?;

            colour::green_ln!(
                "Setting {} on function {}",
                env.keys().cloned().collect::<Vec<_>>().join(", "),
                settings.slug
            );
            let resp = client.configure(settings.slug.as_str(), &env).await?;
            match resp.status {
                200 | 204 => {
                    colour::green_ln!("Updated");
                    Err(State::Matched)
                }
                status => Err(State::Custom(format!(
                    "server returned unexpected status code: {} - {}",
                    status,
                    truncate_body(resp.body.as_str(), 500)
                ))),
            }
        } else {
            Ok(())
        }
    }
}
