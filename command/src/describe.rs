use crate::deploy::authenticated_client;
use crate::settings::SettingsBuilder;
use crate::{CommandAppend, State};
use clap::{App, ArgMatches, SubCommand};
use proxy::auth::BearerToken;
use proxy::ControlPlane;
use utility::platform::model::FunctionPresence;

pub(crate) struct Describe;

impl CommandAppend for Describe {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("describe")
                .about(r#"Checks whether a function exists on the platform`,
	Example: `fndeploy describe handle-telegram-callback --project abc123
fndeploy describe echo --url http://127.0.0.1:54321`"#)
                .args_from_usage("<NAME> 'Slug of the function'"),
        );
        app
    }
}

impl Describe {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(d_args) = args.subcommand_matches("describe") {
            let builder = SettingsBuilder::from_args(d_args)?;
            let settings = crate::settings::Settings {
                base_url: builder.base_url()?,
                token: builder.token(),
                slug: builder.slug()?,
                tls_insecure: d_args.is_present("tls-no-verify"),
                timeout: builder.timeout()?,
                ..Default::default()
            };
            let auth = BearerToken::new(settings.token.as_str())?;
            let client = authenticated_client(&auth, &settings)?;

            match client.presence(settings.slug.as_str()).await {
                FunctionPresence::Exists => {
                    colour::green_ln!("Function {} exists", settings.slug);
                    println!("URL: {}", client.function_url(settings.slug.as_str()));
                }
                FunctionPresence::Missing => {
                    colour::yellow_ln!("Function {} does not exist", settings.slug);
                }
                FunctionPresence::Unknown(Some(status)) => {
                    return Err(State::Custom(format!(
                        "can't tell whether function {} exists, the platform answered {}",
                        settings.slug, status
                    )))
                }
                FunctionPresence::Unknown(None) => {
                    return Err(State::Custom(format!(
                        "can't reach the platform on URL {}",
                        settings.base_url
                    )))
                }
            }

            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
