use crate::CommandAppend;
use clap::{App, Arg};

pub(crate) struct FnDeploy;

impl CommandAppend for FnDeploy {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app
            .arg(
                Arg::with_name("yaml")
                    .long("yaml")
                    .short("f")
                    .global(true)
                    .takes_value(true)
                    .help("Path to the deployment file, defaults to ./deploy.yml when present"),
            )
            .arg(
                Arg::with_name("url")
                    .long("url")
                    .short("u")
                    .takes_value(true)
                    .global(true)
                    .help("Platform URL starting with http(s)://, env FNDEPLOY_URL"),
            )
            .arg(
                Arg::with_name("project")
                    .long("project")
                    .short("p")
                    .takes_value(true)
                    .global(true)
                    .help("Project id, used to derive the platform URL, env FNDEPLOY_PROJECT"),
            )
            .arg(
                Arg::with_name("token")
                    .long("token")
                    .short("k")
                    .takes_value(true)
                    .global(true)
                    .help("Service role key, env FNDEPLOY_SERVICE_ROLE_KEY"),
            )
            .arg(
                Arg::with_name("timeout")
                    .long("timeout")
                    .takes_value(true)
                    .global(true)
                    .help("Timeout of every HTTP request, e.g. 30s. No timeout by default"),
            )
            .arg(
                Arg::with_name("tls-no-verify")
                    .long("tls-no-verify")
                    .global(true)
                    .help("Disable TLS validation"),
            );
        app
    }
}
