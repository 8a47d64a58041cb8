use proxy::ControlPlane;
use std::path::{Path, PathBuf};
use utility::platform::model::{
    CreateFunctionRequest, EnvConfig, FunctionPresence, RemoteResponse,
};
use utility::truncate_body;

///upload and configure response bodies are echoed up to this many characters
pub const ECHO_LIMIT: usize = 500;

pub const CREATE_OK: &[u16] = &[200, 201];
pub const UPLOAD_OK: &[u16] = &[200, 201];
pub const CONFIGURE_OK: &[u16] = &[200, 204];
pub const SMOKE_TEST_OK: &[u16] = &[200];

const RULE: &str = "================================";

/// DeployPlan is everything a deployment needs, fully resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeployPlan {
    ///base url of the targeted platform, shown in the log only
    pub platform: String,
    pub slug: String,
    pub source: PathBuf,
    pub verify_jwt: bool,
    pub env: EnvConfig,
    ///JSON posted to the deployed function, None skips the smoke test
    pub smoke_test_payload: Option<String>,
}

/// StepOutcome is the result of a step whose failure does not stop the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    Succeeded(u16),
    /// unexpected status, None when no response came back
    Degraded(Option<u16>),
    Skipped,
}

impl StepOutcome {
    fn from_response(res: &utility::Result<RemoteResponse>, accepted: &[u16]) -> StepOutcome {
        match res {
            Ok(resp) if resp.is_one_of(accepted) => StepOutcome::Succeeded(resp.status),
            Ok(resp) => StepOutcome::Degraded(Some(resp.status)),
            Err(_) => StepOutcome::Degraded(None),
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, StepOutcome::Succeeded(_))
    }

    pub fn degraded(&self) -> bool {
        matches!(self, StepOutcome::Degraded(_))
    }
}

/// DeployReport records how every step of a completed run went.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployReport {
    pub slug: String,
    pub function_url: String,
    pub presence: FunctionPresence,
    pub source_bytes: usize,
    pub created: bool,
    pub upload: StepOutcome,
    pub configure: StepOutcome,
    pub smoke_test: StepOutcome,
}

impl DeployReport {
    pub fn smoke_test_passed(&self) -> bool {
        self.smoke_test.succeeded()
    }

    ///names of the steps that ended with a warning
    pub fn degraded_steps(&self) -> Vec<&'static str> {
        let mut steps = vec![];
        if let FunctionPresence::Unknown(_) = self.presence {
            steps.push("existence check");
        }
        if self.upload.degraded() {
            steps.push("upload");
        }
        if self.configure.degraded() {
            steps.push("configure");
        }
        if self.smoke_test.degraded() {
            steps.push("smoke test");
        }
        steps
    }
}

/// Fatal ends a deployment immediately, nothing is rolled back.
#[derive(thiserror::Error, Debug)]
pub enum Fatal {
    #[error("can't read function source {path}: {source}")]
    SourceUnreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to create function {slug}, status {status}: {body}")]
    CreateRejected {
        slug: String,
        status: u16,
        body: String,
    },
    #[error("failed to create function {slug}: {source}")]
    CreateFailed {
        slug: String,
        source: utility::Error,
    },
}

/// reads the whole source file, its bytes are uploaded untouched
pub fn read_source(path: &Path) -> Result<Vec<u8>, Fatal> {
    std::fs::read(path).map_err(|source| Fatal::SourceUnreadable {
        path: path.display().to_string(),
        source,
    })
}

/// Orchestrator runs the deployment steps in order against a control plane.
pub struct Orchestrator<'c, C: ?Sized> {
    control_plane: &'c C,
}

impl<'c, C: ControlPlane + ?Sized> Orchestrator<'c, C> {
    pub fn new(control_plane: &'c C) -> Orchestrator<'c, C> {
        Orchestrator { control_plane }
    }

    /// Reads the source, creates the function when the control plane does not
    /// report it, uploads the source, sets the environment and invokes the function.
    ///
    /// The source is read before any request is sent. Only an unreadable source
    /// or a failed creation stop the run, every other failure is printed and the
    /// next step runs anyway.
    pub async fn run(&self, plan: &DeployPlan) -> Result<DeployReport, Fatal> {
        println!("{}", RULE);
        colour::cyan_ln!("Deploying function {}", plan.slug);
        println!("{}", RULE);
        println!();
        println!("Platform: {}", plan.platform);
        println!("Function: {}", plan.slug);
        println!();

        println!("Reading function source {}...", plan.source.display());
        let source = read_source(&plan.source)?;
        colour::green_ln!("Read {} bytes", source.len());
        println!();

        let presence = self.check_exists(&plan.slug).await;
        println!();

        let created = if presence.exists() {
            colour::green_ln!("Function already exists");
            false
        } else {
            self.create(plan).await?;
            true
        };
        println!();

        let upload = self.upload(&plan.slug, &source).await;
        println!();
        let configure = self.configure(&plan.slug, &plan.env).await;
        println!();
        let smoke_test = match &plan.smoke_test_payload {
            Some(payload) => self.smoke_test(&plan.slug, payload).await,
            None => {
                colour::yellow_ln!("Smoke test skipped");
                StepOutcome::Skipped
            }
        };

        let report = DeployReport {
            slug: plan.slug.clone(),
            function_url: self.control_plane.function_url(&plan.slug),
            presence,
            source_bytes: source.len(),
            created,
            upload,
            configure,
            smoke_test,
        };
        print_banner(&report);
        Ok(report)
    }

    async fn check_exists(&self, slug: &str) -> FunctionPresence {
        println!("Checking if function exists...");
        let presence = self.control_plane.presence(slug).await;
        match presence {
            FunctionPresence::Exists => println!("Function exists: true"),
            FunctionPresence::Missing => println!("Function exists: false"),
            FunctionPresence::Unknown(Some(status)) => {
                colour::yellow_ln!(
                    "WARNING: existence check answered {}, this does not prove the function is missing, \
                     trying to create it anyway",
                    status
                );
            }
            FunctionPresence::Unknown(None) => {
                colour::yellow_ln!(
                    "WARNING: existence check got no response, trying to create the function anyway"
                );
            }
        }
        presence
    }

    async fn create(&self, plan: &DeployPlan) -> Result<(), Fatal> {
        println!("Creating function...");
        let request = CreateFunctionRequest::new(&plan.slug, plan.verify_jwt);
        let resp = self
            .control_plane
            .create_function(&request)
            .await
            .map_err(|source| Fatal::CreateFailed {
                slug: plan.slug.clone(),
                source,
            })?;
        println!("Status: {}", resp.status);
        println!("Response: {}", resp.body);

        if !resp.is_one_of(CREATE_OK) {
            return Err(Fatal::CreateRejected {
                slug: plan.slug.clone(),
                status: resp.status,
                body: resp.body,
            });
        }
        colour::green_ln!("Function created");
        Ok(())
    }

    async fn upload(&self, slug: &str, source: &[u8]) -> StepOutcome {
        println!("Deploying function code...");
        let res = self.control_plane.upload_source(slug, source).await;
        echo(&res, Some(ECHO_LIMIT));
        let outcome = StepOutcome::from_response(&res, UPLOAD_OK);
        if outcome.succeeded() {
            colour::green_ln!("Function code deployed");
        } else {
            colour::yellow_ln!("WARNING: function code deployment may have issues");
        }
        outcome
    }

    async fn configure(&self, slug: &str, env: &EnvConfig) -> StepOutcome {
        println!("Setting environment variables...");
        let res = self.control_plane.configure(slug, env).await;
        echo(&res, Some(ECHO_LIMIT));
        let outcome = StepOutcome::from_response(&res, CONFIGURE_OK);
        if outcome.succeeded() {
            colour::green_ln!(
                "Environment variables set: {}",
                env.keys().cloned().collect::<Vec<_>>().join(", ")
            );
        } else {
            colour::yellow_ln!("WARNING: environment variables may not have been set");
        }
        outcome
    }

    async fn smoke_test(&self, slug: &str, payload: &str) -> StepOutcome {
        println!("Testing function endpoint...");
        let res = self.control_plane.invoke(slug, payload).await;
        echo(&res, None);
        StepOutcome::from_response(&res, SMOKE_TEST_OK)
    }
}

fn echo(res: &utility::Result<RemoteResponse>, limit: Option<usize>) {
    match res {
        Ok(resp) => {
            println!("Status: {}", resp.status);
            let body = match limit {
                Some(max) => truncate_body(resp.body.as_str(), max),
                None => resp.body.as_str(),
            };
            println!("Response: {}", body);
        }
        Err(e) => {
            colour::yellow_ln!("Request failed: {}", e);
        }
    }
}

// only the smoke test decides the banner, see DeployReport::degraded_steps for the rest
fn print_banner(report: &DeployReport) {
    println!();
    println!("{}", RULE);
    match report.smoke_test {
        StepOutcome::Succeeded(_) => {
            colour::green_ln!("Function deployment complete!");
            println!("{}", RULE);
            println!();
            println!("Function URL: {}", report.function_url);
        }
        StepOutcome::Skipped => {
            colour::green_ln!("Function deployment finished, smoke test skipped");
            println!("{}", RULE);
            println!();
            println!("Function URL: {}", report.function_url);
        }
        StepOutcome::Degraded(_) => {
            colour::yellow_ln!("Function may need further debugging");
            println!("Check the platform dashboard for logs");
            println!("{}", RULE);
        }
    }
}
