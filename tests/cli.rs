use std::io::Write;
use std::process::{Command, Output};

const ENVIRONMENT: &[&str] = &[
    "FNDEPLOY_URL",
    "FNDEPLOY_PROJECT",
    "FNDEPLOY_SERVICE_ROLE_KEY",
    "TELEGRAM_BOT_TOKEN",
];

/// runs the binary with an empty deployment file and a clean environment
fn fndeploy(dir: &tempdir::TempDir, args: &[&str]) -> Output {
    let yaml = dir.path().join("deploy.yml");
    std::fs::File::create(&yaml).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fndeploy"));
    for key in ENVIRONMENT {
        cmd.env_remove(key);
    }
    cmd.args(args)
        .arg("--yaml")
        .arg(yaml.to_str().unwrap())
        .output()
        .unwrap()
}

fn write_source(dir: &tempdir::TempDir, source: &str) -> String {
    let path = dir.path().join("index.ts");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(source.as_bytes())
        .unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_source_exits_nonzero_without_requests() {
    let check = mockito::mock("GET", "/functions/v1/functions/cli-missing-source")
        .with_status(200)
        .expect(0)
        .create();
    let dir = tempdir::TempDir::new("fndeploy-cli").unwrap();
    let missing = dir.path().join("nope.ts");
    let url = format!("http://{}", mockito::server_address());

    let output = fndeploy(
        &dir,
        &[
            "deploy",
            "cli-missing-source",
            "--url",
            url.as_str(),
            "--token",
            "key",
            "--source",
            missing.to_str().unwrap(),
            "--secret",
            "TELEGRAM_BOT_TOKEN=42:token",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("can't read function source"));
    check.assert();
}

#[test]
fn test_missing_token_exits_nonzero() {
    let dir = tempdir::TempDir::new("fndeploy-cli").unwrap();
    let output = fndeploy(
        &dir,
        &[
            "deploy",
            "--url",
            "http://127.0.0.1:1",
            "--secret",
            "TELEGRAM_BOT_TOKEN=42:token",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("service role key is required"));
}

#[test]
fn test_missing_secret_exits_nonzero_without_requests() {
    let check = mockito::mock("GET", "/functions/v1/functions/cli-missing-secret")
        .expect(0)
        .create();
    let dir = tempdir::TempDir::new("fndeploy-cli").unwrap();
    let source = write_source(&dir, "export {}\n");
    let url = format!("http://{}", mockito::server_address());

    let output = fndeploy(
        &dir,
        &[
            "deploy",
            "cli-missing-secret",
            "--url",
            url.as_str(),
            "--token",
            "key",
            "--source",
            source.as_str(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("no secret to set"));
    check.assert();
}

#[test]
fn test_deploy_completes_with_failed_smoke_test() {
    let slug = "cli-smoke-fails";
    let _check = mockito::mock("GET", format!("/functions/v1/functions/{}", slug).as_str())
        .with_status(200)
        .create();
    let _upload = mockito::mock(
        "POST",
        format!("/functions/v1/functions/{}/deployments", slug).as_str(),
    )
    .with_status(201)
    .create();
    let _configure = mockito::mock(
        "PATCH",
        format!("/functions/v1/functions/{}/config", slug).as_str(),
    )
    .with_status(204)
    .create();
    let invoke = mockito::mock("POST", format!("/functions/v1/{}", slug).as_str())
        .with_status(500)
        .expect(1)
        .create();

    let dir = tempdir::TempDir::new("fndeploy-cli").unwrap();
    let source = write_source(&dir, "export {}\n");
    let url = format!("http://{}", mockito::server_address());
    let output = fndeploy(
        &dir,
        &[
            "deploy",
            slug,
            "--url",
            url.as_str(),
            "--token",
            "key",
            "--source",
            source.as_str(),
            "--secret",
            "TELEGRAM_BOT_TOKEN=42:token",
        ],
    );

    invoke.assert();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(format!("Platform: {}", url).as_str()));
    assert!(stdout.contains(format!("Function: {}", slug).as_str()));
    assert!(stdout.contains("Function may need further debugging"));
}

#[test]
fn test_deploy_fails_when_create_is_rejected() {
    let slug = "cli-create-rejected";
    let _check = mockito::mock("GET", format!("/functions/v1/functions/{}", slug).as_str())
        .with_status(404)
        .create();
    let _create = mockito::mock("POST", "/functions/v1/functions")
        .match_body(mockito::Matcher::Regex(slug.to_string()))
        .with_status(500)
        .create();
    let upload = mockito::mock(
        "POST",
        format!("/functions/v1/functions/{}/deployments", slug).as_str(),
    )
    .expect(0)
    .create();

    let dir = tempdir::TempDir::new("fndeploy-cli").unwrap();
    let source = write_source(&dir, "export {}\n");
    let url = format!("http://{}", mockito::server_address());
    let output = fndeploy(
        &dir,
        &[
            "deploy",
            slug,
            "--url",
            url.as_str(),
            "--token",
            "key",
            "--source",
            source.as_str(),
            "--secret",
            "TELEGRAM_BOT_TOKEN=42:token",
        ],
    );

    upload.assert();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("failed to create function"));
}
