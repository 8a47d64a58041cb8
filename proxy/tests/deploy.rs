use mockito::Matcher;
use proxy::client::Client;
use proxy::utils::deployments_path;

#[tokio::test]
async fn test_deploy_source_sends_bytes_unchanged() {
    let source = "export default () => new Response(\"ok\")\n// ünïcode\n";
    let add = format!("http://{}", mockito::server_address().to_string());
    let _mok = mockito::mock("POST", deployments_path("fn-upload").as_str())
        .match_header("content-type", "application/octet-stream")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Exact(source.to_string()))
        .with_status(201)
        .expect(1)
        .create();

    let auth = proxy::TestAuth {};
    let client = Client::new(Box::new(&auth), add.as_str()).unwrap();
    let res = client.deploy_source("fn-upload", source.as_bytes()).await;
    assert!(res.is_ok());
    assert_eq!(res.unwrap().status, 201);
    _mok.assert();
}

#[tokio::test]
async fn test_deploy_source_server_error_is_not_err() {
    let add = format!("http://{}", mockito::server_address().to_string());
    let _mok = mockito::mock("POST", deployments_path("fn-upload-500").as_str())
        .with_status(500)
        .with_body("boom")
        .create();

    let auth = proxy::TestAuth {};
    let client = Client::new(Box::new(&auth), add.as_str()).unwrap();
    let res = client.deploy_source("fn-upload-500", b"code").await;
    assert!(res.is_ok());
    let res = res.unwrap();
    assert_eq!(res.status, 500);
    assert_eq!(res.body, "boom");
}

#[tokio::test]
async fn test_deploy_source_empty_file_is_still_uploaded() {
    let add = format!("http://{}", mockito::server_address().to_string());
    let _mok = mockito::mock("POST", deployments_path("fn-upload-empty").as_str())
        .match_header("content-type", "application/octet-stream")
        .match_body(Matcher::Exact(String::new()))
        .with_status(201)
        .expect(1)
        .create();

    let auth = proxy::TestAuth {};
    let client = Client::new(Box::new(&auth), add.as_str()).unwrap();
    let res = client.deploy_source("fn-upload-empty", b"").await;
    assert!(res.is_ok());
    assert_eq!(res.unwrap().status, 201);
    _mok.assert();
}
