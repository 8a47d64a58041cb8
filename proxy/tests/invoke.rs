use mockito::Matcher;
use proxy::auth::BearerToken;
use proxy::utils::invoke_path;

#[tokio::test]
async fn test_invoke_function_is_not_authenticated() {
    let add = format!("http://{}", mockito::server_address().to_string());
    let _mok = mockito::mock("POST", invoke_path("fn-invoke").as_str())
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            serde_json::json!({"update_id": 123, "callback_query": null}),
        ))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create();

    let auth = BearerToken::new("key").unwrap();
    let client = auth.get_client(add.as_str()).unwrap();
    let res = client
        .invoke_function("fn-invoke", r#"{"update_id":123,"callback_query":null}"#)
        .await;
    assert!(res.is_ok());
    let res = res.unwrap();
    assert_eq!(res.status, 200);
    assert_eq!(res.body, r#"{"ok":true}"#);
    _mok.assert();
}

#[tokio::test]
async fn test_invoke_function_invalid_payload() {
    let auth = BearerToken::new("key").unwrap();
    let client = auth.get_client("http://127.0.0.1:1").unwrap();
    let res = client.invoke_function("fn", "{not json").await;
    assert!(res.is_err());
    assert!(format!("{:?}", res).contains("must be valid JSON"));
}
