use proxy::client::*;
use proxy::TestAuth;

#[test]
fn test_new_client() {
    let auth = TestAuth {};
    struct TestCase {
        _name: &'static str,
        input: &'static str,
        output: &'static str,
    }

    let cases = vec![
        TestCase {
            _name: "Without trailing slash",
            input: "https://abc123.supabase.co",
            output: "https://abc123.supabase.co/",
        },
        TestCase {
            _name: "With trailing slash",
            input: "https://abc123.supabase.co/",
            output: "https://abc123.supabase.co/",
        },
        TestCase {
            _name: "With a path prefix",
            input: "http://127.0.0.1:54321/proxy/",
            output: "http://127.0.0.1:54321/proxy",
        },
    ];

    for test in cases {
        let auth = auth.clone();
        let res = Client::new(Box::new(&auth), test.input);
        assert!(res.is_ok());
        let client = res.unwrap();
        assert_eq!(test.output, client.base_url.to_string());
    }
}

#[test]
fn test_new_client_invalid_url() {
    let auth = TestAuth {};
    let res = Client::new(Box::new(&auth), "not a url");
    assert!(res.is_err());
    assert!(format!("{}", res.err().unwrap()).contains("invalid platform URL"));
}

#[test]
fn test_new_request_url() {
    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), "http://127.0.0.1:54321/base/path").unwrap();

    struct TestCase {
        _name: &'static str,
        path: &'static str,
        expected_url: &'static str,
    }
    let cases = vec![
        TestCase {
            _name: "A valid path",
            path: "/functions/v1/functions",
            expected_url: "http://127.0.0.1:54321/base/path/functions/v1/functions",
        },
        TestCase {
            _name: "Root path",
            path: "/",
            expected_url: "http://127.0.0.1:54321/base/path/",
        },
        TestCase {
            _name: "path without starting slash",
            path: "functions/v1/functions/echo",
            expected_url: "http://127.0.0.1:54321/base/path/functions/v1/functions/echo",
        },
    ];

    for test in cases {
        let req = client.new_request(reqwest::Method::POST, test.path, vec![], None);
        assert!(req.is_ok());
        let req = req.unwrap().build();
        assert!(req.is_ok());
        assert_eq!(req.unwrap().url().as_str(), test.expected_url)
    }
}

#[test]
fn test_new_request_body_content_type() {
    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), "http://127.0.0.1:54321").unwrap();

    let req = client
        .new_request(
            reqwest::Method::POST,
            "/x",
            b"abc".to_vec(),
            Some("application/octet-stream"),
        )
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        req.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );
    assert_eq!(req.body().unwrap().as_bytes(), Some(&b"abc"[..]));

    let req = client
        .new_request(reqwest::Method::GET, "/x", vec![], None)
        .unwrap()
        .build()
        .unwrap();
    assert!(req.headers().get("content-type").is_none());
    assert!(req.body().is_none());

    let req = client
        .new_request(
            reqwest::Method::POST,
            "/x",
            vec![],
            Some("application/octet-stream"),
        )
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        req.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );
    assert_eq!(req.body().unwrap().as_bytes(), Some(&b""[..]));
}

#[test]
fn test_function_url() {
    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), "https://abc123.supabase.co/").unwrap();
    assert_eq!(
        client.function_url("handle-telegram-callback"),
        "https://abc123.supabase.co/functions/v1/handle-telegram-callback"
    );
}
