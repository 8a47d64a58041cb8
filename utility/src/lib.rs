///expands ${VAR} and ${VAR:-default} references from a variables map
pub mod envsubst;
mod error;
pub mod platform;

pub use error::*;

///default slug of the function deployed when none is configured
pub const DEFAULT_FUNCTION_NAME: &str = "handle-telegram-callback";
///environment variable written to the function config when no secret is given explicitly
pub const DEFAULT_SECRET_NAME: &str = "TELEGRAM_BOT_TOKEN";

///cuts `body` to at most `max` characters, respecting char boundaries
pub fn truncate_body(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use crate::truncate_body;

    #[test]
    fn test_truncate_body() {
        struct TestCase {
            _name: &'static str,
            body: &'static str,
            max: usize,
            want: &'static str,
        }
        let cases = vec![
            TestCase {
                _name: "shorter than limit",
                body: "ok",
                max: 500,
                want: "ok",
            },
            TestCase {
                _name: "exactly the limit",
                body: "abcd",
                max: 4,
                want: "abcd",
            },
            TestCase {
                _name: "longer than limit",
                body: "abcdef",
                max: 3,
                want: "abc",
            },
            TestCase {
                _name: "multi byte characters",
                body: "ééééé",
                max: 2,
                want: "éé",
            },
        ];
        for case in cases {
            assert_eq!(truncate_body(case.body, case.max), case.want);
        }
    }
}
