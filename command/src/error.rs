/// NOT_TLS_WARN Warning printed when the platform is reached without TLS
pub(crate) const NOT_TLS_WARN: &str =
    "WARNING! You are not using an encrypted connection to the platform, the service role key is sent in clear text.";

/// check_tls_insecure returns a warning message if the given url does not use https.
/// Local addresses and tls_insecure skip the check
pub(crate) fn check_tls_insecure(url: &str, tls_insecure: bool) -> String {
    let mut res = String::new();
    if !tls_insecure {
        if !url.starts_with("https")
            && !url.starts_with("http://127.0.0.1")
            && !url.starts_with("http://localhost")
        {
            res = NOT_TLS_WARN.to_string();
        }
    }
    res
}
