/// Canonical reason phrase for an HTTP status code.
///
/// Covers the standard codes a generated client documents. Anything else is
/// `None`; callers omit the phrase rather than print a placeholder.
pub fn status_code_phrase(code: u16) -> Option<&'static str> {
    let phrase = match code {
        100 => "Continue",
        101 => "Switching Protocols",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request-Uri Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested Range Not Satisfiable",
        417 => "Expectation Failed",
        426 => "Upgrade Required",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "Http Version Not Supported",
        _ => return None,
    };
    Some(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(status_code_phrase(200), Some("OK"));
        assert_eq!(status_code_phrase(404), Some("Not Found"));
        assert_eq!(status_code_phrase(413), Some("Request Entity Too Large"));
        assert_eq!(status_code_phrase(505), Some("Http Version Not Supported"));
    }

    #[test]
    fn test_unknown_codes_are_absent() {
        assert_eq!(status_code_phrase(499), None);
        assert_eq!(status_code_phrase(306), None);
        assert_eq!(status_code_phrase(429), None);
        assert_eq!(status_code_phrase(0), None);
        assert_eq!(status_code_phrase(999), None);
    }
}
