use serde::Serialize;

/// Format a result as minified JSON for stdout.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

/// Format an error as JSON for stderr.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    format!("{{\"error\":\"{}\"}}", err.to_string().replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn format_json_minified() {
        let data = TestData {
            name: "test".into(),
            value: 42,
        };
        let json = format_json(&data);
        assert!(!json.contains('\n'));
        assert!(json.contains("\"name\":\"test\""));
    }

    #[test]
    fn format_error_produces_json() {
        let err = "write \"failed\"";
        let json = format_error(&err);
        assert!(json.starts_with("{\"error\":"));
        assert!(json.contains("\\\"failed\\\""));
    }
}
