use csp_manager::{
    compile_header, compile_report_to, DirectiveName, PolicyConfigBuilder, PolicyMode,
};

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_disabled_mode_emits_nothing() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Disabled)
            .directive(DirectiveName::DefaultSrc, "'self'")
            .build();

        assert!(compile_header(&config).unwrap().is_none());
    }

    #[test_case(PolicyMode::Enforce, "content-security-policy")]
    #[test_case(PolicyMode::ReportOnly, "content-security-policy-report-only")]
    fn test_mode_selects_header_name(mode: PolicyMode, expected: &str) {
        let config = PolicyConfigBuilder::new()
            .mode(mode)
            .directive(DirectiveName::DefaultSrc, "'self'")
            .build();

        let (name, _) = compile_header(&config).unwrap().unwrap();
        assert_eq!(name.as_str(), expected);
    }

    #[test]
    fn test_enforce_with_disabled_directive_omitted() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Enforce)
            .directive(DirectiveName::DefaultSrc, "'self'")
            .disabled_directive(DirectiveName::ScriptSrc, "'unsafe-inline'")
            .build();

        let (name, value) = compile_header(&config).unwrap().unwrap();
        assert_eq!(name.as_str(), "content-security-policy");
        assert_eq!(value.to_str().unwrap(), "default-src 'self';");
    }

    #[test]
    fn test_report_mode_strips_newline_in_source() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::ReportOnly)
            .directive(DirectiveName::DefaultSrc, "'self'\nhttps://a.com")
            .build();

        let (name, value) = compile_header(&config).unwrap().unwrap();
        assert_eq!(name.as_str(), "content-security-policy-report-only");
        assert_eq!(value.to_str().unwrap(), "default-src 'self' https://a.com;");
    }

    #[test]
    fn test_multiple_directives_emitted_in_catalog_order() {
        // Inserted back to front; output order must follow the catalog.
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Enforce)
            .directive(DirectiveName::ImgSrc, "'self' data:")
            .directive(DirectiveName::ScriptSrc, "'self'")
            .directive(DirectiveName::DefaultSrc, "'self'")
            .build();

        let (_, value) = compile_header(&config).unwrap().unwrap();
        assert_eq!(
            value.to_str().unwrap(),
            "default-src 'self'; script-src 'self'; img-src 'self' data:;"
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Enforce)
            .directive(DirectiveName::FrameAncestors, "'none'")
            .directive(DirectiveName::DefaultSrc, "'self'")
            .directive(DirectiveName::ConnectSrc, "'self' wss://push.example.com")
            .build();

        let (_, first) = compile_header(&config).unwrap().unwrap();
        let (_, second) = compile_header(&config).unwrap().unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_valueless_directive_has_no_trailing_space() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Enforce)
            .directive(DirectiveName::UpgradeInsecureRequests, "")
            .build();

        let (_, value) = compile_header(&config).unwrap().unwrap();
        assert_eq!(value.to_str().unwrap(), "upgrade-insecure-requests;");
    }

    #[test]
    fn test_enabled_mode_without_directives_emits_empty_header() {
        let config = PolicyConfigBuilder::new().mode(PolicyMode::Enforce).build();

        let (name, value) = compile_header(&config).unwrap().unwrap();
        assert_eq!(name.as_str(), "content-security-policy");
        assert_eq!(value.to_str().unwrap(), "");
    }

    #[test]
    fn test_delimiters_stripped_from_source() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Enforce)
            .directive(DirectiveName::DefaultSrc, "'self'; script-src evil.com,")
            .build();

        let (_, value) = compile_header(&config).unwrap().unwrap();
        let value = value.to_str().unwrap();
        assert_eq!(value, "default-src 'self' script-src evil.com;");
        // The only semicolon left is the fragment terminator.
        assert_eq!(value.matches(';').count(), 1);
        assert!(!value.contains(','));
    }

    #[test]
    fn test_report_to_newline_stripped() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Enforce)
            .report_to("group=csp\n-endpoint")
            .build();

        let (name, value) = compile_report_to(&config).unwrap().unwrap();
        assert_eq!(name.as_str(), "report-to");
        assert_eq!(value.to_str().unwrap(), "group=csp -endpoint");
    }

    #[test]
    fn test_report_to_value_passed_through_verbatim() {
        let endpoint = r#"{"group":"csp-endpoint","max_age":10886400,"endpoints":[{"url":"https://example.com/csp-reports"}]}"#;
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::ReportOnly)
            .report_to(endpoint)
            .build();

        let (_, value) = compile_report_to(&config).unwrap().unwrap();
        assert_eq!(value.to_str().unwrap(), endpoint);
    }

    #[test]
    fn test_report_to_emitted_even_when_disabled() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Disabled)
            .report_to("endpoint")
            .build();

        assert!(compile_header(&config).unwrap().is_none());
        assert!(compile_report_to(&config).unwrap().is_some());
    }

    #[test]
    fn test_report_to_blank_after_stripping_is_omitted() {
        let config = PolicyConfigBuilder::new()
            .mode(PolicyMode::Enforce)
            .report_to(" \r\n ")
            .build();

        assert!(compile_report_to(&config).unwrap().is_none());
    }

    #[test]
    fn test_report_to_absent_is_omitted() {
        let config = PolicyConfigBuilder::new().mode(PolicyMode::Enforce).build();

        assert!(compile_report_to(&config).unwrap().is_none());
    }
}
