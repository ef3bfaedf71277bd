use crate::constants::{
    DEFAULT_BUFFER_CAPACITY, HEADER_CSP, HEADER_CSP_REPORT_ONLY, HEADER_REPORT_TO,
};
use crate::core::catalog::CATALOG;
use crate::core::config::{PolicyConfig, PolicyMode};
use crate::core::sanitize::{sanitize_directive_value, strip_line_breaks};
use crate::error::CspError;
use actix_web::http::header::{HeaderName, HeaderValue};
use bytes::BytesMut;

/// Compiles a context's CSP header from its configuration snapshot.
///
/// Returns `Ok(None)` when the mode is `Disabled`. Otherwise the header name
/// is selected by the mode and the value is assembled by walking the
/// directive catalog in its fixed order, so output is byte-stable regardless
/// of how the configuration map iterates. Malformed source text is
/// sanitized, never rejected; an enabled mode with no emitted directives
/// still yields the header with an empty value.
pub fn compile_header(
    config: &PolicyConfig,
) -> Result<Option<(HeaderName, HeaderValue)>, CspError> {
    let name = match config.mode() {
        PolicyMode::Disabled => return Ok(None),
        PolicyMode::Enforce => HeaderName::from_static(HEADER_CSP),
        PolicyMode::ReportOnly => HeaderName::from_static(HEADER_CSP_REPORT_ONLY),
    };

    let capacity = config.estimated_size().max(DEFAULT_BUFFER_CAPACITY);
    let mut buffer = BytesMut::with_capacity(capacity);

    for directive in CATALOG {
        let Some(policy) = config.directive(directive) else {
            continue;
        };
        if !policy.enabled() {
            continue;
        }

        if !buffer.is_empty() {
            buffer.extend_from_slice(b" ");
        }
        buffer.extend_from_slice(directive.as_str().as_bytes());

        let source = sanitize_directive_value(policy.source());
        let source = source.trim();
        if !source.is_empty() {
            buffer.extend_from_slice(b" ");
            buffer.extend_from_slice(source.as_bytes());
        }
        buffer.extend_from_slice(b";");
    }

    let value = HeaderValue::from_maybe_shared(buffer.freeze())
        .map_err(|e| CspError::HeaderError(e.to_string()))?;

    Ok(Some((name, value)))
}

/// Compiles the companion `Report-To` header. The configured value is opaque
/// (typically a JSON endpoint group) and is passed through verbatim apart
/// from line-break stripping. Emitted independently of the policy mode,
/// including `Disabled`.
pub fn compile_report_to(
    config: &PolicyConfig,
) -> Result<Option<(HeaderName, HeaderValue)>, CspError> {
    let Some(raw) = config.report_to() else {
        return Ok(None);
    };

    let stripped = strip_line_breaks(raw);
    let value = stripped.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let value = HeaderValue::from_str(value).map_err(|e| CspError::HeaderError(e.to_string()))?;

    Ok(Some((HeaderName::from_static(HEADER_REPORT_TO), value)))
}
