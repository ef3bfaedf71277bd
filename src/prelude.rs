pub use crate::core::{
    compile_header, compile_report_to, sanitize_directive_value, DirectiveName, DirectivePolicy,
    PolicyConfig, PolicyConfigBuilder, PolicyMode,
};
pub use crate::error::CspError;
pub use crate::middleware::{csp_manager, path_selector, CspManager, CspManagerExt};
pub use crate::store::{CompiledHeaders, ContextPolicies, PolicyStore, RequestContext};
