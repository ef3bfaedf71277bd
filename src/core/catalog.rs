use crate::constants;
use crate::error::CspError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveName {
    DefaultSrc,
    ScriptSrc,
    ScriptSrcElem,
    ScriptSrcAttr,
    StyleSrc,
    StyleSrcElem,
    StyleSrcAttr,
    ImgSrc,
    FontSrc,
    ConnectSrc,
    MediaSrc,
    ObjectSrc,
    PrefetchSrc,
    ChildSrc,
    FrameSrc,
    WorkerSrc,
    ManifestSrc,
    FrameAncestors,
    BaseUri,
    FormAction,
    Sandbox,
    UpgradeInsecureRequests,
    BlockAllMixedContent,
    ReportUri,
    ReportTo,
}

/// Fixed emission order for compiled headers. Output order follows this
/// catalog, never the insertion order of a configuration map.
pub const CATALOG: [DirectiveName; 25] = [
    DirectiveName::DefaultSrc,
    DirectiveName::ScriptSrc,
    DirectiveName::ScriptSrcElem,
    DirectiveName::ScriptSrcAttr,
    DirectiveName::StyleSrc,
    DirectiveName::StyleSrcElem,
    DirectiveName::StyleSrcAttr,
    DirectiveName::ImgSrc,
    DirectiveName::FontSrc,
    DirectiveName::ConnectSrc,
    DirectiveName::MediaSrc,
    DirectiveName::ObjectSrc,
    DirectiveName::PrefetchSrc,
    DirectiveName::ChildSrc,
    DirectiveName::FrameSrc,
    DirectiveName::WorkerSrc,
    DirectiveName::ManifestSrc,
    DirectiveName::FrameAncestors,
    DirectiveName::BaseUri,
    DirectiveName::FormAction,
    DirectiveName::Sandbox,
    DirectiveName::UpgradeInsecureRequests,
    DirectiveName::BlockAllMixedContent,
    DirectiveName::ReportUri,
    DirectiveName::ReportTo,
];

impl DirectiveName {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultSrc => constants::DEFAULT_SRC,
            Self::ScriptSrc => constants::SCRIPT_SRC,
            Self::ScriptSrcElem => constants::SCRIPT_SRC_ELEM,
            Self::ScriptSrcAttr => constants::SCRIPT_SRC_ATTR,
            Self::StyleSrc => constants::STYLE_SRC,
            Self::StyleSrcElem => constants::STYLE_SRC_ELEM,
            Self::StyleSrcAttr => constants::STYLE_SRC_ATTR,
            Self::ImgSrc => constants::IMG_SRC,
            Self::FontSrc => constants::FONT_SRC,
            Self::ConnectSrc => constants::CONNECT_SRC,
            Self::MediaSrc => constants::MEDIA_SRC,
            Self::ObjectSrc => constants::OBJECT_SRC,
            Self::PrefetchSrc => constants::PREFETCH_SRC,
            Self::ChildSrc => constants::CHILD_SRC,
            Self::FrameSrc => constants::FRAME_SRC,
            Self::WorkerSrc => constants::WORKER_SRC,
            Self::ManifestSrc => constants::MANIFEST_SRC,
            Self::FrameAncestors => constants::FRAME_ANCESTORS,
            Self::BaseUri => constants::BASE_URI,
            Self::FormAction => constants::FORM_ACTION,
            Self::Sandbox => constants::SANDBOX,
            Self::UpgradeInsecureRequests => constants::UPGRADE_INSECURE_REQUESTS,
            Self::BlockAllMixedContent => constants::BLOCK_ALL_MIXED_CONTENT,
            Self::ReportUri => constants::REPORT_URI,
            Self::ReportTo => constants::REPORT_TO,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG.iter().copied().find(|d| d.as_str() == name)
    }
}

impl fmt::Display for DirectiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectiveName {
    type Err = CspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CspError::InvalidDirectiveName(s.to_string()))
    }
}
