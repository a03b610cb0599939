use std::fmt::Display;

/// Which lead form on the page produced a submission.
///
/// Only used to label tracking events and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormOrigin {
    Hero,
    Footer,
}

impl FormOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Footer => "footer",
        }
    }
}

impl Display for FormOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
