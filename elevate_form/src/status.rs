/// The single status line shown below the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Error(String),
    Success(String),
}

impl SubmissionStatus {
    /// Text to render. Empty while idle.
    pub fn text(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Error(text) | Self::Success(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
