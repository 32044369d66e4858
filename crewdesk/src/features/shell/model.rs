/// Pages reachable from the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ShellPage {
    #[default]
    Dashboard,
    Profile,
}

impl ShellPage {
    /// Human-readable page title shown in the header.
    pub(crate) fn title(self) -> &'static str {
        match self {
            ShellPage::Dashboard => "Dashboard",
            ShellPage::Profile => "My Profile",
        }
    }
}
