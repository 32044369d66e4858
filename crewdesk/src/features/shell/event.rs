use super::model::ShellPage;

/// Events emitted by shell-level interactions: the header toggle, page
/// navigation, and pointer presses tagged with region membership.
#[derive(Debug, Clone)]
pub(crate) enum ShellEvent {
    ToggleSidebar,
    SelectPage(ShellPage),
    RegionPressed { within_sidebar: bool },
}
