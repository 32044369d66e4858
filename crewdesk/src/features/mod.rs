use iced::Task;

use crate::app::Event as AppEvent;

pub(crate) mod notice;
pub(crate) mod prefs;
pub(crate) mod profile;
pub(crate) mod shell;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>;

    /// Reduce a typed feature event into state mutations and routed app
    /// tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for the application's features.
pub(crate) struct Features {
    shell: shell::ShellFeature,
    prefs: prefs::PrefsFeature,
    profile: profile::ProfileFeature,
    notice: notice::NoticeFeature,
}

impl Features {
    /// Create the features container with loaded prefs and the employee
    /// whose profile this session edits.
    pub(crate) fn new(
        prefs: prefs::PrefsFeature,
        profile_employee_id: u64,
    ) -> Self {
        Self {
            shell: shell::ShellFeature::new(),
            prefs,
            profile: profile::ProfileFeature::new(profile_employee_id),
            notice: notice::NoticeFeature::new(),
        }
    }

    /// Return read-only access to shell feature state and queries.
    pub(crate) fn shell(&self) -> &shell::ShellFeature {
        &self.shell
    }

    /// Return mutable access for routing shell events.
    pub(crate) fn shell_mut(&mut self) -> &mut shell::ShellFeature {
        &mut self.shell
    }

    /// Return read-only access to prefs feature state and queries.
    pub(crate) fn prefs(&self) -> &prefs::PrefsFeature {
        &self.prefs
    }

    /// Return mutable access for routing prefs events.
    pub(crate) fn prefs_mut(&mut self) -> &mut prefs::PrefsFeature {
        &mut self.prefs
    }

    /// Return read-only access to profile feature state and queries.
    pub(crate) fn profile(&self) -> &profile::ProfileFeature {
        &self.profile
    }

    /// Return mutable access for routing profile events.
    pub(crate) fn profile_mut(&mut self) -> &mut profile::ProfileFeature {
        &mut self.profile
    }

    /// Return read-only access to notice feature state and queries.
    pub(crate) fn notice(&self) -> &notice::NoticeFeature {
        &self.notice
    }

    /// Return mutable access for routing notice events.
    pub(crate) fn notice_mut(&mut self) -> &mut notice::NoticeFeature {
        &mut self.notice
    }
}
