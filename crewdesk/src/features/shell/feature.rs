use iced::Task;

use super::event::ShellEvent;
use super::model::ShellPage;
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::guards::should_dismiss_overlay;

/// Context snapshot threaded into the shell reducer for each event.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ShellCtx {
    pub(crate) viewport_width: f32,
}

/// Shell feature root: transient sidebar overlay state and navigation.
#[derive(Debug, Default)]
pub(crate) struct ShellFeature {
    sidebar_open: bool,
    active_page: ShellPage,
}

impl ShellFeature {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return whether the narrow-viewport sidebar overlay is visible.
    pub(crate) fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Return the page currently shown in the content region.
    pub(crate) fn active_page(&self) -> ShellPage {
        self.active_page
    }
}

impl Feature for ShellFeature {
    type Event = ShellEvent;
    type Ctx<'a> = ShellCtx;

    /// Reduce a shell event into state updates.
    fn reduce<'a>(
        &mut self,
        event: ShellEvent,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            ShellEvent::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                Task::none()
            },
            ShellEvent::SelectPage(page) => {
                self.active_page = page;
                Task::none()
            },
            ShellEvent::RegionPressed { within_sidebar } => {
                if should_dismiss_overlay(
                    self.sidebar_open,
                    ctx.viewport_width,
                    within_sidebar,
                ) {
                    self.sidebar_open = false;
                }
                Task::none()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ShellCtx, ShellEvent, ShellFeature, ShellPage};
    use crate::features::Feature;

    const NARROW: ShellCtx = ShellCtx {
        viewport_width: 500.0,
    };
    const WIDE: ShellCtx = ShellCtx {
        viewport_width: 900.0,
    };

    fn open_feature() -> ShellFeature {
        let mut feature = ShellFeature::new();
        let _task = feature.reduce(ShellEvent::ToggleSidebar, &NARROW);
        feature
    }

    #[test]
    fn given_toggle_event_when_reduced_then_overlay_visibility_flips() {
        let mut feature = ShellFeature::new();

        let _task = feature.reduce(ShellEvent::ToggleSidebar, &NARROW);
        assert!(feature.is_sidebar_open());

        let _task = feature.reduce(ShellEvent::ToggleSidebar, &NARROW);
        assert!(!feature.is_sidebar_open());
    }

    #[test]
    fn given_outside_press_on_narrow_viewport_then_overlay_closes() {
        let mut feature = open_feature();

        let _task = feature.reduce(
            ShellEvent::RegionPressed {
                within_sidebar: false,
            },
            &NARROW,
        );

        assert!(!feature.is_sidebar_open());
    }

    #[test]
    fn given_press_inside_sidebar_then_overlay_stays_open() {
        let mut feature = open_feature();

        let _task = feature.reduce(
            ShellEvent::RegionPressed {
                within_sidebar: true,
            },
            &NARROW,
        );

        assert!(feature.is_sidebar_open());
    }

    #[test]
    fn given_outside_press_on_wide_viewport_then_overlay_stays_open() {
        let mut feature = open_feature();

        let _task = feature.reduce(
            ShellEvent::RegionPressed {
                within_sidebar: false,
            },
            &WIDE,
        );

        assert!(feature.is_sidebar_open());
    }

    #[test]
    fn given_page_selection_when_reduced_then_active_page_changes() {
        let mut feature = ShellFeature::new();

        let _task =
            feature.reduce(ShellEvent::SelectPage(ShellPage::Profile), &WIDE);

        assert_eq!(feature.active_page(), ShellPage::Profile);
    }
}
