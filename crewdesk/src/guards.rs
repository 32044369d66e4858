use crate::state::BREAKPOINT_WIDTH;

/// Decide whether a pointer press should close the floating sidebar.
///
/// Only the narrow-viewport overlay auto-dismisses: the press must land
/// outside the sidebar region while the overlay is open. The docked
/// sidebar is a permanent column and never closes on arbitrary presses.
pub(crate) fn should_dismiss_overlay(
    is_open: bool,
    viewport_width: f32,
    within_sidebar: bool,
) -> bool {
    is_open && viewport_width < BREAKPOINT_WIDTH && !within_sidebar
}

#[cfg(test)]
mod tests {
    use super::should_dismiss_overlay;

    #[test]
    fn given_closed_overlay_when_any_press_arrives_then_nothing_dismisses() {
        for width in [320.0, 500.0, 900.0] {
            for within in [false, true] {
                assert!(!should_dismiss_overlay(false, width, within));
            }
        }
    }

    #[test]
    fn given_open_overlay_when_press_lands_outside_then_overlay_dismisses() {
        assert!(should_dismiss_overlay(true, 500.0, false));
    }

    #[test]
    fn given_open_overlay_when_press_lands_inside_then_overlay_stays_open() {
        assert!(!should_dismiss_overlay(true, 500.0, true));
    }

    #[test]
    fn given_wide_viewport_when_press_lands_outside_then_overlay_stays_open()
    {
        assert!(!should_dismiss_overlay(true, 900.0, false));
    }
}
