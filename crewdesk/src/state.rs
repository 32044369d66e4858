use iced::Size;

/// Viewport width separating the floating-sidebar layout from the
/// docked-column layout.
pub(crate) const BREAKPOINT_WIDTH: f32 = 768.0;

const NARROW_COLUMN_WIDTH: f32 = 70.0;
const WIDE_COLUMN_WIDTH: f32 = 256.0;
const WIDE_PADDING_WIDTH: f32 = 1024.0;
const PADDING_COMPACT: f32 = 16.0;
const PADDING_MEDIUM: f32 = 24.0;
const PADDING_WIDE: f32 = 32.0;

#[derive(Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    pub(crate) ready: bool,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            ready: false,
        }
    }

    /// Record the first runtime-ready signal. Never transitions back.
    pub(crate) fn mark_ready(&mut self) {
        self.ready = true;
    }
}

/// Sidebar column reserved beside the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarColumn {
    None,
    Narrow,
    Wide,
}

impl SidebarColumn {
    pub(crate) fn width(self) -> f32 {
        match self {
            SidebarColumn::None => 0.0,
            SidebarColumn::Narrow => NARROW_COLUMN_WIDTH,
            SidebarColumn::Wide => WIDE_COLUMN_WIDTH,
        }
    }
}

/// Layout decisions for the main content region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MainRegionLayout {
    pub(crate) column: SidebarColumn,
    pub(crate) padding: f32,
}

/// Compute the main-region layout from the collapse flag and the viewport
/// width sampled for this pass. Narrow viewports reserve no column; the
/// sidebar floats above the content there.
pub(crate) fn main_region_layout(
    collapsed: bool,
    viewport_width: f32,
) -> MainRegionLayout {
    let column = if viewport_width < BREAKPOINT_WIDTH {
        SidebarColumn::None
    } else if collapsed {
        SidebarColumn::Narrow
    } else {
        SidebarColumn::Wide
    };

    let padding = if viewport_width >= WIDE_PADDING_WIDTH {
        PADDING_WIDE
    } else if viewport_width >= BREAKPOINT_WIDTH {
        PADDING_MEDIUM
    } else {
        PADDING_COMPACT
    };

    MainRegionLayout { column, padding }
}

#[cfg(test)]
mod tests {
    use super::{SidebarColumn, main_region_layout};

    #[test]
    fn given_narrow_viewport_when_layout_computed_then_no_column_is_reserved()
    {
        for collapsed in [false, true] {
            for width in [0.0, 320.0, 500.0, 767.9] {
                let layout = main_region_layout(collapsed, width);
                assert_eq!(layout.column, SidebarColumn::None);
            }
        }
    }

    #[test]
    fn given_wide_viewport_when_layout_computed_then_column_follows_collapse()
    {
        for width in [768.0, 900.0, 1440.0] {
            assert_eq!(
                main_region_layout(true, width).column,
                SidebarColumn::Narrow
            );
            assert_eq!(
                main_region_layout(false, width).column,
                SidebarColumn::Wide
            );
        }
    }

    #[test]
    fn given_breakpoint_boundary_when_layout_computed_then_wide_rules_apply()
    {
        let layout = main_region_layout(false, 768.0);

        assert_eq!(layout.column, SidebarColumn::Wide);
    }

    #[test]
    fn given_any_viewport_when_layout_computed_then_padding_steps_with_width()
    {
        assert_eq!(main_region_layout(false, 500.0).padding, 16.0);
        assert_eq!(main_region_layout(false, 768.0).padding, 24.0);
        assert_eq!(main_region_layout(false, 1024.0).padding, 32.0);
    }
}
