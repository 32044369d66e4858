pub(crate) const LOGO_SMALL: &[u8] =
    include_bytes!("../assets/svg/logo-small.svg");
pub(crate) const MENU: &[u8] = include_bytes!("../assets/svg/menu.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../assets/svg/close.svg");
pub(crate) const SIDEBAR_COLLAPSE: &[u8] =
    include_bytes!("../assets/svg/sidebar-collapse.svg");
pub(crate) const SIDEBAR_EXPAND: &[u8] =
    include_bytes!("../assets/svg/sidebar-expand.svg");
pub(crate) const NAV_DASHBOARD: &[u8] =
    include_bytes!("../assets/svg/dashboard.svg");
pub(crate) const NAV_PROFILE: &[u8] =
    include_bytes!("../assets/svg/profile.svg");
