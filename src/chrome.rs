//! Responsive page chrome: mobile menu toggle and dropdown placement.

/// Visible state of the mobile chrome for a given viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeLayout {
    pub toggle_visible: bool,
    /// Desktop widths force the sidebar closed.
    pub retract_sidebar: bool,
}

pub fn layout_for(width: u32, breakpoint: u32) -> ChromeLayout {
    let mobile = width < breakpoint;
    ChromeLayout {
        toggle_visible: mobile,
        retract_sidebar: !mobile,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

/// Fixed-position coordinates for a dropdown menu, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

const EDGE_MARGIN: f64 = 10.0;
const FLIP_GAP: f64 = 5.0;

/// Place a dropdown menu under its toggle, right-aligned (RTL layout),
/// flipping above the toggle when there is no room below.
pub fn position_dropdown(toggle: Rect, menu: Size, viewport: Viewport) -> Placement {
    let mut top = toggle.bottom + viewport.scroll_y;
    let mut left = toggle.right + viewport.scroll_x - menu.width;

    if left < EDGE_MARGIN {
        left = EDGE_MARGIN;
    }
    if left + menu.width > viewport.width {
        left = viewport.width - menu.width - EDGE_MARGIN;
    }

    if top + menu.height > viewport.height + viewport.scroll_y {
        top = toggle.top + viewport.scroll_y - menu.height - FLIP_GAP;
    }
    top = top.max(EDGE_MARGIN);

    // The menu is fixed-positioned, so the applied coordinates are its
    // client rect; pull it back inside if it still overflows.
    if left + menu.width > viewport.width {
        left = viewport.width - menu.width - EDGE_MARGIN;
    }
    if top + menu.height > viewport.height {
        top = viewport.height - menu.height - EDGE_MARGIN;
    }

    Placement { top, left }
}
