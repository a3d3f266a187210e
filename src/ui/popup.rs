use ratatui::layout::Rect;

/// Returns a centered `Rect` that is `percent_x`% wide and `percent_y`% tall
/// relative to `area`. Minimum 1×1.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_w = (area.width as u32 * percent_x as u32 / 100).max(1) as u16;
    let popup_h = (area.height as u32 * percent_y as u32 / 100).max(1) as u16;
    centered_fixed(popup_w, popup_h, area)
}

/// Centers a `width`×`height` box in `area`, shrinking it to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect { x, y, width, height }
}

/// A `width`×`height` box with its top-left corner at (`x`, `y`), clipped to `bounds`.
pub fn anchored_rect(x: u16, y: u16, width: u16, height: u16, bounds: Rect) -> Rect {
    let x = x.clamp(bounds.x, bounds.right().saturating_sub(1));
    let y = y.clamp(bounds.y, bounds.bottom().saturating_sub(1));
    Rect {
        x,
        y,
        width: width.min(bounds.right() - x),
        height: height.min(bounds.bottom() - y),
    }
}

/// Screen column `offset` cells right of `area.x`, clamped to the last column of `area`.
pub fn cursor_x(area: Rect, offset: usize) -> u16 {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    area.x.saturating_add(offset).min(area.right().saturating_sub(1))
}
