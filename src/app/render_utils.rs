use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

pub(super) const PAGE_BG: Color32 = Color32::from_rgb(10, 10, 10);
pub(super) const CARD_BG: Color32 = Color32::from_rgb(20, 20, 22);
pub(super) const BORDER: Color32 = Color32::from_rgb(38, 38, 42);
pub(super) const ACCENT: Color32 = Color32::from_rgb(6, 182, 212);
pub(super) const ACCENT_HOVER: Color32 = Color32::from_rgb(8, 145, 178);
pub(super) const TEXT_WHITE: Color32 = Color32::from_rgb(243, 244, 246);
pub(super) const TEXT_GRAY: Color32 = Color32::from_rgb(156, 163, 175);
pub(super) const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

pub(super) fn draw_backdrop(
    painter: &Painter,
    rect: Rect,
    base: Color32,
    glow: Color32,
    glow_at: [f32; 2],
) {
    painter.rect_filled(rect, 0.0, base);

    let center = Pos2::new(
        rect.left() + rect.width() * glow_at[0],
        rect.top() + rect.height() * glow_at[1],
    );
    let max_radius = rect.width().max(rect.height()) * 0.5;
    let rings = 12;
    for ring in (1..=rings).rev() {
        let t = ring as f32 / rings as f32;
        painter.circle_filled(center, max_radius * t, with_alpha(glow, 0.03 * (1.0 - t)));
    }
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn edge_visible(rect: Rect, start: Pos2, end: Pos2, padding: f32) -> bool {
    let min_x = start.x.min(end.x) - padding;
    let max_x = start.x.max(end.x) + padding;
    let min_y = start.y.min(end.y) - padding;
    let max_y = start.y.max(end.y) + padding;

    if max_x < rect.left() || min_x > rect.right() || max_y < rect.top() || min_y > rect.bottom() {
        return false;
    }

    if rect.contains(start) || rect.contains(end) {
        return true;
    }

    let top_left = rect.left_top();
    let top_right = rect.right_top();
    let bottom_left = rect.left_bottom();
    let bottom_right = rect.right_bottom();

    segments_intersect(start, end, top_left, top_right)
        || segments_intersect(start, end, top_right, bottom_right)
        || segments_intersect(start, end, bottom_right, bottom_left)
        || segments_intersect(start, end, bottom_left, top_left)
}

fn segments_intersect(a1: Pos2, a2: Pos2, b1: Pos2, b2: Pos2) -> bool {
    fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
        let oa = a - o;
        let ob = b - o;
        (oa.x * ob.y) - (oa.y * ob.x)
    }

    let c1 = cross(a1, a2, b1);
    let c2 = cross(a1, a2, b2);
    let c3 = cross(b1, b2, a1);
    let c4 = cross(b1, b2, a2);

    (c1 <= 0.0 && c2 >= 0.0 || c1 >= 0.0 && c2 <= 0.0)
        && (c3 <= 0.0 && c4 >= 0.0 || c3 >= 0.0 && c4 <= 0.0)
}

/// Line whose alpha falls off from `head` to `tail`, drawn as short segments.
pub(super) fn fading_line(
    painter: &Painter,
    head: Pos2,
    tail: Pos2,
    color: Color32,
    alpha: f32,
    width: f32,
) {
    const SEGMENTS: usize = 8;
    for index in 0..SEGMENTS {
        let t0 = index as f32 / SEGMENTS as f32;
        let t1 = (index + 1) as f32 / SEGMENTS as f32;
        let from = head + (tail - head) * t0;
        let to = head + (tail - head) * t1;
        let segment_alpha = alpha * (1.0 - t0);
        painter.line_segment([from, to], Stroke::new(width, with_alpha(color, segment_alpha)));
    }
}
