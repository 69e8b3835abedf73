use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind};
use knob_core::{Affine2, Point};

use crate::settings::ViewSettings;

/// Draw the on/off switch as a rounded track with a sliding thumb.
pub fn draw_switch(painter: &Painter, rect: Rect, selected: bool, hovered: bool) {
    let radius = rect.height() / 2.0;
    let track = if selected {
        Color32::from_rgb(76, 217, 100)
    } else {
        Color32::from_rgb(90, 90, 96)
    };
    painter.rect_filled(rect, radius, track);
    if hovered {
        painter.rect_stroke(
            rect,
            radius,
            Stroke::new(1.5, Color32::from_white_alpha(160)),
            StrokeKind::Outside,
        );
    }

    let thumb_x = if selected {
        rect.right() - radius
    } else {
        rect.left() + radius
    };
    painter.circle_filled(
        Pos2::new(thumb_x, rect.center().y),
        radius - 3.0,
        Color32::WHITE,
    );
}

/// Screen position of the indicator tip.
///
/// At rest the indicator points straight up; `rotation` turns it the way the
/// knob image is turned (positive angles clockwise on screen).
pub fn indicator_tip(center: Pos2, length: f32, rotation: &Affine2) -> Pos2 {
    let tip = rotation.apply(Point::new(0.0, -f64::from(length)));
    Pos2::new(center.x + tip.x as f32, center.y + tip.y as f32)
}

/// Draw the knob base, face and indicator.
pub fn draw_knob(
    painter: &Painter,
    center: Pos2,
    radius: f32,
    rotation: &Affine2,
    settings: &ViewSettings,
) {
    painter.circle_filled(center, radius, Color32::from_black_alpha(90));
    painter.circle_stroke(
        center,
        radius,
        Stroke::new(2.0, Color32::from_white_alpha(60)),
    );

    let face = radius * settings.face_ratio;
    painter.circle_filled(center, face, Color32::from_rgb(235, 235, 240));

    let tip = indicator_tip(center, face * 0.85, rotation);
    let base = indicator_tip(center, face * 0.35, rotation);
    painter.line_segment(
        [base, tip],
        Stroke::new(settings.indicator_width, Color32::from_rgb(40, 40, 48)),
    );
}

/// Draw a small text readout anchored at the bottom of `rect`.
pub fn draw_readout(painter: &Painter, rect: Rect, text: &str) {
    painter.text(
        Pos2::new(rect.center().x, rect.bottom() - 16.0),
        Align2::CENTER_BOTTOM,
        text,
        FontId::monospace(13.0),
        Color32::from_white_alpha(200),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_points_up_at_rest() {
        let tip = indicator_tip(Pos2::new(50.0, 50.0), 10.0, &Affine2::IDENTITY);
        assert!((tip.x - 50.0).abs() < 1e-4);
        assert!((tip.y - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_positive_rotation_turns_clockwise() {
        let rotation = Affine2::rotation(std::f64::consts::FRAC_PI_2);
        let tip = indicator_tip(Pos2::new(0.0, 0.0), 10.0, &rotation);
        assert!((tip.x - 10.0).abs() < 1e-4);
        assert!(tip.y.abs() < 1e-4);
    }
}
