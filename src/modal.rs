use raylib::prelude::*;

use crate::constants::*;

pub const OPEN_MESSAGE: &str = "Modal opened";
pub const CLOSE_MESSAGE: &str = "Modal closed";

/// Full-window overlay with a centered content panel. Visibility is the only
/// state; toggling it is total and idempotent.
pub struct Modal {
    overlay: Rectangle,
    content: Rectangle,
    close_button: Rectangle,
    pub visible: bool,
}

impl Modal {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        let content = Rectangle::new(
            (window_width - MODAL_CONTENT_WIDTH) * 0.5,
            (window_height - MODAL_CONTENT_HEIGHT) * 0.5,
            MODAL_CONTENT_WIDTH,
            MODAL_CONTENT_HEIGHT,
        );
        let close_button = Rectangle::new(content.x + content.width - 36.0, content.y + 8.0, 28.0, 28.0);
        Self {
            overlay: Rectangle::new(0.0, 0.0, window_width, window_height),
            content,
            close_button,
            visible: false,
        }
    }

    pub fn set_visible(&mut self, visible: bool) -> &'static str {
        self.visible = visible;
        if visible { OPEN_MESSAGE } else { CLOSE_MESSAGE }
    }

    /// True when a pointer press landed on the dimmed backdrop, outside the
    /// content panel. Such a press dismisses the modal.
    pub fn backdrop_hit(&self, point: Vector2) -> bool {
        self.visible
            && self.overlay.check_collision_point_rec(point)
            && !self.content.check_collision_point_rec(point)
    }

    pub fn close_button_hit(&self, point: Vector2) -> bool {
        self.visible && self.close_button.check_collision_point_rec(point)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }

        d.draw_rectangle_rec(self.overlay, Color::new(0, 0, 0, 170));
        d.draw_rectangle_rec(self.content, Color::new(40, 44, 52, 255));
        d.draw_rectangle_lines_ex(self.content, 2.0, Color::SKYBLUE);

        d.draw_text(
            "About this demo",
            self.content.x as i32 + 20,
            self.content.y as i32 + 16,
            24,
            Color::RAYWHITE,
        );
        d.draw_text(
            "Pulse and shake animate every card at once.\nOnly one animation runs at a time;\nextra clicks are dropped until it finishes.",
            self.content.x as i32 + 20,
            self.content.y as i32 + 64,
            18,
            Color::LIGHTGRAY,
        );

        d.draw_rectangle_rec(self.close_button, Color::new(60, 64, 72, 255));
        d.draw_text(
            "x",
            self.close_button.x as i32 + 9,
            self.close_button.y as i32 + 4,
            20,
            Color::RAYWHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_twice_is_idempotent_and_repeats_the_status() {
        let mut modal = Modal::new(960.0, 600.0);
        assert_eq!(modal.set_visible(true), "Modal opened");
        assert_eq!(modal.set_visible(true), "Modal opened");
        assert!(modal.visible);
        assert_eq!(modal.set_visible(false), "Modal closed");
        assert!(!modal.visible);
    }

    #[test]
    fn backdrop_hit_excludes_the_content_panel() {
        let mut modal = Modal::new(960.0, 600.0);
        modal.set_visible(true);

        // Far corner of the window: on the backdrop.
        assert!(modal.backdrop_hit(Vector2::new(5.0, 5.0)));
        // Dead center of the window: inside the content panel.
        assert!(!modal.backdrop_hit(Vector2::new(480.0, 300.0)));
    }

    #[test]
    fn hidden_modal_never_reports_hits() {
        let modal = Modal::new(960.0, 600.0);
        assert!(!modal.backdrop_hit(Vector2::new(5.0, 5.0)));
        assert!(!modal.close_button_hit(Vector2::new(5.0, 5.0)));
    }
}
