use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;

/// Presentation-class identifier whose presence on an element drives a
/// visual animation at draw time.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EffectTag {
    Pulse,
    Shake,
}

impl EffectTag {
    /// Every tag the system has ever applied. Reset strips all of these.
    pub const ALL: [EffectTag; 2] = [EffectTag::Pulse, EffectTag::Shake];

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectTag::Pulse => "pulse",
            EffectTag::Shake => "shake",
        }
    }
}

/// Abstract visual element exposing effect-tag membership. Controllers only
/// read and mutate tags through this trait; the presentation layer decides
/// what a tag looks like.
pub trait VisualElement {
    fn add_tag(&mut self, tag: EffectTag);
    fn remove_tag(&mut self, tag: EffectTag);
    fn has_tag(&self, tag: EffectTag) -> bool;
}

pub struct Card {
    label: String,
    rect: Rectangle,
    accent: Color,
    tags: Vec<EffectTag>,
}

impl Card {
    pub fn new(label: impl Into<String>, x: f32, y: f32, accent: Color) -> Self {
        Self {
            label: label.into(),
            rect: Rectangle::new(x, y, CARD_WIDTH, CARD_HEIGHT),
            accent,
            tags: Vec::new(),
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, time: f32) {
        let mut rect = self.rect;

        // Pulse: scale the card around its center with a sine oscillation.
        if self.has_tag(EffectTag::Pulse) {
            let scale = 1.0
                + PULSE_SCALE_AMPLITUDE
                    * (time * PULSE_SCALE_HZ * 2.0 * std::f32::consts::PI).sin().abs();
            let grow_w = rect.width * (scale - 1.0);
            let grow_h = rect.height * (scale - 1.0);
            rect.x -= grow_w * 0.5;
            rect.y -= grow_h * 0.5;
            rect.width += grow_w;
            rect.height += grow_h;
        }

        // Shake: random jitter each frame while the tag is present.
        if self.has_tag(EffectTag::Shake) {
            let mut rng = rand::rng();
            rect.x += rng.random_range(-SHAKE_JITTER_PX..SHAKE_JITTER_PX);
            rect.y += rng.random_range(-SHAKE_JITTER_PX..SHAKE_JITTER_PX);
        }

        d.draw_rectangle_rec(rect, Color::new(40, 44, 52, 255));
        d.draw_rectangle_lines_ex(rect, 2.0, self.accent);
        d.draw_text(
            &self.label,
            rect.x as i32 + 14,
            rect.y as i32 + 14,
            20,
            Color::RAYWHITE,
        );
    }
}

impl VisualElement for Card {
    fn add_tag(&mut self, tag: EffectTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    fn remove_tag(&mut self, tag: EffectTag) {
        self.tags.retain(|t| *t != tag);
    }

    fn has_tag(&self, tag: EffectTag) -> bool {
        self.tags.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_a_tag_twice_keeps_a_single_entry() {
        let mut card = Card::new("Card 1", 0.0, 0.0, Color::SKYBLUE);
        card.add_tag(EffectTag::Pulse);
        card.add_tag(EffectTag::Pulse);
        assert!(card.has_tag(EffectTag::Pulse));
        card.remove_tag(EffectTag::Pulse);
        assert!(!card.has_tag(EffectTag::Pulse));
    }

    #[test]
    fn removing_an_absent_tag_is_a_no_op() {
        let mut card = Card::new("Card 1", 0.0, 0.0, Color::SKYBLUE);
        card.add_tag(EffectTag::Shake);
        card.remove_tag(EffectTag::Pulse);
        assert!(card.has_tag(EffectTag::Shake));
    }
}
