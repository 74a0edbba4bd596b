use clap::Parser;
use rand::Rng;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod animation;
mod constants;
mod element;
mod modal;
mod scheduler;
mod state;

use crate::animation::{compute_duration, AnimationController};
use crate::constants::*;
use crate::element::{Card, EffectTag};
use crate::modal::Modal;
use crate::state::AnimationState;

#[derive(Parser)]
#[command(name = "cardwall", about = "Animated card wall demo")]
struct Args {
    /// Number of cards on the wall
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=8))]
    cards: u8,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

#[derive(Clone, Copy)]
enum Action {
    Pulse,
    Shake,
    Reset,
    Info,
}

struct Button {
    label: &'static str,
    rect: Rectangle,
    action: Action,
}

impl Button {
    fn draw(&self, d: &mut RaylibDrawHandle, hovered: bool, dimmed: bool) {
        let fill = if hovered {
            Color::new(70, 76, 88, 255)
        } else {
            Color::new(52, 56, 66, 255)
        };
        let text = if dimmed { Color::GRAY } else { Color::RAYWHITE };
        d.draw_rectangle_rec(self.rect, fill);
        d.draw_rectangle_lines_ex(self.rect, 1.0, Color::GRAY);
        d.draw_text(
            self.label,
            self.rect.x as i32 + 14,
            self.rect.y as i32 + 10,
            20,
            text,
        );
    }
}

fn build_cards(count: usize) -> Vec<Card> {
    let palette = [
        Color::SKYBLUE,
        Color::GOLD,
        Color::LIME,
        Color::PINK,
        Color::ORANGE,
    ];
    let mut rng = rand::rng();

    let total_width = count as f32 * CARD_WIDTH + (count as f32 - 1.0) * CARD_SPACING;
    let start_x = (WINDOW_WIDTH as f32 - total_width) * 0.5;

    (0..count)
        .map(|i| {
            let x = start_x + i as f32 * (CARD_WIDTH + CARD_SPACING);
            let accent = palette[rng.random_range(0..palette.len())];
            Card::new(format!("Card {}", i + 1), x, CARD_ROW_Y, accent)
        })
        .collect()
}

fn build_buttons() -> Vec<Button> {
    let actions: [(&'static str, Action); 4] = [
        ("Pulse", Action::Pulse),
        ("Shake", Action::Shake),
        ("Reset", Action::Reset),
        ("Info", Action::Info),
    ];

    let total_width =
        actions.len() as f32 * BUTTON_WIDTH + (actions.len() as f32 - 1.0) * BUTTON_SPACING;
    let start_x = (WINDOW_WIDTH as f32 - total_width) * 0.5;

    actions
        .iter()
        .enumerate()
        .map(|(i, (label, action))| Button {
            label,
            rect: Rectangle::new(
                start_x + i as f32 * (BUTTON_WIDTH + BUTTON_SPACING),
                BUTTON_ROW_Y,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            action: *action,
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Card Wall")
        .vsync()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut cards = build_cards(args.cards as usize);
    let buttons = build_buttons();
    let mut modal = Modal::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);

    let mut controller = AnimationController::new();
    // Subtle pulse shortly after launch, through the normal gate.
    controller.schedule_auto_pulse(AUTO_PULSE_DELAY_MS, AUTO_PULSE_DURATION_MS);

    while !rl.window_should_close() {
        let dt_ms = rl.get_frame_time() * 1000.0;
        let mouse = rl.get_mouse_position();
        let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

        if clicked {
            if modal.visible {
                // The overlay swallows every click; only the close button and
                // the backdrop dismiss it.
                if modal.close_button_hit(mouse) || modal.backdrop_hit(mouse) {
                    info!("{}", modal.set_visible(false));
                }
            } else {
                for button in &buttons {
                    if !button.rect.check_collision_point_rec(mouse) {
                        continue;
                    }
                    match button.action {
                        Action::Pulse => {
                            let duration = compute_duration(cards.len(), BASE_DURATION_MS);
                            if !controller.try_apply_animation(&mut cards, EffectTag::Pulse, duration)
                            {
                                info!("Animation already in progress. Please wait.");
                            }
                        }
                        Action::Shake => {
                            let duration = compute_duration(cards.len(), SHAKE_BASE_DURATION_MS);
                            if !controller.try_apply_animation(&mut cards, EffectTag::Shake, duration)
                            {
                                info!("Animation already in progress. Please wait.");
                            }
                        }
                        Action::Reset => {
                            info!("{}", controller.reset_all(&mut cards));
                        }
                        Action::Info => {
                            info!("{}", modal.set_visible(true));
                        }
                    }
                }
            }
        }

        controller.tick(dt_ms, &mut cards);

        let time = rl.get_time() as f32;
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(24, 26, 32, 255));
        d.draw_text("Card Wall", 24, 16, 28, Color::RAYWHITE);

        for card in &cards {
            card.draw(&mut d, time);
        }
        let busy = controller.state() == AnimationState::Animating;
        for button in &buttons {
            let hovered = !modal.visible && button.rect.check_collision_point_rec(mouse);
            // Animation triggers look inactive while the gate is closed;
            // clicks still go through and get the rejection log.
            let dimmed = busy && matches!(button.action, Action::Pulse | Action::Shake);
            button.draw(&mut d, hovered, dimmed);
        }

        // Overlay draws last so it sits above everything else.
        modal.draw(&mut d);
    }

    Ok(())
}
