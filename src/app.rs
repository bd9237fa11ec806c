use macroquad::input::{KeyCode, is_key_pressed};

use crate::game::{Game, Tick};
use crate::grid::{
    BLINK_PERIOD, Direction, MENU_MUSIC_VOLUME, PLAYING_MUSIC_VOLUME, RESTART_COOLDOWN,
    TICK_INTERVAL,
};

/// Sound effects the loop asks the audio side to play.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Crash,
}

/// Edge-triggered input for one frame.
#[derive(Debug, Default, Copy, Clone)]
pub struct FrameInput {
    pub turn: Option<Direction>,
    pub confirm: bool,
}

impl FrameInput {
    pub fn poll() -> Self {
        let turn = if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
            Some(Direction::Up)
        } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
            Some(Direction::Down)
        } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
            Some(Direction::Left)
        } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
            Some(Direction::Right)
        } else {
            None
        };
        Self { turn, confirm: is_key_pressed(KeyCode::Enter) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu,
    Playing { last_tick: f64 },
    GameOver { final_score: u32, entered_at: f64 },
}

pub struct App {
    pub game: Game,
    pub screen: Screen,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self { game, screen: Screen::Menu }
    }

    /// Advances the state machine by one frame at time `now` (seconds).
    pub fn update(&mut self, input: &FrameInput, now: f64) -> Option<Cue> {
        let mut cue = None;
        let mut next_screen: Option<Screen> = None;

        match &mut self.screen {
            Screen::Menu => {
                if input.confirm {
                    self.game.restart();
                    log::info!("game started");
                    next_screen = Some(Screen::Playing { last_tick: now });
                }
            }
            Screen::Playing { last_tick } => {
                if let Some(dir) = input.turn {
                    self.game.steer(dir);
                }
                if now - *last_tick >= TICK_INTERVAL {
                    *last_tick = now;
                    match self.game.update() {
                        Tick::Ate => {
                            log::debug!("ate food, score {}", self.game.score);
                            cue = Some(Cue::Eat);
                        }
                        Tick::Crashed(summary) => {
                            match serde_json::to_string(&summary) {
                                Ok(json) => log::info!("round over {json}"),
                                Err(err) => log::warn!("round over, summary not encoded: {err}"),
                            }
                            cue = Some(Cue::Crash);
                            next_screen = Some(Screen::GameOver {
                                final_score: summary.score,
                                entered_at: now,
                            });
                        }
                        Tick::Moved | Tick::Idle => {}
                    }
                }
            }
            Screen::GameOver { entered_at, .. } => {
                if input.confirm {
                    if now - *entered_at >= RESTART_COOLDOWN {
                        self.game.restart();
                        log::info!("game restarted");
                        next_screen = Some(Screen::Playing { last_tick: now });
                    } else {
                        log::debug!("restart ignored during cooldown");
                    }
                }
            }
        }

        if let Some(ns) = next_screen {
            self.screen = ns;
        }
        cue
    }

    pub fn music_volume(&self) -> f32 {
        match self.screen {
            Screen::Playing { .. } => PLAYING_MUSIC_VOLUME,
            Screen::Menu | Screen::GameOver { .. } => MENU_MUSIC_VOLUME,
        }
    }

    /// Seconds until restart is accepted; zero outside GameOver.
    pub fn cooldown_left(&self, now: f64) -> f64 {
        match self.screen {
            Screen::GameOver { entered_at, .. } => (RESTART_COOLDOWN - (now - entered_at)).max(0.0),
            _ => 0.0,
        }
    }

    pub fn banner_visible(&self, now: f64) -> bool {
        match self.screen {
            Screen::GameOver { entered_at, .. } => ((now - entered_at) / BLINK_PERIOD) as i64 % 2 == 0,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CELL_COUNT, Cell, SCORE_PER_FOOD};
    use crate::snake::Snake;

    const IDLE: FrameInput = FrameInput { turn: None, confirm: false };
    const CONFIRM: FrameInput = FrameInput { turn: None, confirm: true };

    fn playing_app() -> App {
        let mut app = App::new(Game::new());
        app.update(&CONFIRM, 0.0);
        app.game.food.position = Cell::new(0, 24);
        app
    }

    #[test]
    fn test_menu_waits_for_confirm() {
        let mut app = App::new(Game::new());
        assert_eq!(app.update(&IDLE, 5.0), None);
        assert_eq!(app.screen, Screen::Menu);
        app.update(&CONFIRM, 6.0);
        assert_eq!(app.screen, Screen::Playing { last_tick: 6.0 });
        assert!(app.game.running);
    }

    #[test]
    fn test_ticks_at_fixed_interval() {
        let mut app = playing_app();
        app.update(&IDLE, 0.1);
        assert_eq!(app.game.snake.head(), Cell::new(6, 9));
        app.update(&IDLE, 0.2);
        assert_eq!(app.game.snake.head(), Cell::new(7, 9));
        app.update(&IDLE, 0.3);
        assert_eq!(app.game.snake.head(), Cell::new(7, 9));
        app.update(&IDLE, 0.45);
        assert_eq!(app.game.snake.head(), Cell::new(8, 9));
    }

    #[test]
    fn test_one_turn_per_tick() {
        let mut app = playing_app();
        app.update(&FrameInput { turn: Some(Direction::Up), confirm: false }, 0.05);
        app.update(&FrameInput { turn: Some(Direction::Left), confirm: false }, 0.1);
        app.update(&IDLE, 0.2);
        assert_eq!(app.game.snake.head(), Cell::new(6, 8));
        assert_eq!(app.game.snake.direction(), Direction::Up);
    }

    #[test]
    fn test_reverse_input_ignored() {
        let mut app = playing_app();
        app.update(&FrameInput { turn: Some(Direction::Left), confirm: false }, 0.2);
        assert_eq!(app.game.snake.head(), Cell::new(7, 9));
    }

    #[test]
    fn test_eating_emits_cue() {
        let mut app = playing_app();
        app.game.food.position = Cell::new(7, 9);
        assert_eq!(app.update(&IDLE, 0.2), Some(Cue::Eat));
        assert_eq!(app.game.score, SCORE_PER_FOOD);
    }

    fn crash(app: &mut App, now: f64) {
        app.game.snake = Snake::with_body(&[Cell::new(CELL_COUNT - 1, 2)], Direction::Right);
        app.game.score = 20;
        if let Screen::Playing { last_tick } = &mut app.screen {
            *last_tick = now - 1.0;
        }
        assert_eq!(app.update(&IDLE, now), Some(Cue::Crash));
    }

    #[test]
    fn test_wall_moves_to_game_over() {
        let mut app = playing_app();
        crash(&mut app, 10.0);
        assert_eq!(app.screen, Screen::GameOver { final_score: 20, entered_at: 10.0 });
        assert_eq!(app.game.high_score, 20);
        assert!(!app.game.running);
        assert_eq!(app.game.snake.head(), Cell::new(6, 9));
        assert_eq!(app.game.snake.len(), 3);
    }

    #[test]
    fn test_restart_ignored_during_cooldown() {
        let mut app = playing_app();
        crash(&mut app, 10.0);
        app.update(&CONFIRM, 12.9);
        assert!(matches!(app.screen, Screen::GameOver { .. }));
        assert_eq!(app.game.score, 20);
        assert!((app.cooldown_left(12.0) - 1.0).abs() < 1e-9);

        app.update(&CONFIRM, 13.0);
        assert_eq!(app.screen, Screen::Playing { last_tick: 13.0 });
        assert_eq!(app.game.score, 0);
        assert!(app.game.running);
        assert_eq!(app.cooldown_left(13.0), 0.0);
    }

    #[test]
    fn test_music_quieter_while_playing() {
        let mut app = App::new(Game::new());
        assert_eq!(app.music_volume(), MENU_MUSIC_VOLUME);
        app.update(&CONFIRM, 0.0);
        assert!(app.music_volume() < MENU_MUSIC_VOLUME);
    }

    #[test]
    fn test_banner_blinks() {
        let mut app = playing_app();
        crash(&mut app, 10.0);
        assert!(app.banner_visible(10.1));
        assert!(!app.banner_visible(10.1 + BLINK_PERIOD));
        assert!(app.banner_visible(10.1 + 2.0 * BLINK_PERIOD));
    }
}
