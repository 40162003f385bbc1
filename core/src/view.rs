use alloc::format;
use alloc::string::{String, ToString};

use crate::*;

pub const LOSS_MESSAGE: &str = "Game Over ❌";
pub const WIN_MESSAGE: &str = "You Win 🎉";
pub const NO_BEST_TIME: &str = "-";

/// Popup text for a finished game.
pub const fn end_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Won => Some(WIN_MESSAGE),
        GameStatus::Lost => Some(LOSS_MESSAGE),
        GameStatus::NotStarted | GameStatus::Playing => None,
    }
}

pub fn format_best_time(best: Option<u32>) -> String {
    match best {
        Some(seconds) => format!("{}s", seconds),
        None => NO_BEST_TIME.to_string(),
    }
}

/// Three character counter display, like the classic seven-segment boxes.
pub fn format_for_counter(num: i32) -> String {
    match num {
        ..-99 => "-99".to_string(),
        -99..0 => format!("-{:02}", -num),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_padded_and_clamped() {
        assert_eq!(format_for_counter(0), "000");
        assert_eq!(format_for_counter(7), "007");
        assert_eq!(format_for_counter(99), "099");
        assert_eq!(format_for_counter(1234), "999");
        assert_eq!(format_for_counter(-2), "-02");
        assert_eq!(format_for_counter(-150), "-99");
    }

    #[test]
    fn best_time_text() {
        assert_eq!(format_best_time(Some(42)), "42s");
        assert_eq!(format_best_time(None), "-");
    }

    #[test]
    fn only_terminal_states_have_messages() {
        assert_eq!(end_message(GameStatus::NotStarted), None);
        assert_eq!(end_message(GameStatus::Playing), None);
        assert_eq!(end_message(GameStatus::Won), Some("You Win 🎉"));
        assert_eq!(end_message(GameStatus::Lost), Some("Game Over ❌"));
    }
}
