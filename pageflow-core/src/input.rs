use crate::classify::DeltaMode;

/// Keys the site reacts to. Everything else maps to `None` in [`Key::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    ArrowLeft,
    ArrowRight,
    PageDown,
    PageUp,
    Space,
    Home,
    End,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn parse(key: &str) -> Option<Self> {
        Some(match key {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "PageDown" => Key::PageDown,
            "PageUp" => Key::PageUp,
            " " | "Spacebar" => Key::Space,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    pub mode: DeltaMode,
}

/// Whether a handler took ownership of an event. The shell calls
/// `preventDefault` for `Consumed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handling {
    Consumed,
    Ignored,
}

impl Handling {
    pub fn consumed(self) -> bool {
        self == Handling::Consumed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Positive values move forward (down the page), negative backward.
    pub fn from_sign(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Direction::Forward)
        } else if value < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(Key::parse(" "), Some(Key::Space));
        assert_eq!(Key::parse("Spacebar"), Some(Key::Space));
        assert_eq!(Key::parse("End"), Some(Key::End));
        assert_eq!(Key::parse("a"), None);
        assert_eq!(Key::parse("Tab"), None);
    }

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::from_sign(3.0), Some(Direction::Forward));
        assert_eq!(Direction::from_sign(-0.5), Some(Direction::Backward));
        assert_eq!(Direction::from_sign(0.0), None);
    }
}
