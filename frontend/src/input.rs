use std::collections::HashMap;

use pocket_core::core::machine::InputButton;
use sdl2::keyboard::Scancode;

/// Maps SDL scancodes to the joypad bit (spec.md §6) each one sets when held.
pub struct KeyMap {
    map: HashMap<Scancode, u8>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn bind(&mut self, scancode: Scancode, bit: u8) {
        self.map.insert(scancode, bit);
    }

    pub fn get(&self, scancode: Scancode) -> Option<u8> {
        self.map.get(&scancode).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed D-pad + face-button layout — there's only one machine here, so
/// unlike the teacher's name-sniffing `default_key_map` this binds directly
/// off [`InputButton::id`] (spec.md §6 bit order).
pub fn default_key_map(buttons: &[InputButton]) -> KeyMap {
    let mut km = KeyMap::new();
    for button in buttons {
        let scancode = match button.name {
            "Right" => Scancode::Right,
            "Left" => Scancode::Left,
            "Up" => Scancode::Up,
            "Down" => Scancode::Down,
            "A" => Scancode::X,
            "B" => Scancode::Z,
            "Select" => Scancode::RShift,
            "Start" => Scancode::Return,
            _ => continue,
        };
        km.bind(scancode, button.id);
    }
    km
}
