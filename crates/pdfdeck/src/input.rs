use eframe::egui;

/// Toolkit-independent classification of one user input. The controller
/// pattern-matches on this and nothing else; anything egui reports that
/// does not map to a gesture is dropped by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Advance,
    Retreat,
    ToggleFullscreen,
    Quit,
}

/// Collects the gestures present in one frame's input for one window.
pub fn gather(input: &egui::InputState) -> Vec<Gesture> {
    let mut gestures = Vec::new();

    for event in &input.events {
        match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => match classify_key(*key, *modifiers) {
                Some(gesture) => gestures.push(gesture),
                None => log::debug!("unhandled key press: {key:?}"),
            },
            egui::Event::PointerButton {
                button,
                pressed: true,
                ..
            } => gestures.push(classify_pointer(*button)),
            egui::Event::MouseWheel { delta, .. } => {
                if let Some(gesture) = classify_scroll(*delta) {
                    gestures.push(gesture);
                }
            }
            _ => {}
        }
    }

    gestures
}

/// Right/Down/PageDown/Space advance, Left/Up/PageUp/Backspace retreat,
/// F, F11, Alt+Enter and Ctrl+L toggle fullscreen, Q quits.
pub fn classify_key(key: egui::Key, modifiers: egui::Modifiers) -> Option<Gesture> {
    use egui::Key;

    match key {
        Key::ArrowRight | Key::ArrowDown | Key::PageDown | Key::Space => Some(Gesture::Advance),
        Key::ArrowLeft | Key::ArrowUp | Key::PageUp | Key::Backspace => Some(Gesture::Retreat),
        Key::F | Key::F11 => Some(Gesture::ToggleFullscreen),
        Key::Enter if modifiers.alt => Some(Gesture::ToggleFullscreen),
        Key::L if modifiers.ctrl => Some(Gesture::ToggleFullscreen),
        Key::Q => Some(Gesture::Quit),
        _ => None,
    }
}

/// The primary button advances; any other button retreats.
pub fn classify_pointer(button: egui::PointerButton) -> Gesture {
    match button {
        egui::PointerButton::Primary => Gesture::Advance,
        _ => Gesture::Retreat,
    }
}

/// Scrolling down or right advances, up or left retreats. egui reports
/// wheel deltas with down and right as negative.
pub fn classify_scroll(delta: egui::Vec2) -> Option<Gesture> {
    if delta.y < 0.0 || delta.x < 0.0 {
        Some(Gesture::Advance)
    } else if delta.y > 0.0 || delta.x > 0.0 {
        Some(Gesture::Retreat)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Key, Modifiers, PointerButton, vec2};

    #[test]
    fn navigation_keys() {
        for key in [Key::ArrowRight, Key::ArrowDown, Key::PageDown, Key::Space] {
            assert_eq!(classify_key(key, Modifiers::NONE), Some(Gesture::Advance));
        }
        for key in [Key::ArrowLeft, Key::ArrowUp, Key::PageUp, Key::Backspace] {
            assert_eq!(classify_key(key, Modifiers::NONE), Some(Gesture::Retreat));
        }
    }

    #[test]
    fn fullscreen_keys() {
        assert_eq!(
            classify_key(Key::F, Modifiers::NONE),
            Some(Gesture::ToggleFullscreen)
        );
        assert_eq!(
            classify_key(Key::F11, Modifiers::NONE),
            Some(Gesture::ToggleFullscreen)
        );
        assert_eq!(
            classify_key(Key::Enter, Modifiers::ALT),
            Some(Gesture::ToggleFullscreen)
        );
        assert_eq!(
            classify_key(Key::L, Modifiers::CTRL),
            Some(Gesture::ToggleFullscreen)
        );
    }

    #[test]
    fn fullscreen_chords_need_their_modifier() {
        assert_eq!(classify_key(Key::Enter, Modifiers::NONE), None);
        assert_eq!(classify_key(Key::L, Modifiers::NONE), None);
    }

    #[test]
    fn quit_key() {
        assert_eq!(classify_key(Key::Q, Modifiers::NONE), Some(Gesture::Quit));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(classify_key(Key::A, Modifiers::NONE), None);
        assert_eq!(classify_key(Key::Escape, Modifiers::NONE), None);
    }

    #[test]
    fn pointer_buttons() {
        assert_eq!(classify_pointer(PointerButton::Primary), Gesture::Advance);
        assert_eq!(classify_pointer(PointerButton::Secondary), Gesture::Retreat);
        assert_eq!(classify_pointer(PointerButton::Middle), Gesture::Retreat);
    }

    #[test]
    fn scroll_direction() {
        assert_eq!(classify_scroll(vec2(0.0, -3.0)), Some(Gesture::Advance));
        assert_eq!(classify_scroll(vec2(-3.0, 0.0)), Some(Gesture::Advance));
        assert_eq!(classify_scroll(vec2(0.0, 3.0)), Some(Gesture::Retreat));
        assert_eq!(classify_scroll(vec2(3.0, 0.0)), Some(Gesture::Retreat));
        assert_eq!(classify_scroll(vec2(0.0, 0.0)), None);
    }
}
