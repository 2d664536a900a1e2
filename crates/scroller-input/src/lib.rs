//! # scroller-input
//! scroller's input module, tracks the keyboard between update ticks

pub use winit::event::*;
pub use winit::keyboard::{KeyCode, PhysicalKey};

pub use winit;

/// keyboard state collected from window events
///
/// edges are kept until the end of the tick that reads them, so a key tapped
/// between two ticks is still seen by the next one
pub struct Input
{
    current_pressed_keys: ahash::AHashMap<PhysicalKey, InputState>,
}

impl Default for Input
{
    fn default() -> Self
    {
        Self
        {
            current_pressed_keys: ahash::AHashMap::with_capacity(8),
        }
    }
}

/// represents the current state of an active input
#[derive(Clone, Copy, Debug)]
struct InputState
{
    pressed_this_tick: bool,
    released: bool
}

impl Input
{
    pub fn new() -> Self
    {
        Self::default()
    }

    #[inline]
    pub fn check(&mut self, event: &WindowEvent)
    {
        if let WindowEvent::KeyboardInput { event: KeyEvent { physical_key, state, .. }, .. } = event
        {
            match state
            {
                ElementState::Pressed => self.press(*physical_key),
                ElementState::Released => self.release(*physical_key),
            }
        }
    }

    /// records a key press, auto repeated presses of a held key are ignored
    pub fn press(&mut self, key: PhysicalKey)
    {
        match self.current_pressed_keys.get_mut(&key)
        {
            // pressed again before the release was flushed
            Some(state) if state.released => *state = InputState { pressed_this_tick: true, released: false },
            Some(_) => (),
            None =>
            {
                self.current_pressed_keys.insert(key, InputState { pressed_this_tick: true, released: false });
            }
        }
    }

    pub fn release(&mut self, key: PhysicalKey)
    {
        if let Some(InputState { released, .. }) = self.current_pressed_keys.get_mut(&key)
        {
            *released = true;
        }
    }

    /// closes the current tick, edges are cleared and released keys forgotten
    pub fn end_tick(&mut self)
    {
        self.current_pressed_keys.retain(|_, state| !state.released);

        for state in self.current_pressed_keys.values_mut()
        {
            state.pressed_this_tick = false;
        }
    }

    /// returns true the first tick the key is pressed
    ///
    /// use [Input::get_key_holding] to check if the key is pressed in the current tick
    pub fn get_key_down(&self, keycode: KeyCode) -> bool
    {
        matches!
        (
            self.current_pressed_keys.get(&PhysicalKey::Code(keycode)),
            Some(InputState { pressed_this_tick: true, .. })
        )
    }

    /// returns true if the key is being pressed
    pub fn get_key_holding(&self, keycode: KeyCode) -> bool
    {
        matches!
        (
            self.current_pressed_keys.get(&PhysicalKey::Code(keycode)),
            Some(InputState { released: false, .. })
        )
    }

    /// returns true the tick the key is released
    pub fn get_key_up(&self, keycode: KeyCode) -> bool
    {
        match self.current_pressed_keys.get(&PhysicalKey::Code(keycode))
        {
            Some(state) => state.released,
            None => false
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const SPACE: PhysicalKey = PhysicalKey::Code(KeyCode::Space);

    #[test]
    fn key_down_fires_only_on_the_first_tick()
    {
        let mut input = Input::new();
        assert!(!input.get_key_down(KeyCode::Space));

        input.press(SPACE);
        assert!(input.get_key_down(KeyCode::Space));
        assert!(input.get_key_holding(KeyCode::Space));

        input.end_tick();
        assert!(!input.get_key_down(KeyCode::Space));
        assert!(input.get_key_holding(KeyCode::Space));
    }

    #[test]
    fn auto_repeat_does_not_refire_the_edge()
    {
        let mut input = Input::new();
        input.press(SPACE);
        input.end_tick();

        input.press(SPACE);
        input.press(SPACE);
        assert!(!input.get_key_down(KeyCode::Space));
    }

    #[test]
    fn tap_between_ticks_is_still_seen()
    {
        let mut input = Input::new();
        input.press(SPACE);
        input.release(SPACE);

        assert!(input.get_key_down(KeyCode::Space));
        assert!(input.get_key_up(KeyCode::Space));
        assert!(!input.get_key_holding(KeyCode::Space));

        input.end_tick();
        assert!(!input.get_key_down(KeyCode::Space));
        assert!(!input.get_key_up(KeyCode::Space));
    }

    #[test]
    fn release_then_press_fires_a_new_edge()
    {
        let mut input = Input::new();
        input.press(SPACE);
        input.end_tick();

        input.release(SPACE);
        input.press(SPACE);
        assert!(input.get_key_down(KeyCode::Space));
    }

    #[test]
    fn keys_are_tracked_independently()
    {
        let mut input = Input::new();
        input.press(PhysicalKey::Code(KeyCode::Escape));

        assert!(input.get_key_down(KeyCode::Escape));
        assert!(!input.get_key_down(KeyCode::Space));
    }
}
