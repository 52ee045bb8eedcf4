use sdl2::{event::Event, keyboard::Keycode, EventPump};

use shoreline_core::input::{InputEvent, InputProvider, Key};

pub struct SdlInputProvider{
    event_pump:EventPump,
}

impl SdlInputProvider{
    pub fn new(event_pump:EventPump)->Self{
        Self{event_pump}
    }
}

impl InputProvider for SdlInputProvider{
    fn wait_event(&mut self)->InputEvent{
        // SDL_WaitEvent, blocks indefinitely until the next event
        return match self.event_pump.wait_event(){
            Event::Quit{..}=>InputEvent::Quit,
            Event::KeyDown{keycode:Some(keycode), ..}=>match keycode{
                Keycode::Space=>InputEvent::KeyPress(Key::Space),
                Keycode::Right=>InputEvent::KeyPress(Key::Right),
                Keycode::Left=>InputEvent::KeyPress(Key::Left),
                Keycode::Up=>InputEvent::KeyPress(Key::Up),
                Keycode::Down=>InputEvent::KeyPress(Key::Down),
                _=>InputEvent::Other,
            },
            _=>InputEvent::Other,
        };
    }
}
