#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key{
    Space,
    Right,
    Left,
    Up,
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent{
    Quit,
    KeyPress(Key),
    Other,
}

pub trait InputProvider{
    // Blocks until the next event arrives, the scene is static between events so there is nothing to poll for
    fn wait_event(&mut self)->InputEvent;
}
