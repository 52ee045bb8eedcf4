pub mod event_loop;
pub mod input;
pub mod playback;
pub mod scene;
