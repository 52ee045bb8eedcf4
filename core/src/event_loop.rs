use crate::input::{InputEvent, InputProvider, Key};
use crate::playback::{AudioDevice, Clip, PlaybackController};
use crate::scene::{Canvas, Scene};

// Blocks on the provider, dispatches to the controller and redraws the scene until a quit event arrives.
// The frame is redrawn after every event, including the one that requested the quit.
pub fn run<IP:InputProvider, AD:AudioDevice, C:Canvas>(
    provider:&mut IP,
    controller:&mut PlaybackController<AD>,
    scene:&Scene,
    canvas:&mut C,
    clip_mapper:impl Fn(Key)->Option<Clip>,
){
    let mut quit = false;
    while !quit{
        match provider.wait_event(){
            InputEvent::Quit=>quit = true,
            InputEvent::KeyPress(Key::Space)=>controller.toggle(),
            InputEvent::KeyPress(key)=>{
                if let Some(clip) = clip_mapper(key){
                    controller.trigger_clip(clip);
                }
            }
            InputEvent::Other=>{}
        }

        scene.render(canvas, controller.is_paused());
    }
}
