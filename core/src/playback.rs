use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlaybackState{
    Playing,
    Paused,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Clip{
    Clap,
    Snare,
    TechnoClapSnare,
    ReverbSnare,
}

pub const NUM_OF_CLIPS:usize = 4;

#[derive(Error, Debug)]
pub enum PlaybackError{
    #[error("playback could not be started: {0}")]
    Request(String),
    #[error("no clips are loaded on this device")]
    NoClips,
}

pub trait AudioDevice{
    fn play_stream(&mut self)->Result<(), PlaybackError>;
    fn pause_stream(&mut self);
    fn resume_stream(&mut self);
    fn play_clip(&mut self, clip:Clip)->Result<(), PlaybackError>;
}

pub struct PlaybackController<AD:AudioDevice>{
    device:AD,
    state:PlaybackState,
}

impl<AD:AudioDevice> PlaybackController<AD>{
    pub fn start(mut device:AD)->Result<Self, PlaybackError>{
        device.play_stream()?;
        return Ok(Self{device, state:PlaybackState::Playing});
    }

    // The only transition of the playback state, strictly binary
    pub fn toggle(&mut self){
        match self.state{
            PlaybackState::Playing=>{
                self.device.pause_stream();
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Paused=>{
                self.device.resume_stream();
                self.state = PlaybackState::Playing;
            }
        }
    }

    pub fn is_paused(&self)->bool{
        return self.state == PlaybackState::Paused;
    }

    // Clips are independent of the stream pause state, a failed request is reported once and dropped
    pub fn trigger_clip(&mut self, clip:Clip){
        if let Err(error) = self.device.play_clip(clip){
            log::error!("Could not play clip {:?}: {}", clip, error);
        }
    }
}
