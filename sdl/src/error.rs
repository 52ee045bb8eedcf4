use shoreline_core::playback::PlaybackError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdlSampleError{
    #[error("SDL could not be initialized: {0}")]
    Init(String),
    #[error("Window or renderer could not be created: {0}")]
    ResourceCreation(String),
    #[error("Sound '{path}' could not be loaded: {msg}")]
    AssetLoad{path:&'static str, msg:String},
    #[error("Audio device could not be opened: {0}")]
    DeviceOpen(String),
    #[error("Playback request failed: {0}")]
    Playback(#[from] PlaybackError),
}
