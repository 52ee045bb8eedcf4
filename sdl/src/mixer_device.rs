use std::mem::ManuallyDrop;

use sdl2::mixer::{self, Channel, Chunk, InitFlag, Sdl2MixerContext, DEFAULT_CHANNELS, DEFAULT_FORMAT};
use sdl2::AudioSubsystem;

use shoreline_core::playback::{AudioDevice, Clip, PlaybackError, NUM_OF_CLIPS};
use shoreline_common::assets;

use crate::error::SdlSampleError;

const FREQUENCY:i32 = 22_050;
const CHUNK_SIZE:i32 = 4096;

// Indexed by the Clip discriminant
struct ClipBank([Chunk;NUM_OF_CLIPS]);

impl ClipBank{
    fn load()->Result<Self, SdlSampleError>{
        return Ok(Self([
            load_chunk(assets::clip_path(Clip::Clap))?,
            load_chunk(assets::clip_path(Clip::Snare))?,
            load_chunk(assets::clip_path(Clip::TechnoClapSnare))?,
            load_chunk(assets::clip_path(Clip::ReverbSnare))?,
        ]));
    }

    fn get(&self, clip:Clip)->&Chunk{
        return &self.0[clip as usize];
    }
}

fn load_chunk(path:&'static str)->Result<Chunk, SdlSampleError>{
    return Chunk::from_file(path).map_err(|msg| SdlSampleError::AssetLoad{path, msg});
}

pub struct MixerAudioDevice{
    // The chunks must be released before the audio device is closed, so the waves
    // chunk is dropped manually inside the destructor
    waves:ManuallyDrop<Chunk>,
    clips:Option<ClipBank>,
    stream_channel:Option<Channel>,

    _mixer_context:Sdl2MixerContext,
    _audio:AudioSubsystem,
}

impl MixerAudioDevice{
    // Loads every asset up front so that a missing file fails the whole setup,
    // before any window is shown
    pub fn open(audio:AudioSubsystem, with_clips:bool)->Result<Self, SdlSampleError>{
        let mixer_context = mixer::init(InitFlag::OGG).map_err(SdlSampleError::DeviceOpen)?;
        mixer::open_audio(FREQUENCY, DEFAULT_FORMAT, DEFAULT_CHANNELS, CHUNK_SIZE).map_err(SdlSampleError::DeviceOpen)?;

        match Self::load_assets(with_clips){
            Ok((waves, clips))=>Ok(Self{
                waves:ManuallyDrop::new(waves),
                clips,
                stream_channel:Option::None,
                _mixer_context:mixer_context,
                _audio:audio,
            }),
            Err(error)=>{
                // The device is already open at this point and wont be dropped
                mixer::close_audio();
                Err(error)
            }
        }
    }

    fn load_assets(with_clips:bool)->Result<(Chunk, Option<ClipBank>), SdlSampleError>{
        let waves = load_chunk(assets::WAVES_SOUND)?;
        let clips = if with_clips{Some(ClipBank::load()?)}else{Option::None};
        return Ok((waves, clips));
    }
}

impl AudioDevice for MixerAudioDevice{
    fn play_stream(&mut self)->Result<(), PlaybackError>{
        // Channel::all lets the mixer pick any free channel, the chosen one is kept
        // so that pause and resume wont touch the clip channels
        let channel = Channel::all().play(&self.waves, 0).map_err(PlaybackError::Request)?;
        self.stream_channel = Some(channel);
        return Ok(());
    }

    fn pause_stream(&mut self){
        if let Some(channel) = self.stream_channel{
            channel.pause();
        }
    }

    fn resume_stream(&mut self){
        if let Some(channel) = self.stream_channel{
            channel.resume();
        }
    }

    fn play_clip(&mut self, clip:Clip)->Result<(), PlaybackError>{
        let Some(clips) = &self.clips else {return Err(PlaybackError::NoClips)};
        Channel::all().play(clips.get(clip), 0).map_err(PlaybackError::Request)?;
        return Ok(());
    }
}

impl Drop for MixerAudioDevice{
    fn drop(&mut self){
        Channel::all().halt();
        unsafe{ManuallyDrop::drop(&mut self.waves)};
        drop(self.clips.take());
        mixer::close_audio();
    }
}
