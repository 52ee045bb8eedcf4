use log::info;

use shoreline_core::{event_loop, input::Key, playback::{Clip, PlaybackController}, scene::Scene};
use shoreline_sdl::{error::SdlSampleError, gfx::{SdlCanvas, SCREEN_HEIGHT, SCREEN_WIDTH}, input::SdlInputProvider, mixer_device::MixerAudioDevice};

const WINDOW_NAME:&str = "SDL2 audio sample (Press SPACE to pause/play)";

fn clip_mapper(key:Key)->Option<Clip>{
    match key{
        Key::Right=>Some(Clip::Clap),
        Key::Left=>Some(Clip::Snare),
        Key::Up=>Some(Clip::TechnoClapSnare),
        Key::Down=>Some(Clip::ReverbSnare),
        Key::Space=>Option::None,
    }
}

fn main(){
    match shoreline_common::logging::init_fern_logger(){
        Result::Ok(())=>{},
        Result::Err(error)=>std::panic!("error initing logger: {}", error)
    }

    // Failures are reported to the operator, the exit code stays 0
    if let Err(error) = run(){
        log::error!("{}", error);
    }
}

fn run()->Result<(), SdlSampleError>{
    info!("shoreline kit v{}", shoreline_common::VERSION);

    let sdl = sdl2::init().map_err(SdlSampleError::Init)?;
    let audio = sdl.audio().map_err(SdlSampleError::Init)?;
    let video = sdl.video().map_err(SdlSampleError::Init)?;

    // The audio device opens and loads all assets before any window is shown
    let device = MixerAudioDevice::open(audio, true)?;

    let mut canvas = SdlCanvas::new(&video, WINDOW_NAME)?;
    let mut provider = SdlInputProvider::new(sdl.event_pump().map_err(SdlSampleError::Init)?);

    let scene = Scene::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut controller = PlaybackController::start(device)?;
    info!("Playback started, SPACE pauses and resumes, the arrow keys trigger clips");

    event_loop::run(&mut provider, &mut controller, &scene, &mut canvas, clip_mapper);

    info!("Quit requested, shutting down");
    Ok(())
}
