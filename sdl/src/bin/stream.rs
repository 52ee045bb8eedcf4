use log::info;

use shoreline_core::{event_loop, playback::PlaybackController, scene::Scene};
use shoreline_sdl::{error::SdlSampleError, gfx::{SdlCanvas, SCREEN_HEIGHT, SCREEN_WIDTH}, input::SdlInputProvider, mixer_device::MixerAudioDevice};

const WINDOW_NAME:&str = "SDL2 audio sample (Press SPACE to pause/play)";

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
    info!("shoreline stream v{}", shoreline_common::VERSION);

    let sdl = sdl2::init().map_err(SdlSampleError::Init)?;
    let audio = sdl.audio().map_err(SdlSampleError::Init)?;
    let video = sdl.video().map_err(SdlSampleError::Init)?;

    // The audio device opens and loads the stream before any window is shown
    let device = MixerAudioDevice::open(audio, false)?;

    let mut canvas = SdlCanvas::new(&video, WINDOW_NAME)?;
    let mut provider = SdlInputProvider::new(sdl.event_pump().map_err(SdlSampleError::Init)?);

    let scene = Scene::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut controller = PlaybackController::start(device)?;
    info!("Playback started, SPACE pauses and resumes");

    event_loop::run(&mut provider, &mut controller, &scene, &mut canvas, |_| Option::None);

    info!("Quit requested, shutting down");
    Ok(())
}
