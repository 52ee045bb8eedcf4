use shoreline_core::playback::Clip;

// Fixed asset paths, embedded at build time

pub const WAVES_SOUND:&str = "assets/waves-at-baltic-sea-shore/waves-at-baltic-sea-shore.wav";

pub const CLAP_SOUND:&str = "assets/claps-and-snares/clap.ogg";
pub const SNARE_SOUND:&str = "assets/claps-and-snares/snare.ogg";
pub const TECHNO_CLAP_SNARE_SOUND:&str = "assets/claps-and-snares/techno-clap-snare.ogg";
pub const REVERB_SNARE_SOUND:&str = "assets/claps-and-snares/dubstep-reverb-snare.ogg";

pub fn clip_path(clip:Clip)->&'static str{
    match clip{
        Clip::Clap=>CLAP_SOUND,
        Clip::Snare=>SNARE_SOUND,
        Clip::TechnoClapSnare=>TECHNO_CLAP_SNARE_SOUND,
        Clip::ReverbSnare=>REVERB_SNARE_SOUND,
    }
}
