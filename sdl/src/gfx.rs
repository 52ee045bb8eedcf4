use sdl2::{pixels, rect, render::WindowCanvas, VideoSubsystem};

use shoreline_core::scene::{Canvas, Color, Rect};

use crate::error::SdlSampleError;

pub const SCREEN_WIDTH:u32 = 800;
pub const SCREEN_HEIGHT:u32 = 600;

pub struct SdlCanvas{
    canvas:WindowCanvas,
}

impl SdlCanvas{
    pub fn new(video:&VideoSubsystem, window_name:&str)->Result<Self, SdlSampleError>{
        cfg_if::cfg_if!{
            if #[cfg(target_os = "linux")]{
                // Some X11 compositors unredirect fullscreen-looking SDL windows
                if !sdl2::hint::set("SDL_VIDEO_X11_NET_WM_BYPASS_COMPOSITOR", "0"){
                    log::warn!("Could not disable the X11 compositor bypass");
                }
            }
        }

        let window = video.window(window_name, SCREEN_WIDTH, SCREEN_HEIGHT)
            .build()
            .map_err(|error| SdlSampleError::ResourceCreation(error.to_string()))?;

        let canvas = window.into_canvas()
            .accelerated()
            .build()
            .map_err(|error| SdlSampleError::ResourceCreation(error.to_string()))?;

        return Ok(Self{canvas});
    }
}

impl Canvas for SdlCanvas{
    fn clear(&mut self, color:Color){
        self.canvas.set_draw_color(pixels::Color::RGB(color.r, color.g, color.b));
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect:Rect, color:Color){
        self.canvas.set_draw_color(pixels::Color::RGB(color.r, color.g, color.b));
        if let Err(error) = self.canvas.fill_rect(rect::Rect::new(rect.x, rect.y, rect.w, rect.h)){
            log::error!("Could not draw rect: {}", error);
        }
    }

    fn present(&mut self){
        self.canvas.present();
    }
}
