#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rect{
    pub x:i32,
    pub y:i32,
    pub w:u32,
    pub h:u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color{
    pub r:u8,
    pub g:u8,
    pub b:u8,
}

pub const BACKGROUND_COLOR:Color = Color{r:0xFF, g:0xFF, b:0xFF};
pub const SQUARE_COLOR:Color = Color{r:0x19, g:0x71, b:0xA9};
pub const PAUSE_BARS_COLOR:Color = Color{r:0xFF, g:0xFF, b:0xFF};

const PAUSE_BAR_WIDTH:u32 = 40;

pub trait Canvas{
    fn clear(&mut self, color:Color);
    fn fill_rect(&mut self, rect:Rect, color:Color);
    fn present(&mut self);
}

// The whole scene is computed once at startup and never mutated
pub struct Scene{
    pub square:Rect,
    pub pause_bars:[Rect;2],
}

impl Scene{
    pub fn new(screen_width:u32, screen_height:u32)->Self{
        // Square dimensions: half of the min(width, height), positioned in the middle of the screen
        let side = std::cmp::min(screen_width, screen_height) / 2;
        let square = Rect{
            w:side,
            h:side,
            x:(screen_width / 2 - side / 2) as i32,
            y:(screen_height / 2 - side / 2) as i32,
        };

        let first_bar = Rect{
            w:PAUSE_BAR_WIDTH,
            h:square.h / 2,
            x:square.x + ((square.w.saturating_sub(PAUSE_BAR_WIDTH * 3)) / 2) as i32,
            y:square.y + (square.h / 4) as i32,
        };
        let second_bar = Rect{x:first_bar.x + (PAUSE_BAR_WIDTH * 2) as i32, ..first_bar};

        return Self{square, pause_bars:[first_bar, second_bar]};
    }

    pub fn render<C:Canvas>(&self, canvas:&mut C, paused:bool){
        canvas.clear(BACKGROUND_COLOR);
        canvas.fill_rect(self.square, SQUARE_COLOR);
        if paused{
            for bar in self.pause_bars{
                canvas.fill_rect(bar, PAUSE_BARS_COLOR);
            }
        }
        canvas.present();
    }
}
