use std::{cell::RefCell, rc::Rc};

use shoreline_core::scene::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CanvasCall{
    Clear(Color),
    FillRect(Rect, Color),
    Present,
}

struct RecordingCanvas{
    calls:Rc<RefCell<Vec<CanvasCall>>>,
}

impl Canvas for RecordingCanvas{
    fn clear(&mut self, color:Color){
        self.calls.borrow_mut().push(CanvasCall::Clear(color));
    }

    fn fill_rect(&mut self, rect:Rect, color:Color){
        self.calls.borrow_mut().push(CanvasCall::FillRect(rect, color));
    }

    fn present(&mut self){
        self.calls.borrow_mut().push(CanvasCall::Present);
    }
}

#[test]
fn test_scene_geometry_for_800_600(){
    let scene = Scene::new(800, 600);

    assert_eq!(scene.square, Rect{x:250, y:150, w:300, h:300});
    assert_eq!(scene.pause_bars[0], Rect{x:340, y:225, w:40, h:150});
    assert_eq!(scene.pause_bars[1], Rect{x:420, y:225, w:40, h:150});
}

#[test]
fn test_scene_square_follows_the_smaller_dimension(){
    let scene = Scene::new(600, 800);

    assert_eq!(scene.square, Rect{x:150, y:250, w:300, h:300});
}

#[test]
fn test_pause_bars_stay_inside_the_square(){
    let scene = Scene::new(800, 600);

    for bar in scene.pause_bars{
        assert!(bar.x >= scene.square.x);
        assert!(bar.x + bar.w as i32 <= scene.square.x + scene.square.w as i32);
        assert!(bar.y >= scene.square.y);
        assert!(bar.y + bar.h as i32 <= scene.square.y + scene.square.h as i32);
    }
}

#[test]
fn test_scene_survives_a_screen_too_small_for_the_pause_bars(){
    // 100x100 leaves a 50px square, narrower than the three bar widths
    let scene = Scene::new(100, 100);

    assert_eq!(scene.square, Rect{x:25, y:25, w:50, h:50});
    // The bar offset bottoms out at the square's left edge instead of underflowing
    assert_eq!(scene.pause_bars[0].x, scene.square.x);
    assert_eq!(scene.pause_bars[1].x, scene.square.x + 80);
}

#[test]
fn test_render_while_playing_draws_the_square_only(){
    let scene = Scene::new(800, 600);
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut canvas = RecordingCanvas{calls:calls.clone()};

    scene.render(&mut canvas, false);

    assert_eq!(*calls.borrow(), vec![
        CanvasCall::Clear(BACKGROUND_COLOR),
        CanvasCall::FillRect(scene.square, SQUARE_COLOR),
        CanvasCall::Present,
    ]);
}

#[test]
fn test_render_while_paused_draws_the_pause_bars(){
    let scene = Scene::new(800, 600);
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut canvas = RecordingCanvas{calls:calls.clone()};

    scene.render(&mut canvas, true);

    assert_eq!(*calls.borrow(), vec![
        CanvasCall::Clear(BACKGROUND_COLOR),
        CanvasCall::FillRect(scene.square, SQUARE_COLOR),
        CanvasCall::FillRect(scene.pause_bars[0], PAUSE_BARS_COLOR),
        CanvasCall::FillRect(scene.pause_bars[1], PAUSE_BARS_COLOR),
        CanvasCall::Present,
    ]);
}
