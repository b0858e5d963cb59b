// Bindings to the engine host: the `env` imports it provides and the
// lifecycle functions it calls on us. The host drives everything from a
// single thread and never re-enters an export, so the game lives in a
// thread local `GameSlot` between calls.

use crate::color::Color;
use crate::config::Config;
use crate::host::{is_pressed, Button, Engine, Gfx, Input, Random};
use crate::slot::GameSlot;
use crate::{logger, utils};
use cgmath::{vec2, Vector2};
use std::cell::RefCell;

#[link(wasm_import_module = "env")]
extern "C" {
    fn EngineLog(ptr: *const u8, len: usize);
    fn EngineFps() -> f32;
    fn EngineTps() -> f32;
    fn EngineExit();
    fn EngineRandomFloat() -> f32;
    fn EngineRandomInt(max: i32) -> i32;

    fn InputPressed(input: i32) -> i32;
    fn InputCursorX() -> f32;
    fn InputCursorY() -> f32;

    fn GfxClear(r: f32, g: f32, b: f32, a: f32);
    fn GfxText(ptr: *const u8, len: usize, x: f32, y: f32);
    fn GfxRectangle(x: f32, y: f32, w: f32, h: f32, r: f32, g: f32, b: f32, a: f32);
    fn GfxImage(x: f32, y: f32, r: f32, g: f32, b: f32, a: f32);
}

fn host_log(message: &str) {
    unsafe { EngineLog(message.as_ptr(), message.len()) }
}

/// The real host, reached through the `env` imports.
pub struct WasmHost;

impl Random for WasmHost {
    fn random_float(&mut self) -> f32 {
        unsafe { EngineRandomFloat() }
    }

    fn random_int(&mut self, max: i32) -> i32 {
        unsafe { EngineRandomInt(max) }
    }
}

impl Engine for WasmHost {
    fn log(&mut self, message: &str) {
        host_log(message);
    }

    fn fps(&self) -> f32 {
        unsafe { EngineFps() }
    }

    fn tps(&self) -> f32 {
        unsafe { EngineTps() }
    }

    fn exit(&mut self) {
        unsafe { EngineExit() }
    }
}

impl Input for WasmHost {
    fn pressed(&self, button: Button) -> bool {
        is_pressed(unsafe { InputPressed(button.code()) })
    }

    fn cursor_position(&self) -> Vector2<f32> {
        unsafe { vec2(InputCursorX(), InputCursorY()) }
    }
}

impl Gfx for WasmHost {
    fn clear(&mut self, c: Color) {
        unsafe { GfxClear(c.r, c.g, c.b, c.a) }
    }

    fn image(&mut self, pos: Vector2<f32>, c: Color) {
        unsafe { GfxImage(pos.x, pos.y, c.r, c.g, c.b, c.a) }
    }

    fn rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, c: Color) {
        unsafe { GfxRectangle(x, y, w, h, c.r, c.g, c.b, c.a) }
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        unsafe { GfxText(text.as_ptr(), text.len(), x, y) }
    }
}

thread_local! {
    static SLOT: RefCell<GameSlot> = RefCell::new(GameSlot::new());
}

#[no_mangle]
pub extern "C" fn setup() {
    utils::set_panic_hook(host_log);

    let config = Config::default();
    if logger::init(host_log, config.log_level).is_err() {
        log::debug!("logger already installed");
    }

    SLOT.with(|slot| slot.borrow_mut().setup(config, &mut WasmHost));
}

#[no_mangle]
pub extern "C" fn teardown() {
    SLOT.with(|slot| slot.borrow_mut().teardown(&mut WasmHost));
}

#[no_mangle]
pub extern "C" fn update() {
    SLOT.with(|slot| slot.borrow_mut().update(&mut WasmHost));
}

#[no_mangle]
pub extern "C" fn render() {
    SLOT.with(|slot| slot.borrow().render(&mut WasmHost));
}

#[no_mangle]
pub extern "C" fn frame() {
    SLOT.with(|slot| slot.borrow_mut().frame(&mut WasmHost));
}
