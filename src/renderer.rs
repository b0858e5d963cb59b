// Renderer struct that turns the swarm into host draw calls: clears the
// screen, draws one sprite per gopher, then overlays a HUD with the frame
// stats. It only reads the swarm, so it can run any number of times per tick.

use crate::color::Color;
use crate::host::{Engine, Gfx};
use crate::particle::Gophers;

struct Hud {
    lang: &'static str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color,
    // Baselines of the lang, fps, tps and gopher count lines
    lines: [f32; 4],
}

impl Default for Hud {
    fn default() -> Self {
        Hud {
            lang: "rust",
            x: 10.0,
            y: 10.0,
            width: 125.0,
            height: 55.0,
            color: Color::HUD_PANEL,
            lines: [10.0, 24.0, 36.0, 48.0],
        }
    }
}

pub struct Renderer {
    background: Color,
    hud: Hud,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            background: Color::BACKGROUND,
            hud: Hud::default(),
        }
    }

    pub fn render<H: Engine + Gfx + ?Sized>(&self, gophers: &Gophers, host: &mut H) {
        host.clear(self.background);
        for gopher in gophers {
            host.image(gopher.pos, gopher.color);
        }
        self.render_hud(gophers.len(), host);
    }

    pub fn render_hud<H: Engine + Gfx + ?Sized>(&self, gopher_count: usize, host: &mut H) {
        let hud = &self.hud;
        let fps = host.fps();
        let tps = host.tps();

        host.rectangle(hud.x, hud.y, hud.width, hud.height, hud.color);

        let lines = [
            format!("lang: {}", hud.lang),
            format!("fps: {:.2}", fps),
            format!("tps: {:.2}", tps),
            format!("gophers: {}", gopher_count),
        ];
        for (text, &y) in lines.iter().zip(hud.lines.iter()) {
            host.text(text, hud.x, y);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
