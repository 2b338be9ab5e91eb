use anyhow::Result;

use cube_engine::core::{App, AppControl, FrameCtx};
use cube_engine::device::GpuInit;
use cube_engine::logging::{init_logging, LoggingConfig};
use cube_engine::paint::Color;
use cube_engine::render::{CubeRenderer, CubeRendererConfig};
use cube_engine::window::{Runtime, RuntimeConfig};

struct CubeApp {
    renderer: CubeRenderer,
    background: Color,
    frames: u64,
}

impl CubeApp {
    fn new(config: CubeRendererConfig, background: Color) -> Result<Self> {
        Ok(Self {
            renderer: CubeRenderer::new(config)?,
            background,
            frames: 0,
        })
    }
}

impl App for CubeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let renderer = &mut self.renderer;
        let control = ctx.render(self.background, |rctx, target| renderer.render(rctx, target));

        if self.frames == 0 {
            if let Some(mvp) = self.renderer.mvp() {
                log::debug!("mvp: {mvp}");
            }
        }
        self.frames += 1;

        control
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = CubeApp::new(CubeRendererConfig::default(), Color::BACKGROUND)?;
    let config = RuntimeConfig {
        title: "Colored Cube".to_string(),
        ..Default::default()
    };

    log::info!("opening {:?} at {:?}", config.title, config.initial_size);
    Runtime::run(config, GpuInit::default(), app)
}
