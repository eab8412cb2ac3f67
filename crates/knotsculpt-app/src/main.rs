//! Knotsculpt 宿主程序入口
//!
//! 无界面运行编辑引擎：从JSON脚本（或内置演示）读取逐帧输入，
//! 用日志代替网格生成器，结束时输出曲线集合的摘要。

mod demo;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use knotsculpt_core::prelude::*;

/// 把网格请求写入日志
#[derive(Debug, Default)]
struct LoggingMesher {
    regenerated: usize,
    discarded: usize,
}

impl MeshGenerator for LoggingMesher {
    fn regenerate(&mut self, request: MeshRequest<'_>) {
        self.regenerated += 1;
        debug!(
            "Mesh {}: {} points, meridian {}, radius {}, closed {}",
            request.curve_id,
            request.points.len(),
            request.meridian,
            request.radius,
            request.closed
        );
    }

    fn discard(&mut self, curve_id: CurveId) {
        self.discarded += 1;
        debug!("Mesh {} discarded", curve_id);
    }
}

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "knotsculpt")]
#[command(about = "Replay controller input through the curve editing engine")]
struct Options {
    /// Editor config JSON; overrides the config embedded in the script
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input script JSON; runs the built-in demo when omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log every mesh request
    #[arg(short, long)]
    verbose: bool,
}

/// 输入脚本：可以是帧数组，也可以附带配置
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Script {
    Frames(Vec<InputFrame>),
    Session {
        #[serde(default)]
        config: Option<EditorConfig>,
        frames: Vec<InputFrame>,
    },
}

fn load_script(path: &Path) -> Result<(Option<EditorConfig>, Vec<InputFrame>)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let script: Script = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse script {}", path.display()))?;

    Ok(match script {
        Script::Frames(frames) => (None, frames),
        Script::Session { config, frames } => (config, frames),
    })
}

fn report(editor: &CurveEditor<LoggingMesher>) {
    info!(
        "{} curve(s), {} mesh request(s), {} discard(s)",
        editor.curves().len(),
        editor.mesher().regenerated,
        editor.mesher().discarded
    );

    for curve in editor.curves() {
        let bbox = curve.bounding_box();
        let center = bbox.center();
        info!(
            "Curve {}: {} points, {}, length {:.3} m, center ({:.3}, {:.3}, {:.3})",
            curve.id,
            curve.len(),
            if curve.closed { "closed" } else { "open" },
            curve.length(),
            center.x,
            center.y,
            center.z
        );
    }
}

fn main() -> Result<()> {
    let options = Options::parse();

    // 初始化日志
    let level = if options.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Knotsculpt...");

    let (script_config, frames) = match &options.script {
        Some(path) => {
            let loaded = load_script(path)?;
            info!("Loaded {} frame(s) from {}", loaded.1.len(), path.display());
            loaded
        }
        None => {
            info!("No script given, running the built-in demo session");
            (None, demo::session())
        }
    };

    let config = match (&options.config, script_config) {
        (Some(path), _) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        (None, Some(config)) => {
            config.validate()?;
            config
        }
        (None, None) => EditorConfig::default(),
    };
    debug!("Editor config: {:?}", config);

    let mut editor = CurveEditor::new(config, LoggingMesher::default());
    for frame in &frames {
        editor.process_frame(frame);
    }

    report(&editor);
    Ok(())
}
