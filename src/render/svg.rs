// Vector backend: renders DrawCommands into a standalone SVG document

use std::fs;
use std::path::Path;

use log::info;

use super::DrawTarget;
use crate::errors::ReplayError;
use crate::replay::geometry::{Projection, ScreenPoint, SurfaceConfig, ViewTransform};
use crate::replay::scene::{Rgb, SceneRenderer};
use crate::session::RaceSession;

/// Retained-mode backend accumulating an SVG document.
///
/// The document size follows the transform's projection: a scaled transform
/// fills the fixed surface, a translate-only transform emits a viewBox
/// matching the padded data extent so the document scales itself.
pub struct SvgBackend {
    body: String,
    width: f32,
    height: f32,
}

impl SvgBackend {
    pub fn new(transform: &ViewTransform, config: &SurfaceConfig) -> Self {
        let (width, height) = match transform.projection() {
            Projection::Scaled => (
                config.surface_size.0 as f32,
                config.surface_size.1 as f32,
            ),
            Projection::TranslateOnly => transform.viewbox_size(),
        };
        Self {
            body: String::new(),
            width,
            height,
        }
    }

    /// Close the document and return the full SVG text
    pub fn finish(self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 512);
        svg.push_str(&format!(
            r#"<svg width="{:.0}" height="{:.0}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.2} {:.2}">
  <defs>
    <style>
      .track-line {{ fill: none; stroke-linecap: round; stroke-linejoin: round; }}
    </style>
  </defs>"#,
            self.width, self.height, self.width, self.height
        ));
        svg.push_str(&self.body);
        svg.push_str("\n</svg>");
        svg
    }
}

fn hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl DrawTarget for SvgBackend {
    fn polyline(&mut self, points: &[ScreenPoint], width: f32, color: Rgb) {
        let Some(first) = points.first() else {
            return;
        };

        let mut path = format!("M {:.2},{:.2}", first.x, first.y);
        for point in points.iter().skip(1) {
            path.push_str(&format!(" L {:.2},{:.2}", point.x, point.y));
        }
        self.body.push_str(&format!(
            "\n  <path class=\"track-line\" d=\"{}\" stroke=\"{}\" stroke-width=\"{:.2}\" />",
            path,
            hex(color),
            width
        ));
    }

    fn marker(&mut self, center: ScreenPoint, radius: f32, color: Rgb) {
        self.body.push_str(&format!(
            "\n  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" />",
            center.x,
            center.y,
            radius,
            hex(color)
        ));
    }

    fn label(&mut self, text: &str, anchor: ScreenPoint, size: f32, color: Rgb) {
        self.body.push_str(&format!(
            "\n  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.0}\" fill=\"{}\">{}</text>",
            anchor.x,
            anchor.y,
            size,
            hex(color),
            escape_text(text)
        ));
    }
}

/// Render one frame of a session as a self-scaling SVG document.
///
/// Uses the translate-only projection: geometry keeps its data-space scale
/// and the viewBox does the fitting, so the export stays crisp at any size.
pub fn render_frame_svg(
    session: &RaceSession,
    frame_index: usize,
    config: &SurfaceConfig,
) -> Result<String, ReplayError> {
    let transform = ViewTransform::fit(&session.track, config, Projection::TranslateOnly)?;
    let commands = SceneRenderer::new(config.clone()).render_frame(session, frame_index, &transform);

    let mut backend = SvgBackend::new(&transform, config);
    super::submit(&mut backend, &commands);
    Ok(backend.finish())
}

/// Write an SVG document to disk
pub fn export_svg(path: &Path, document: &str) -> Result<(), ReplayError> {
    fs::write(path, document).map_err(|e| ReplayError::SvgExportError { source: e })?;
    info!("Exported SVG to {:?} ({} bytes)", path, document.len());
    Ok(())
}
