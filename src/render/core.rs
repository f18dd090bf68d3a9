use std::io::Write;

use crate::config::WatermarkConfig;
use crate::error::Result;
use crate::geometry::{PageExtent, TilePosition};
use crate::layout::TileSheet;

const TRANSFORM_PREFIXES: [&str; 5] = ["-webkit-", "-moz-", "-ms-", "-o-", ""];

/// Renderer runtime parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Stacking order for the overlay; sits above regular page content.
    pub z_index: u32,
    /// Class name and id prefix stamped on every tile element.
    pub tile_class: String,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            z_index: 99_999,
            tile_class: "mask-div".to_string(),
        }
    }
}

/// HTML renderer producing one absolutely positioned element per tile.
///
/// The output is a single container fragment sized to the extent the sheet
/// was solved for; the host swaps the previous fragment for the new one in
/// one step, so tile replacement is atomic from the page's perspective.
pub struct HtmlRenderer {
    settings: RendererSettings,
}

impl HtmlRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn render(
        &mut self,
        writer: &mut impl Write,
        sheet: &TileSheet,
        cfg: &WatermarkConfig,
        extent: PageExtent,
    ) -> Result<()> {
        writeln!(
            writer,
            "<div style=\"overflow:hidden;position:absolute;top:0;left:0;width:{}px;height:{}px\">",
            extent.width, extent.height
        )?;

        for tile in &sheet.tiles {
            render_tile(writer, tile, cfg, &self.settings)?;
        }

        writeln!(writer, "</div>")?;
        writer.flush()?;
        Ok(())
    }
}

fn render_tile(
    writer: &mut impl Write,
    tile: &TilePosition,
    cfg: &WatermarkConfig,
    settings: &RendererSettings,
) -> Result<()> {
    write!(
        writer,
        "<div id=\"{cls}{row}{col}\" class=\"{cls}\" style=\"",
        cls = settings.tile_class,
        row = tile.row,
        col = tile.col,
    )?;

    for prefix in TRANSFORM_PREFIXES {
        write!(writer, "{prefix}transform:rotate(-{}deg);", cfg.angle)?;
    }

    write!(
        writer,
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
        tile.x, tile.y, cfg.width, cfg.height
    )?;
    write!(
        writer,
        "z-index:{};pointer-events:none;opacity:{};",
        settings.z_index, cfg.alpha
    )?;
    write!(
        writer,
        "font-size:{};font-family:{};color:{};text-align:center;overflow:hidden;display:block\">",
        escape_html(&cfg.fontsize),
        escape_html(&cfg.font),
        escape_html(&cfg.color),
    )?;
    writeln!(writer, "{}</div>", escape_html(&cfg.text))?;
    Ok(())
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
