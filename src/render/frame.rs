//! Boxed histogram frame:
//! - title centred in the top rule, optional subtitle in the bottom rule
//! - peak count / zero as y labels on the first / last graph row
//! - bin range as x labels under the graph
//!
//! Output goes to any `io::Write`, so frames can be captured in tests.

use std::io::Write;

use crate::{
    core::{
        bounds::y_label_width,
        config::PlotConfig,
        constants::{
            BORDER_WIDTH, DECIMAL_PRECISION, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
        },
        error::GraphError,
    },
    render::{
        binner::Histogram,
        braille::{encode_rows, preprocess_to_braille},
    },
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

// --- Helpers ---

/// Write centred text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  ");
    buf.push_str(text);
    buf.push(' ');
    buf.push_str(&H.repeat(pad_right));
}

/// Frame writer.
pub struct Renderer {
    clear: bool,
}

impl Renderer {
    /// Clears the terminal before drawing.
    #[inline]
    #[must_use]
    pub fn terminal() -> Self {
        Self { clear: true }
    }
    /// Writes the frame as plain lines.
    #[inline]
    #[must_use]
    pub fn plain() -> Self {
        Self { clear: false }
    }
    /// [`Renderer::terminal`] on a TTY, [`Renderer::plain`] for pipes and
    /// files.
    #[inline]
    #[must_use]
    pub fn for_output(is_terminal: bool) -> Self {
        Self { clear: is_terminal }
    }

    /// Build the whole frame as one string.
    pub fn frame(&self, cfg: &PlotConfig, hist: &Histogram) -> Result<String, GraphError> {
        if cfg.x_chars < MIN_GRAPH_WIDTH || cfg.y_chars < MIN_GRAPH_HEIGHT {
            return Err(GraphError::GraphTooSmall {
                want_w: MIN_GRAPH_WIDTH,
                want_h: MIN_GRAPH_HEIGHT,
                got_w: cfg.x_chars,
                got_h: cfg.y_chars,
            });
        }

        let plot = preprocess_to_braille(hist, cfg)?;
        let rows = encode_rows(&plot, cfg.x_chars, cfg.y_chars);

        let high_label = hist.peak().to_string();
        #[allow(clippy::cast_precision_loss)]
        let label_width = y_label_width((0.0, hist.peak() as f64), 0);
        let inner = cfg.x_chars + label_width + LABEL_GUTTER;
        let gutter = " ".repeat(LABEL_GUTTER);

        let mut out = String::new();
        if self.clear {
            out.push_str(CLEAR_SCREEN);
        }

        // --- top ---
        out.push_str(TL);
        push_centered(&mut out, &cfg.title, inner);
        out.push_str(TR);
        out.push('\n');
        out.push_str(V);
        out.push_str(&" ".repeat(inner));
        out.push_str(V);
        out.push('\n');

        // --- graph rows ---
        let last = rows.len().saturating_sub(1);
        for (r, row) in rows.iter().enumerate() {
            let label = match r {
                0 => high_label.as_str(),
                _ if r == last => "0",
                _ => "",
            };
            out.push_str(V);
            out.push_str(&format!("{label:>label_width$}"));
            out.push_str(&gutter);
            out.push_str(row);
            out.push_str(V);
            out.push('\n');
        }

        // --- x labels ---
        let low = format!("{:.*}", DECIMAL_PRECISION, hist.low);
        let high = format!("{:.*}", DECIMAL_PRECISION, hist.high);
        let span = cfg.x_chars.saturating_sub(low.len());
        out.push_str(V);
        out.push_str(&" ".repeat(label_width + LABEL_GUTTER));
        if low.len() + high.len() < cfg.x_chars {
            out.push_str(&low);
            out.push_str(&format!("{high:>span$}"));
        } else {
            out.push_str(&" ".repeat(cfg.x_chars));
        }
        out.push_str(V);
        out.push('\n');

        // --- bottom ---
        out.push_str(BL);
        match &cfg.subtitle {
            Some(sub) => push_centered(&mut out, sub, inner),
            None => out.push_str(&H.repeat(inner)),
        }
        out.push_str(BR);
        out.push('\n');

        debug_assert_eq!(
            out.lines().last().map(|l| l.chars().count()),
            Some(inner + BORDER_WIDTH)
        );
        Ok(out)
    }

    /// Main render entry.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        cfg: &PlotConfig,
        hist: &Histogram,
    ) -> Result<(), GraphError> {
        let frame = self.frame(cfg, hist)?;
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
