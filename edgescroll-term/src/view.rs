//! Paints the scrollable strip, its gradient overlays and buttons.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use edgescroll::style::color_mix;
use edgescroll::{Color, Edge, ScrollEdgeController};

use crate::strip::{Glyph, Strip};

const LEFT_ICON: char = '‹';
const RIGHT_ICON: char = '›';

/// A one-line viewport on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

impl Area {
    /// Centre a strip in a terminal of the given size, leaving a margin.
    pub fn centered(term_width: u16, term_height: u16) -> Self {
        Self {
            x: 2,
            y: term_height / 2,
            width: term_width.saturating_sub(4).max(1),
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    /// Columns covered by each gradient overlay.
    pub fn overlay_width(&self, scrollable: &ScrollEdgeController) -> u16 {
        let wanted = scrollable.config().style.gradient_width.round() as u16;
        wanted.clamp(1, (self.width / 2).max(1))
    }

    /// Which navigation button, if any, sits under `(x, y)`.
    pub fn button_at(&self, scrollable: &ScrollEdgeController, x: u16, y: u16) -> Option<Edge> {
        if y != self.y {
            return None;
        }
        let overlay = self.overlay_width(scrollable);
        if x >= self.x && x < self.x + overlay {
            Some(Edge::Left)
        } else if x < self.right() && x >= self.right() - overlay {
            Some(Edge::Right)
        } else {
            None
        }
        .filter(|edge| scrollable.button(*edge).is_visible())
    }
}

fn to_crossterm(color: Color) -> CtColor {
    CtColor::Rgb {
        r: color.red,
        g: color.green,
        b: color.blue,
    }
}

fn opaque(color: Color) -> Color {
    Color::new(color.red, color.green, color.blue, 255)
}

/// Foreground of a content column after the overlays are composited on top.
fn shade(
    scrollable: &ScrollEdgeController,
    area: Area,
    column: u16,
    base: Color,
    now: Instant,
) -> Color {
    let style = &scrollable.config().style;
    let overlay = area.overlay_width(scrollable);

    let (edge, distance) = if column < overlay {
        (Edge::Left, column)
    } else if column >= area.width - overlay {
        (Edge::Right, area.width - 1 - column)
    } else {
        return base;
    };

    let opacity = scrollable.gradient(edge).opacity_at(now);
    if opacity <= 0.0 {
        return base;
    }

    // t runs from 0.0 on the content side to 1.0 at the edge.
    let t = 1.0 - (distance as f32 + 0.5) / overlay as f32;
    let paint = style.gradient_stops(edge).sample(t);
    let amount = paint.alpha as f32 / 255.0 * opacity;
    color_mix(opaque(paint), amount, base)
}

pub fn draw_strip<W: Write>(
    out: &mut W,
    scrollable: &ScrollEdgeController,
    strip: &Strip,
    area: Area,
    now: Instant,
) -> io::Result<()> {
    let Some(region) = scrollable.region() else {
        return Ok(());
    };
    let style = &scrollable.config().style;
    let background = to_crossterm(style.background);
    let offset = region.scroll_offset().round() as usize;

    queue!(out, MoveTo(0, area.y), Clear(ClearType::CurrentLine))?;

    for (i, glyph) in strip.window(offset, area.width as usize).iter().enumerate() {
        let Glyph::Char(ch) = glyph else {
            continue;
        };
        let column = i as u16;
        let fg = shade(scrollable, area, column, style.color, now);
        queue!(
            out,
            MoveTo(area.x + column, area.y),
            SetBackgroundColor(background),
            SetForegroundColor(to_crossterm(fg)),
            Print(ch)
        )?;
    }

    for (edge, column, icon) in [
        (Edge::Left, area.x, LEFT_ICON),
        (Edge::Right, area.right() - 1, RIGHT_ICON),
    ] {
        if !scrollable.button(edge).is_visible() {
            continue;
        }
        // Buttons live inside the overlays and fade with them.
        let opacity = scrollable.gradient(edge).opacity_at(now);
        if opacity <= 0.0 {
            continue;
        }
        let fg = color_mix(opaque(style.color), opacity, style.background);
        queue!(
            out,
            MoveTo(column, area.y),
            SetBackgroundColor(background),
            SetForegroundColor(to_crossterm(fg)),
            Print(icon)
        )?;
    }

    queue!(out, ResetColor)
}

pub fn draw_status<W: Write>(
    out: &mut W,
    scrollable: &ScrollEdgeController,
    strip: &Strip,
    area: Area,
) -> io::Result<()> {
    let describe = |at_edge: bool| if at_edge { "at edge" } else { "more" };
    let (offset, max) = scrollable
        .region()
        .map(|r| (r.scroll_offset(), r.max_scroll()))
        .unwrap_or_default();

    let status = format!(
        "offset {offset:.0}/{max:.0}  items {}  left: {}  right: {}",
        strip.item_count(),
        describe(scrollable.at_left_edge()),
        describe(scrollable.at_right_edge()),
    );
    let help = "←/→ scroll  Home/End jump  click ‹ › page  +/- items  q quit";

    queue!(
        out,
        MoveTo(0, area.y.saturating_sub(2)),
        Clear(ClearType::CurrentLine),
        MoveTo(area.x, area.y.saturating_sub(2)),
        Print(help),
        MoveTo(0, area.y + 2),
        Clear(ClearType::CurrentLine),
        MoveTo(area.x, area.y + 2),
        Print(status)
    )
}
