//! CubeView: maps an `engine::CubeSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the viewed face framed by twist controls
//! (`▲`/`▼` over and under every column, `◀`/`▶` at both ends of every row),
//! then a side panel with the view name, move count, the unfolded net of all
//! six faces and a key legend.

use crate::colors::{rgb_for_name, FALLBACK};
use crate::core::Cube;
use crate::engine::CubeSession;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Color, Face};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: usize = 16;

/// Net placement of each face, in face-sized steps (column, band).
const NET_SLOTS: [(Face, usize, usize); 6] = [
    (Face::Top, 1, 0),
    (Face::Left, 0, 1),
    (Face::Front, 1, 1),
    (Face::Right, 2, 1),
    (Face::Back, 3, 1),
    (Face::Bottom, 1, 2),
];

const LEGEND: [&str; 6] = [
    "wasd   twist",
    "arrows cursor",
    "S-arr  look",
    "1-6    face",
    "x scramble r reset",
    "q quit",
];

pub struct CubeView {
    /// Face cell width in terminal columns.
    cell_w: u16,
    /// Face cell height in terminal rows.
    cell_h: u16,
}

impl Default for CubeView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square in typical terminal fonts.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl CubeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the session into an existing framebuffer, resizing it to the viewport.
    ///
    /// Layout is computed in `usize` and clipped to the viewport, so any grid
    /// size and cell size render without overflow.
    pub fn render_into(&self, session: &CubeSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let cube = session.cube();
        let orientation = session.orientation();
        let grid = cube.current_face_grid(orientation);
        let (cursor_row, cursor_col) = session.cursor();
        let (cell_w, cell_h) = (self.cell_w as usize, self.cell_h as usize);
        let (view_w, view_h) = (viewport.width as usize, viewport.height as usize);

        let frame_w = grid.width().saturating_mul(cell_w).saturating_add(2);
        let frame_h = grid.height().saturating_mul(cell_h).saturating_add(2);
        // Two columns of controls on each side, one row above and below.
        let block_w = frame_w.saturating_add(4);
        let block_h = frame_h.saturating_add(2);

        let wants_panel = view_w >= block_w.saturating_add(PANEL_MIN_WIDTH + 2);
        let panel_w = if wants_panel {
            net_width(cube).max(PANEL_MIN_WIDTH)
        } else {
            0
        };

        let origin_x = view_w.saturating_sub(block_w.saturating_add(panel_w)) / 2;
        let origin_y = view_h.saturating_sub(block_h) / 2;
        let frame_x = origin_x + 2;
        let frame_y = origin_y + 1;

        let border = Style::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, frame_x, frame_y, frame_w, frame_h, border);
        let title = orientation.facing().as_str().to_uppercase();
        if title.len() + 4 <= frame_w {
            fb.put_str(clip(frame_x + 2), clip(frame_y), &format!(" {title} "), border.bold());
        }

        for (row, cells) in grid.rows().enumerate() {
            let py = (frame_y + 1).saturating_add(row.saturating_mul(cell_h));
            if py >= view_h {
                break;
            }
            for (col, &color) in cells.iter().enumerate() {
                let px = (frame_x + 1).saturating_add(col.saturating_mul(cell_w));
                if px >= view_w {
                    break;
                }
                let rgb = color_rgb(cube, color);
                let (ch, style) = if (row, col) == (cursor_row, cursor_col) {
                    ('▓', Style::plain(rgb, contrast_bg(rgb)))
                } else {
                    ('█', Style::plain(rgb, BG))
                };
                let w = cell_w.min(view_w - px) as u16;
                let h = cell_h.min(view_h - py) as u16;
                fb.fill_rect(clip(px), clip(py), w, h, ch, style);
            }
        }

        let idle = Style::plain(Rgb::new(110, 110, 120), Rgb::new(0, 0, 0));
        let active = Style::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

        let bottom = clip(frame_y.saturating_add(frame_h));
        for col in 0..grid.width() {
            let x = (frame_x + 1 + cell_w / 2).saturating_add(col.saturating_mul(cell_w));
            if x >= view_w {
                break;
            }
            let style = if col == cursor_col { active } else { idle };
            fb.put_char(clip(x), clip(origin_y), '▲', style);
            fb.put_char(clip(x), bottom, '▼', style);
        }
        let right = clip(frame_x.saturating_add(frame_w).saturating_add(1));
        for row in 0..grid.height() {
            let y = (frame_y + 1 + cell_h / 2).saturating_add(row.saturating_mul(cell_h));
            if y >= view_h {
                break;
            }
            let style = if row == cursor_row { active } else { idle };
            fb.put_char(clip(origin_x), clip(y), '◀', style);
            fb.put_char(right, clip(y), '▶', style);
        }

        if wants_panel {
            self.draw_side_panel(fb, session, clip(origin_x + block_w + 2), clip(origin_y));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &CubeSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, session: &CubeSession, x: u16, y: u16) {
        let label = Style::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = Style::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = y;
        fb.put_str(x, y, "FACING", label);
        y = y.saturating_add(1);
        fb.put_str(x, y, session.orientation().facing().as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_number(x, y, session.moves() as u64, value);
        y = y.saturating_add(2);

        let cube = session.cube();
        if net_width(cube) <= fb.width().saturating_sub(x) as usize {
            fb.put_str(x, y, "NET", label);
            y = y.saturating_add(1);
            draw_net(fb, cube, session.orientation().facing(), x, y);
            y = clip((y as usize).saturating_add(net_height(cube)).saturating_add(1));
        }

        for line in LEGEND {
            fb.put_str(x, y, line, value.dim());
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: usize, y: usize, w: usize, h: usize, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    let (view_w, view_h) = (fb.width() as usize, fb.height() as usize);

    fb.put_char(clip(x), clip(y), '┌', style);
    fb.put_char(clip(right), clip(y), '┐', style);
    fb.put_char(clip(x), clip(bottom), '└', style);
    fb.put_char(clip(right), clip(bottom), '┘', style);
    for bx in x + 1..right.min(view_w) {
        fb.put_char(clip(bx), clip(y), '─', style);
        fb.put_char(clip(bx), clip(bottom), '─', style);
    }
    for by in y + 1..bottom.min(view_h) {
        fb.put_char(clip(x), clip(by), '│', style);
        fb.put_char(clip(right), clip(by), '│', style);
    }
}

/// Terminal coordinate for a layout position; anything past `u16::MAX` is off screen.
fn clip(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// Background behind the cursor glyph, dark on light colors and light on dark ones.
fn contrast_bg(rgb: Rgb) -> Rgb {
    if rgb.luma() >= 128 {
        Rgb::new(0, 0, 0)
    } else {
        Rgb::new(255, 255, 255)
    }
}

fn color_rgb(cube: &Cube, color: Color) -> Rgb {
    cube.palette()
        .name(color)
        .and_then(rgb_for_name)
        .unwrap_or(FALLBACK)
}

fn net_width(cube: &Cube) -> usize {
    4 * cube.width() + 3
}

fn net_height(cube: &Cube) -> usize {
    3 * cube.height() + 2
}

/// Draw the unfolded net, one terminal cell per face cell. The viewed face
/// uses a heavier glyph.
fn draw_net(fb: &mut FrameBuffer, cube: &Cube, facing: Face, x: u16, y: u16) {
    for (face, slot_x, slot_y) in NET_SLOTS {
        let fx = x as usize + slot_x * (cube.width() + 1);
        let fy = y as usize + slot_y * (cube.height() + 1);
        let ch = if face == facing { '█' } else { '■' };
        for (row, cells) in cube.face(face).rows().enumerate() {
            for (col, &color) in cells.iter().enumerate() {
                let style = Style::plain(color_rgb(cube, color), Rgb::new(0, 0, 0));
                fb.put_char(clip(fx + col), clip(fy + row), ch, style);
            }
        }
    }
}

/// Plain-text net, one letter per cell (the palette name's initial).
pub fn net_text(cube: &Cube) -> String {
    let w = cube.width();
    let h = cube.height();
    let mut lines = vec![vec![' '; net_width(cube)]; net_height(cube)];

    for (face, slot_x, slot_y) in NET_SLOTS {
        for (row, cells) in cube.face(face).rows().enumerate() {
            for (col, &color) in cells.iter().enumerate() {
                lines[slot_y * (h + 1) + row][slot_x * (w + 1) + col] = initial(cube, color);
            }
        }
    }

    let mut out = String::new();
    for line in lines {
        let text: String = line.into_iter().collect();
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}

/// `W=white R=red ...` for the palette in slot order.
pub fn legend_text(cube: &Cube) -> String {
    cube.palette()
        .colors()
        .filter_map(|c| cube.palette().name(c).map(|n| format!("{}={n}", initial(cube, c))))
        .collect::<Vec<_>>()
        .join(" ")
}

fn initial(cube: &Cube, color: Color) -> char {
    cube.palette()
        .name(color)
        .and_then(|n| n.trim_start_matches('#').chars().next())
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}
