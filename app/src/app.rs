use eframe::{CreationContext, Frame};
use egui::{Button, Color32, Context, Rect, Sense, Stroke, Ui, Vec2, pos2};
use life::{Cell, Universe};

const BOARD_SIZE: u32 = 64;
const CELL_SIZE: f32 = 10.0;
const LINE_WIDTH: f32 = 1.0;
const CELL_STRIDE: f32 = CELL_SIZE + LINE_WIDTH;
const GRID_COLOR: Color32 = Color32::from_gray(0xcc);
const DEAD_COLOR: Color32 = Color32::WHITE;
const ALIVE_COLOR: Color32 = Color32::BLACK;

pub struct App {
    universe: Universe,
    playing: bool,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            universe: seeded_universe(),
            playing: false,
        }
    }
}

/// The startup board: cell `i` begins alive when `i` is divisible by 2 or 7.
fn seeded_universe() -> Universe {
    let mut universe = Universe::new(BOARD_SIZE, BOARD_SIZE);
    let alive: Vec<(u32, u32)> = (0..BOARD_SIZE * BOARD_SIZE)
        .filter(|i| i % 2 == 0 || i % 7 == 0)
        .map(|i| (i / BOARD_SIZE, i % BOARD_SIZE))
        .collect();
    universe.set_cells(&alive);
    universe
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if self.playing {
            self.universe.tick();
            ctx.request_repaint();
        }
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| self.controls(ui));
        });
        egui::CentralPanel::default().show(ctx, |ui| self.board(ui));
    }
}

impl App {
    fn controls(&mut self, ui: &mut Ui) {
        let label = if self.playing { "⏸ pause" } else { "▶ play" };
        if ui.button(label).clicked() {
            self.playing = !self.playing;
            log::info!("{}", if self.playing { "playing" } else { "paused" });
        }
        // Single-stepping only makes sense while paused.
        if ui
            .add_enabled(!self.playing, Button::new("next tick"))
            .clicked()
        {
            self.universe.tick();
        }
        if ui.button("clear").clicked() {
            self.universe = Universe::new(BOARD_SIZE, BOARD_SIZE);
        }
        if ui.button("reseed").clicked() {
            self.universe = seeded_universe();
        }
    }

    fn board(&mut self, ui: &mut Ui) {
        let (width, height) = (self.universe.width(), self.universe.height());
        // Room for every cell plus a 1px grid line around each of them.
        let size = Vec2::new(
            CELL_STRIDE * width as f32 + LINE_WIDTH,
            CELL_STRIDE * height as f32 + LINE_WIDTH,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let rect = response.rect;
        painter.rect_filled(rect, 0, DEAD_COLOR);

        let cells = self.universe.cells();
        for row in 0..height {
            for col in 0..width {
                if cells[(row * width + col) as usize] == Cell::Alive {
                    let min = rect.min
                        + Vec2::new(
                            col as f32 * CELL_STRIDE + LINE_WIDTH,
                            row as f32 * CELL_STRIDE + LINE_WIDTH,
                        );
                    let cell = Rect::from_min_size(min, Vec2::splat(CELL_SIZE));
                    painter.rect_filled(cell, 0, ALIVE_COLOR);
                }
            }
        }

        let stroke = Stroke::new(LINE_WIDTH, GRID_COLOR);
        for i in 0..=width {
            let x = rect.min.x + i as f32 * CELL_STRIDE + LINE_WIDTH / 2.0;
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
        }
        for j in 0..=height {
            let y = rect.min.y + j as f32 * CELL_STRIDE + LINE_WIDTH / 2.0;
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (row, col) = cell_at(pos - rect.min, height, width);
                self.universe.toggle_cell(row, col);
            }
        }
    }
}

/// Maps a pointer offset within the board to grid coordinates, clamped to
/// the valid range so clicks on the outer grid line still land on a cell.
fn cell_at(offset: Vec2, height: u32, width: u32) -> (u32, u32) {
    let row = (offset.y / CELL_STRIDE) as u32;
    let col = (offset.x / CELL_STRIDE) as u32;
    (row.min(height - 1), col.min(width - 1))
}
