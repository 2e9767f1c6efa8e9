use ratatui::style::{Color, palette::tailwind};

use crate::data::Direction;

pub struct DashboardColors {
    pub buffer_bg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub row_fg: Color,
    pub selected_row_style_fg: Color,
    pub normal_row_color: Color,
    pub alt_row_color: Color,
    pub border_color: Color,
    pub line_color: Color,
    pub up_color: Color,
    pub down_color: Color,
}

impl DashboardColors {
    pub const fn new(color: &tailwind::Palette) -> Self {
        Self {
            buffer_bg: tailwind::SLATE.c950,
            header_bg: color.c900,
            header_fg: tailwind::SLATE.c200,
            row_fg: tailwind::SLATE.c200,
            selected_row_style_fg: color.c400,
            normal_row_color: tailwind::SLATE.c950,
            alt_row_color: tailwind::SLATE.c900,
            border_color: color.c400,
            line_color: color.c500,
            up_color: tailwind::GREEN.c500,
            down_color: tailwind::RED.c500,
        }
    }

    pub fn direction_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Up => self.up_color,
            Direction::Down => self.down_color,
        }
    }
}
