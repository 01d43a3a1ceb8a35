//! Chart Style Module
//! Colors, fonts and layout shared by the three growth charts.

use plotters::style::{FontDesc, IntoFont, RGBColor};

pub const SCATTER_COLOR: RGBColor = RGBColor(31, 119, 180); // Blue
pub const HISTOGRAM_COLOR: RGBColor = RGBColor(44, 160, 44); // Green
pub const LINE_COLOR: RGBColor = RGBColor(214, 39, 40); // Red
pub const EDGE_COLOR: RGBColor = RGBColor(0, 0, 0);
pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);

/// Appearance settings for every rendered chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub font_family: String,
    pub title_size: f64,
    pub axis_label_size: f64,
    pub tick_label_size: f64,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub marker_size: u32,
    pub line_width: u32,
    pub show_grid: bool,
    pub background: RGBColor,
    pub scatter_color: RGBColor,
    pub histogram_color: RGBColor,
    pub edge_color: RGBColor,
    pub line_color: RGBColor,
}

impl Default for ChartStyle {
    fn default() -> Self {
        // 10x6 inch figure at 100 dpi
        Self {
            width: 1000,
            height: 600,
            font_family: String::from("sans-serif"),
            title_size: 26.0,
            axis_label_size: 20.0,
            tick_label_size: 15.0,
            margin: 20,
            x_label_area: 60,
            y_label_area: 70,
            marker_size: 5,
            line_width: 2,
            show_grid: true,
            background: BACKGROUND,
            scatter_color: SCATTER_COLOR,
            histogram_color: HISTOGRAM_COLOR,
            edge_color: EDGE_COLOR,
            line_color: LINE_COLOR,
        }
    }
}

impl ChartStyle {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn title_font(&self) -> FontDesc<'_> {
        (self.font_family.as_str(), self.title_size).into_font()
    }

    pub fn axis_label_font(&self) -> FontDesc<'_> {
        (self.font_family.as_str(), self.axis_label_size).into_font()
    }

    pub fn tick_label_font(&self) -> FontDesc<'_> {
        (self.font_family.as_str(), self.tick_label_size).into_font()
    }
}
