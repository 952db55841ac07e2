use crate::core::{ChartState, Dataset, LinearScale, Viewport};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartDescriptor;

const OUTER_PADDING_PX: f64 = 8.0;
const TITLE_BAND_PX: f64 = 22.0;
const Y_LABEL_BAND_PX: f64 = 44.0;
const X_LABEL_BAND_PX: f64 = 18.0;
const X_TITLE_BAND_PX: f64 = 16.0;
const Y_TICK_COUNT: usize = 5;
const MARKER_SIZE_PX: f64 = 4.0;

/// Colors and sizes used by [`layout_chart_frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub axis_color: Color,
    pub grid_color: Color,
    pub text_color: Color,
    pub font_size_px: f64,
    pub title_font_size_px: f64,
    pub series_line_width: f64,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::rgb(0.4, 0.4, 0.4),
            grid_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
            text_color: Color::rgb(0.4, 0.4, 0.4),
            font_size_px: 11.0,
            title_font_size_px: 13.0,
            series_line_width: 2.0,
        }
    }
}

/// Plot rectangle left after reserving title, label and axis-title bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn compute(viewport: Viewport, descriptor: &ChartDescriptor) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let title_band = if descriptor.title.display {
            TITLE_BAND_PX
        } else {
            0.0
        };
        let x_title = &descriptor.x_axis.title;
        let x_title_band = if x_title.display && !x_title.text.is_empty() {
            X_TITLE_BAND_PX
        } else {
            0.0
        };

        Self {
            left: OUTER_PADDING_PX + Y_LABEL_BAND_PX,
            top: OUTER_PADDING_PX + title_band,
            right: width - OUTER_PADDING_PX,
            bottom: height - OUTER_PADDING_PX - X_LABEL_BAND_PX - x_title_band,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

/// Label indices to show when at most `max_ticks` labels fit.
///
/// Evenly strided from the first label. Only presentation is affected; the
/// caller keeps every label.
#[must_use]
pub fn select_tick_indices(count: usize, max_ticks: usize) -> Vec<usize> {
    if count == 0 || max_ticks == 0 {
        return Vec::new();
    }
    let stride = count.div_ceil(max_ticks);
    (0..count).step_by(stride).collect()
}

/// Horizontal pixel of category slot `index` among `count` slots.
#[must_use]
pub fn category_x(index: usize, count: usize, area: PlotArea) -> f64 {
    if count <= 1 {
        return area.left + area.width() / 2.0;
    }
    area.left + area.width() * (index as f64) / ((count - 1) as f64)
}

/// Lays out one complete chart frame from the current state.
///
/// Surfaces too small for a plot area get a frame with the title only.
pub fn layout_chart_frame(
    state: &ChartState,
    descriptor: &ChartDescriptor,
    viewport: Viewport,
    style: &FrameStyle,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    let area = PlotArea::compute(viewport, descriptor);

    if descriptor.title.display && !descriptor.title.text.is_empty() {
        frame.texts.push(TextPrimitive::new(
            descriptor.title.text.clone(),
            f64::from(viewport.width) / 2.0,
            OUTER_PADDING_PX + TITLE_BAND_PX / 2.0,
            style.title_font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }
    if !area.is_drawable() {
        return Ok(frame);
    }

    let y_scale = LinearScale::fit_values(
        state.datasets.iter().flat_map(|dataset| &dataset.points),
        area.bottom,
        area.top,
    )?;

    append_value_axis(&mut frame, descriptor, area, y_scale, style)?;
    append_category_axis(&mut frame, state, descriptor, area, viewport, style);

    let slot_count = state.labels.len();
    for dataset in &state.datasets {
        append_series(&mut frame, dataset, slot_count, area, y_scale, style);
    }

    Ok(frame)
}

fn append_value_axis(
    frame: &mut RenderFrame,
    descriptor: &ChartDescriptor,
    area: PlotArea,
    y_scale: LinearScale,
    style: &FrameStyle,
) -> ChartResult<()> {
    for i in 0..Y_TICK_COUNT {
        let value = y_scale.domain_at(i as f64 / (Y_TICK_COUNT - 1) as f64);
        let y = y_scale.domain_to_pixel(value)?;
        frame.lines.push(LinePrimitive::new(
            area.left,
            y,
            area.right,
            y,
            1.0,
            style.grid_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick_value(value),
            area.left - 4.0,
            y,
            style.font_size_px,
            style.text_color,
            TextHAlign::Right,
        ));
    }

    frame.lines.push(LinePrimitive::new(
        area.left,
        area.top,
        area.left,
        area.bottom,
        1.0,
        style.axis_color,
    ));

    let title = &descriptor.y_axis.title;
    if title.display && !title.text.is_empty() {
        frame.texts.push(TextPrimitive::new(
            title.text.clone(),
            OUTER_PADDING_PX,
            area.top - TITLE_BAND_PX / 2.0,
            style.font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
    Ok(())
}

fn append_category_axis(
    frame: &mut RenderFrame,
    state: &ChartState,
    descriptor: &ChartDescriptor,
    area: PlotArea,
    viewport: Viewport,
    style: &FrameStyle,
) {
    frame.lines.push(LinePrimitive::new(
        area.left,
        area.bottom,
        area.right,
        area.bottom,
        1.0,
        style.axis_color,
    ));

    let count = state.labels.len();
    let max_ticks = descriptor.x_axis.max_ticks_limit.unwrap_or(count);
    for index in select_tick_indices(count, max_ticks) {
        let text = state.labels[index].as_str();
        if text.is_empty() {
            continue;
        }
        let x = category_x(index, count, area);
        frame.lines.push(LinePrimitive::new(
            x,
            area.bottom,
            x,
            area.bottom + 4.0,
            1.0,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            text,
            x,
            area.bottom + X_LABEL_BAND_PX / 2.0 + 2.0,
            style.font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }

    let title = &descriptor.x_axis.title;
    if title.display && !title.text.is_empty() {
        frame.texts.push(TextPrimitive::new(
            title.text.clone(),
            area.left + area.width() / 2.0,
            f64::from(viewport.height) - OUTER_PADDING_PX - X_TITLE_BAND_PX / 2.0,
            style.font_size_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }
}

/// Strokes runs of finite samples; samples that are non-finite or cannot be
/// mapped to a pixel break the line.
fn append_series(
    frame: &mut RenderFrame,
    dataset: &Dataset,
    slot_count: usize,
    area: PlotArea,
    y_scale: LinearScale,
    style: &FrameStyle,
) {
    let stroke = Color::from_css(&dataset.border_color).unwrap_or(Color::BLACK);
    let fill = Color::from_fill(dataset.fill_color);

    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (index, value) in dataset.points.iter().enumerate().take(slot_count) {
        let y = match y_scale.domain_to_pixel(*value) {
            Ok(y) if y.is_finite() => y,
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
                continue;
            }
        };
        current.push((category_x(index, slot_count, area), y));
    }
    if !current.is_empty() {
        runs.push(current);
    }

    for run in &runs {
        if let Some(fill) = fill.filter(|_| run.len() >= 2) {
            let mut vertices = Vec::with_capacity(run.len() + 2);
            vertices.push((run[0].0, area.bottom));
            vertices.extend(run.iter().copied());
            vertices.push((run[run.len() - 1].0, area.bottom));
            frame.polygons.push(PolygonPrimitive::new(vertices, fill));
        }
        for pair in run.windows(2) {
            frame.lines.push(LinePrimitive::new(
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1,
                style.series_line_width,
                stroke,
            ));
        }
        for (x, y) in run {
            frame.rects.push(RectPrimitive::new(
                x - MARKER_SIZE_PX / 2.0,
                y - MARKER_SIZE_PX / 2.0,
                MARKER_SIZE_PX,
                MARKER_SIZE_PX,
                fill.unwrap_or(Color::WHITE),
            )
            .with_border(1.0, stroke));
        }
    }
}

fn format_tick_value(value: f64) -> String {
    if value.abs() < 1e-9 {
        return "0".to_owned();
    }
    if value.abs() >= 1e15 {
        return format!("{value:.2e}");
    }
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{format_tick_value, select_tick_indices};

    #[test]
    fn tick_selection_never_exceeds_limit() {
        assert_eq!(select_tick_indices(5, 11), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            select_tick_indices(22, 11),
            (0..22).step_by(2).collect::<Vec<_>>()
        );
        assert_eq!(select_tick_indices(23, 11).len(), 8);
        assert_eq!(select_tick_indices(3, 1), vec![0]);
        assert!(select_tick_indices(0, 11).is_empty());
    }

    #[test]
    fn tick_values_drop_needless_decimals() {
        assert_eq!(format_tick_value(4.0), "4");
        assert_eq!(format_tick_value(-0.5), "-0.5");
        assert_eq!(format_tick_value(1.25), "1.25");
        assert_eq!(format_tick_value(2.10), "2.1");
        assert_eq!(format_tick_value(1e308), "1.00e308");
    }
}
