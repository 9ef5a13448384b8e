//! Pure layout for the SVG charts: aggregate data in, shapes out.

use crate::shared::sync::{CategoryCount, CategoryTotal};
use std::f64::consts::PI;

pub const PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82ca9d",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl From<CategoryTotal<i64>> for ChartDatum {
    fn from(t: CategoryTotal<i64>) -> Self {
        Self {
            label: t.category,
            value: t.total as f64,
        }
    }
}

impl From<CategoryCount> for ChartDatum {
    fn from(c: CategoryCount) -> Self {
        Self {
            label: c.category,
            value: c.count as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lays out one bar per datum across `width`, scaled to the largest value.
pub fn bar_layout(data: &[ChartDatum], width: f64, height: f64) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { height / max } else { 0.0 };
    let slot = width / data.len() as f64;
    let bar_width = slot * 0.7;

    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let bar_height = d.value.max(0.0) * scale;
            Bar {
                label: d.label.clone(),
                value: d.value,
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub color: &'static str,
    /// SVG path `d` attribute.
    pub path: String,
}

fn point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Pie slices clockwise from 12 o'clock. Non-positive values get no slice.
pub fn pie_slices(data: &[ChartDatum], cx: f64, cy: f64, r: f64) -> Vec<Slice> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -PI / 2.0;
    let mut slices = Vec::new();
    for (i, d) in data.iter().enumerate() {
        if d.value <= 0.0 {
            continue;
        }
        let fraction = d.value / total;
        let sweep = fraction * 2.0 * PI;
        let path = if fraction >= 1.0 - 1e-9 {
            // a single arc cannot close on itself
            format!(
                "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
                cx = cx,
                r = r,
                top = cy - r,
                bottom = cy + r
            )
        } else {
            let (x1, y1) = point(cx, cy, r, angle);
            let (x2, y2) = point(cx, cy, r, angle + sweep);
            let large_arc = if sweep > PI { 1 } else { 0 };
            format!(
                "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
                cx, cy, x1, y1, r, r, large_arc, x2, y2
            )
        };
        slices.push(Slice {
            label: d.label.clone(),
            value: d.value,
            fraction,
            color: palette_color(i),
            path,
        });
        angle += sweep;
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(label: &str, value: f64) -> ChartDatum {
        ChartDatum {
            label: label.into(),
            value,
        }
    }

    #[test]
    fn test_bars_scale_to_largest_value() {
        let bars = bar_layout(&[datum("toys", 8.0), datum("food", 10.0)], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 80.0);
        assert_eq!(bars[0].y, 20.0);
        // each bar is centered in its slot
        assert_eq!(bars[0].width, 70.0);
        assert_eq!(bars[0].x, 15.0);
        assert_eq!(bars[1].x, 115.0);
    }

    #[test]
    fn test_all_zero_bars_are_flat() {
        let bars = bar_layout(&[datum("toys", 0.0)], 100.0, 50.0);
        assert_eq!(bars[0].height, 0.0);
        assert_eq!(bars[0].y, 50.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(bar_layout(&[], 100.0, 100.0).is_empty());
        assert!(pie_slices(&[], 50.0, 50.0, 40.0).is_empty());
        assert!(pie_slices(&[datum("toys", 0.0)], 50.0, 50.0, 40.0).is_empty());
    }

    #[test]
    fn test_pie_fractions_and_colors() {
        let slices = pie_slices(
            &[datum("toys", 2.0), datum("food", 1.0), datum("beauty", 1.0)],
            100.0,
            100.0,
            50.0,
        );
        let fractions: Vec<f64> = slices.iter().map(|s| s.fraction).collect();
        assert_eq!(fractions, vec![0.5, 0.25, 0.25]);
        assert_eq!(slices[0].color, "#0088FE");
        assert_eq!(slices[2].color, "#FFBB28");
        // first slice starts at 12 o'clock and ends at 6 o'clock
        assert!(slices[0].path.starts_with("M 100.00 100.00 L 100.00 50.00 A 50.00 50.00 0 0 1 100.00 150.00"));
    }

    #[test]
    fn test_single_slice_is_a_full_circle() {
        let slices = pie_slices(&[datum("toys", 3.0)], 100.0, 100.0, 50.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].fraction, 1.0);
        assert!(slices[0].path.contains("0 1 1 100.00 150.00"));
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(6), palette_color(0));
        assert_eq!(palette_color(7), "#00C49F");
    }
}
