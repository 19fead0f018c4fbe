//! Layout maths shared by the chart components.

/// Drawing area inside an SVG of `width` × `height` user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pad_left: 48.0,
            pad_right: 12.0,
            pad_top: 12.0,
            pad_bottom: 28.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(1.0)
    }

    pub fn left(&self) -> f64 {
        self.pad_left
    }

    pub fn right(&self) -> f64 {
        self.pad_left + self.plot_width()
    }

    pub fn bottom(&self) -> f64 {
        self.pad_top + self.plot_height()
    }

    /// X of point `idx` out of `count`, spread edge to edge. A single point sits centred.
    pub fn x_at(&self, idx: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.pad_left + self.plot_width() / 2.0;
        }
        self.pad_left + idx as f64 / (count - 1) as f64 * self.plot_width()
    }

    /// Y of `value` on a `0..=max` axis.
    pub fn y_at(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 {
            (value / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.bottom() - ratio * self.plot_height()
    }

    /// Slot for bar `idx` of `count`: `(x, width)` with a gap on both sides.
    pub fn band(&self, idx: usize, count: usize) -> (f64, f64) {
        let slot = self.plot_width() / count.max(1) as f64;
        let gap = slot * 0.2;
        (self.pad_left + idx as f64 * slot + gap / 2.0, slot - gap)
    }
}

/// Round `max` up to 1, 2, 5 or 10 times a power of ten. Never below 1.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// `count + 1` evenly spaced values from 0 to `max`.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

pub fn line_path(frame: &Frame, values: &[f64], max: f64) -> String {
    let mut d = String::new();
    for (idx, value) in values.iter().enumerate() {
        let cmd = if idx == 0 { 'M' } else { 'L' };
        if idx > 0 {
            d.push(' ');
        }
        d.push_str(&format!(
            "{cmd} {:.1} {:.1}",
            frame.x_at(idx, values.len()),
            frame.y_at(*value, max)
        ));
    }
    d
}

/// Show every n-th label so that at most `max_labels` are drawn.
pub fn label_stride(len: usize, max_labels: usize) -> usize {
    if max_labels == 0 || len <= max_labels {
        1
    } else {
        len.div_ceil(max_labels)
    }
}

/// Inclusive index window selected with the chart brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushWindow {
    pub start: usize,
    pub end: usize,
}

impl BrushWindow {
    pub fn full(len: usize) -> Option<Self> {
        (len > 0).then(|| Self {
            start: 0,
            end: len - 1,
        })
    }

    /// Clamp requested bounds into `0..len`; crossed bounds are swapped.
    pub fn resolve(start: Option<usize>, end: Option<usize>, len: usize) -> Option<Self> {
        let last = len.checked_sub(1)?;
        let start = start.unwrap_or(0).min(last);
        let end = end.unwrap_or(last).min(last);
        Some(Self {
            start: start.min(end),
            end: start.max(end),
        })
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_full(&self, len: usize) -> bool {
        self.start == 0 && self.end + 1 == len
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = (self.end + 1).min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_max_rounds_up() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(f64::NAN), 1.0);
        assert_eq!(nice_max(7.0), 10.0);
        assert_eq!(nice_max(873.0), 1000.0);
        assert_eq!(nice_max(1040.0), 2000.0);
        assert_eq!(nice_max(4200.0), 5000.0);
        assert_eq!(nice_max(100.0), 100.0);
    }

    #[test]
    fn ticks_are_even() {
        assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(ticks(10.0, 0), vec![0.0, 10.0]);
    }

    #[test]
    fn frame_maps_edges() {
        let frame = Frame::new(200.0, 100.0);
        assert_eq!(frame.x_at(0, 3), frame.left());
        assert_eq!(frame.x_at(2, 3), frame.right());
        assert_eq!(frame.y_at(0.0, 50.0), frame.bottom());
        assert_eq!(frame.y_at(50.0, 50.0), frame.pad_top);
        assert_eq!(frame.y_at(80.0, 50.0), frame.pad_top);
        assert_eq!(frame.y_at(10.0, 0.0), frame.bottom());
    }

    #[test]
    fn path_starts_with_move() {
        let frame = Frame::new(200.0, 100.0);
        let d = line_path(&frame, &[0.0, 10.0], 10.0);
        assert!(d.starts_with("M 48.0 72.0"));
        assert!(d.contains(" L 188.0 12.0"));
        assert!(line_path(&frame, &[], 1.0).is_empty());
    }

    #[test]
    fn stride_limits_labels() {
        assert_eq!(label_stride(7, 8), 1);
        assert_eq!(label_stride(30, 8), 4);
        assert_eq!(label_stride(90, 8), 12);
        assert_eq!(label_stride(5, 0), 1);
    }

    #[test]
    fn brush_clamps_and_swaps() {
        assert_eq!(BrushWindow::resolve(None, None, 0), None);
        assert_eq!(
            BrushWindow::resolve(Some(5), Some(2), 10),
            Some(BrushWindow { start: 2, end: 5 })
        );
        let window = BrushWindow::resolve(Some(3), Some(50), 7).unwrap();
        assert_eq!(window, BrushWindow { start: 3, end: 6 });
        assert_eq!(window.len(), 4);
        assert!(!window.is_full(7));
        assert!(BrushWindow::full(7).unwrap().is_full(7));

        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(window.slice(&items), &[4, 5, 6, 7]);
    }
}
