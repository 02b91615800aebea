//! Conversions from chart data to drawable shapes.

use poisson_core::Bin;

/// Fraction of a bin's width covered by its bar.
const BAR_FILL: f64 = 0.8;

/// Expands `[x, y]` points into the vertices of a step line.
///
/// The line starts at the origin and holds each level until the next point,
/// where it jumps vertically to the new level.
pub(crate) fn staircase(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut vertices = Vec::with_capacity(2 * points.len() + 1);
    vertices.push([0.0, 0.0]);

    let mut level = 0.0;
    for &[x, y] in points {
        vertices.push([x, level]);
        vertices.push([x, y]);
        level = y;
    }

    vertices
}

/// Returns `(center, height, width)` for each bar of a histogram.
///
/// A zero bin width, which happens when every sample was zero, falls back to
/// a unit width so the bars stay visible.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn bar_shapes(bins: &[Bin], width: f64) -> Vec<(f64, f64, f64)> {
    let width = if width > 0.0 { width } else { 1.0 };
    bins.iter()
        .map(|bin| (bin.center, bin.count as f64, width * BAR_FILL))
        .collect()
}

/// Horizontal extent of a histogram: `[first left edge, last right edge]`.
pub(crate) fn bar_extent(bins: &[Bin], width: f64) -> Option<[f64; 2]> {
    let width = if width > 0.0 { width } else { 1.0 };
    let first = bins.first()?;
    let last = bins.last()?;
    Some([first.center - width / 2.0, last.center + width / 2.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn staircase_starts_at_origin() {
        assert_eq!(staircase(&[]), [[0.0, 0.0]]);
    }

    #[test]
    fn staircase_jumps_at_each_event() {
        let vertices = staircase(&[[0.5, 1.0], [1.5, 2.0]]);
        assert_eq!(
            vertices,
            [[0.0, 0.0], [0.5, 0.0], [0.5, 1.0], [1.5, 1.0], [1.5, 2.0]]
        );
    }

    #[test]
    fn bars_keep_centers_and_counts() {
        let bins = [
            Bin {
                center: 0.25,
                count: 3,
            },
            Bin {
                center: 0.75,
                count: 0,
            },
        ];
        let shapes = bar_shapes(&bins, 0.5);

        assert_eq!(shapes.len(), 2);
        assert_relative_eq!(shapes[0].0, 0.25);
        assert_relative_eq!(shapes[0].1, 3.0);
        assert_relative_eq!(shapes[0].2, 0.4);
        assert_relative_eq!(shapes[1].1, 0.0);
    }

    #[test]
    fn zero_width_bars_fall_back_to_unit_width() {
        let bins = [Bin {
            center: 0.0,
            count: 4,
        }];
        assert_relative_eq!(bar_shapes(&bins, 0.0)[0].2, 0.8);
        assert_eq!(bar_extent(&bins, 0.0), Some([-0.5, 0.5]));
    }

    #[test]
    fn extent_spans_outer_edges() {
        let bins = [
            Bin {
                center: 8.0,
                count: 1,
            },
            Bin {
                center: 12.0,
                count: 2,
            },
        ];
        assert_eq!(bar_extent(&bins, 1.0), Some([7.5, 12.5]));
        assert_eq!(bar_extent(&[], 1.0), None);
    }
}
