//! Pixelated-field edge tracer: DDA-style traversal of a mesh edge through
//! a rectilinear grid, producing `I(e) = ∫_e E(r) dℓ`.
//!
//! Grounded on `force_efield_on_cell_boundary_pixelated.cpp`'s crossing
//! walk: column and row crossings are each generated as a list ordered by
//! relative position along the edge, then merged one step at a time. Ties
//! resolve to the column crossing (the source's `if (row < col) row; else
//! col` — equal values fall into the `else`).

use crate::error::Error;
use crate::geometry::{GridCoord, GridSpec, Pos2, Vec2};
use crate::indices::EdgeId;

/// A crossing of a single grid line, at relative position `t` along the
/// edge, and the pixel coordinate entered once it is crossed.
struct Crossing {
    t: f64,
    entered: i32,
}

fn column_crossings(grid: &GridSpec, p0: Pos2, d: Vec2, g0: GridCoord, g1: GridCoord) -> Vec<Crossing> {
    let mut out = Vec::new();
    if g0.i < g1.i {
        for i in (g0.i + 1)..=g1.i {
            let line_x = grid.origin_x + i as f64 * grid.spacing_x;
            out.push(Crossing {
                t: (line_x - p0.x) / d.x,
                entered: i,
            });
        }
    } else if g0.i > g1.i {
        for i in ((g1.i + 1)..=g0.i).rev() {
            let line_x = grid.origin_x + i as f64 * grid.spacing_x;
            out.push(Crossing {
                t: (line_x - p0.x) / d.x,
                entered: i - 1,
            });
        }
    }
    out
}

fn row_crossings(grid: &GridSpec, p0: Pos2, d: Vec2, g0: GridCoord, g1: GridCoord) -> Vec<Crossing> {
    let mut out = Vec::new();
    if g0.j < g1.j {
        for j in (g0.j + 1)..=g1.j {
            let line_y = grid.origin_y + j as f64 * grid.spacing_y;
            out.push(Crossing {
                t: (line_y - p0.y) / d.y,
                entered: j,
            });
        }
    } else if g0.j > g1.j {
        for j in ((g1.j + 1)..=g0.j).rev() {
            let line_y = grid.origin_y + j as f64 * grid.spacing_y;
            out.push(Crossing {
                t: (line_y - p0.y) / d.y,
                entered: j - 1,
            });
        }
    }
    out
}

/// Computes `I(e)` for one mesh edge with endpoints `p0 -> p1`.
pub fn integrate_field_over_edge(
    grid: &GridSpec,
    field: &[Vec2],
    p0: Pos2,
    p1: Pos2,
    edge_id: EdgeId,
) -> Result<Vec2, Error> {
    let d = p1 - p0;
    let length = d.norm();
    let g0 = grid.grid_of(p0);
    let g1 = grid.grid_of(p1);

    let sample = |gc: GridCoord| -> Vec2 {
        match grid.flat_index(gc) {
            Some(idx) => field[idx],
            None => Vec2::zeros(),
        }
    };

    if g0 == g1 {
        return Ok(sample(g0) * length);
    }

    let cols = column_crossings(grid, p0, d, g0, g1);
    let rows = row_crossings(grid, p0, d, g0, g1);

    let mut ci = 0usize;
    let mut ri = 0usize;
    let mut current = g0;
    let mut t_prev = 0.0_f64;
    let mut integral = Vec2::zeros();

    loop {
        let col_available = ci < cols.len();
        let row_available = ri < rows.len();
        if !col_available && !row_available {
            break;
        }

        // Tie resolves to the column crossing: a row crossing is only
        // taken when it is strictly earlier.
        let take_row = row_available && (!col_available || rows[ri].t < cols[ci].t);

        let t_next = if take_row { rows[ri].t } else { cols[ci].t };
        let t_next = t_next.clamp(0.0, 1.0);

        integral += sample(current) * ((t_next - t_prev) * length);

        let prev = current;
        if take_row {
            current.j = rows[ri].entered;
            ri += 1;
        } else {
            current.i = cols[ci].entered;
            ci += 1;
        }
        if current.i != prev.i && current.j != prev.j {
            return Err(Error::AmbiguousPixelStep {
                edge: edge_id,
                step: ci + ri,
            });
        }

        t_prev = t_next;
    }

    integral += sample(current) * ((1.0 - t_prev) * length);

    if current != g1 {
        return Err(Error::EdgeTracerDidNotTerminate { edge: edge_id });
    }

    Ok(integral)
}
