use ndarray::Array2;

/// A point in canvas coordinates. Fractional parts are dropped when stroking.
pub type Point = (f64, f64);

/// Truncate a float coordinate toward zero, the way the canvas addresses pixels.
#[inline(always)]
fn to_pixel(v: f64) -> i64 {
    v as i64
}

/// Mark a single pixel of the mask, ignoring anything outside the canvas.
#[inline(always)]
fn plot(mask: &mut Array2<bool>, x: i64, y: i64) {
    let (rows, cols) = mask.dim();
    if x < 0 || y < 0 || x as usize >= cols || y as usize >= rows {
        return;
    }
    mask[[y as usize, x as usize]] = true;
}

/// Stroke a one-pixel line from `from` to `to` into a coverage mask indexed `[[y, x]]`.
///
/// Both endpoints are painted. Points falling outside the mask are clipped, so a
/// segment anchored on the far edge (x == width or y == height) only paints the
/// part that lies on the canvas.
pub fn draw_line(mask: &mut Array2<bool>, from: Point, to: Point) {
    let (mut x0, mut y0) = (to_pixel(from.0), to_pixel(from.1));
    let (x1, y1) = (to_pixel(to.0), to_pixel(to.1));

    // Bresenham over all octants
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(mask, x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
