//! CtxBuilder application icon generator.
//!
//! Produces a procedural icon: a rounded cabinet holding three coloured
//! drawers, one per packaged component (Info, Elements, Sightings).

/// Generate a CtxBuilder icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let body_cx = s * 0.5;
    let body_cy = s * 0.54;
    let body_half_w = s * 0.40;
    let body_half_h = s * 0.38;
    let body_radius = s * 0.08;

    // Lid sits above the body and overhangs it slightly.
    let lid_cy = s * 0.13;
    let lid_half_w = s * 0.44;
    let lid_half_h = s * 0.06;
    let lid_radius = s * 0.04;

    // Drawers, top to bottom: Info (.xml), Elements (.txt), Sightings (.dat).
    let drawers: [[u8; 3]; 3] = [
        [0x89, 0xb4, 0xfa],
        [0xa6, 0xe3, 0xa1],
        [0xf9, 0xe2, 0xaf],
    ];
    let inset = s * 0.07;
    let drawer_top = body_cy - body_half_h + inset;
    let drawer_span = (body_half_h * 2.0 - inset * 2.0) / drawers.len() as f32;
    let drawer_gap = s * 0.03;
    let handle_half_w = s * 0.08;
    let handle_half_h = s * 0.02;

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Cabinet body. ───────────────────────────────────
            let d_body = rounded_rect_dist(
                px - body_cx,
                py - body_cy,
                body_half_w,
                body_half_h,
                body_radius,
            );
            let body_aa = smooth_edge(d_body, 0.0);
            if body_aa > 0.0 {
                // Lighter at the top, darker toward the floor.
                let grad = 1.0 - 0.25 * ((py - (body_cy - body_half_h)) / (body_half_h * 2.0));
                cr = (0x58 as f32 * grad) as u8;
                cg = (0x5b as f32 * grad) as u8;
                cb = (0x70 as f32 * grad) as u8;
                ca = body_aa;
            }

            // 2. Drawers. ────────────────────────────────────────
            for (i, col) in drawers.iter().enumerate() {
                let top = drawer_top + drawer_span * i as f32 + drawer_gap * 0.5;
                let bottom = drawer_top + drawer_span * (i + 1) as f32 - drawer_gap * 0.5;
                let cy = (top + bottom) * 0.5;
                let half_h = (bottom - top) * 0.5;
                let d = rounded_rect_dist(
                    px - body_cx,
                    py - cy,
                    body_half_w - inset,
                    half_h,
                    s * 0.03,
                );
                let aa = smooth_edge(d, 0.0) * body_aa;
                if aa > 0.0 {
                    cr = lerp_c(cr, col[0], aa);
                    cg = lerp_c(cg, col[1], aa);
                    cb = lerp_c(cb, col[2], aa);

                    // Drawer pull.
                    let dh = rounded_rect_dist(
                        px - body_cx,
                        py - cy,
                        handle_half_w,
                        handle_half_h,
                        handle_half_h,
                    );
                    let haa = smooth_edge(dh, 0.0) * aa;
                    cr = lerp_c(cr, 0x31, haa);
                    cg = lerp_c(cg, 0x32, haa);
                    cb = lerp_c(cb, 0x44, haa);
                }
            }

            // 3. Lid. ────────────────────────────────────────────
            let d_lid = rounded_rect_dist(px - body_cx, py - lid_cy, lid_half_w, lid_half_h, lid_radius);
            let lid_aa = smooth_edge(d_lid, 0.0);
            if lid_aa > 0.0 {
                cr = lerp_c(cr, 0x7f, lid_aa);
                cg = lerp_c(cg, 0x84, lid_aa);
                cb = lerp_c(cb, 0x9c, lid_aa);
                ca = ca + (1.0 - ca) * lid_aa;
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Signed distance from a point (relative to the centre) to a rounded
/// rectangle. Negative inside.
fn rounded_rect_dist(dx: f32, dy: f32, half_w: f32, half_h: f32, radius: f32) -> f32 {
    let qx = dx.abs() - (half_w - radius);
    let qy = dy.abs() - (half_h - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
