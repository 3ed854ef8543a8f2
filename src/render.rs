use crate::constants::{FLUFF_LINE_WIDTH, SEED_COLOR, STEM_LINE_WIDTH};
use crate::core::{Particle, ParticleField, CROWN};
use web_sys as web;

pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

/// Draw every seed in pool order.
pub fn draw_field(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
) {
    clear(ctx, canvas);
    ctx.set_stroke_style_str(SEED_COLOR);
    ctx.set_fill_style_str(SEED_COLOR);
    let time = field.time();
    for p in field.particles() {
        draw_seed(ctx, p, time);
    }
}

// Seed body hangs below the crown; drawing units are 20 per `size`.
fn draw_seed(ctx: &web::CanvasRenderingContext2d, p: &Particle, time: f32) {
    ctx.save();
    _ = ctx.translate(p.pos.x as f64, p.pos.y as f64);
    _ = ctx.rotate(p.rotation(time) as f64);
    ctx.set_global_alpha(p.opacity as f64);
    let s = p.scale() as f64;
    _ = ctx.scale(s, s);

    // achene
    ctx.begin_path();
    ctx.move_to(0.0, 15.0);
    ctx.line_to(1.5, 18.0);
    ctx.line_to(0.0, 20.0);
    ctx.line_to(-1.5, 18.0);
    ctx.close_path();
    ctx.fill();

    // beak
    ctx.begin_path();
    ctx.move_to(0.0, 15.0);
    ctx.quadratic_curve_to(p.stem_curve as f64 * 0.3, 5.0, CROWN.x as f64, CROWN.y as f64);
    ctx.set_line_width(STEM_LINE_WIDTH);
    ctx.stroke();

    // pappus
    ctx.set_line_width(FLUFF_LINE_WIDTH);
    for strand in &p.strands {
        ctx.begin_path();
        ctx.move_to(CROWN.x as f64, CROWN.y as f64);
        ctx.quadratic_curve_to(
            strand.ctrl.x as f64,
            strand.ctrl.y as f64,
            strand.tip.x as f64,
            strand.tip.y as f64,
        );
        ctx.stroke();
    }

    ctx.restore();
}
