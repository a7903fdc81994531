//! Canvas 2D backend (WASM only)

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::DrawCmd;

/// Replay a frame's draw commands onto the canvas
pub fn draw(ctx: &CanvasRenderingContext2d, cmds: &[DrawCmd]) {
    for cmd in cmds {
        if let Err(e) = draw_one(ctx, cmd) {
            log::warn!("Draw error: {:?}", e);
        }
    }
}

fn draw_one(ctx: &CanvasRenderingContext2d, cmd: &DrawCmd) -> Result<(), JsValue> {
    match cmd {
        DrawCmd::Clear { size } => {
            ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
        }
        DrawCmd::FillRect { pos, size, color } => {
            ctx.set_fill_style_str(color);
            ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        }
        DrawCmd::StrokeRect {
            pos,
            size,
            color,
            line_width,
        } => {
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(*line_width as f64);
            ctx.stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        }
        DrawCmd::FillPolygon {
            points,
            color,
            alpha,
        } => {
            let Some((first, rest)) = points.split_first() else {
                return Ok(());
            };
            ctx.set_global_alpha(*alpha as f64);
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            ctx.move_to(first.x as f64, first.y as f64);
            for p in rest {
                ctx.line_to(p.x as f64, p.y as f64);
            }
            ctx.close_path();
            ctx.fill();
            ctx.set_global_alpha(1.0);
        }
        DrawCmd::FillCircle {
            center,
            radius,
            color,
        } => {
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            ctx.arc(
                center.x as f64,
                center.y as f64,
                *radius as f64,
                0.0,
                std::f64::consts::TAU,
            )?;
            ctx.fill();
        }
        DrawCmd::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        } => {
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(*line_width as f64);
            ctx.begin_path();
            ctx.arc(
                center.x as f64,
                center.y as f64,
                *radius as f64,
                0.0,
                std::f64::consts::TAU,
            )?;
            ctx.stroke();
        }
        DrawCmd::Line {
            from,
            to,
            color,
            line_width,
            dash,
        } => {
            let pattern = js_sys::Array::new();
            if let Some([on, off]) = dash {
                pattern.push(&JsValue::from_f64(*on as f64));
                pattern.push(&JsValue::from_f64(*off as f64));
            }
            ctx.set_line_dash(&pattern)?;
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(*line_width as f64);
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.stroke();
            ctx.set_line_dash(&js_sys::Array::new())?;
        }
        DrawCmd::Text {
            pos,
            text,
            color,
            font,
        } => {
            ctx.set_font(font);
            ctx.set_text_align("center");
            ctx.set_fill_style_str(color);
            ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            ctx.set_text_align("left");
        }
    }
    Ok(())
}
