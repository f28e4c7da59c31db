use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, PlotState, WORLD_MAX, WORLD_MIN};

const X_TICKS: &[(f64, &str)] = &[(0.0, "Ideas"), (1.0, "Hands-on"), (2.0, "Issue Specific")];
const Y_TICKS: &[(f64, &str)] = &[(0.0, "Never"), (1.0, "Sometimes"), (2.0, "Daily")];

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_grid(state, ctx);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_tooltip(state, ctx);
}

fn draw_grid(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("#d9d9d9");
	ctx.set_line_width(1.0);

	// Cell boundaries between the three buckets on each axis
	for i in 0..3 {
		let boundary = i as f64 - 0.5;
		let (x0, y0) = state.world_to_screen(boundary, WORLD_MIN);
		let (x1, y1) = state.world_to_screen(boundary, WORLD_MAX);
		ctx.begin_path();
		ctx.move_to(x0, y0);
		ctx.line_to(x1, y1);
		ctx.stroke();

		let (x0, y0) = state.world_to_screen(WORLD_MIN, boundary);
		let (x1, y1) = state.world_to_screen(WORLD_MAX, boundary);
		ctx.begin_path();
		ctx.move_to(x0, y0);
		ctx.line_to(x1, y1);
		ctx.stroke();
	}

	ctx.set_fill_style_str("#555555");
	ctx.set_font("12px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	for &(bucket, label) in X_TICKS {
		let (sx, sy) = state.world_to_screen(bucket, WORLD_MIN);
		let _ = ctx.fill_text(label, sx, sy + 6.0);
	}
	ctx.set_text_align("right");
	ctx.set_text_baseline("middle");
	for &(bucket, label) in Y_TICKS {
		let (sx, sy) = state.world_to_screen(WORLD_MIN, bucket);
		let _ = ctx.fill_text(label, sx - 8.0, sy);
	}

	ctx.set_fill_style_str("#333333");
	ctx.set_font("13px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("bottom");
	let (cx, bottom_y) = state.world_to_screen(1.0, WORLD_MIN);
	let _ = ctx.fill_text("Specificity \u{2192}", cx, bottom_y + 40.0);

	let (left_x, cy) = state.world_to_screen(WORLD_MIN, 1.0);
	ctx.save();
	let _ = ctx.translate(left_x - 80.0, cy);
	let _ = ctx.rotate(-PI / 2.0);
	let _ = ctx.fill_text("\u{2190} Exposure", 0.0, 0.0);
	ctx.restore();
}

fn draw_edges(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	// Hover dims every edge; node emphasis carries the highlight.
	let alpha = 0.7 - 0.5 * t;

	ctx.set_line_width(2.0);
	ctx.set_global_alpha(alpha);
	for edge in &state.edges {
		let Some(&(fx, fy)) = edge.points.first() else {
			continue;
		};
		ctx.set_stroke_style_str(&edge.color);
		ctx.begin_path();
		let (sx, sy) = state.world_to_screen(fx, fy);
		ctx.move_to(sx, sy);
		for &(wx, wy) in &edge.points[1..] {
			let (sx, sy) = state.world_to_screen(wx, wy);
			ctx.line_to(sx, sy);
		}
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	let has_highlight = state.has_active_highlight();
	let t = ease_out_cubic(state.hover.highlight_t);
	let radius = NODE_RADIUS * state.transform.k;

	for (idx, node) in state.nodes.iter().enumerate() {
		let (sx, sy) = state.world_to_screen(node.x, node.y);
		let highlighted = state.is_highlighted(idx);
		let (alpha, r) = if has_highlight && !highlighted {
			(1.0 - 0.7 * t, radius * (1.0 - 0.15 * t))
		} else if state.is_hovered(idx) {
			(1.0, radius * (1.0 + 0.25 * t))
		} else {
			(1.0, radius)
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(sx, sy, r, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.color);
		ctx.fill();
		ctx.set_stroke_style_str("#ffffff");
		ctx.set_line_width(1.5);
		ctx.stroke();

		if state.is_hovered(idx) && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(sx, sy, r + 3.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(51, 51, 51, {})", 0.7 * t));
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		ctx.set_fill_style_str("#ffffff");
		ctx.set_font(&format!("bold {:.0}px sans-serif", (r * 0.7).max(7.0)));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.label, sx, sy);
		ctx.set_global_alpha(1.0);
	}
}

fn draw_tooltip(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	let Some(idx) = state.hover.node else {
		return;
	};
	let Some(node) = state.nodes.get(idx) else {
		return;
	};

	let lines: Vec<&str> = node.tooltip.lines().collect();
	if lines.is_empty() {
		return;
	}

	ctx.set_font("12px sans-serif");
	let mut width: f64 = 0.0;
	for line in &lines {
		if let Ok(metrics) = ctx.measure_text(line) {
			width = width.max(metrics.width());
		}
	}
	let line_height = 16.0;
	let pad = 8.0;
	let box_w = width + 2.0 * pad;
	let box_h = lines.len() as f64 * line_height + 2.0 * pad;

	let (sx, sy) = state.world_to_screen(node.x, node.y);
	let r = NODE_RADIUS * state.transform.k;
	let mut bx = sx + r + 10.0;
	let mut by = sy - box_h / 2.0;
	// Keep the box on the canvas
	if bx + box_w > state.width {
		bx = sx - r - 10.0 - box_w;
	}
	by = by.clamp(4.0, (state.height - box_h - 4.0).max(4.0));

	ctx.set_fill_style_str("rgba(26, 26, 46, 0.92)");
	ctx.fill_rect(bx, by, box_w, box_h);

	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	for (i, line) in lines.iter().enumerate() {
		// First line is the course name, render it brighter
		if i == 0 {
			ctx.set_fill_style_str("#ffffff");
			ctx.set_font("bold 12px sans-serif");
		} else {
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
			ctx.set_font("12px sans-serif");
		}
		let _ = ctx.fill_text(line, bx + pad, by + pad + i as f64 * line_height);
	}
}
