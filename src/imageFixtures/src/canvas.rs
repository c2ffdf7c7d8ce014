
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use tracing::debug;


pub type Color = Rgb<u8>;

pub const BLACK: Color = Rgb([0, 0, 0]);
pub const WHITE: Color = Rgb([255, 255, 255]);
pub const GRAY: Color = Rgb([128, 128, 128]);


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
	pub width: u32,
	pub height: u32
}

impl Dims {

	pub const fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height
		}
	}
}

impl Default for Dims {

	fn default() -> Self {
		Self::new(200, 200)
	}
}


/// An inclusive bounding box, in pixels.
/// Corners may fall outside the canvas, drawing clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
	pub x0: i32,
	pub y0: i32,
	pub x1: i32,
	pub y1: i32
}

impl BBox {

	pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
		Self {
			x0,
			y0,
			x1,
			y1
		}
	}

	/// the whole canvas shrunk by `margin` on every side
	pub fn inset(dims: Dims, margin: i32) -> Self {
		Self::new(margin, margin, dims.width as i32 - margin, dims.height as i32 - margin)
	}

	/// box of the given size centered on a point
	pub fn centered(cx: i32, cy: i32, width: i32, height: i32) -> Self {
		Self::new(cx - width/2, cy - height/2, cx + width/2, cy + height/2)
	}

	pub fn shrink(self, amount: i32) -> Self {
		Self::new(self.x0 + amount, self.y0 + amount, self.x1 - amount, self.y1 - amount)
	}

	pub fn is_empty(&self) -> bool {
		self.x1 < self.x0 || self.y1 < self.y0
	}

	fn center(&self) -> (i32, i32) {
		((self.x0 + self.x1)/2, (self.y0 + self.y1)/2)
	}

	fn radii(&self) -> (i32, i32) {
		((self.x1 - self.x0)/2, (self.y1 - self.y0)/2)
	}
}


/// An RGB raster being drawn on before it gets written out.
pub struct Canvas {
	img: RgbImage
}

impl Canvas {

	pub fn new(dims: Dims, background: Color) -> Self {
		Self {
			img: RgbImage::from_pixel(dims.width, dims.height, background)
		}
	}

	pub fn dims(&self) -> Dims {
		Dims::new(self.img.width(), self.img.height())
	}

	pub fn pixel(&self, x: u32, y: u32) -> Color {
		*self.img.get_pixel(x, y)
	}

	pub fn fill_rect(&mut self, bbox: BBox, color: Color) {

		// clip to the canvas first, zero-sized rects aren't allowed by imageproc
		let dims = self.dims();
		let clipped = BBox::new(
			bbox.x0.max(0),
			bbox.y0.max(0),
			bbox.x1.min(dims.width as i32 - 1),
			bbox.y1.min(dims.height as i32 - 1)
		);
		if clipped.is_empty() {
			return;
		}

		let rect = Rect::at(clipped.x0, clipped.y0)
			.of_size((clipped.x1 - clipped.x0 + 1) as u32, (clipped.y1 - clipped.y0 + 1) as u32);
		draw_filled_rect_mut(&mut self.img, rect, color);
	}

	/// strokes grow inward from the box edges
	pub fn outline_rect(&mut self, bbox: BBox, color: Color, width: i32) {
		if bbox.is_empty() || width <= 0 {
			return;
		}
		let BBox { x0, y0, x1, y1 } = bbox;
		self.fill_rect(BBox::new(x0, y0, x1, y0 + width - 1), color);
		self.fill_rect(BBox::new(x0, y1 - width + 1, x1, y1), color);
		self.fill_rect(BBox::new(x0, y0, x0 + width - 1, y1), color);
		self.fill_rect(BBox::new(x1 - width + 1, y0, x1, y1), color);
	}

	pub fn fill_ellipse(&mut self, bbox: BBox, color: Color) {
		if bbox.is_empty() {
			return;
		}
		let (rx, ry) = bbox.radii();
		draw_filled_ellipse_mut(&mut self.img, bbox.center(), rx, ry, color);
	}

	/// strokes grow inward from the box edges
	pub fn outline_ellipse(&mut self, bbox: BBox, color: Color, width: i32) {
		self.stroke_ellipse(bbox, width, color, |_| true);
	}

	/// Draws part of the outline of the ellipse inscribed in `bbox`.
	/// Angles are in degrees, clockwise from 3 o'clock (y points down).
	pub fn arc(&mut self, bbox: BBox, start_deg: f32, end_deg: f32, color: Color, width: i32) {
		let sweep = end_deg - start_deg;
		self.stroke_ellipse(bbox, width, color, |deg| {
			sweep >= 360.0 || (deg - start_deg).rem_euclid(360.0) <= sweep
		});
	}

	/// Paints every pixel between the ellipse inscribed in `bbox` and the same
	/// ellipse shrunk by `width`, if `in_sweep` accepts the pixel's angle in degrees.
	fn stroke_ellipse(&mut self, bbox: BBox, width: i32, color: Color, in_sweep: impl Fn(f32) -> bool) {
		if bbox.is_empty() || width <= 0 {
			return;
		}

		let cx = (bbox.x0 + bbox.x1) as f32/2.0;
		let cy = (bbox.y0 + bbox.y1) as f32/2.0;
		let rx = (bbox.x1 - bbox.x0) as f32/2.0;
		let ry = (bbox.y1 - bbox.y0) as f32/2.0;
		let inner_rx = rx - width as f32;
		let inner_ry = ry - width as f32;

		// squared normalized distance, 1.0 on the ellipse itself
		let dist = |dx: f32, dy: f32, rx: f32, ry: f32| {
			let nx = if rx > 0.0 { dx/rx } else if dx == 0.0 { 0.0 } else { f32::INFINITY };
			let ny = if ry > 0.0 { dy/ry } else if dy == 0.0 { 0.0 } else { f32::INFINITY };
			nx*nx + ny*ny
		};

		let dims = self.dims();
		let xs = bbox.x0.max(0) ..= bbox.x1.min(dims.width as i32 - 1);
		let ys = bbox.y0.max(0) ..= bbox.y1.min(dims.height as i32 - 1);
		for y in ys {
			for x in xs.clone() {
				let dx = x as f32 - cx;
				let dy = y as f32 - cy;
				if dist(dx, dy, rx, ry) > 1.0 {
					continue;
				}
				if inner_rx > 0.0 && inner_ry > 0.0 && dist(dx, dy, inner_rx, inner_ry) <= 1.0 {
					continue;
				}
				let deg = (dy/ry.max(1.0)).atan2(dx/rx.max(1.0)).to_degrees().rem_euclid(360.0);
				if in_sweep(deg) {
					self.img.put_pixel(x as u32, y as u32, color);
				}
			}
		}
	}

	/// Encodes based on the file extension, eg `.jpg` writes a JPEG.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		self.img.save(path)
			.context(format!("Failed to save image to: {}", path.to_string_lossy()))?;
		debug!("Saved image: {}", path.to_string_lossy());
		Ok(())
	}
}


#[cfg(test)]
mod test {

	use assert_fs::TempDir;
	use galvanic_assert::{assert_that, matchers::*};

	use super::*;


	const RED: Color = Rgb([255, 0, 0]);


	#[test]
	fn new_canvas_is_solid() {
		let canvas = Canvas::new(Dims::new(30, 20), RED);
		assert_that!(&canvas.dims(), eq(Dims::new(30, 20)));
		assert_that!(&canvas.pixel(0, 0), eq(RED));
		assert_that!(&canvas.pixel(29, 19), eq(RED));
	}

	#[test]
	fn fill_rect_is_inclusive_and_clipped() {
		let mut canvas = Canvas::new(Dims::new(10, 10), WHITE);

		canvas.fill_rect(BBox::new(2, 2, 4, 4), BLACK);
		assert_that!(&canvas.pixel(2, 2), eq(BLACK));
		assert_that!(&canvas.pixel(4, 4), eq(BLACK));
		assert_that!(&canvas.pixel(5, 5), eq(WHITE));

		// runs off the edge, must not panic
		canvas.fill_rect(BBox::new(8, -5, 50, 50), RED);
		assert_that!(&canvas.pixel(9, 0), eq(RED));
		assert_that!(&canvas.pixel(9, 9), eq(RED));

		// entirely outside, or inverted
		canvas.fill_rect(BBox::new(20, 20, 30, 30), RED);
		canvas.fill_rect(BBox::new(5, 5, 4, 4), RED);
		assert_that!(&canvas.pixel(6, 6), eq(WHITE));
	}

	#[test]
	fn outline_rect_leaves_interior() {
		let mut canvas = Canvas::new(Dims::new(20, 20), WHITE);
		canvas.outline_rect(BBox::new(2, 2, 17, 17), BLACK, 3);
		assert_that!(&canvas.pixel(2, 2), eq(BLACK));
		assert_that!(&canvas.pixel(4, 10), eq(BLACK));
		assert_that!(&canvas.pixel(15, 10), eq(BLACK));
		assert_that!(&canvas.pixel(5, 10), eq(WHITE));
		assert_that!(&canvas.pixel(10, 10), eq(WHITE));
		assert_that!(&canvas.pixel(1, 1), eq(WHITE));
	}

	#[test]
	fn ellipse_fill_and_outline() {
		let mut canvas = Canvas::new(Dims::new(100, 100), WHITE);
		let bbox = BBox::new(20, 20, 80, 80);
		canvas.fill_ellipse(bbox, RED);
		canvas.outline_ellipse(bbox, BLACK, 2);

		// center filled, corners of the box untouched
		assert_that!(&canvas.pixel(50, 50), eq(RED));
		assert_that!(&canvas.pixel(21, 21), eq(WHITE));

		// leftmost point of the ellipse is on the outline
		assert_that!(&canvas.pixel(20, 50), eq(BLACK));
		assert_that!(&canvas.pixel(21, 50), eq(BLACK));
	}

	#[test]
	fn arc_draws_only_its_half() {
		let mut canvas = Canvas::new(Dims::new(100, 100), WHITE);

		// 0 to 180 sweeps the bottom half, since y points down
		canvas.arc(BBox::new(20, 20, 80, 80), 0.0, 180.0, BLACK, 1);
		assert_that!(&canvas.pixel(50, 80), eq(BLACK));
		assert_that!(&canvas.pixel(50, 20), eq(WHITE));
	}

	/// pixels whose distance from the center falls in [min, max]
	fn ring_pixels(canvas: &Canvas, cx: f32, cy: f32, min: f32, max: f32) -> Vec<(u32, u32, Color)> {
		let dims = canvas.dims();
		let mut pixels = Vec::new();
		for y in 0 .. dims.height {
			for x in 0 .. dims.width {
				let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
				if d >= min && d <= max {
					pixels.push((x, y, canvas.pixel(x, y)));
				}
			}
		}
		pixels
	}

	#[test]
	fn thick_outline_is_solid() {
		let mut canvas = Canvas::new(Dims::new(200, 200), WHITE);
		canvas.outline_ellipse(BBox::new(50, 50, 150, 150), BLACK, 5);

		let band = ring_pixels(&canvas, 100.0, 100.0, 46.5, 49.5);
		assert_that!(&band.is_empty(), eq(false));
		let holes = band.iter()
			.filter(|(_, _, color)| *color != BLACK)
			.count();
		assert_that!(&holes, eq(0));

		// nothing painted inside or outside the stroke
		assert_that!(&canvas.pixel(100, 100), eq(WHITE));
		assert_that!(&canvas.pixel(100, 56), eq(WHITE));
		assert_that!(&canvas.pixel(100, 48), eq(WHITE));
	}

	#[test]
	fn thick_arc_is_solid() {
		let mut canvas = Canvas::new(Dims::new(100, 100), WHITE);
		canvas.arc(BBox::new(20, 20, 80, 80), 0.0, 180.0, BLACK, 3);

		let band = ring_pixels(&canvas, 50.0, 50.0, 27.5, 29.5);
		let lower_holes = band.iter()
			.filter(|(_, y, color)| *y > 50 && *color != BLACK)
			.count();
		assert_that!(&lower_holes, eq(0));
		let upper_painted = band.iter()
			.filter(|(_, y, color)| *y < 50 && *color == BLACK)
			.count();
		assert_that!(&upper_painted, eq(0));
	}

	#[test]
	fn save_jpeg() {
		let dir = TempDir::new()
			.expect("Failed to make temp folder");
		let path = dir.path().join("canvas.jpg");

		Canvas::new(Dims::new(64, 48), RED)
			.save(&path)
			.expect("Failed to save");

		let img = image::open(&path)
			.expect("Failed to read back image");
		assert_that!(&img.width(), eq(64));
		assert_that!(&img.height(), eq(48));
	}

	#[test]
	fn save_to_missing_dir_fails() {
		let dir = TempDir::new()
			.expect("Failed to make temp folder");
		let result = Canvas::new(Dims::new(8, 8), RED)
			.save(dir.path().join("nope").join("canvas.jpg"));
		assert_that!(&result.is_err(), eq(true));
	}
}
