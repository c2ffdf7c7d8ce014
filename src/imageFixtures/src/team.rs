
use std::fmt;

use image::Rgb;

use crate::canvas::{BBox, BLACK, Canvas, Color, Dims, GRAY, WHITE};


const RED: Color = Rgb([255, 0, 0]);
const GREEN: Color = Rgb([0, 128, 0]);
const BLUE: Color = Rgb([0, 0, 255]);


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
	Flamengo,
	Palmeiras,
	Corinthians,
	Santos,
	SaoPaulo,
	Gremio,
	Vasco,
	Internacional,
	/// any identity we don't have colors for
	Unknown
}

impl Team {

	pub const KNOWN: [Team; 8] = [
		Team::Flamengo,
		Team::Palmeiras,
		Team::Corinthians,
		Team::Santos,
		Team::SaoPaulo,
		Team::Gremio,
		Team::Vasco,
		Team::Internacional
	];

	/// Never fails, unrecognized names get the fallback team.
	pub fn from_name(name: impl AsRef<str>) -> Self {
		let name = name.as_ref();
		Self::KNOWN.into_iter()
			.find(|team| team.name() == name)
			.unwrap_or(Team::Unknown)
	}

	pub fn name(&self) -> &'static str {
		match self {
			Self::Flamengo => "flamengo",
			Self::Palmeiras => "palmeiras",
			Self::Corinthians => "corinthians",
			Self::Santos => "santos",
			Self::SaoPaulo => "saopaulo",
			Self::Gremio => "gremio",
			Self::Vasco => "vasco",
			Self::Internacional => "internacional",
			Self::Unknown => "unknown"
		}
	}

	pub fn style(&self) -> TeamStyle {
		match self {
			Self::Flamengo => TeamStyle::new(&[RED, BLACK], Pattern::StripesHorizontal { period: 20, band: 10 }),
			Self::Palmeiras => TeamStyle::new(&[GREEN, WHITE], Pattern::ConcentricCircles),
			Self::Corinthians => TeamStyle::new(&[BLACK, WHITE], Pattern::SplitPanel),
			Self::Santos => TeamStyle::new(&[WHITE, BLACK], Pattern::TriBand),
			Self::SaoPaulo => TeamStyle::new(&[RED, BLACK, WHITE], Pattern::DefaultInset),
			Self::Gremio => TeamStyle::new(&[BLUE, WHITE, BLACK], Pattern::StripesVertical { period: 30, band: 15 }),
			Self::Vasco => TeamStyle::new(&[BLACK, WHITE], Pattern::DefaultInset),
			Self::Internacional => TeamStyle::new(&[RED, WHITE], Pattern::DefaultInset),
			Self::Unknown => TeamStyle::new(&[GRAY, WHITE], Pattern::DefaultInset)
		}
	}
}

impl fmt::Display for Team {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}


/// Two or three team colors, most prominent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(&'static [Color]);

impl Palette {

	pub fn colors(&self) -> &'static [Color] {
		self.0
	}

	pub fn primary(&self) -> Color {
		self.0[0]
	}

	pub fn secondary(&self) -> Color {
		self.0[1]
	}

	/// primary for even indices, secondary for odd ones
	pub fn alternating(&self, i: u32) -> Color {
		if i % 2 == 0 {
			self.primary()
		} else {
			self.secondary()
		}
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
	/// a band of `band` rows every `period` rows
	StripesHorizontal {
		period: u32,
		band: u32
	},
	/// a band of `band` columns every `period` columns
	StripesVertical {
		period: u32,
		band: u32
	},
	ConcentricCircles,
	SplitPanel,
	TriBand,
	DefaultInset
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamStyle {
	pub palette: Palette,
	pub pattern: Pattern
}

impl TeamStyle {

	const fn new(colors: &'static [Color], pattern: Pattern) -> Self {
		Self {
			palette: Palette(colors),
			pattern
		}
	}
}


pub const CIRCLE_INSET: i32 = 50;
pub const INNER_CIRCLE_INSET: i32 = 80;
pub const RECT_INSET: i32 = 20;
pub const THICK_STROKE: i32 = 5;
pub const THIN_STROKE: i32 = 3;


/// Draws a flat logo in the team's colors. Logos have no randomness.
pub fn generate(team: Team, dims: Dims) -> Canvas {
	let style = team.style();
	let mut canvas = Canvas::new(dims, style.palette.primary());
	render(&mut canvas, &style);
	canvas
}


fn render(canvas: &mut Canvas, style: &TeamStyle) {

	let palette = &style.palette;
	let dims = canvas.dims();
	let w = dims.width as i32;
	let h = dims.height as i32;

	match style.pattern {

		Pattern::StripesHorizontal { period, band } => {
			for (i, y) in (0 .. dims.height).step_by(period as usize).enumerate() {
				let y = y as i32;
				canvas.fill_rect(BBox::new(0, y, w, y + band as i32), palette.alternating(i as u32));
			}
		}

		Pattern::StripesVertical { period, band } => {
			for (i, x) in (0 .. dims.width).step_by(period as usize).enumerate() {
				let x = x as i32;
				canvas.fill_rect(BBox::new(x, 0, x + band as i32, h), palette.alternating(i as u32));
			}
		}

		Pattern::ConcentricCircles => {
			let outer = BBox::inset(dims, CIRCLE_INSET);
			canvas.fill_ellipse(outer, palette.primary());
			canvas.outline_ellipse(outer, palette.secondary(), THICK_STROKE);
			canvas.fill_ellipse(BBox::inset(dims, INNER_CIRCLE_INSET), palette.secondary());
		}

		Pattern::SplitPanel => {
			canvas.fill_rect(BBox::new(0, 0, w/2, h), palette.primary());
			canvas.fill_rect(BBox::new(w/2, 0, w, h), palette.secondary());
			canvas.outline_ellipse(BBox::inset(dims, CIRCLE_INSET), GRAY, THIN_STROKE);
		}

		Pattern::TriBand => {
			canvas.fill_rect(BBox::new(0, 0, w, h/3), palette.secondary());
			canvas.fill_rect(BBox::new(0, h/3, w, 2*h/3), palette.primary());
			canvas.fill_rect(BBox::new(0, 2*h/3, w, h), palette.secondary());
		}

		Pattern::DefaultInset => {
			let inset = BBox::inset(dims, RECT_INSET);
			canvas.fill_rect(inset, palette.secondary());
			canvas.outline_rect(inset, palette.primary(), THICK_STROKE);
		}
	}
}
