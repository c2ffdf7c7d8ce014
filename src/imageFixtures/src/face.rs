
use std::fmt;

use image::Rgb;

use crate::canvas::{BBox, BLACK, Canvas, Color, Dims};
use crate::rand::{ChannelRange, ColorRange};


pub const SKIN: Color = Rgb([240, 200, 160]);

/// distance between the canvas edge and the face outline
pub const FACE_MARGIN: i32 = 30;
pub const FACE_OUTLINE_WIDTH: i32 = 2;
pub const EYE_SIZE: i32 = 15;
pub const MOUTH_WIDTH: i32 = 60;
pub const MOUTH_STROKE: i32 = 3;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
	Happy,
	Sad
}

impl Sentiment {

	pub fn background_range(&self) -> ColorRange {
		match self {
			// warm
			Self::Happy => ColorRange::new(
				ChannelRange::new(200, 255),
				ChannelRange::new(180, 255),
				ChannelRange::new(100, 200)
			),
			// cool
			Self::Sad => ColorRange::new(
				ChannelRange::new(50, 150),
				ChannelRange::new(50, 150),
				ChannelRange::new(150, 200)
			)
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Happy => "happy",
			Self::Sad => "sad"
		}
	}
}

impl fmt::Display for Sentiment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSpec {
	pub filename: &'static str,
	pub sentiment: Sentiment
}


/// Draws a cartoon face: colored background, skin disc, two eyes and a mouth
/// that smiles or frowns depending on the sentiment.
pub fn generate(sentiment: Sentiment, dims: Dims, rng: &mut fastrand::Rng) -> Canvas {

	let background = sentiment.background_range().sample(rng);
	let mut canvas = Canvas::new(dims, background);

	let w = dims.width as i32;
	let h = dims.height as i32;

	// head
	let head = BBox::inset(dims, FACE_MARGIN);
	canvas.fill_ellipse(head, SKIN);
	canvas.outline_ellipse(head, BLACK, FACE_OUTLINE_WIDTH);

	// eyes
	let eye_y = h/3;
	for eye_x in [w/3, 2*w/3] {
		canvas.fill_ellipse(BBox::centered(eye_x, eye_y, EYE_SIZE, EYE_SIZE), BLACK);
	}

	// mouth
	let mouth_x = w/2;
	let mouth_y = 2*h/3;
	let half = MOUTH_WIDTH/2;
	match sentiment {
		Sentiment::Happy => canvas.arc(
			BBox::new(mouth_x - half, mouth_y - 15, mouth_x + half, mouth_y + 15),
			0.0, 180.0,
			BLACK,
			MOUTH_STROKE
		),
		// the frown's box sits lower, so the top of the curve lands on the mouth line
		Sentiment::Sad => canvas.arc(
			BBox::new(mouth_x - half, mouth_y, mouth_x + half, mouth_y + 30),
			180.0, 360.0,
			BLACK,
			MOUTH_STROKE
		)
	}

	canvas
}
