
use std::ops::RangeInclusive;

use image::Rgb;

use crate::canvas::Color;


/// An inclusive range of values for one color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
	pub min: u8,
	pub max: u8
}

impl ChannelRange {

	pub const fn new(min: u8, max: u8) -> Self {
		Self {
			min,
			max
		}
	}

	pub fn contains(&self, value: u8) -> bool {
		self.range().contains(&value)
	}

	pub fn sample(&self, rng: &mut fastrand::Rng) -> u8 {
		rng.u8(self.range())
	}

	fn range(&self) -> RangeInclusive<u8> {
		self.min ..= self.max
	}
}


/// Colors whose channels are each drawn uniformly and independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
	pub r: ChannelRange,
	pub g: ChannelRange,
	pub b: ChannelRange
}

impl ColorRange {

	pub const fn new(r: ChannelRange, g: ChannelRange, b: ChannelRange) -> Self {
		Self {
			r,
			g,
			b
		}
	}

	pub fn contains(&self, color: Color) -> bool {
		let Rgb([r, g, b]) = color;
		self.r.contains(r) && self.g.contains(g) && self.b.contains(b)
	}

	pub fn sample(&self, rng: &mut fastrand::Rng) -> Color {
		Rgb([
			self.r.sample(rng),
			self.g.sample(rng),
			self.b.sample(rng)
		])
	}
}
