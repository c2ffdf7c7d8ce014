
use crate::face::{FaceSpec, Sentiment};
use crate::team::Team;


pub const HAPPY_FACES: [&'static str; 4] = [
	"pessoa_feliz_1.jpg",
	"rosto_sorrindo.jpg",
	"happy_face.jpg",
	"alegre_jovem.jpg"
];

pub const SAD_FACES: [&'static str; 4] = [
	"pessoa_triste_1.jpg",
	"rosto_chorando.jpg",
	"sad_face.jpg",
	"melancolia.jpg"
];

pub const TEAMS: [Team; 8] = Team::KNOWN;

/// logos generated per team
pub const TEAM_VARIANTS: u32 = 2;


/// every face fixture, happy ones first
pub fn faces() -> impl Iterator<Item=FaceSpec> {
	let happy = HAPPY_FACES.into_iter()
		.map(|filename| FaceSpec { filename, sentiment: Sentiment::Happy });
	let sad = SAD_FACES.into_iter()
		.map(|filename| FaceSpec { filename, sentiment: Sentiment::Sad });
	happy.chain(sad)
}


pub fn team_filename(team: Team, variant: u32) -> String {
	format!("logo_{}_{}.jpg", team.name(), variant)
}
