pub mod episode;
pub mod show;

pub use episode::Episode;
pub use show::Show;
