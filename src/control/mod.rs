pub mod fullscreen;
pub mod scrub;
pub mod transport;
