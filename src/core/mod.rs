pub mod constants;
pub mod keys;
pub mod media;
pub mod memories;
pub mod meter;
pub mod particles;
pub mod playback;
pub mod session;
pub mod tape;

pub use keys::*;
pub use media::*;
pub use memories::*;
pub use meter::*;
pub use particles::*;
pub use playback::*;
pub use session::*;
pub use tape::*;
