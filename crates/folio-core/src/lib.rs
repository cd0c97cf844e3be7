pub mod avatar;
pub mod camera;
pub mod constants;
pub mod error;
pub mod highlight;
pub mod mesh;
pub mod particles;
pub mod path;
pub mod pointer;
pub mod reveal;
pub mod rig;
pub mod tilt;
pub mod typewriter;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use avatar::*;
pub use camera::*;
pub use constants::*;
pub use error::*;
pub use highlight::*;
pub use mesh::*;
pub use particles::*;
pub use path::*;
pub use pointer::*;
pub use reveal::*;
pub use rig::*;
pub use tilt::*;
pub use typewriter::*;
