//! Testing utilities and harness for SwipeKit

pub mod recording;
pub mod robot;
pub mod robot_assertions;

pub use recording::*;
pub use robot::*;

pub mod prelude {
    pub use crate::recording::{HostEvent, RecordingDelegate};
    pub use crate::robot::SwipeRobot;
    pub use crate::robot_assertions;
}
