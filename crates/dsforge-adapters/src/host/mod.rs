//! Host framework bindings.

mod loopback;

pub use loopback::LoopBackFramework;
