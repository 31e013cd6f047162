pub mod animation;
pub mod epicycle;
pub mod trace;
pub mod wave;
