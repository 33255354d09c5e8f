//! Movement domain: system modules for input and contact sampling.

pub(crate) mod collisions;
pub(crate) mod input;

pub(crate) use collisions::{collect_contacts, detect_ground, detect_walls};
pub(crate) use input::{read_input, reset_input};
