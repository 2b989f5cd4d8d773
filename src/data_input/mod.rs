// src/data_input/mod.rs

pub mod collider;
pub mod dataset_file;
pub mod datasets;
