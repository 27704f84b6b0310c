//! Merry the Siamese Cat - placeholder sprite generator for the SemoR Alarm App
//!
//! This library provides functionality to:
//! - Compose the idle_01 demo frame from fixed shapes and a named palette
//! - Save sprites as RGBA PNGs under `{output}/{category}/{frame}.png`
//! - Write a JSON description of the planned animation set

pub mod animation;
pub mod canvas;
pub mod cli;
pub mod color;
pub mod composer;
pub mod config;
pub mod generator;
pub mod metadata;
pub mod output;
pub mod palette;
pub mod shapes;
