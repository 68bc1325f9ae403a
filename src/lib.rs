//! Geometry engine for corner ribbon labels.
//!
//! A ribbon is a diagonal band drawn across one corner of a rectangular
//! container. Given a [`label::LabelSpec`] snapshot and the measured
//! [`geometry::ContainerSize`], the engine computes the bisector the band is
//! centered on, the region the band occupies and the offsets that center the
//! label text inside it. Drawing is delegated to a [`render::LabelCanvas`].

pub mod error;
pub mod geometry;
pub mod label;
pub mod math;
pub mod render;

pub use error::{Result, RibbonError};
