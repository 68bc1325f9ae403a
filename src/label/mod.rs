mod color;
mod spec;

pub use color::Rgba;
pub use spec::{
    Background, ImageBackground, LabelSpec, LabelSpecBuilder, TextDirection, TextSize,
    DEFAULT_TEXT_SIZE,
};
