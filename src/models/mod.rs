pub mod args;
pub mod pixel_buffer;
pub mod request;
pub mod task;

pub use args::{usage_text, CliArgs};
pub use pixel_buffer::{DecodedImage, PixelBuffer, PixelLayout};
pub use request::{Invocation, InvocationRequest};
pub use task::{ConversionTask, OutputSpec};
