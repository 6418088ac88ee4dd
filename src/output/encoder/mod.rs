mod encoder;
mod put;

pub use encoder::Encoder;
pub use put::PutEncoder;
