mod encoder;
mod net;
mod output;
mod writer;

pub use encoder::{Encoder, PutEncoder};
pub use net::connect;
pub use output::Output;
pub use writer::{LineWriter, Writer};
