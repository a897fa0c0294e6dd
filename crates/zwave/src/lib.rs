mod codec;
pub use codec::*;
mod command_class;
pub use command_class::*;
mod decoder;
pub use decoder::*;
mod error;
pub use error::*;
mod frame;
pub use frame::*;
