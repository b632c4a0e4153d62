pub mod combo;
pub use combo::*;

pub mod error;
pub use error::*;

pub mod generate;
pub use generate::*;

pub mod handtype;
pub use handtype::*;

pub mod notation;
pub use notation::*;

pub mod pairing;
pub use pairing::*;

pub mod range;
pub use range::*;
