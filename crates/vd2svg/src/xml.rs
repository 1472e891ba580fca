//! XML reading and writing

pub mod cursor;
pub mod model;
pub mod parser;
pub mod writer;

pub use model::{Attributes, Content, Document, Element};
pub use parser::{Parser, ParserConfig};
