//! Output formats for trees, other than the infix notation provided by
//! [`Node::display`](tungsten_parser::Node::display).

pub mod dot;
pub mod tex;

pub use tex::{TexFormatter, ToTex};
