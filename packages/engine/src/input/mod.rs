//! Input - host pointer to grid coordinate mapping

mod pointer;

pub use pointer::PointerMapping;
