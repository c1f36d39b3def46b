pub use self::{sample::*, scoreline::*, scoring::*};

pub(crate) mod sample;
pub(crate) mod scoreline;
pub(crate) mod scoring;
