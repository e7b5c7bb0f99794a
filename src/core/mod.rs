pub mod arithmetic;
pub mod etl;
pub mod parser;
pub mod pipeline;
pub mod reader;
pub mod roman;
pub mod words;

pub use crate::domain::model::{Record, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
