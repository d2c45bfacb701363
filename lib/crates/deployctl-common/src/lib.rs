pub mod naming;
pub mod types;

pub use naming::{function_deployed_name, layer_output_key, stack_name};
pub use types::*;
