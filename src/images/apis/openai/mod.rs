pub mod prompt_enhancer;
pub mod structs;
