pub mod openai;
pub mod stable_diffusion;
