pub mod sd_api;
