pub mod domain;
pub mod ports;
pub mod services;
pub mod video_use_cases;
