pub mod files;
pub mod holotape;
pub mod storage;

pub use files::{
    atomic_write, config_file, ensure_pipboy_dir, init_local_pipboy, log_file, read_file,
    report_file,
};
pub use holotape::{export_holotape, export_holotape_to, holotape_filename, read_holotape};
pub use storage::Storage;
