/// Largest width or height any built-in processor accepts
pub const DEFAULT_MAX_RESOLUTION: u32 = 2048;
/// Side length used when a request omits `resolution`
pub const DEFAULT_RESOLUTION_SIDE: u32 = 1024;
/// Upload extensions accepted by the lifecycle manager (compared lowercase)
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
/// Processor used when a request does not name one
pub const DEFAULT_PROCESSOR_TYPE: &str = "general";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
/// 16 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_LOG_LEVEL: &str = "info";
