use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// Makes sure `dir` exists, creating any missing parents.
    fn ensure_dir(&self, dir: &Path) -> Result<()>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn url(&self) -> &str;
    fn output_dir(&self) -> &Path;
}
