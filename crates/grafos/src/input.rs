use std::{fs::File, io, path::Path, str::Utf8Error};

use log::debug;
use memmap2::{Mmap, MmapOptions};

/// Memory-mapped input file.
pub struct InputFile {
    mmap: Option<Mmap>,
}

impl InputFile {
    pub fn open(path: &Path) -> io::Result<InputFile> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        debug!("Mapping {} ({} bytes)", path.display(), len);

        // Empty files cannot be mapped.
        if len == 0 {
            return Ok(InputFile { mmap: None });
        }

        let mmap = unsafe { MmapOptions::new().map(&file)? };

        Ok(InputFile { mmap: Some(mmap) })
    }

    pub fn text(&self) -> Result<&str, Utf8Error> {
        match &self.mmap {
            Some(mmap) => std::str::from_utf8(mmap),
            None => Ok(""),
        }
    }
}
