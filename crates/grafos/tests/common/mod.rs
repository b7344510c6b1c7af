use std::path::Path;

use grafos::input::InputFile;

pub fn setup(name: &str) -> InputFile {
    InputFile::open(&Path::new("../resources").join(name)).unwrap()
}
