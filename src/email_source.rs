use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;



/// Lazily reads one email per line, skipping blank lines. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
pub struct EmailSource<R> {
    name: String,
    reader: R,
}

impl EmailSource<BufReader<File>> {
    pub fn open(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|source| AppError::InputUnreadable {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self {
            name: path.display().to_string(),
            ..Self::new(BufReader::new(file))
        })
    }
}

impl<R: BufRead> EmailSource<R> {
    pub fn new(reader: R) -> Self {
        Self { name: "input".into(), reader }
    }
}

impl<R: BufRead> Iterator for EmailSource<R> {
    type Item = AppResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = vec![];

        loop {
            line.clear();

            match self.reader.read_until(b'\n', &mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let email = String::from_utf8_lossy(&line);
                    let email = email.trim();

                    if !email.is_empty() {
                        return Some(Ok(email.into()));
                    }
                },
                Err(source) => {
                    return Some(Err(AppError::InputUnreadable {
                        path: self.name.clone(),
                        source,
                    }))
                },
            }
        }
    }
}
