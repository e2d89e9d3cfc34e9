use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// ```
/// use std::io::BufRead;
/// let reader = vshicrep::reader("tests/scc/S1_S2.txt").unwrap();
/// assert_eq!(reader.lines().count(), 6);
/// ```
pub fn reader(input: &str) -> std::io::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path)?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

pub fn writer(output: &str) -> std::io::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        Box::new(BufWriter::new(std::fs::File::create(output)?))
    };

    Ok(writer)
}

/// Slurps the whole input, `stdin` included
///
/// ```
/// let text = vshicrep::read_all("tests/scc/S1_S2.txt.gz").unwrap();
/// assert!(text.starts_with("#"));
/// ```
pub fn read_all(input: &str) -> std::io::Result<String> {
    let mut text = String::new();
    reader(input)?.read_to_string(&mut text)?;
    Ok(text)
}
