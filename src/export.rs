use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::augment::Augmentation;
use crate::collect::Dataset;
use crate::error::Result;

/// Header of the augmentation export
pub const AUGMENTATION_HEADER: [&str; 3] = ["Original Text", "Augmented Text", "Technique"];

/// Write an unquoted header line followed by fully quoted records
///
/// Quotes inside a field are doubled.
fn write_table<W, I, R>(mut out: W, header: &[&str], records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    out.write_all(header.join(",").as_bytes())
        .map_err(csv::Error::from)?;
    out.write_all(b"\n").map_err(csv::Error::from)?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

fn to_string<F>(write: F) -> Result<String>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut buf = Vec::new();
    write(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write one row per augmentation: original, augmented text, technique name
pub fn write_augmentation_csv<W: Write>(out: W, original: &str, augmentations: &[Augmentation]) -> Result<()> {
    let rows = augmentations
        .iter()
        .map(|a| [original, a.text.as_str(), a.technique.name()]);
    write_table(out, &AUGMENTATION_HEADER, rows)
}

/// Augmentation export as a string
pub fn augmentation_csv(original: &str, augmentations: &[Augmentation]) -> Result<String> {
    to_string(|buf| write_augmentation_csv(buf, original, augmentations))
}

/// Dataset export
impl Dataset {
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        write_table(out, &self.headers(), self.records().iter())
    }

    pub fn to_csv(&self) -> Result<String> {
        to_string(|buf| self.write_csv(buf))
    }
}
