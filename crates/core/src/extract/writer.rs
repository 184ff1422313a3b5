//! JSON artifact output.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::model::Record;

/// Options for serializing the record artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    /// Indent the JSON array. Compact output otherwise.
    pub pretty: bool,
}

/// Serialize records to a JSON string, in the given order.
pub fn to_json(records: &[Record], options: &OutputOptions) -> Result<String> {
    let json = if options.pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Serialize records as a JSON array to a writer.
pub fn write_records<W: Write>(records: &[Record], writer: &mut W, options: &OutputOptions) -> Result<()> {
    if options.pretty {
        serde_json::to_writer_pretty(&mut *writer, records)?;
    } else {
        serde_json::to_writer(&mut *writer, records)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the artifact to `path` in one step.
///
/// Output goes to a sibling temp file which is renamed over `path` once
/// fully written, so readers never see a partial artifact.
pub fn write_artifact(path: &Path, records: &[Record], options: &OutputOptions) -> Result<()> {
    let tmp = temp_sibling(path);
    let result = write_and_rename(&tmp, path, records, options);

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    } else {
        debug!(path = %path.display(), records = records.len(), "wrote artifact");
    }
    result
}

fn write_and_rename(tmp: &Path, path: &Path, records: &[Record], options: &OutputOptions) -> Result<()> {
    {
        let mut writer = BufWriter::new(fs::File::create(tmp)?);
        write_records(records, &mut writer, options)?;
        writer.get_ref().sync_all()?;
    }
    fs::rename(tmp, path)?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "data.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_sibling() {
        assert_eq!(
            temp_sibling(Path::new("out/data.json")),
            PathBuf::from("out/data.json.tmp")
        );
    }

    #[test]
    fn test_empty_records() {
        let json = to_json(&[], &OutputOptions::default()).unwrap();
        assert_eq!(json, "[]");
    }
}
