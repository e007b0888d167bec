use anyhow::*;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One observed peak of a peak list.
///
/// Only `peak_mass` is required; `carbon_count` overrides the lipid chain
/// length given on the command line for this peak.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct PeakRecord {
    pub peak_mass: f64,
    pub carbon_count: Option<u32>,
    pub label: Option<String>,
}

/// Reads a CSV peak list with a header row. Lines starting with '#' are ignored.
pub fn read_peak_list<R: std::io::Read>(reader: R) -> Result<Vec<PeakRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut peaks = Vec::new();
    for (row_idx, record) in csv_reader.deserialize().enumerate() {
        let peak: PeakRecord = record.with_context(|| format!("invalid peak list row {}", row_idx + 1))?;
        peaks.push(peak);
    }

    Ok(peaks)
}

pub fn read_peak_list_file(path: impl AsRef<Path>) -> Result<Vec<PeakRecord>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("can't open peak list {}", path.display()))?;

    let peaks = read_peak_list(file)?;
    log::debug!("read {} peak(s) from {}", peaks.len(), path.display());

    Ok(peaks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_peak_list() {
        let peaks = read_peak_list("peak_mass\n1036.69\n 1022.67 \n".as_bytes()).unwrap();
        assert_eq!(peaks.len(), 2);
        assert_eq!(peaks[0].peak_mass, 1036.69);
        assert_eq!(peaks[1].peak_mass, 1022.67);
        assert_eq!(peaks[0].carbon_count, None);
        assert_eq!(peaks[0].label, None);
    }

    #[test]
    fn optional_columns() {
        let content = "label,peak_mass,carbon_count\n# blank run\nfraction 3,1036.69,15\nfraction 4,1022.67,\n";
        let peaks = read_peak_list(content.as_bytes()).unwrap();
        assert_eq!(
            peaks,
            vec![
                PeakRecord { peak_mass: 1036.69, carbon_count: Some(15), label: Some("fraction 3".to_string()) },
                PeakRecord { peak_mass: 1022.67, carbon_count: None, label: Some("fraction 4".to_string()) },
            ]
        );
    }

    #[test]
    fn malformed_row_is_reported() {
        let err = read_peak_list("peak_mass\n1036.69\nnot a mass\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn missing_file() {
        assert!(read_peak_list_file("/nonexistent/peaks.csv").is_err());
    }
}
