use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Column names as they appear in the upstream dataset
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming the four launch columns
/// * `.json` – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.  The four launch columns are
/// required; anything else (flight number, full booster version, ...) is
/// ignored.  `class` must parse as an integer 0 or 1.
fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

pub(crate) fn read_csv<R: Read>(reader: R) -> Result<LaunchDataset> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let site_idx = column_index(&headers, COL_SITE)?;
    let payload_idx = column_index(&headers, COL_PAYLOAD)?;
    let booster_idx = column_index(&headers, COL_BOOSTER)?;
    let class_idx = column_index(&headers, COL_CLASS)?;

    let mut records = Vec::new();

    for (row_no, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let site = record.get(site_idx).unwrap_or("").trim();
        if site.is_empty() {
            bail!("CSV row {row_no}: empty '{COL_SITE}'");
        }

        let payload_mass_kg = record
            .get(payload_idx)
            .unwrap_or("")
            .trim()
            .parse::<f64>()
            .with_context(|| format!("CSV row {row_no}: '{COL_PAYLOAD}' is not a number"))?;

        let booster_category = record.get(booster_idx).unwrap_or("").trim();
        if booster_category.is_empty() {
            bail!("CSV row {row_no}: empty '{COL_BOOSTER}'");
        }

        let class = record
            .get(class_idx)
            .unwrap_or("")
            .trim()
            .parse::<i64>()
            .with_context(|| format!("CSV row {row_no}: '{COL_CLASS}' is not an integer"))?;
        let outcome = Outcome::from_class(class).with_context(|| format!("CSV row {row_no}"))?;

        records.push(LaunchRecord {
            site: site.to_string(),
            payload_mass_kg,
            booster_category: booster_category.to_string(),
            outcome,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("CSV missing '{name}' column"))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')` of the upstream dataset):
///
/// ```json
/// [
///   {
///     "Launch Site": "KSC LC-39A",
///     "Payload Mass (kg)": 4990.0,
///     "Booster Version Category": "FT",
///     "class": 1
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub(crate) fn parse_json(text: &str) -> Result<LaunchDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, rec) in rows.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let site = obj
            .get(COL_SITE)
            .and_then(|v| v.as_str())
            .with_context(|| format!("Row {i}: missing or invalid '{COL_SITE}'"))?;

        let payload_mass_kg = obj
            .get(COL_PAYLOAD)
            .and_then(|v| v.as_f64())
            .with_context(|| format!("Row {i}: missing or invalid '{COL_PAYLOAD}'"))?;

        let booster_category = obj
            .get(COL_BOOSTER)
            .and_then(|v| v.as_str())
            .with_context(|| format!("Row {i}: missing or invalid '{COL_BOOSTER}'"))?;

        // as_i64 rejects fractional values, which are not tolerated here.
        let class = obj
            .get(COL_CLASS)
            .and_then(|v| v.as_i64())
            .with_context(|| format!("Row {i}: '{COL_CLASS}' must be an integer"))?;
        let outcome = Outcome::from_class(class).with_context(|| format!("Row {i}"))?;

        records.push(LaunchRecord {
            site: site.to_string(),
            payload_mass_kg,
            booster_category: booster_category.to_string(),
            outcome,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,1,525.0,F9 v1.0  B0005,v1.0
3,KSC LC-39A,1,5300.0,F9 FT B1031.2,FT
4,VAFB SLC-4E,0,9600.0,F9 B4 B1041.1,B4
";

    #[test]
    fn reads_csv_and_ignores_extra_columns() {
        let ds = read_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites.len(), 3);
        assert_eq!(ds.payload_extent, Some((0.0, 9600.0)));

        let rec = &ds.records[2];
        assert_eq!(rec.site, "KSC LC-39A");
        assert_eq!(rec.payload_mass_kg, 5300.0);
        assert_eq!(rec.booster_category, "FT");
        assert_eq!(rec.outcome, Outcome::Success);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "Launch Site,class,Payload Mass (kg)\nCCAFS LC-40,1,500.0\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains(COL_BOOSTER));
    }

    #[test]
    fn fractional_class_is_an_error() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   CCAFS LC-40,0.5,500.0,v1.0\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn out_of_range_class_is_an_error() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   CCAFS LC-40,2,500.0,v1.0\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn reads_json_records() {
        let json = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 4990.0,
             "Booster Version Category": "FT", "class": 1},
            {"Launch Site": "CCAFS SLC-40", "Payload Mass (kg)": 2150.0,
             "Booster Version Category": "B5", "class": 0}
        ]"#;
        let ds = parse_json(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn json_fractional_class_is_an_error() {
        let json = r#"[{"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 100.0,
                        "Booster Version Category": "FT", "class": 0.5}]"#;
        assert!(parse_json(json).is_err());
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = load_file(Path::new("launches.parquet")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }
}
