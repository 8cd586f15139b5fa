use super::error::SpectrumError;
use super::model::{SpectralType, SpectrumSample, SpectrumSet};

/// Label of the synthetic placeholder spectrum.
pub const DEFAULT_LABEL: &str = "Default";

const XANES_START: f64 = 250.0;
const XANES_END: f64 = 1000.0;
const XANES_POINTS: usize = 10_000;
const IR_END: usize = 4000;
const IR_STEP: usize = 4;

// ---------------------------------------------------------------------------
// Upload – raw file contents handed over by the UI
// ---------------------------------------------------------------------------

/// A user-supplied file, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub contents: String,
}

/// An upload that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub name: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Default spectrum
// ---------------------------------------------------------------------------

/// Flat zero spectrum spanning the usual domain of `spectral_type`, so the
/// reference overlay has an x range to draw against.
pub fn default_sample(spectral_type: SpectralType) -> SpectrumSample {
    let x: Vec<f64> = match spectral_type {
        SpectralType::Xanes => linspace(XANES_START, XANES_END, XANES_POINTS),
        SpectralType::Ir => (0..IR_END).step_by(IR_STEP).map(|v| v as f64).collect(),
    };
    let y = vec![0.0; x.len()];
    SpectrumSample {
        label: DEFAULT_LABEL.to_string(),
        x,
        y,
    }
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Two-column whitespace-delimited parser
// ---------------------------------------------------------------------------

/// Parse a whitespace-delimited spectrum.
///
/// The first non-blank line is a header naming the columns; it must hold at
/// least two columns.  Each following line contributes column 1 as `x` and
/// column 2 as intensity.  Blank lines and lines starting with `#` are
/// skipped.
pub fn parse_spectrum(label: &str, text: &str) -> Result<SpectrumSample, SpectrumError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (_, header) = lines.next().ok_or(SpectrumError::Empty)?;
    let columns = header.split_whitespace().count();
    if columns < 2 {
        return Err(SpectrumError::TooFewColumns { found: columns });
    }

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (line_no, line) in lines {
        let mut fields = line.split_whitespace();
        let (Some(xs), Some(ys)) = (fields.next(), fields.next()) else {
            return Err(SpectrumError::ShortRow {
                line: line_no,
                found: line.split_whitespace().count(),
            });
        };
        x.push(parse_value(xs, line_no)?);
        y.push(parse_value(ys, line_no)?);
    }

    if x.is_empty() {
        return Err(SpectrumError::Empty);
    }

    let out_of_range = y.iter().filter(|v| !(0.0..=1.0).contains(*v)).count();
    if out_of_range > 0 {
        log::warn!("{label}: {out_of_range} intensity values outside [0, 1]");
    }

    Ok(SpectrumSample {
        label: label.to_string(),
        x,
        y,
    })
}

fn parse_value(token: &str, line: usize) -> Result<f64, SpectrumError> {
    token.parse::<f64>().map_err(|_| SpectrumError::InvalidValue {
        line,
        value: token.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Spectrum source
// ---------------------------------------------------------------------------

/// Parse every upload independently; failures are collected per file.
///
/// When nothing parsed, the set holds only the default sample.
pub fn collect_samples(
    spectral_type: SpectralType,
    uploads: &[Upload],
) -> (SpectrumSet, Vec<UploadFailure>) {
    let mut samples = SpectrumSet::default();
    let mut failures = Vec::new();

    for upload in uploads {
        match parse_spectrum(&upload.name, &upload.contents) {
            Ok(sample) => {
                log::info!("Parsed {} ({} points)", upload.name, sample.len());
                samples.insert(sample);
            }
            Err(e) => {
                log::error!("Failed to parse {}: {e}", upload.name);
                failures.push(UploadFailure {
                    name: upload.name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    if samples.is_empty() {
        samples.insert(default_sample(spectral_type));
    }

    (samples, failures)
}
