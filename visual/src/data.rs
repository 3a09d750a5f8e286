use num::complex::Complex64;

use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::homotopy::{plot_homotopy, HomotopySettings};

/// A precomputed homotopy run: the parameter path, the solution paths traced
/// along it, and optional reference curves.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct HomotopyData {
    pub ppath: Vec<f64>,
    pub xpaths: Vec<Vec<Complex64>>,
    pub rzero: Option<Vec<f64>>,
    pub czero: Option<Vec<f64>>,
}

impl HomotopyData {
    pub fn new(ppath: Vec<f64>, xpaths: Vec<Vec<Complex64>>) -> Self {
        Self {
            ppath,
            xpaths,
            ..Default::default()
        }
    }

    /// Plain RON, for files kept next to the script that produced the run.
    pub fn encode(&self) -> Option<String> {
        ron::to_string(&self).ok()
    }

    /// RON squeezed through deflate and URL-safe base64, short enough to pass
    /// a whole run around as a single query parameter or command line argument.
    pub fn encode_compressed(&self) -> Option<String> {
        use base64::Engine;

        let deflated = deflate(self.encode()?.as_bytes()).ok()?;
        Some(base64::engine::general_purpose::URL_SAFE.encode(deflated))
    }

    /// Reads RON, JSON, or the output of [`encode_compressed`](Self::encode_compressed).
    ///
    /// Every failure, including a corrupt deflate stream, is an [`Error::Decode`].
    pub fn decode(input: &str) -> Result<Self> {
        use base64::Engine;

        let input = input.trim();

        if let Ok(data) = ron::from_str(input) {
            return Ok(data);
        }
        log::info!("Could not decode RON, trying JSON");
        if let Ok(data) = serde_json::from_str(input) {
            return Ok(data);
        }
        log::info!("Could not decode JSON, trying compressed RON");

        let Ok(deflated) = base64::engine::general_purpose::URL_SAFE.decode(input) else {
            log::warn!("Could not decode base64");
            return Err(Error::decode("input is neither RON, JSON nor base64"));
        };

        let inflated = inflate(&deflated).map_err(|err| {
            log::warn!("Could not inflate: {err}");
            Error::decode(format!("corrupt deflate stream: {err}"))
        })?;

        let Ok(text) = String::from_utf8(inflated) else {
            log::warn!("Inflated data is not a string");
            return Err(Error::decode("inflated data is not UTF-8"));
        };

        ron::from_str(&text).map_err(|err| {
            log::warn!("Could not decode inflated RON");
            Error::decode(err.to_string())
        })
    }

    /// Plots the stored paths. Reference curves stored with the data are used
    /// unless `settings` provides its own.
    pub fn plot(
        &self,
        settings: &HomotopySettings,
        axs: Option<(&mut Axis, &mut Axis)>,
    ) -> Result<Option<Figure>> {
        let settings = HomotopySettings {
            rzero: settings.rzero.clone().or_else(|| self.rzero.clone()),
            czero: settings.czero.clone().or_else(|| self.czero.clone()),
            equal: settings.equal,
        };
        plot_homotopy(&self.ppath, &self.xpaths, &settings, axs)
    }
}

fn deflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    use std::io::Write;

    let mut enc = flate2::write::DeflateEncoder::new(Vec::new(), flate2::Compression::best());
    enc.write_all(bytes)?;
    enc.finish()
}

fn inflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    use std::io::Write;

    let mut dec = flate2::write::DeflateDecoder::new(Vec::new());
    dec.write_all(bytes)?;
    dec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HomotopyData {
        HomotopyData {
            ppath: vec![0.0, 0.5, 1.0],
            xpaths: vec![
                vec![
                    Complex64::new(1.0, 0.0),
                    Complex64::new(0.5, 0.5),
                    Complex64::new(0.0, 1.0),
                ],
                vec![
                    Complex64::new(-1.0, 0.0),
                    Complex64::new(-0.5, -0.5),
                    Complex64::new(0.0, -1.0),
                ],
            ],
            rzero: Some(vec![0.0; 3]),
            czero: None,
        }
    }

    #[test]
    fn decodes_every_encoding() {
        let data = sample();

        let ron = data.encode().unwrap();
        assert_eq!(HomotopyData::decode(&ron).unwrap(), data);

        let compressed = data.encode_compressed().unwrap();
        assert_eq!(HomotopyData::decode(&compressed).unwrap(), data);

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(HomotopyData::decode(&json).unwrap(), data);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let data = HomotopyData::decode("(ppath: [0.0, 1.0])").unwrap();
        assert_eq!(data.ppath, vec![0.0, 1.0]);
        assert!(data.xpaths.is_empty());
        assert_eq!(data.rzero, None);
    }

    #[test]
    fn rejects_garbage() {
        let err = HomotopyData::decode("not a homotopy!").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn rejects_corrupt_deflate() {
        // Valid base64, but neither payload is a deflate stream.
        for input in ["aGVsbG8=", "_____w=="] {
            let err = HomotopyData::decode(input).unwrap_err();
            assert!(matches!(err, Error::Decode(_)), "{input}: {err:?}");
        }
    }

    #[test]
    fn plot_uses_stored_reference_curves() {
        let data = sample();
        let figure = data.plot(&Default::default(), None).unwrap().unwrap();

        let real = &figure.axes()[0];
        let imag = &figure.axes()[1];
        assert_eq!(real.lines().len(), 3);
        assert!(real.lines()[0].has_option("dashed"));
        assert_eq!(imag.lines().len(), 2);
    }

    #[test]
    fn settings_override_stored_reference_curves() {
        let data = sample();
        let settings = HomotopySettings {
            rzero: Some(vec![1.0; 3]),
            ..Default::default()
        };
        let figure = data.plot(&settings, None).unwrap().unwrap();
        assert_eq!(figure.axes()[0].lines()[0].xs(), vec![1.0; 3]);
    }
}
