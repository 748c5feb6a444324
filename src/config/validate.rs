use crate::config::model::{Caption, ResultConfig, VideoConfig};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct ConfigError {
    pub(crate) path: Vec<ConfigPathElem>,
    pub(crate) message: String,
}

impl ConfigError {
    fn at(path: &[ConfigPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[ConfigPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            ConfigPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            ConfigPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct ConfigErrors {
    pub(crate) errors: Vec<ConfigError>,
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

pub(crate) fn validate_video_config(cfg: &VideoConfig) -> Result<(), ConfigErrors> {
    let mut errors = Vec::new();

    validate_results(&cfg.results, &mut errors);
    if let Some(captions) = &cfg.captions_data {
        validate_captions(captions, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigErrors { errors })
    }
}

fn validate_results(results: &ResultConfig, errors: &mut Vec<ConfigError>) {
    let ResultConfig::Recording {
        duration_in_seconds: Some(secs),
        ..
    } = results
    else {
        return;
    };

    if !secs.is_finite() || *secs < 0.0 {
        errors.push(ConfigError::at(
            &[
                ConfigPathElem::Field("results"),
                ConfigPathElem::Field("durationInSeconds"),
            ],
            "durationInSeconds must be finite and >= 0",
        ));
    }
}

fn validate_captions(captions: &[Caption], errors: &mut Vec<ConfigError>) {
    let mut prev_start = f64::NEG_INFINITY;
    for (i, caption) in captions.iter().enumerate() {
        let path = [ConfigPathElem::Field("captionsData"), ConfigPathElem::Index(i)];

        if !valid_span(caption.start_time, caption.end_time) {
            errors.push(ConfigError::at(
                &path,
                "startTime and endTime must be finite with 0 <= startTime <= endTime",
            ));
        } else if caption.start_time < prev_start {
            errors.push(ConfigError::at(
                &path,
                "captions must be ordered by startTime",
            ));
        }
        if caption.start_time.is_finite() {
            prev_start = prev_start.max(caption.start_time);
        }

        for (w, word) in caption.words.iter().enumerate() {
            if !valid_span(word.start, word.end) {
                let mut word_path = path.to_vec();
                word_path.push(ConfigPathElem::Field("words"));
                word_path.push(ConfigPathElem::Index(w));
                errors.push(ConfigError::at(
                    &word_path,
                    format!(
                        "word '{}': start and end must be finite with 0 <= start <= end",
                        word.word
                    ),
                ));
            }
        }
    }
}

fn valid_span(start: f64, end: f64) -> bool {
    start.is_finite() && end.is_finite() && start >= 0.0 && start <= end
}

#[cfg(test)]
#[path = "../../tests/unit/config/validate.rs"]
mod tests;
