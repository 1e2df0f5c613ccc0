use gfk_core::serde_io::{from_json_slice, from_yaml_slice};
use gfk_core::{ErrorInfo, GfkError};
use serde::{Deserialize, Serialize};

/// Options for [`Construction::build_with`](crate::Construction::build_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildOpts {
    /// Worker count for a dedicated pool; `None` runs on the global rayon pool.
    #[serde(default)]
    pub threads: Option<usize>,
    /// Bidegrees to keep.
    #[serde(default)]
    pub window: DegreeWindow,
}

impl BuildOpts {
    /// Parses options from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GfkError> {
        let opts: Self = from_yaml_slice(yaml.as_bytes())?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parses options from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, GfkError> {
        let opts: Self = from_json_slice(json.as_bytes())?;
        opts.validate()?;
        Ok(opts)
    }

    /// Rejects a zero-worker pool and windows whose bounds cross.
    pub fn validate(&self) -> Result<(), GfkError> {
        if self.threads == Some(0) {
            return Err(GfkError::Config(
                ErrorInfo::new("zero-threads", "a dedicated pool needs at least one worker")
                    .with_hint("omit `threads` to use the global pool"),
            ));
        }
        if let Some((min, max)) = self.window.inverted_bound() {
            return Err(GfkError::Config(
                ErrorInfo::new("inverted-window", "degree window lower bound exceeds upper bound")
                    .with_context("min", min)
                    .with_context("max", max),
            ));
        }
        Ok(())
    }
}

/// Inclusive bounds on Maslov and Alexander gradings; missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DegreeWindow {
    /// Smallest Maslov grading kept.
    #[serde(default)]
    pub min_maslov: Option<i32>,
    /// Largest Maslov grading kept.
    #[serde(default)]
    pub max_maslov: Option<i32>,
    /// Smallest Alexander grading kept.
    #[serde(default)]
    pub min_alexander: Option<i32>,
    /// Largest Alexander grading kept.
    #[serde(default)]
    pub max_alexander: Option<i32>,
}

impl DegreeWindow {
    /// Window accepting every bidegree.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Window keeping only the given Maslov gradings.
    pub fn maslov(min: i32, max: i32) -> Self {
        Self {
            min_maslov: Some(min),
            max_maslov: Some(max),
            ..Self::default()
        }
    }

    /// Whether `(maslov, alexander)` lies inside the window.
    pub fn contains(&self, maslov: i32, alexander: i32) -> bool {
        within(maslov, self.min_maslov, self.max_maslov)
            && within(alexander, self.min_alexander, self.max_alexander)
    }

    fn inverted_bound(&self) -> Option<(i32, i32)> {
        [
            (self.min_maslov, self.max_maslov),
            (self.min_alexander, self.max_alexander),
        ]
        .into_iter()
        .find_map(|bounds| match bounds {
            (Some(min), Some(max)) if min > max => Some((min, max)),
            _ => None,
        })
    }
}

fn within(value: i32, min: Option<i32>, max: Option<i32>) -> bool {
    min.map_or(true, |min| min <= value) && max.map_or(true, |max| value <= max)
}
