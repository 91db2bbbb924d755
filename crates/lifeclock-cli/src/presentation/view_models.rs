use chrono::{NaiveDate, NaiveDateTime};
use lifeclock_engine::{Frame, OverlayRegions};
use lifeclock_types::{ButtonRect, Configuration, Perspective};
use serde::Serialize;
use std::path::Path;

/// JSON shape of `render --format json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameViewModel {
    pub at: NaiveDateTime,
    pub perspective: Perspective,
    pub configured: bool,
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub edit: ButtonRect,
    pub switch: ButtonRect,
    pub overlay: Option<OverlayRegions>,
}

impl FrameViewModel {
    pub fn new(
        frame: Frame,
        at: NaiveDateTime,
        perspective: Perspective,
        configured: bool,
    ) -> Self {
        Self {
            at,
            perspective,
            configured,
            width: lifeclock_engine::WIDTH,
            height: lifeclock_engine::HEIGHT,
            rows: frame.grid.rows(),
            edit: frame.edit,
            switch: frame.switch,
            overlay: frame.overlay,
        }
    }
}

/// JSON shape of `config show --format json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigViewModel {
    pub path: String,
    pub configured: bool,
    pub birth: Option<NaiveDate>,
    pub years: Option<u32>,
    pub end: Option<NaiveDate>,
}

impl ConfigViewModel {
    pub fn new(path: &Path, configuration: Option<&Configuration>) -> Self {
        Self {
            path: path.display().to_string(),
            configured: configuration.is_some(),
            birth: configuration.map(|c| c.reference.date()),
            years: configuration.map(|c| c.duration_years),
            end: configuration.map(|c| c.end().date()),
        }
    }
}
