//! X-ray page state: chosen area, chosen file, in-flight flag, and result.

#[cfg(test)]
#[path = "xray_test.rs"]
mod xray_test;

use predict::{ScanArea, XrayReport};

/// Shown whenever a scan fails, whatever the cause.
pub const SCAN_FAILED_MESSAGE: &str = "Backend connection failed. Is the prediction service running?";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct XrayState {
    pub area: Option<ScanArea>,
    /// Name of the attached image; the file handle itself stays in the DOM input.
    pub file_name: Option<String>,
    pub loading: bool,
    pub report: Option<XrayReport>,
    pub error: Option<String>,
}

impl XrayState {
    /// Choosing an area discards the attached file and any previous outcome.
    pub fn select_area(&mut self, area: ScanArea) {
        self.area = Some(area);
        self.file_name = None;
        self.report = None;
        self.error = None;
    }

    pub fn attach_file(&mut self, file_name: Option<String>) {
        self.file_name = file_name.filter(|name| !name.is_empty());
        self.report = None;
        self.error = None;
    }

    pub fn can_pick_file(&self) -> bool {
        self.area.is_some() && !self.loading
    }

    pub fn can_scan(&self) -> bool {
        self.area.is_some() && self.file_name.is_some() && !self.loading
    }

    /// Enter the in-flight state, returning the area to scan.
    pub fn begin_scan(&mut self) -> Option<ScanArea> {
        if !self.can_scan() {
            return None;
        }
        self.loading = true;
        self.report = None;
        self.error = None;
        self.area
    }

    pub fn finish_scan(&mut self, result: Result<XrayReport, String>) {
        self.loading = false;
        match result {
            Ok(report) => self.report = Some(report),
            Err(_) => self.error = Some(SCAN_FAILED_MESSAGE.to_owned()),
        }
    }

    pub fn scan_label(&self) -> &'static str {
        if self.loading { "Scanning..." } else { "Scan X-Ray" }
    }

    pub fn picker_label(&self) -> String {
        match self.area {
            Some(area) => format!("Select X-Ray Image ({area})"),
            None => "Select an area first".to_owned(),
        }
    }
}
