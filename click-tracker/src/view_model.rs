use crate::config::ApiConfig;
use crate::counts::Button;
use crate::tracker::ClickTracker;

pub const HEADING: &str = "☕ Click Tracker";
pub const LOADING_TEXT: &str = "Loading…";
pub const CLEAR_LABEL: &str = "Clear All Clicks";

/// Everything the page shows, as text. Front-ends lay this out; they do not
/// decide what it says.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub heading: &'static str,
    pub api_line: String,
    pub loading_line: Option<&'static str>,
    pub error_line: Option<String>,
    pub buttons: Vec<ButtonView>,
    pub clear_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub button: Button,
    pub label: String,
    pub count_label: String,
    pub count: u64,
}

impl ViewModel {
    pub fn new(tracker: &ClickTracker, config: &ApiConfig) -> Self {
        let counts = tracker.counts();

        ViewModel {
            heading: HEADING,
            api_line: format!("API: {}", config.base_url()),
            loading_line: tracker.loading().then_some(LOADING_TEXT),
            error_line: tracker.error_message().map(|msg| format!("Error: {}", msg)),
            buttons: Button::ALL
                .iter()
                .map(|&button| ButtonView {
                    button,
                    label: format!("Button {}", button),
                    count_label: format!("{}:", button),
                    count: counts.get(button),
                })
                .collect(),
            clear_label: CLEAR_LABEL,
        }
    }

    /// The count lines as displayed, e.g. `["A: 5", "B: 2"]`.
    pub fn count_lines(&self) -> Vec<String> {
        self.buttons
            .iter()
            .map(|view| format!("{} {}", view.count_label, view.count))
            .collect()
    }
}
