//! Renderer-independent description of the dashboard.
//!
//! [`render`] turns state into plain data that the frontend maps onto
//! HTML. Keeping it free of any UI types makes the layout testable.

use chrono::Datelike;
use common::{Confidence, Hormone, ScoreBand};

use crate::dashboard::DashboardState;
use crate::format::{DateFormatter, format_date_range};
use crate::insight::MAX_FERTILITY_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogAction {
    pub label: &'static str,
    pub kind: &'static str,
}

pub const LOG_ACTIONS: [LogAction; 4] = [
    LogAction { label: "Log Symptoms", kind: "Symptoms" },
    LogAction { label: "Log Temp (BBT)", kind: "Temperature" },
    LogAction { label: "Log Mood", kind: "Mood" },
    LogAction { label: "Log Test Result", kind: "Test Result" },
];

pub const COMPLIANCE_NOTE: &str = "This is a dashboard simulation. Ensure all data handling complies with HIPAA and other relevant privacy regulations in a real application.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleCard {
    pub current_day: u32,
    pub fertile_window: String,
    pub predicted_period: String,
    pub cycle_length: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightCard {
    /// "8/10"
    pub score: String,
    pub band: ScoreBand,
    pub confidence: Confidence,
    pub confidence_label: String,
    pub insight: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartAxis {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub hormone: Hormone,
    pub name: String,
    pub color: &'static str,
    pub axis: ChartAxis,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub days: Vec<u32>,
    pub series: Vec<ChartSeries>,
    /// Day of the LH peak, marked on the chart
    pub surge_day: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub note: &'static str,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub notice: Option<String>,
    pub cycle: CycleCard,
    pub insight: InsightCard,
    pub log_actions: Vec<LogAction>,
    pub trends: TrendChart,
    pub footer: Footer,
}

fn series_color(hormone: Hormone) -> &'static str {
    match hormone {
        Hormone::Lh => "#8b5cf6",
        Hormone::E3g => "#10b981",
        Hormone::Pdg => "#ec4899",
    }
}

fn series_axis(hormone: Hormone) -> ChartAxis {
    match hormone {
        Hormone::Lh | Hormone::E3g => ChartAxis::Left,
        Hormone::Pdg => ChartAxis::Right,
    }
}

fn trend_chart(state: &DashboardState) -> TrendChart {
    let series = Hormone::ALL
        .iter()
        .map(|&hormone| ChartSeries {
            hormone,
            name: hormone.label(),
            color: series_color(hormone),
            axis: series_axis(hormone),
            values: state.hormones.readings(hormone),
        })
        .collect();

    TrendChart {
        days: state.hormones.days(),
        series,
        surge_day: state.hormones.peak(Hormone::Lh).map(|s| s.day),
    }
}

/// Builds the visual tree for the current state. Has no side effects.
pub fn render(
    state: &DashboardState,
    notice: Option<&str>,
    formatter: &dyn DateFormatter,
) -> DashboardModel {
    let cycle = &state.cycle;
    let insight = &state.insight;

    DashboardModel {
        notice: notice.map(str::to_owned),
        cycle: CycleCard {
            current_day: cycle.current_day,
            fertile_window: format_date_range(
                formatter,
                cycle.fertile_window_start,
                cycle.fertile_window_end,
            ),
            predicted_period: formatter.short_date(cycle.period_start_date),
            cycle_length: format!("{} days", cycle.cycle_length),
        },
        insight: InsightCard {
            score: format!("{}/{}", insight.fertility_score, MAX_FERTILITY_SCORE),
            band: insight.score_band(),
            confidence: insight.confidence,
            confidence_label: format!("{} Confidence", insight.confidence),
            insight: insight.insight.clone(),
        },
        log_actions: LOG_ACTIONS.to_vec(),
        trends: trend_chart(state),
        footer: Footer {
            note: COMPLIANCE_NOTE,
            copyright: format!("\u{a9} {} Fertility Super App Concept", state.as_of.year()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::EnUsFormatter;
    use crate::sample::SampleDataSource;
    use chrono::NaiveDate;

    fn state() -> DashboardState {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        DashboardState::initialize(&SampleDataSource::new(), as_of).unwrap()
    }

    /// Formats every date as its ISO string.
    struct IsoFormatter;

    impl DateFormatter for IsoFormatter {
        fn short_date(&self, date: NaiveDate) -> String {
            date.to_string()
        }
    }

    #[test]
    fn test_render_cycle_card() {
        let model = render(&state(), None, &EnUsFormatter);

        assert_eq!(model.cycle.current_day, 14);
        assert_eq!(model.cycle.fertile_window, "Jun 2 - Jun 7");
        assert_eq!(model.cycle.predicted_period, "Jun 19");
        assert_eq!(model.cycle.cycle_length, "28 days");
    }

    #[test]
    fn test_render_insight_card() {
        let model = render(&state(), None, &EnUsFormatter);

        assert_eq!(model.insight.score, "8/10");
        assert_eq!(model.insight.band, ScoreBand::Good);
        assert_eq!(model.insight.confidence_label, "High Confidence");
    }

    #[test]
    fn test_render_uses_supplied_formatter() {
        let model = render(&state(), None, &IsoFormatter);

        assert_eq!(model.cycle.predicted_period, "2024-06-19");
        assert_eq!(model.cycle.fertile_window, "2024-06-02 - 2024-06-07");
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = state();
        let first = render(&state, Some("Navigating to log Mood... (Simulated)"), &EnUsFormatter);
        let second = render(&state, Some("Navigating to log Mood... (Simulated)"), &EnUsFormatter);

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_notice_only_when_present() {
        let state = state();

        assert!(render(&state, None, &EnUsFormatter).notice.is_none());
        assert_eq!(
            render(&state, Some("hello"), &EnUsFormatter).notice.as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn test_trend_chart_axes_and_surge() {
        let chart = render(&state(), None, &EnUsFormatter).trends;

        assert_eq!(chart.days.len(), 15);
        assert_eq!(chart.surge_day, Some(13));

        let axes: Vec<_> = chart.series.iter().map(|s| (s.name.as_str(), s.axis)).collect();
        assert_eq!(
            axes,
            vec![
                ("LH (mIU/mL)", ChartAxis::Left),
                ("E3G (ng/mL)", ChartAxis::Left),
                ("PdG (ug/mL)", ChartAxis::Right),
            ]
        );
        assert!(chart.series.iter().all(|s| s.values.len() == chart.days.len()));
    }

    #[test]
    fn test_log_actions_and_footer() {
        let model = render(&state(), None, &EnUsFormatter);

        let kinds: Vec<_> = model.log_actions.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec!["Symptoms", "Temperature", "Mood", "Test Result"]);
        assert_eq!(model.footer.copyright, "\u{a9} 2024 Fertility Super App Concept");
        assert!(model.footer.note.contains("HIPAA"));
    }
}
