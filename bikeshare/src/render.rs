//! Template rendering for CLI output using outstanding

use bikesharelib::report::{BirthYearStats, DurationStats, StationStats, TimeStats, UserStats};
use bikesharelib::{RawTable, Report, Schema, Section, Tally, Timed, Window};
use console::Style;
use outstanding::{render_with_output, OutputMode, Theme};
use serde::Serialize;

/// Include templates at compile time
const REPORT_TEMPLATE: &str = include_str!("../templates/report.jinja");
const RAW_ROWS_TEMPLATE: &str = include_str!("../templates/raw_rows.jinja");

/// Width of the separator drawn between sections
const SEPARATOR_WIDTH: usize = 40;

/// One report section, pre-formatted for the template
#[derive(Debug, Serialize)]
struct SectionContext {
    title: String,
    lines: Vec<String>,
    /// "This took N seconds." line
    timing: String,
}

/// Data context for the report template
#[derive(Debug, Serialize)]
struct ReportContext {
    criteria: String,
    trips: String,
    separator: String,
    sections: Vec<SectionContext>,
}

/// Data context for the raw rows template
#[derive(Debug, Serialize)]
struct RawRowsContext {
    /// Pre-padded header line
    header: String,
    /// Pre-padded data lines
    rows: Vec<String>,
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new().add("category", Style::new().bold())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Format a number of seconds with up to 2 decimals and no trailing zeros.
fn format_seconds(seconds: f64) -> String {
    let text = format!("{seconds:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn time_lines(stats: &TimeStats) -> Vec<String> {
    vec![
        format!(
            "Most common month: {} ({})",
            stats.month_name,
            plural(stats.month.count, "trip")
        ),
        format!(
            "Most common day of the week: {} ({})",
            stats.day_of_week.value,
            plural(stats.day_of_week.count, "trip")
        ),
        format!(
            "Most common starting hour: {} ({})",
            stats.start_hour.value,
            plural(stats.start_hour.count, "trip")
        ),
    ]
}

fn station_lines(stats: &StationStats) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Most commonly used starting station: {} ({})",
            stats.start_station.value,
            plural(stats.start_station.count, "trip")
        ),
        format!(
            "Most commonly used ending station: {} ({})",
            stats.end_station.value,
            plural(stats.end_station.count, "trip")
        ),
        format!(
            "Most popular trip(s), {} each:",
            plural(stats.popular_trips.count, "trip")
        ),
    ];
    lines.extend(
        stats
            .popular_trips
            .trips
            .iter()
            .map(|pair| format!("  {} -> {}", pair.start_station, pair.end_station)),
    );
    lines
}

fn duration_lines(stats: &DurationStats) -> Vec<String> {
    let mean = match stats.mean_seconds {
        Some(mean) => format!("Average travel time: {} seconds", format_seconds(mean)),
        None => "Average travel time is unavailable: no trips were selected.".to_string(),
    };
    vec![
        format!(
            "Total travel time: {} seconds",
            format_seconds(stats.total_seconds)
        ),
        mean,
    ]
}

fn tally_lines(tallies: &[Tally<String>]) -> Vec<String> {
    let width = tallies.iter().map(|t| t.value.len()).max().unwrap_or(0);
    tallies
        .iter()
        .map(|t| format!("  {:<width$}  {}", t.value, t.count, width = width))
        .collect()
}

fn birth_year_lines(stats: &BirthYearStats) -> Vec<String> {
    vec![
        format!(
            "Most common year of birth: {} ({})",
            stats.most_common.value,
            plural(stats.most_common.count, "rider")
        ),
        format!("Earliest year of birth: {}", stats.earliest),
        format!("Most recent year of birth: {}", stats.most_recent),
    ]
}

fn user_lines(stats: &UserStats) -> Vec<String> {
    let mut lines = vec!["User type count:".to_string()];
    lines.extend(tally_lines(&stats.user_types));

    match &stats.genders {
        Section::Available(genders) => {
            lines.push("Gender count:".to_string());
            lines.extend(tally_lines(genders));
        }
        Section::Unavailable { reason } => lines.push(reason.clone()),
    }

    match &stats.birth_years {
        Section::Available(years) => lines.extend(birth_year_lines(years)),
        Section::Unavailable { reason } => lines.push(reason.clone()),
    }
    lines
}

fn section_context<T>(
    title: &str,
    timed: &Timed<T>,
    lines: impl FnOnce(&T) -> Vec<String>,
) -> SectionContext {
    let lines = match &timed.section {
        Section::Available(stats) => lines(stats),
        Section::Unavailable { reason } => vec![format!("Unavailable: {reason}.")],
    };
    SectionContext {
        title: title.to_string(),
        lines,
        timing: format!("This took {:.6} seconds.", timed.elapsed_secs),
    }
}

fn build_report_context(report: &Report) -> ReportContext {
    ReportContext {
        criteria: report.criteria.to_string(),
        trips: format!("Trips selected: {}", report.trip_count),
        separator: "-".repeat(SEPARATOR_WIDTH),
        sections: vec![
            section_context(
                "Calculating The Most Frequent Times of Travel...",
                &report.time,
                time_lines,
            ),
            section_context(
                "Calculating The Most Popular Stations and Trip...",
                &report.stations,
                station_lines,
            ),
            section_context(
                "Calculating Trip Duration...",
                &report.durations,
                duration_lines,
            ),
            section_context("Calculating User Stats...", &report.users, user_lines),
        ],
    }
}

/// Render the statistics report to string using outstanding
pub fn render_report(report: &Report) -> Result<String, Box<dyn std::error::Error>> {
    let theme = create_theme();
    let context = build_report_context(report);
    let rendered = render_with_output(REPORT_TEMPLATE, &context, &theme, OutputMode::Text)?;
    Ok(rendered)
}

/// Pad every cell of `table` to its column width.
fn build_raw_context(table: &RawTable) -> RawRowsContext {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.len()).collect();
    for row in &table.rows {
        let cells = std::iter::once(&row.label).chain(&row.values);
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let pad = |cells: Vec<&String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    RawRowsContext {
        header: pad(table.headers.iter().collect()),
        rows: table
            .rows
            .iter()
            .map(|row| pad(std::iter::once(&row.label).chain(&row.values).collect()))
            .collect(),
    }
}

/// Render one pager window of raw rows using outstanding
pub fn render_raw_window(
    window: &Window<'_>,
    schema: Schema,
) -> Result<String, Box<dyn std::error::Error>> {
    let theme = create_theme();
    let table = RawTable::from_window(window, schema);
    let context = build_raw_context(&table);
    let rendered = render_with_output(RAW_ROWS_TEMPLATE, &context, &theme, OutputMode::Text)?;
    Ok(format!("\n{rendered}\n"))
}
