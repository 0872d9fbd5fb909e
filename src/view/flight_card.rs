//! Flight card widget.
//!
//! One bordered card per revealed flight: airline, flight number with code and
//! status, then a departure and an arrival row with estimated time, airport
//! code, date, scheduled time and airport name.

use crate::model::{Endpoint, FlightRecord};
use crate::view::styles::BoardStyles;
use chrono::{DateTime, Timelike};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown in place of a time that is missing or not RFC 3339.
pub const UNKNOWN_TIME: &str = "--:--";

/// Shown in place of any other missing field.
const UNKNOWN: &str = "-";

/// Format an RFC 3339 timestamp as `HH:MM AM|PM`.
///
/// The hour is taken in the timestamp's own offset and zero-padded, not
/// converted to 12-hour form: `"2019-12-12T14:05:00+00:00"` → `"14:05 PM"`.
pub fn format_flight_time(timestamp: Option<&str>) -> String {
    let Some(parsed) = timestamp.and_then(|t| DateTime::parse_from_rfc3339(t).ok()) else {
        return UNKNOWN_TIME.to_string();
    };
    let hour = parsed.hour();
    let suffix = if hour < 12 { "AM" } else { "PM" };
    format!("{:02}:{:02} {}", hour, parsed.minute(), suffix)
}

/// Bordered card rendering one `FlightRecord`.
pub struct FlightCard<'a> {
    record: &'a FlightRecord,
    styles: &'a BoardStyles,
}

impl<'a> FlightCard<'a> {
    /// Card for `record`.
    pub fn new(record: &'a FlightRecord, styles: &'a BoardStyles) -> Self {
        Self { record, styles }
    }

    fn endpoint_line(&self, label: &'static str, endpoint: &'a Endpoint) -> Line<'a> {
        let mut spans = vec![
            Span::styled(format!("{:<8}", label), self.styles.muted),
            Span::styled(
                format_flight_time(endpoint.estimated.as_deref()),
                self.styles.time,
            ),
            Span::raw("  "),
            Span::raw(endpoint.iata().unwrap_or(UNKNOWN)),
            Span::raw("  "),
            Span::styled(
                self.record.flight_date.as_deref().unwrap_or(UNKNOWN),
                self.styles.muted,
            ),
        ];
        if let Some(scheduled) = endpoint.scheduled.as_deref() {
            spans.push(Span::styled(
                format!("  sched {}", format_flight_time(Some(scheduled))),
                self.styles.muted,
            ));
        }
        if let Some(airport) = endpoint.airport.as_deref() {
            spans.push(Span::raw(format!("  {}", airport)));
        }
        Line::from(spans)
    }

    fn flight_line(&self) -> Line<'a> {
        let record = self.record;
        let flight = &record.flight;
        let mut spans = vec![
            Span::styled("Flight number: ", self.styles.muted),
            Span::raw(flight.number.as_deref().unwrap_or(UNKNOWN)),
        ];
        if let Some(code) = flight.iata.as_deref() {
            spans.push(Span::raw(format!(" ({})", code)));
        }
        if let Some(status) = record.flight_status.as_deref() {
            spans.push(Span::styled(format!("  {}", status), self.styles.hint));
        }
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let record = self.record;
        vec![
            Line::from(vec![
                Span::styled("Airline company: ", self.styles.muted),
                Span::styled(
                    record.airline.name.as_deref().unwrap_or(UNKNOWN),
                    self.styles.airline,
                ),
            ]),
            self.flight_line(),
            self.endpoint_line("Depart", &record.departure),
            self.endpoint_line("Arrive", &record.arrival),
        ]
    }
}

impl Widget for FlightCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.card_border);
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
