//! HTML fragment renderer.
//!
//! Projects slices of application state into the markup for each page
//! section. Rendering is full-replace: every call regenerates the whole
//! fragment from state, so rendering twice with unchanged state yields
//! identical output. All interpolated text is escaped.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{Beach, CleanupEvent, CrewMember, DialogState, WeatherSnapshot};

/// Escape text for safe interpolation into HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One card per beach in the catalog.
pub fn beach_grid(beaches: &[Beach]) -> String {
    let mut html = String::new();
    for beach in beaches {
        html.push_str(&format!(
            concat!(
                "<article class=\"beach-card\" data-beach-id=\"{id}\">",
                "<img src=\"{image}\" alt=\"{name}\" loading=\"lazy\">",
                "<div class=\"beach-card-content\">",
                "<h3>{name}</h3>",
                "<p class=\"beach-location\">{location}</p>",
                "<span class=\"badge\">{difficulty}</span>",
                "<p class=\"beach-description\">{description}</p>",
                "</div>",
                "</article>"
            ),
            id = beach.id,
            image = escape(&beach.image),
            name = escape(&beach.name),
            location = escape(&beach.location),
            difficulty = beach.difficulty.as_str(),
            description = escape(&beach.description),
        ));
    }
    html
}

/// One row per crew member, with message and remove actions.
pub fn crew_roster(crew: &[CrewMember]) -> String {
    let mut html = String::new();
    for member in crew {
        html.push_str(&format!(
            concat!(
                "<div class=\"crew-member\" data-member-id=\"{id}\">",
                "<div class=\"crew-member-info\">",
                "<div class=\"crew-member-avatar\">{avatar}</div>",
                "<div>",
                "<div class=\"crew-member-name\">{name}</div>",
                "<div class=\"crew-member-role\">{role}</div>",
                "</div>",
                "</div>",
                "<div class=\"crew-member-actions\">",
                "<button class=\"btn-small\" data-action=\"message\">Message</button>",
                "<button class=\"btn-small btn-danger\" data-action=\"remove\">Remove</button>",
                "</div>",
                "</div>"
            ),
            id = member.id,
            avatar = escape(&member.avatar),
            name = escape(&member.name),
            role = escape(&member.role),
        ));
    }
    html
}

/// One card per scheduled event, with a join action.
pub fn event_list(events: &[CleanupEvent]) -> String {
    let mut html = String::new();
    for event in events {
        html.push_str(&format!(
            concat!(
                "<article class=\"event-card\" data-event-id=\"{id}\">",
                "<div class=\"event-card-header\">",
                "<h3>{name}</h3>",
                "<div class=\"event-date\">{schedule}</div>",
                "</div>",
                "<div class=\"event-card-body\">",
                "<div class=\"event-detail event-beach\">{beach}</div>",
                "<div class=\"event-detail event-attendees\">{attendees} attendees</div>",
                "<p class=\"event-description\">{description}</p>",
                "<button class=\"btn btn-primary\" data-action=\"join\">Join Event</button>",
                "</div>",
                "</article>"
            ),
            id = event.id,
            name = escape(&event.name),
            schedule = escape(&format_schedule(&event.date, &event.time)),
            beach = escape(&event.beach_name),
            attendees = event.attendees,
            description = escape(&event.description),
        ));
    }
    html
}

/// Four fixed stat tiles from the weather snapshot.
pub fn weather_panel(weather: &WeatherSnapshot) -> String {
    let tiles = [
        (
            format!("{}°F", weather.temperature),
            escape(&weather.condition),
        ),
        (format!("{}%", weather.humidity), "Humidity".to_string()),
        (
            format!("{} mph", weather.wind_speed),
            "Wind Speed".to_string(),
        ),
        (format!("{}/10", weather.uv_index), "UV Index".to_string()),
    ];

    let mut html = String::new();
    for (value, label) in tiles {
        html.push_str(&format!(
            "<div class=\"weather-card\"><h3>{}</h3><p>{}</p></div>",
            value, label
        ));
    }
    html
}

/// The event-creation dialog, reflecting its open/closed state.
pub fn event_dialog(state: DialogState) -> String {
    let (class, hidden) = match state {
        DialogState::Open => ("modal active", "false"),
        DialogState::Closed => ("modal", "true"),
    };

    format!(
        concat!(
            "<div id=\"eventModal\" class=\"{class}\" aria-hidden=\"{hidden}\">",
            "<div class=\"modal-content\">",
            "<button class=\"close-modal\" aria-label=\"Close\">&times;</button>",
            "<h2>Create New Event</h2>",
            "<form id=\"eventForm\">",
            "<input type=\"text\" name=\"name\" placeholder=\"Event name\">",
            "<input type=\"date\" name=\"date\">",
            "<input type=\"time\" name=\"time\">",
            "<textarea name=\"description\" placeholder=\"Description\"></textarea>",
            "<button type=\"submit\" class=\"btn btn-primary\">Create Event</button>",
            "</form>",
            "</div>",
            "</div>"
        ),
        class = class,
        hidden = hidden,
    )
}

/// Format an event's date and time for display, e.g. "Sun, Jun 15 at 09:00 AM".
///
/// Events are stored with whatever the form submitted, so values that do not
/// parse fall back to the raw strings.
fn format_schedule(date: &str, time: &str) -> String {
    let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d");
    let parsed_time = NaiveTime::parse_from_str(time, "%H:%M");

    match (parsed_date, parsed_time) {
        (Ok(d), Ok(t)) => format!("{} at {}", d.format("%a, %b %-d"), t.format("%I:%M %p")),
        _ => format!("{} at {}", date, time),
    }
}
