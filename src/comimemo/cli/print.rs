use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use comimemo::api::{ChoiceGroup, CmdMessage, MessageLevel};
use comimemo::config::ComimemoConfig;
use comimemo::index::DisplayCircle;
use comimemo::model::Priority;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACE_WIDTH: usize = 8;
const ARTIST_WIDTH: usize = 24;
const DIRECTION_WIDTH: usize = 7;
const PRIORITY_WIDTH: usize = 8;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", style_message(message));
    }
}

fn style_message(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

pub(super) fn print_circles(circles: &[DisplayCircle]) {
    print!("{}", render_circles(circles));
}

pub(super) fn render_circles(circles: &[DisplayCircle]) -> String {
    if circles.is_empty() {
        return "No circles yet.\n".to_string();
    }

    let mut output = String::new();
    for dc in circles {
        let circle = &dc.circle;
        let idx = format!("{:>3}. ", dc.position.get());
        let place = pad_to_width(&circle.place, PLACE_WIDTH);
        let artist = pad_to_width(
            &truncate_to_width(&circle.artist_name, ARTIST_WIDTH),
            ARTIST_WIDTH,
        );
        let direction = pad_to_width(&circle.direction, DIRECTION_WIDTH);
        let priority = style_priority(
            &circle.priority,
            &pad_to_width(circle.priority.label(), PRIORITY_WIDTH),
        );
        let time_ago = format_time_ago(circle.created_at);

        output.push_str(&format!(
            "{}{} {} {} {}{}\n",
            idx,
            place.bold(),
            artist,
            direction.dimmed(),
            priority,
            time_ago.dimmed()
        ));
    }
    output
}

fn style_priority(priority: &Priority, text: &str) -> ColoredString {
    match priority {
        Priority::High => text.red().bold(),
        Priority::Medium => text.yellow(),
        Priority::Low => text.blue(),
        Priority::Unranked(_) => text.dimmed(),
    }
}

pub(super) fn print_choices(groups: &[ChoiceGroup]) {
    print!("{}", render_choices(groups));
}

pub(super) fn render_choices(groups: &[ChoiceGroup]) -> String {
    let mut output = String::new();
    for group in groups {
        let options = if group.name == "desk" && group.options.len() > 2 {
            // 64 desk numbers are a range, not a list
            format!(
                "{}..{}",
                group.options.first().map(String::as_str).unwrap_or_default(),
                group.options.last().map(String::as_str).unwrap_or_default()
            )
        } else {
            group.options.join(" ")
        };
        output.push_str(&format!("{:<10} {}\n", group.name, options));
    }
    output
}

pub(super) fn print_config(config: &ComimemoConfig) {
    for key in ComimemoConfig::keys() {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use comimemo::commands::choices;
    use comimemo::index::index_circles;
    use comimemo::registry::CircleRegistry;
    use comimemo::sample::sample_circles;

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn renders_one_line_per_circle() {
        no_color();
        let registry = CircleRegistry::from_seed(sample_circles());
        let output = render_circles(&index_circles(registry.current_sequence()));

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  1. A-11a"));
        assert!(lines[0].contains("関本健治郎"));
        assert!(lines[0].contains("East"));
        assert!(lines[0].contains("High"));
        assert!(lines[2].starts_with("  3. C-32ab"));
    }

    #[test]
    fn columns_line_up_with_wide_characters() {
        no_color();
        let registry = CircleRegistry::from_seed(sample_circles());
        let output = render_circles(&index_circles(registry.current_sequence()));

        let direction_columns: Vec<_> = output
            .lines()
            .map(|line| {
                let byte_idx = line
                    .find("East")
                    .or_else(|| line.find("South"))
                    .or_else(|| line.find("West"))
                    .unwrap();
                line[..byte_idx].width()
            })
            .collect();
        assert!(direction_columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(render_circles(&[]), "No circles yet.\n");
    }

    #[test]
    fn truncates_long_names() {
        let long = "x".repeat(40);
        let truncated = truncate_to_width(&long, 10);
        assert_eq!(truncated.width(), 10);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("関", 4), "関  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn renders_desk_numbers_as_range() {
        let output = render_choices(&choices::run().choices);
        assert!(output.contains("desk       1..64"));
        assert!(output.contains("position   a b ab"));
    }
}
