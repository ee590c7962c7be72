//! Terminal rendering of list views.
//!
//! Rows are written through [`RowRenderer`] into any `Write`, so the same code
//! draws to stdout, to the interactive pager and into buffers in tests.

use crate::data_fetcher::models::{Competition, Match, Team};
use crossterm::style::{Color, Stylize, style};
use std::io::{self, Write};

use super::colors::{
    current_page_fg, error_fg, header_fg, muted_fg, status_fg, subheader_fg, text_fg,
};
use super::date_format::format_kickoff;
use super::list_view::{ListView, ViewState};
use super::pagination::PageControls;
use super::score_formatting::{Indicator, indicators, score_display};
use super::status::status_label;

const LOADING_TEXT: &str = "Загрузка...";
const INDICATOR_GLYPH: &str = "●";
const UNKNOWN_TEAM: &str = "?";

/// Draws one item of a list.
pub trait RowRenderer<T> {
    fn render_row(&self, item: &T, plain: bool, out: &mut dyn Write) -> io::Result<()>;
}

/// Writes `text` in `color`, or as is in plain mode.
fn write_colored(out: &mut dyn Write, text: &str, color: Color, plain: bool) -> io::Result<()> {
    if plain {
        out.write_all(text.as_bytes())
    } else {
        write!(out, "{}", style(text).with(color))
    }
}

pub struct CompetitionRow;

impl RowRenderer<Competition> for CompetitionRow {
    fn render_row(&self, item: &Competition, plain: bool, out: &mut dyn Write) -> io::Result<()> {
        let code = item
            .code
            .as_deref()
            .map(|c| format!(" [{c}]"))
            .unwrap_or_default();
        write_colored(out, &format!("{:>6}  ", item.id), muted_fg(), plain)?;
        write_colored(out, &format!("{}{code}", item.name), text_fg(), plain)?;
        if let Some(area) = item.area_name() {
            write_colored(out, &format!("  {area}"), subheader_fg(), plain)?;
        }
        if let Some(emblem) = &item.emblem {
            write_colored(out, &format!("  {emblem}"), muted_fg(), plain)?;
        }
        writeln!(out)
    }
}

pub struct TeamRow;

impl RowRenderer<Team> for TeamRow {
    fn render_row(&self, item: &Team, plain: bool, out: &mut dyn Write) -> io::Result<()> {
        write_colored(out, &format!("{:>6}  ", item.id), muted_fg(), plain)?;
        write_colored(out, &item.name, text_fg(), plain)?;
        if let Some(area) = item.area_name() {
            write_colored(out, &format!("  {area}"), subheader_fg(), plain)?;
        }
        if let Some(founded) = item.founded {
            write_colored(out, &format!("  осн. {founded}"), muted_fg(), plain)?;
        }
        writeln!(out)
    }
}

/// Match rows. Indicators are drawn only when `show_indicators` is set.
pub struct MatchRow {
    pub show_indicators: bool,
}

impl MatchRow {
    fn write_indicator(
        &self,
        indicator: Option<Indicator>,
        plain: bool,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        if !self.show_indicators {
            return write!(out, " ");
        }
        match indicator {
            Some(i) if plain => write!(out, " {} ", i.plain_symbol()),
            Some(i) => {
                write!(out, " ")?;
                write_colored(out, INDICATOR_GLYPH, i.color(), false)?;
                write!(out, " ")
            }
            None => write!(out, "   "),
        }
    }
}

impl RowRenderer<Match> for MatchRow {
    fn render_row(&self, item: &Match, plain: bool, out: &mut dyn Write) -> io::Result<()> {
        let marks = indicators(item);
        let home = item.home_team.name.as_deref().unwrap_or(UNKNOWN_TEAM);
        let away = item.away_team.name.as_deref().unwrap_or(UNKNOWN_TEAM);

        write_colored(out, &format_kickoff(item.kickoff()), muted_fg(), plain)?;
        write_colored(
            out,
            &format!("  {:<16}", status_label(&item.status)),
            status_fg(),
            plain,
        )?;
        write_colored(out, &format!("{home:>24}"), text_fg(), plain)?;
        self.write_indicator(marks.map(|(h, _)| h), plain, out)?;
        let score = score_display(item.score.as_ref(), &item.status).to_string();
        write_colored(out, &score, text_fg(), plain)?;
        self.write_indicator(marks.map(|(_, a)| a), plain, out)?;
        write_colored(out, away, text_fg(), plain)?;
        writeln!(out)
    }
}

/// Team details shown above the team's matches.
pub fn render_team_header(team: &Team, plain: bool, out: &mut dyn Write) -> io::Result<()> {
    write_colored(out, &team.name, header_fg(), plain)?;
    writeln!(out)?;
    let details = [
        ("Страна", team.area_name().map(str::to_string)),
        ("Основан", team.founded.map(|y| y.to_string())),
        ("Стадион", team.venue.clone()),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            write_colored(out, &format!("{label}: "), muted_fg(), plain)?;
            write_colored(out, &value, text_fg(), plain)?;
            writeln!(out)?;
        }
    }
    writeln!(out)
}

/// Page links in the form `‹ Назад  1 2 [3] 4 … Вперед ›`.
pub fn render_controls(controls: &PageControls, plain: bool, out: &mut dyn Write) -> io::Result<()> {
    if controls.has_previous {
        write!(out, "‹ Назад  ")?;
    }
    let mut first = true;
    for page in controls.pages() {
        if !first {
            write!(out, " ")?;
        }
        first = false;
        if page == controls.current {
            write_colored(out, &format!("[{page}]"), current_page_fg(), plain)?;
        } else {
            write!(out, "{page}")?;
        }
    }
    if controls.has_gap_after() {
        write!(out, " …")?;
    }
    if controls.has_next {
        write!(out, "  Вперед ›")?;
    }
    writeln!(out)
}

/// Draws the whole view: title, rows of the current page or the state text,
/// page controls and the total count footer.
pub fn render_list<T, R>(
    view: &ListView<T>,
    renderer: &R,
    plain: bool,
    out: &mut dyn Write,
) -> io::Result<()>
where
    R: RowRenderer<T>,
{
    if plain {
        writeln!(out, "{}", view.config().title)?;
    } else {
        writeln!(out, "{}", style(&view.config().title).with(header_fg()).bold())?;
    }
    writeln!(out)?;

    match view.state() {
        ViewState::Loading => {
            write_colored(out, LOADING_TEXT, muted_fg(), plain)?;
            writeln!(out)?;
        }
        ViewState::Failed(text) => {
            write_colored(out, text, error_fg(), plain)?;
            writeln!(out)?;
        }
        ViewState::Idle | ViewState::Ready => {
            let rows = view.page_items();
            if rows.is_empty() {
                write_colored(out, view.config().empty_text, muted_fg(), plain)?;
                writeln!(out)?;
            }
            for row in rows {
                renderer.render_row(row, plain, out)?;
            }
            if let Some(controls) = view.controls() {
                writeln!(out)?;
                render_controls(&controls, plain, out)?;
            }
            writeln!(out)?;
            let total = format!("{}: {}", view.config().total_label, view.count());
            write_colored(out, &total, muted_fg(), plain)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Listing;
    use crate::error::AppError;
    use crate::testing_utils::TestDataBuilder;
    use crate::ui::list_view::ListConfig;

    fn render_plain<T, R: RowRenderer<T>>(view: &ListView<T>, renderer: &R) -> String {
        let mut buf = Vec::new();
        render_list(view, renderer, true, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_controls_text() {
        let mut buf = Vec::new();
        render_controls(&PageControls::new(3, 4).unwrap(), true, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "‹ Назад  1 2 [3] 4  Вперед ›\n"
        );

        let mut buf = Vec::new();
        render_controls(&PageControls::new(1, 30).unwrap(), true, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[1] 2 3 4 5 6 7 8 9 10 …  Вперед ›\n"
        );
    }

    #[test]
    fn test_empty_list_shows_empty_text_and_footer() {
        let mut view = ListView::new(ListConfig::competitions());
        let ticket = view.begin_fetch().unwrap();
        view.complete(ticket, Ok(Listing::default()));

        let text = render_plain(&view, &CompetitionRow);
        assert!(text.starts_with("Лиги\n"));
        assert!(text.contains("Лиги не найдены"));
        assert!(text.contains("Всего лиг: 0"));
    }

    #[test]
    fn test_failed_list_shows_error_only() {
        let mut view = ListView::new(ListConfig::teams());
        let ticket = view.begin_fetch().unwrap();
        view.complete(ticket, Err(AppError::forbidden("http://x/teams")));

        let text = render_plain(&view, &TeamRow);
        assert!(text.contains("Ошибка при загрузке команд"));
        assert!(!text.contains("Всего"));
    }

    #[test]
    fn test_competition_rows_with_search() {
        let mut view = ListView::new(ListConfig::competitions());
        let ticket = view.begin_fetch().unwrap();
        view.complete(
            ticket,
            Ok(Listing {
                items: vec![
                    TestDataBuilder::create_competition(2021, "Premier League", "England"),
                    TestDataBuilder::create_competition(2019, "Serie A", "Italy"),
                ],
                count: 2,
            }),
        );
        view.set_search("italy");

        let text = render_plain(&view, &CompetitionRow);
        assert!(text.contains("  2019  Serie A  Italy\n"));
        assert!(!text.contains("Premier League"));
        assert!(text.contains("Всего лиг: 2"));
    }

    #[test]
    fn test_match_row_plain() {
        let game = TestDataBuilder::create_finished_match("Arsenal FC", "Chelsea FC", 2, 1);
        let mut buf = Vec::new();
        MatchRow {
            show_indicators: true,
        }
        .render_row(&game, true, &mut buf)
        .unwrap();

        let line = String::from_utf8(buf).unwrap();
        assert!(line.contains("Завершен"));
        assert!(line.contains("Arsenal FC + 2:1 - Chelsea FC"));
    }

    #[test]
    fn test_match_row_without_indicators() {
        let game = TestDataBuilder::create_scheduled_match("Arsenal FC", "Chelsea FC");
        let mut buf = Vec::new();
        MatchRow {
            show_indicators: false,
        }
        .render_row(&game, true, &mut buf)
        .unwrap();

        let line = String::from_utf8(buf).unwrap();
        assert!(line.contains("Arsenal FC Матч не начался Chelsea FC"));
        assert!(line.contains("Запланирован"));
    }

    #[test]
    fn test_team_header() {
        let mut team = TestDataBuilder::create_team(57, "Arsenal FC", "England");
        team.founded = Some(1886);
        team.venue = Some("Emirates Stadium".to_string());

        let mut buf = Vec::new();
        render_team_header(&team, true, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Arsenal FC\n"));
        assert!(text.contains("Страна: England"));
        assert!(text.contains("Основан: 1886"));
        assert!(text.contains("Стадион: Emirates Stadium"));
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        let team = TestDataBuilder::create_team(1, "Team", "Spain");
        let mut buf = Vec::new();
        TeamRow.render_row(&team, false, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains('\u{1b}'));
    }
}
