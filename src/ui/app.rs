use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Cell, Clear, HighlightSpacing, List, ListItem, ListState, Paragraph,
        Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table, TableState, Wrap,
    },
};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::{Dashboard, LoadOutcome, Phase, ViewModel};
use crate::config::{CARD_HEIGHT, INFO_TEXT, PALETTES, POLL_DURATION_MS, SELECTOR_WIDTH, TOP_CURRENCIES};
use crate::data::{SummaryEntry, format_rate};
use crate::ui::DashboardColors;
use crate::ui::chart::{ChartHandle, spark_points, sparkline};

const TABLE_PAGE: usize = 10;

pub struct TuiApp {
    dashboard: Dashboard,
    view: ViewModel,
    chart: ChartHandle,
    list_state: ListState,
    table_state: TableState,
    scroll_state: ScrollbarState,
    colors: DashboardColors,
    color_index: usize,
    searching: bool,
    reload_tx: mpsc::UnboundedSender<()>,
}

impl TuiApp {
    pub fn new(reload_tx: mpsc::UnboundedSender<()>) -> Self {
        Self {
            dashboard: Dashboard::new(),
            view: ViewModel::default(),
            chart: ChartHandle::default(),
            list_state: ListState::default(),
            table_state: TableState::default(),
            scroll_state: ScrollbarState::new(0),
            colors: DashboardColors::new(&PALETTES[0]),
            color_index: 0,
            searching: false,
            reload_tx,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        self.dashboard.apply_load(outcome);
        self.list_state
            .select(if self.dashboard.dataset().currencies().is_empty() { None } else { Some(0) });
        self.refresh_view();
    }

    /// Recomputes the view model for the current selection and query and
    /// pushes the series into the chart.
    fn refresh_view(&mut self) {
        let previous = self.view.selected.clone();
        self.view = self.dashboard.view();

        if self.view.selected != previous {
            self.table_state = TableState::default().with_selected(0);
            self.scroll_state = ScrollbarState::new(self.view.table.len().saturating_sub(1));
        }
        if self.view.selected.is_some() {
            self.chart.create_or_update(&self.view.series);
        }
    }

    fn next_label(&mut self) {
        let len = self.view.labels.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_label(&mut self) {
        let len = self.view.labels.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_highlighted(&mut self) {
        let Some(label) = self
            .list_state
            .selected()
            .and_then(|i| self.view.labels.get(i))
            .cloned()
        else {
            return;
        };

        if self.dashboard.select(&label) {
            info!("Selected {}", label);
            self.refresh_view();
        }
    }

    fn scroll_table(&mut self, forward: bool) {
        let len = self.view.table.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let i = if forward {
            (current + TABLE_PAGE).min(len - 1)
        } else {
            current.saturating_sub(TABLE_PAGE)
        };
        self.table_state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i);
    }

    fn set_query(&mut self, query: String) {
        self.dashboard.set_query(&query);
        self.refresh_view();
        self.list_state
            .select(if self.view.labels.is_empty() { None } else { Some(0) });
    }

    fn retry(&mut self) {
        if !self.dashboard.begin_retry() {
            return;
        }
        info!("Retrying load");
        if self.reload_tx.send(()).is_err() {
            warn!("Loader is gone, retry dropped");
        }
    }

    fn next_color(&mut self) {
        self.color_index = (self.color_index + 1) % PALETTES.len();
    }

    fn previous_color(&mut self) {
        let count = PALETTES.len();
        self.color_index = (self.color_index + count - 1) % count;
    }

    fn set_colors(&mut self) {
        self.colors = DashboardColors::new(&PALETTES[self.color_index]);
    }

    /// Applies one key press. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if self.searching {
            let mut query = self.dashboard.query().to_string();
            match key.code {
                KeyCode::Enter | KeyCode::Char('/') => self.searching = false,
                KeyCode::Esc => {
                    self.searching = false;
                    self.set_query(String::new());
                }
                KeyCode::Backspace => {
                    if query.pop().is_some() {
                        self.set_query(query);
                    }
                }
                KeyCode::Char(c) => {
                    query.push(c);
                    self.set_query(query);
                }
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('j') | KeyCode::Down => self.next_label(),
            KeyCode::Char('k') | KeyCode::Up => self.previous_label(),
            KeyCode::Char('l') | KeyCode::Right if shift => self.next_color(),
            KeyCode::Char('h') | KeyCode::Left if shift => self.previous_color(),
            KeyCode::PageDown => self.scroll_table(true),
            KeyCode::PageUp => self.scroll_table(false),
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Char('r') => self.retry(),
            KeyCode::Char('/') => self.searching = true,
            _ => {}
        }
        true
    }

    pub fn run(
        mut self,
        mut terminal: DefaultTerminal,
        mut rx: mpsc::UnboundedReceiver<LoadOutcome>,
    ) -> Result<()> {
        loop {
            // Drain load outcomes
            while let Ok(outcome) = rx.try_recv() {
                self.apply_load(outcome);
            }

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(POLL_DURATION_MS))? {
                while event::poll(Duration::from_millis(0))? {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if !self.handle_key(key) {
                                debug!("Quit requested");
                                return Ok(());
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(4),
        ]);
        let [cards, body, footer] = vertical.areas(frame.area());
        let [selector, detail] =
            Layout::horizontal([Constraint::Length(SELECTOR_WIDTH), Constraint::Fill(1)]).areas(body);
        let [chart, table] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Fill(1)]).areas(detail);

        self.set_colors();
        frame.render_widget(Block::new().bg(self.colors.buffer_bg), frame.area());
        self.render_cards(frame, cards);
        self.render_selector(frame, selector);
        self.render_chart(frame, chart);
        self.render_table(frame, table);
        self.render_scrollbar(frame, table);
        self.render_footer(frame, footer);

        match self.dashboard.phase() {
            Phase::Uninitialized => self.render_status(frame, "Loading", "Fetching exchange rates…".to_string()),
            Phase::Failed(reason) => {
                let message = format!("{reason}\n\nPress (r) to retry or (q) to quit");
                self.render_status(frame, "Load failed", message)
            }
            _ => {}
        }
        if self.searching {
            self.render_search(frame);
        }
    }

    fn bordered(&self, title: String) -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(self.colors.border_color))
            .title(title)
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let slots = Layout::horizontal([Constraint::Fill(1); TOP_CURRENCIES]).split(area);
        for (entry, slot) in self.dashboard.summaries().iter().zip(slots.iter()) {
            self.render_card(frame, *slot, entry);
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, entry: &SummaryEntry) {
        let block = self.bordered(entry.currency.clone());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [headline, as_of, spark] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        let change = entry.change();
        let line = Line::from(vec![
            Span::styled(format!("{} ", format_rate(entry.latest_rate)), Style::new().fg(self.colors.row_fg).bold()),
            Span::styled(change.label(), Style::new().fg(self.colors.direction_color(change.direction()))),
        ]);
        frame.render_widget(Paragraph::new(line), headline);
        frame.render_widget(
            Paragraph::new(format!("As of {}", entry.as_of)).style(Style::new().fg(self.colors.row_fg).dim()),
            as_of,
        );

        let points = spark_points(&entry.spark);
        frame.render_widget(sparkline(&points, self.colors.line_color), spark);
    }

    fn render_selector(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.dashboard.query().is_empty() {
            "Currencies".to_string()
        } else {
            format!("Currencies [{}]", self.dashboard.query())
        };
        let block = self.bordered(title);

        if self.view.labels.is_empty() {
            let hint = if self.dashboard.is_ready() { "No matches" } else { "" };
            frame.render_widget(
                Paragraph::new(hint).alignment(Alignment::Center).block(block),
                area,
            );
            return;
        }

        let items = self.view.labels.iter().map(|label| {
            if self.view.selected.as_deref() == Some(label.as_str()) {
                ListItem::new(format!("● {label}")).style(Style::new().fg(self.colors.selected_row_style_fg).bold())
            } else {
                ListItem::new(format!("  {label}")).style(Style::new().fg(self.colors.row_fg))
            }
        });
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let title = match &self.view.selected {
            Some(label) => format!("{label} exchange rate"),
            None => "Exchange rate".to_string(),
        };
        let block = self.bordered(title);

        match self.chart.chart() {
            Some(chart) if self.view.selected.is_some() => {
                frame.render_widget(chart.widget(block, self.colors.line_color, self.colors.row_fg), area)
            }
            _ => frame.render_widget(block, area),
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let header_style = Style::default()
            .fg(self.colors.header_fg)
            .bg(self.colors.header_bg);
        let selected_row_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(self.colors.selected_row_style_fg);

        let header = ["Date", "Rate", "Change"]
            .into_iter()
            .map(Cell::from)
            .collect::<Row>()
            .style(header_style);

        let rows = self.view.table.iter().enumerate().map(|(i, row)| {
            let bg = if i % 2 == 0 {
                self.colors.normal_row_color
            } else {
                self.colors.alt_row_color
            };
            let change = match &row.change {
                Some(change) => Cell::from(change.label())
                    .style(Style::new().fg(self.colors.direction_color(change.direction()))),
                None => Cell::from(""),
            };

            Row::new(vec![
                Cell::from(row.date.to_string()),
                Cell::from(row.rate_text.clone()),
                change,
            ])
            .style(Style::new().fg(self.colors.row_fg).bg(bg))
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Fill(1),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(self.bordered("History".to_string()))
        .row_highlight_style(selected_row_style)
        .highlight_spacing(HighlightSpacing::Always)
        .bg(self.colors.buffer_bg);

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_scrollbar(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.scroll_state,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let info_footer = Paragraph::new(INFO_TEXT.join("\n"))
            .style(
                Style::new()
                    .fg(self.colors.row_fg)
                    .bg(self.colors.buffer_bg),
            )
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(self.colors.border_color)),
            );
        frame.render_widget(info_footer, area);
    }

    fn render_status(&self, frame: &mut Frame, title: &str, message: String) {
        let area = self.popup_area(frame.area(), 50, 25);
        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(message)
            .block(self.bordered(title.to_string()))
            .style(Style::new().fg(self.colors.row_fg).bg(self.colors.buffer_bg))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_search(&self, frame: &mut Frame) {
        let area = self.popup_area(frame.area(), 60, 20);
        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(self.dashboard.query())
            .block(self.bordered("Search".to_string()))
            .style(Style::new().fg(self.colors.row_fg).bg(self.colors.buffer_bg))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn popup_area(&self, area: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }
}
