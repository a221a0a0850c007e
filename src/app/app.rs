use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::{ListState, TableState},
};
use strum::IntoEnumIterator;

use crate::{
    app::{Portfolio, ui, utils},
    models::{ApiProvider, BenchmarkIndex, ConfidenceLevel, Lookback, RiskReport},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Picker {
    Benchmark,
    Lookback,
    Confidence,
    Provider,
}

impl Picker {
    pub fn title(&self) -> &'static str {
        match self {
            Picker::Benchmark => "Benchmark Index",
            Picker::Lookback => "Lookback Period",
            Picker::Confidence => "VaR Confidence",
            Picker::Provider => "Data Provider",
        }
    }

    pub fn items(&self) -> Vec<String> {
        match self {
            Picker::Benchmark => BenchmarkIndex::iter()
                .map(|b| format!("{} ({})", b, b.symbol()))
                .collect(),
            Picker::Lookback => Lookback::iter().map(|l| l.to_string()).collect(),
            Picker::Confidence => ConfidenceLevel::iter().map(|c| c.to_string()).collect(),
            Picker::Provider => ApiProvider::iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
    Ticker,
    AvgPrice,
    Quantity,
}

#[derive(Clone, Debug)]
pub struct HoldingForm {
    ticker: String,
    avg_price: String,
    quantity: String,
    active: FormField,
}

impl HoldingForm {
    pub fn new() -> Self {
        Self {
            ticker: String::new(),
            avg_price: String::new(),
            quantity: String::new(),
            active: FormField::Ticker,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn avg_price(&self) -> &str {
        &self.avg_price
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn active(&self) -> FormField {
        self.active
    }

    pub fn next_field(&mut self) {
        self.active = match self.active {
            FormField::Ticker => FormField::AvgPrice,
            FormField::AvgPrice => FormField::Quantity,
            FormField::Quantity => FormField::Ticker,
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.active {
            FormField::Ticker => self.ticker.push(c),
            FormField::AvgPrice => self.avg_price.push(c),
            FormField::Quantity => self.quantity.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.active {
            FormField::Ticker => self.ticker.pop(),
            FormField::AvgPrice => self.avg_price.pop(),
            FormField::Quantity => self.quantity.pop(),
        };
    }
}

pub struct App {
    portfolio: Portfolio,
    report: Option<RiskReport>,
    table_state: TableState,
    popup_message: Option<String>,
    error_popup: Option<String>,
    picker: Option<Picker>,
    picker_state: ListState,
    form: Option<HoldingForm>,
}

impl App {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            report: None,
            table_state: TableState::default(),
            popup_message: None,
            error_popup: None,
            picker: None,
            picker_state: ListState::default(),
            form: None,
        }
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    pub async fn run(&mut self, csv_path: Option<&str>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal, csv_path).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.portfolio,
                self.report.as_ref(),
                &mut self.table_state,
                &self.popup_message,
                &self.error_popup,
                self.picker,
                &mut self.picker_state,
                self.form.as_ref(),
            )
        })?;
        Ok(())
    }

    async fn run_app<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        csv_path: Option<&str>,
    ) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Add-holding form captures every key while open.
                if self.form.is_some() {
                    if self.error_popup.is_some() {
                        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                            self.clear_error_popup();
                        }
                        continue;
                    }
                    match key.code {
                        KeyCode::Esc => self.form = None,
                        KeyCode::Tab => {
                            if let Some(form) = self.form.as_mut() {
                                form.next_field();
                            }
                        }
                        KeyCode::Enter => self.submit_form(),
                        KeyCode::Backspace => {
                            if let Some(form) = self.form.as_mut() {
                                form.backspace();
                            }
                        }
                        KeyCode::Char(c) => {
                            if let Some(form) = self.form.as_mut() {
                                form.push_char(c);
                            }
                        }
                        _ => {}
                    }
                    continue;
                }

                if let Some(picker) = self.picker {
                    match key.code {
                        KeyCode::Esc => self.picker = None,
                        KeyCode::Down => {
                            let len = picker.items().len();
                            let i = match self.picker_state.selected() {
                                Some(i) => {
                                    if i >= len - 1 {
                                        0
                                    } else {
                                        i + 1
                                    }
                                }
                                None => 0,
                            };
                            self.picker_state.select(Some(i));
                        }
                        KeyCode::Up => {
                            let len = picker.items().len();
                            let i = match self.picker_state.selected() {
                                Some(i) => {
                                    if i == 0 {
                                        len - 1
                                    } else {
                                        i - 1
                                    }
                                }
                                None => 0,
                            };
                            self.picker_state.select(Some(i));
                        }
                        KeyCode::Enter => {
                            self.apply_picker(picker)?;
                            self.picker = None;
                        }
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Enter | KeyCode::Esc => {
                        if self.error_popup.is_some() {
                            self.clear_error_popup();
                            continue;
                        }
                        if key.code == KeyCode::Esc {
                            self.table_state.select(None);
                        }
                    }
                    KeyCode::F(2) => {
                        self.table_state.select(None);
                        self.form = Some(HoldingForm::new());
                    }
                    KeyCode::F(4) => {
                        let Some(path) = csv_path else {
                            self.show_error_popup(
                                "No holdings file configured. Start with --import <path>.",
                            );
                            continue;
                        };
                        self.table_state.select(None);
                        self.show_popup("Importing holdings...");
                        self.draw(terminal)?;

                        let expanded = shellexpand::tilde(path);
                        let import_result = self.portfolio.import_holdings(&expanded);

                        self.clear_popup();
                        self.draw(terminal)?;

                        if let Err(e) = import_result {
                            self.show_error_popup(&format!("Error importing holdings: {:?}", e));
                        }
                    }
                    KeyCode::F(5) => {
                        self.table_state.select(None);
                        self.show_popup("Running analysis...");
                        self.draw(terminal)?;

                        let run_result = self.portfolio.run_analysis().await;

                        self.clear_popup();
                        self.draw(terminal)?;

                        match run_result {
                            Ok(report) => self.report = Some(report),
                            Err(e) => self.show_error_popup(&format!("{}", e)),
                        }
                    }
                    KeyCode::F(6) => self.open_picker(Picker::Benchmark),
                    KeyCode::F(7) => self.open_picker(Picker::Lookback),
                    KeyCode::F(8) => self.open_picker(Picker::Provider),
                    KeyCode::F(9) => self.open_picker(Picker::Confidence),
                    KeyCode::Down => {
                        let holdings = self.portfolio.holdings();
                        if !holdings.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i >= holdings.len() - 1 {
                                        0
                                    } else {
                                        i + 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Up => {
                        let holdings = self.portfolio.holdings();
                        if !holdings.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i == 0 {
                                        holdings.len() - 1
                                    } else {
                                        i - 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn open_picker(&mut self, picker: Picker) {
        self.table_state.select(None);

        let current = match picker {
            Picker::Benchmark => {
                BenchmarkIndex::iter().position(|b| b == *self.portfolio.benchmark())
            }
            Picker::Lookback => Lookback::iter().position(|l| l == *self.portfolio.lookback()),
            Picker::Confidence => {
                ConfidenceLevel::iter().position(|c| c == *self.portfolio.confidence())
            }
            Picker::Provider => {
                ApiProvider::iter().position(|p| p == *self.portfolio.default_api())
            }
        };
        self.picker_state.select(current.or(Some(0)));
        self.picker = Some(picker);
    }

    fn apply_picker(&mut self, picker: Picker) -> Result<()> {
        let Some(i) = self.picker_state.selected() else {
            return Ok(());
        };

        match picker {
            Picker::Benchmark => {
                let benchmark = BenchmarkIndex::iter()
                    .nth(i)
                    .with_context(|| "Cannot select")?;
                self.portfolio.set_benchmark(benchmark);
            }
            Picker::Lookback => {
                let lookback = Lookback::iter().nth(i).with_context(|| "Cannot select")?;
                self.portfolio.set_lookback(lookback);
            }
            Picker::Confidence => {
                let confidence = ConfidenceLevel::iter()
                    .nth(i)
                    .with_context(|| "Cannot select")?;
                self.portfolio.set_confidence(confidence);
            }
            Picker::Provider => {
                let provider = ApiProvider::iter().nth(i).with_context(|| "Cannot select")?;
                self.portfolio.set_default_api(provider);
            }
        }
        Ok(())
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };

        let avg_price = match utils::parse_decimal(form.avg_price(), "average price") {
            Ok(price) => price,
            Err(e) => {
                self.show_error_popup(&format!("{:#}", e));
                self.form = Some(form);
                return;
            }
        };
        let quantity = match utils::parse_decimal(form.quantity(), "quantity") {
            Ok(quantity) => quantity,
            Err(e) => {
                self.show_error_popup(&format!("{:#}", e));
                self.form = Some(form);
                return;
            }
        };

        if let Err(e) = self.portfolio.add_holding(form.ticker(), avg_price, quantity) {
            self.show_error_popup(&format!("{:#}", e));
            self.form = Some(form);
        }
    }
}
