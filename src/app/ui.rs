use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, List, ListItem, ListState,
        Paragraph, Row, Table, TableState, Wrap,
    },
};
use rust_decimal::Decimal;

use crate::{
    app::app::{FormField, HoldingForm, Picker},
    app::portfolio::Portfolio,
    models::{RiskMetrics, RiskReport},
};

pub fn render(
    frame: &mut Frame,
    portfolio: &Portfolio,
    report: Option<&RiskReport>,
    table_state: &mut TableState,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
    picker: Option<Picker>,
    picker_state: &mut ListState,
    form: Option<&HoldingForm>,
) {
    let constraints: Vec<Constraint> = if report.is_some() {
        vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(9),
            Constraint::Length(12),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let title = Paragraph::new(
        "Portfolio Risk | F2 add | F4 import | F5 run | F6 benchmark | F7 period | F8 provider | F9 confidence | q quit",
    )
    .style(Style::default().fg(Color::Cyan))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let settings = Paragraph::new(format!(
        "Benchmark: {} ({})   Period: {}   Confidence: {}   Provider: {}   Total Value: {:.2}",
        portfolio.benchmark(),
        portfolio.benchmark().symbol(),
        portfolio.lookback(),
        portfolio.confidence(),
        portfolio.default_api(),
        portfolio.total_value(),
    ))
    .block(Block::default().title("Settings").borders(Borders::ALL));
    frame.render_widget(settings, chunks[1]);

    render_holdings(frame, portfolio, table_state, chunks[2]);

    if let Some(report) = report {
        render_metrics(frame, report, chunks[3]);
        render_chart(frame, report, chunks[4]);
    }

    if let Some(picker) = picker {
        render_picker(frame, picker, picker_state);
    }

    if let Some(form) = form {
        render_form(frame, form);
    }

    if let Some(message) = popup_message {
        let area = centered_rect(40, 20, frame.area());
        let popup = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Cyan))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }

    if let Some(message) = error_popup {
        let area = centered_rect(60, 30, frame.area());
        let popup = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Error").borders(Borders::ALL));
        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

fn render_holdings(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    area: Rect,
) {
    let holdings = portfolio.holdings();

    if holdings.is_empty() {
        let empty_message =
            Paragraph::new("Portfolio is empty. Press F2 to add a holding or F4 to import.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().title("Holdings").borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let total_value = portfolio.total_value();

    let header_cells = ["Ticker", "Avg Price", "Quantity", "Investment", "Weight"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = holdings.iter().map(|holding| {
        let investment = holding.investment();
        let weight = if total_value > Decimal::ZERO {
            investment / total_value * Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        let cells = [
            Cell::from(holding.ticker().to_string()),
            Cell::from(format!("{:.2}", holding.avg_price())),
            Cell::from(format!("{:.0}", holding.quantity())),
            Cell::from(format!("{:.2}", investment)),
            Cell::from(format!("{:.2}%", weight)),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_metrics(frame: &mut Frame, report: &RiskReport, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let benchmark_title = format!("Benchmark: {}", report.benchmark_index());

    render_metrics_panel(frame, "Portfolio", report.portfolio(), report, columns[0]);
    render_metrics_panel(frame, &benchmark_title, report.benchmark(), report, columns[1]);
}

fn render_metrics_panel(
    frame: &mut Frame,
    title: &str,
    metrics: &RiskMetrics,
    report: &RiskReport,
    area: Rect,
) {
    let mean_color = if *metrics.mean() >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Mean Daily Return:  "),
            Span::styled(fmt_pct(*metrics.mean()), Style::default().fg(mean_color)),
        ]),
        Line::from(format!(
            "Volatility (Std):   {}",
            fmt_opt_pct(metrics.std_dev())
        )),
        Line::from(format!(
            "Sharpe Ratio:       {}",
            fmt_ratio(metrics.sharpe())
        )),
        Line::from(format!(
            "Sortino Ratio:      {}",
            fmt_ratio(metrics.sortino())
        )),
        Line::from(format!(
            "VaR ({}):          {}",
            report.confidence(),
            fmt_currency(metrics.value_at_risk())
        )),
    ];

    let panel = Paragraph::new(lines).block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_chart(frame: &mut Frame, report: &RiskReport, area: Rect) {
    let portfolio_points: Vec<(f64, f64)> = report
        .portfolio_cumulative()
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();
    let benchmark_points: Vec<(f64, f64)> = report
        .benchmark_cumulative()
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let x_max = portfolio_points
        .len()
        .max(benchmark_points.len())
        .saturating_sub(1)
        .max(1) as f64;

    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for (_, v) in portfolio_points.iter().chain(benchmark_points.iter()) {
        y_min = y_min.min(*v);
        y_max = y_max.max(*v);
    }
    if y_min > y_max {
        y_min = 0.0;
        y_max = 2.0;
    }
    let pad = ((y_max - y_min) * 0.05).max(0.01);
    let y_min = y_min - pad;
    let y_max = y_max + pad;

    let benchmark_label = report.benchmark_index().to_string();
    let datasets = vec![
        Dataset::default()
            .name("Portfolio")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&portfolio_points),
        Dataset::default()
            .name(benchmark_label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&benchmark_points),
    ];

    let x_labels: Vec<String> = match (report.dates().first(), report.dates().last()) {
        (Some(first), Some(last)) => vec![
            first.format("%Y-%m-%d").to_string(),
            last.format("%Y-%m-%d").to_string(),
        ],
        _ => Vec::new(),
    };
    let y_labels = vec![
        format!("{:.2}", y_min),
        format!("{:.2}", (y_min + y_max) / 2.0),
        format!("{:.2}", y_max),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("Cumulative Returns")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(x_labels)
                .style(Style::default().fg(Color::Gray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(y_labels)
                .style(Style::default().fg(Color::Gray)),
        );

    frame.render_widget(chart, area);
}

fn render_picker(frame: &mut Frame, picker: Picker, picker_state: &mut ListState) {
    let area = centered_rect(40, 40, frame.area());
    let items: Vec<ListItem> = picker.items().into_iter().map(ListItem::new).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(picker.title())
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, picker_state);
}

fn render_form(frame: &mut Frame, form: &HoldingForm) {
    let area = centered_rect(40, 25, frame.area());

    let field_line = |label: &str, value: &str, field: FormField| {
        let style = if form.active() == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let cursor = if form.active() == field { "_" } else { "" };
        Line::from(vec![
            Span::raw(format!("{:<12}", label)),
            Span::styled(format!("{}{}", value, cursor), style),
        ])
    };

    let lines = vec![
        field_line("Ticker:", form.ticker(), FormField::Ticker),
        field_line("Avg Price:", form.avg_price(), FormField::AvgPrice),
        field_line("Quantity:", form.quantity(), FormField::Quantity),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title("Add Holding (Tab: next field, Enter: add, Esc: cancel)")
            .borders(Borders::ALL),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn fmt_pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn fmt_opt_pct(value: &Option<f64>) -> String {
    value.map(fmt_pct).unwrap_or_else(|| "n/a".to_string())
}

fn fmt_ratio(value: &Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "n/a".to_string())
}

fn fmt_currency(value: &Option<f64>) -> String {
    value
        .map(|v| format!("${:.2}", v))
        .unwrap_or_else(|| "n/a".to_string())
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
