//! Text and JSON rendering for `stats`, `progress` and `chart`.

use crate::core::calculator::breakdown::{self, intensity};
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::completion::CompletionKind;
use crate::models::stats::{ChartBar, CompletionSeries};
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREY, RESET, color_for_percentage, heat_cell};
use crate::utils::date::{all_days_of_month, format_date, shift_weeks, short_weekday};
use crate::utils::formatting::{bar, mins2readable, pad_right};
use chrono::{Datelike, NaiveDate, Weekday};
use clap::ValueEnum;

const BAR_WIDTH: usize = 30;

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Other(e.to_string()))
}

pub struct StatsLogic;

impl StatsLogic {
    pub fn print(pool: &DbPool, today: NaiveDate, json: bool) -> AppResult<()> {
        let stats = Core::session_stats(pool, today)?;

        if json {
            println!("{}", to_json(&stats)?);
            return Ok(());
        }

        header(format!("Study statistics as of {}", format_date(&today)));

        let best = match stats.best_date {
            Some(d) => format!(
                "{} ({})",
                format_date(&d),
                mins2readable(stats.best_date_minutes)
            ),
            None => format!("{GREY}--{RESET}"),
        };

        println!("{CYAN}• Total time:{RESET}      {}", mins2readable(stats.total_minutes));
        println!("{CYAN}• Best day:{RESET}        {best}");
        println!("{CYAN}• Current streak:{RESET}  {} day(s)", stats.current_streak);
        println!("{CYAN}• Highest streak:{RESET}  {} day(s)", stats.highest_streak);
        Ok(())
    }
}

pub struct ProgressLogic;

impl ProgressLogic {
    pub fn print(
        pool: &DbPool,
        kind: CompletionKind,
        dates: &[NaiveDate],
        json: bool,
    ) -> AppResult<CompletionSeries> {
        let series = Core::completion_series(pool, kind, dates)?;

        if json {
            println!("{}", to_json(&series)?);
            return Ok(series);
        }

        let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
            info("No dates selected.");
            return Ok(series);
        };

        header(format!(
            "{} progress {} → {}",
            capitalized(kind),
            format_date(first),
            format_date(last)
        ));

        for day in &series.days {
            let color = color_for_percentage(day.percentage);
            println!(
                "{} {}  {}{:>3}%{}  {}/{}",
                short_weekday(&day.date),
                format_date(&day.date),
                color,
                day.percentage,
                RESET,
                day.completed,
                day.eligible
            );
        }

        let agg = series.aggregate_percentage;
        println!();
        println!(
            "{CYAN}• Aggregate:{RESET} {}{agg}%{RESET}",
            color_for_percentage(agg)
        );
        println!(
            "{CYAN}• Completed:{RESET} {}/{}",
            series.total_completed(),
            series.total_possible()
        );
        println!("{CYAN}• Full days:{RESET} {}", series.full_days());
        Ok(series)
    }
}

fn capitalized(kind: CompletionKind) -> &'static str {
    match kind {
        CompletionKind::Task => "Task",
        CompletionKind::Habit => "Habit",
    }
}

/// The views offered by `chart`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartView {
    Daily,
    Weekly,
    Monthly,
    Subjects,
    Heatmap,
}

pub struct ChartLogic;

impl ChartLogic {
    pub fn daily(pool: &DbPool, today: NaiveDate) -> AppResult<()> {
        let bars = Core::daily_chart(pool, today)?;
        header(format!("Minutes per subject on {}", format_date(&today)));
        print_bars(&bars, "No subjects yet.");
        Ok(())
    }

    pub fn weekly(pool: &DbPool, today: NaiveDate, offset: i64) -> AppResult<()> {
        let end = shift_weeks(today, offset)?;
        let totals = Core::day_totals(pool)?;
        header(format!("Seven days ending {}", format_date(&end)));
        print_bars(&breakdown::weekly(&totals, end), "No data.");
        Ok(())
    }

    pub fn monthly(pool: &DbPool, today: NaiveDate) -> AppResult<()> {
        let totals = Core::day_totals(pool)?;
        header(format!("Last four weeks ending {}", format_date(&today)));
        print_bars(&breakdown::monthly(&totals, today), "No data.");
        Ok(())
    }

    pub fn subjects(pool: &DbPool, top: usize) -> AppResult<()> {
        let bars = Core::subjects_chart(pool, top)?;
        header(format!("Top {top} subjects (all time)"));
        print_bars(&bars, "No sessions recorded yet.");
        Ok(())
    }

    /// Month calendar, one row per week, columns starting at `week_start`.
    pub fn heatmap(pool: &DbPool, year: i32, month: u32, week_start: Weekday) -> AppResult<()> {
        let days = all_days_of_month(year, month)?;
        let totals = Core::day_totals(pool)?;

        let Some(first) = days.first() else {
            return Ok(());
        };
        header(format!("Heatmap {}", first.format("%B %Y")));

        let mut wd = week_start;
        let mut head = String::new();
        for _ in 0..7 {
            head.push_str(&pad_right(&wd.to_string()[..2], 3));
            wd = wd.succ();
        }
        println!("{}", head.trim_end());

        let lead = first.weekday().days_since(week_start) as usize;
        let mut line = "   ".repeat(lead);
        for d in &days {
            let minutes = totals.get(d).copied().unwrap_or(0);
            line.push_str(&heat_cell(intensity(minutes)));
            line.push(' ');
            if d.weekday() == week_start.pred() {
                println!("{}", line.trim_end());
                line.clear();
            }
        }
        if !line.is_empty() {
            println!("{}", line.trim_end());
        }

        println!();
        let legend: Vec<String> = (0..=4).map(heat_cell).collect();
        println!("less {} more", legend.join(" "));

        let month_total: i64 = days.iter().filter_map(|d| totals.get(d)).sum();
        let active = days.iter().filter(|d| totals.get(*d).is_some_and(|m| *m > 0)).count();
        println!(
            "{CYAN}• Month total:{RESET} {} over {active} active day(s)",
            mins2readable(month_total)
        );
        Ok(())
    }
}

fn print_bars(bars: &[ChartBar], empty_msg: &str) {
    if bars.is_empty() {
        info(empty_msg);
        return;
    }

    let label_w = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    let max = bars.iter().map(|b| b.minutes).max().unwrap_or(0);

    for b in bars {
        println!(
            "{}  {:>8}  {}",
            pad_right(&b.label, label_w),
            mins2readable(b.minutes),
            bar(b.minutes, max, BAR_WIDTH)
        );
    }
}
