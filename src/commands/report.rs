//! The `report` subcommand: choose a date range, run the aggregation
//! pipeline and deliver (or preview) the rendered report.

use crate::api::{Jira, Mailgun};
use crate::libs::config::Config;
use crate::libs::date_range::{self, DateRange};
use crate::libs::messages::Message;
use crate::libs::render::ReportKind;
use crate::libs::report::{self, ReportRequest};
use crate::libs::view::View;
use crate::libs::worklog::{self, parse_account_ids};
use crate::libs::{aggregate, render};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "Report for a specific day (YYYY-MM-DD); defaults to yesterday")]
    date: Option<NaiveDate>,
    #[arg(long, help = "Report for the most recently completed Monday-Sunday week")]
    weekly: bool,
    #[arg(long, help = "Report for the previous calendar month")]
    monthly: bool,
    #[arg(long, help = "Range start (YYYY-MM-DD), requires --to")]
    from: Option<NaiveDate>,
    #[arg(long, help = "Range end (YYYY-MM-DD), requires --from")]
    to: Option<NaiveDate>,
    #[arg(long, help = "Pick daily, weekly or monthly from today's calendar")]
    auto: bool,
    #[arg(long, help = "Account ids as a JSON array, overriding configuration")]
    accounts: Option<String>,
    #[arg(long, help = "Print the aggregated report to the terminal instead of sending")]
    print: bool,
    #[arg(long, help = "Print fetched worklog entries as JSON instead of sending")]
    json: bool,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let jira_config = config.jira.clone().ok_or_else(|| msg_error_anyhow!(Message::JiraNotConfigured))?;

    let account_ids = match &args.accounts {
        Some(raw) => parse_account_ids(raw)?,
        None => jira_config.account_ids.clone(),
    };
    if account_ids.is_empty() {
        msg_bail_anyhow!(Message::AccountListEmpty);
    }

    let today = Utc::now().date_naive();
    let (range, monthly) = select_range(&args, today)?;
    let tracker = Jira::new(&jira_config);
    let request = ReportRequest { account_ids, range, monthly };

    if args.json {
        let data = worklog::fetch(&tracker, &request.account_ids, &request.range).await?;
        println!("{}", serde_json::to_string_pretty(&data.entries)?);
        return Ok(());
    }

    if args.print {
        let data = worklog::fetch(&tracker, &request.account_ids, &request.range).await?;
        let aggregates = aggregate::aggregate(&data.accounts, &data.entries);
        let kind = ReportKind::for_range(&request.range, request.monthly);
        let rendered = render::render(&aggregates, &request.range, kind);
        msg_print!(Message::ReportPreview(rendered.subject), true);
        View::worklogs(&data.entries)?;
        View::totals(&aggregates)?;
        return Ok(());
    }

    let mailgun_config = config.mailgun.clone().ok_or_else(|| msg_error_anyhow!(Message::MailgunNotConfigured))?;
    let email_config = config.email.clone().ok_or_else(|| msg_error_anyhow!(Message::EmailNotConfigured))?;
    let notifier = Mailgun::new(&mailgun_config);

    let rendered = report::generate(&tracker, &request).await?;
    let recipient = report::send(&notifier, &email_config, &rendered).await?;
    msg_success!(Message::ReportSent(recipient));
    Ok(())
}

/// Resolves the requested date range and whether the monthly phrasing is
/// wanted. `--auto` reproduces the scheduled dispatch rule: previous month
/// on the first of the month, previous week on Mondays, otherwise yesterday.
fn select_range(args: &ReportArgs, today: NaiveDate) -> Result<(DateRange, bool)> {
    if args.from.is_some() || args.to.is_some() {
        let (Some(from), Some(to)) = (args.from, args.to) else {
            msg_bail_anyhow!(Message::RangeBoundsRequired);
        };
        return Ok((DateRange::new(from, to)?, false));
    }
    if args.monthly {
        return Ok((date_range::previous_month_range(today), true));
    }
    if args.weekly {
        return Ok((date_range::previous_week_range(today), false));
    }
    if let Some(date) = args.date {
        return Ok((DateRange::single_day(date), false));
    }
    if args.auto {
        if today.day() == 1 {
            return Ok((date_range::previous_month_range(today), true));
        }
        if today.weekday() == Weekday::Mon {
            return Ok((date_range::previous_week_range(today), false));
        }
    }
    let yesterday = today - Duration::days(1);
    Ok((DateRange::single_day(yesterday), false))
}
