//! Schedule command - edit and view month assignments

use std::collections::BTreeSet;

use anyhow::{Context, anyhow};

use monthwatch::core::models::{MonthIndex, OrderId, Person};
use monthwatch::core::ports::ScheduleRepository;
use monthwatch::core::services::report::calendar;
use monthwatch::core::services::{
    ScheduleDraft, Toggle, classification_for, find_person, person_for_order,
};
use monthwatch::output::{CalendarResult, OrderMonths, OutputMode, ScheduleResult};

use super::{Project, Snapshot};
use crate::cli::ScheduleAction;

/// Handle schedule subcommands
pub fn schedule_cmd(action: ScheduleAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ScheduleAction::Toggle { order, months } => toggle(&order, &months, mode),
        ScheduleAction::Set { order, months } => set(&order, months.into_iter().collect(), mode),
        ScheduleAction::Show { ruc, name } => show(&ruc, name.as_deref(), mode),
        ScheduleAction::Calendar => calendar_overview(mode),
    }
}

/// Apply an edit to the person owning `number`, committing only if every
/// step is accepted
fn edit<F>(number: &str, mode: OutputMode, apply: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut ScheduleDraft, OrderId) -> anyhow::Result<()>,
{
    let project = Project::open()?;
    let Snapshot {
        orders,
        providers,
        mut schedule,
        persons,
    } = project.snapshot()?;

    let order = orders
        .iter()
        .find(|o| o.number == number)
        .ok_or_else(|| anyhow!("order not found: {number}"))?;
    let person = person_for_order(&persons, order.id)
        .ok_or_else(|| anyhow!("order {number} has no owner"))?;
    let classification = classification_for(&providers, person.ruc());

    let mut draft = ScheduleDraft::begin(person, classification, &schedule);
    apply(&mut draft, order.id).with_context(|| format!("rejected change to order {number}"))?;
    let result = schedule_result(person, &draft);
    draft.commit(&mut schedule);
    project.store.save_schedule(&schedule)?;

    result.render(mode);
    Ok(())
}

fn toggle(number: &str, months: &[MonthIndex], mode: OutputMode) -> anyhow::Result<()> {
    edit(number, mode, |draft, id| {
        for &month in months {
            match draft.toggle(id, month)? {
                Toggle::Added => log::debug!("added {month} to {number}"),
                Toggle::Removed => log::debug!("removed {month} from {number}"),
            }
        }
        Ok(())
    })
}

fn set(number: &str, months: BTreeSet<MonthIndex>, mode: OutputMode) -> anyhow::Result<()> {
    edit(number, mode, |draft, id| Ok(draft.set(id, months)?))
}

fn show(ruc: &str, name: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let project = Project::open()?;
    let snapshot = project.snapshot()?;

    let person = find_person(&snapshot.persons, ruc.trim(), name)?;
    let classification = classification_for(&snapshot.providers, person.ruc());
    let draft = ScheduleDraft::begin(person, classification, &snapshot.schedule);

    schedule_result(person, &draft).render(mode);
    Ok(())
}

fn calendar_overview(mode: OutputMode) -> anyhow::Result<()> {
    let project = Project::open()?;
    let snapshot = project.snapshot()?;

    CalendarResult {
        currency: project.config.report.currency.clone(),
        months: calendar(&snapshot.orders, &snapshot.schedule, None),
    }
    .render(mode);
    Ok(())
}

/// Render-ready view of a person's draft
fn schedule_result(person: &Person, draft: &ScheduleDraft) -> ScheduleResult {
    let eval = draft.evaluation();
    let orders = person
        .orders
        .iter()
        .map(|o| OrderMonths {
            number: o.number.clone(),
            months: draft.months(o.id).map(|m| m.iter().copied().collect()).unwrap_or_default(),
            status: draft.order_status(o.id),
        })
        .collect();

    ScheduleResult {
        name: person.name().to_string(),
        ruc: person.ruc().to_string(),
        classification: draft.classification(),
        status: eval.status,
        consecutive_months: eval.run,
        max_months: eval.limit,
        remaining_months: eval.remaining(),
        orders,
    }
}
