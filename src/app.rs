//! Interactive event report session.
//!
//! Drives the two-page form, the simulated submit latency, the preview, and
//! confirm/back against the form controller, finalizer, and store. Also
//! renders the report card used by the preview and the listing views.

use std::path::Path;
use std::time::Duration;

use dialoguer::{Input, Select};
use indicatif::ProgressBar;

use crate::error::{ReportError, Result};
use crate::form::{FormController, FormPage};
use crate::lifecycle::Finalizer;
use crate::model::{Draft, Field, Report, DEPARTMENTS};
use crate::photo;
use crate::store::ReportStore;

const PERSONAL_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Mobile];
const PERSONAL_TAIL_FIELDS: &[Field] = &[Field::Date, Field::Objective, Field::Report];
const EVENT_FIELDS: &[Field] = &[Field::EventName, Field::DateFrom, Field::DateTo];

/// Run one form session through to a submitted report.
pub async fn run_new_report(
    store: &mut ReportStore,
    finalizer: &mut Finalizer,
    submit_delay: Duration,
    photo_path: Option<&Path>,
) -> Result<()> {
    let mut controller = FormController::new(submit_delay);

    // An unreadable photo file leaves the photo unset, same as picking none.
    if let Some(path) = photo_path {
        if let Ok(selected) = photo::ingest(path).await {
            println!("✔ Photo attached: {}", path.display());
            controller.set_photo(selected);
        }
    }

    loop {
        edit_page(&mut controller, FormPage::Personal)?;
        edit_page(&mut controller, FormPage::Event)?;

        submit_for_preview(&mut controller).await;

        println!("\nPreview");
        print_draft_card(controller.draft());

        let choice = Select::new()
            .with_prompt("Submit this report?")
            .items(&["Confirm & Submit", "Back"])
            .default(0)
            .interact()
            .map_err(|e| ReportError::Prompt(e.to_string()))?;

        if choice == 0 {
            let draft = controller.confirm();
            let report = finalizer.finalize(&draft);
            let id = report.id.clone();
            store.append(report)?;
            println!("✔ Report {} submitted", id);
            return Ok(());
        }

        // Back: keep editing with every field value intact.
        controller.cancel_preview();
    }
}

fn edit_page(controller: &mut FormController, page: FormPage) -> Result<()> {
    controller.set_page(page);

    match page {
        FormPage::Personal => {
            println!("\nPersonal Information");
            for &field in PERSONAL_FIELDS {
                prompt_field(controller, field)?;
            }
            prompt_department(controller)?;
            for &field in PERSONAL_TAIL_FIELDS {
                prompt_field(controller, field)?;
            }
        }
        FormPage::Event => {
            println!("\nEvent Details");
            for &field in EVENT_FIELDS {
                prompt_field(controller, field)?;
            }
        }
    }

    Ok(())
}

fn prompt_field(controller: &mut FormController, field: Field) -> Result<()> {
    // Empty input is accepted; nothing is validated here.
    let value: String = Input::new()
        .with_prompt(field.label())
        .with_initial_text(controller.draft().get(field).to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ReportError::Prompt(e.to_string()))?;

    controller.set_field(field, value);
    Ok(())
}

fn prompt_department(controller: &mut FormController) -> Result<()> {
    let current = controller.draft().get(Field::Department);
    let default = DEPARTMENTS
        .iter()
        .position(|d| *d == current)
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut items = vec!["Select Department"];
    items.extend_from_slice(DEPARTMENTS);

    let choice = Select::new()
        .with_prompt(Field::Department.label())
        .items(&items)
        .default(default)
        .interact()
        .map_err(|e| ReportError::Prompt(e.to_string()))?;

    let value = if choice == 0 { "" } else { items[choice] };
    controller.set_field(Field::Department, value);
    Ok(())
}

/// Submit with the simulated latency; always succeeds after the fixed wait.
async fn submit_for_preview(controller: &mut FormController) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Please wait...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    controller.request_preview().await;
    spinner.finish_and_clear();
}

/// Report card for stored reports, used by the recent and full listings.
pub fn print_report_card(report: &Report) {
    println!("--------------------------------------------");
    println!("{}", report.name);
    println!("  Email: {}", report.email);
    println!("  Department: {}", report.department);
    println!("  Date: {}", report.date);
    println!("  Mobile: {}", report.mobile);
    if !report.event_name.is_empty() {
        println!(
            "  Event: {} ({} - {})",
            report.event_name, report.date_from, report.date_to
        );
    }
    println!("  Objective: {}", report.objective);
    println!("  Report: {}", report.report);
    if report.photo_url.is_some() {
        println!("  Photo: attached");
    }
    println!("  Submitted: {} (id {})", report.created_at, report.id);
}

/// Report card for the pre-submit preview; pure rendering, no state change.
fn print_draft_card(draft: &Draft) {
    println!("--------------------------------------------");
    println!("{}", draft.name);
    println!("  Email: {}", draft.email);
    println!("  Department: {}", draft.department);
    println!("  Date: {}", draft.date);
    println!("  Mobile: {}", draft.mobile);
    if !draft.event_name.is_empty() {
        println!(
            "  Event: {} ({} - {})",
            draft.event_name, draft.date_from, draft.date_to
        );
    }
    println!("  Objective: {}", draft.objective);
    println!("  Report: {}", draft.report);
    if draft.photo.is_set() {
        println!("  Photo: attached");
    }
}
