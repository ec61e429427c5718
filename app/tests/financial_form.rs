#![cfg(feature = "ssr")]

use civsail::lead::{InterestTag, LeadForm, SailingStatus, SubmitError};
use civsail::pages::financial::LeadFormView;
use leptos::prelude::*;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn filled() -> LeadForm {
    let mut form = LeadForm::new();
    form.edit(|fields| {
        fields.name = String::from("Jordan Lee");
        fields.email = String::from("jordan@example.com");
        fields.status = Some(SailingStatus::AtSea);
        fields.set_interest(InterestTag::Retirement, true);
    });
    form
}

fn render(form: LeadForm) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(form);
        view! { <LeadFormView form=form /> }.to_html()
    })
}

#[test]
fn editing_form_is_enabled() {
    setup();

    let html = render(filled());
    assert!(html.contains("<form"));
    assert!(html.contains("name=\"name\""));
    assert!(html.contains("Request my consultation"));
    assert!(!html.contains("disabled"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn button_is_disabled_while_submitting() {
    setup();

    let mut form = filled();
    form.begin_submit().unwrap();
    let html = render(form);
    assert!(html.contains("disabled"));
    assert!(html.contains("Sending…"));
    assert!(!html.contains("Request my consultation"));
}

#[test]
fn submitted_form_shows_only_the_confirmation() {
    setup();

    let mut form = filled();
    form.begin_submit().unwrap();
    form.finish_submit(Ok(()));
    let html = render(form);
    assert!(html.contains("Thank you!"));
    assert!(!html.contains("<form"));
    assert!(!html.contains("name=\"email\""));
}

#[test]
fn failure_message_is_rendered_in_the_error_slot() {
    setup();

    let mut form = filled();
    form.begin_submit().unwrap();
    form.finish_submit(Err(SubmitError::Rejected {
        status: 500,
        message: Some(String::from("Server unavailable")),
    }));
    let html = render(form);
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Server unavailable"));
    assert!(!html.contains("disabled"));
}
