use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Breadcrumbs, Crumb, Footer, NavBar, Separator};
use crate::lead::{
    submit_lead, DefaultTransport, InterestTag, LeadForm, SailingStatus,
    FINANCIAL_CONSULTATION_ENDPOINT,
};

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <NavBar />
        <main class="financial">
            <Breadcrumbs trail=vec![
                Crumb::new("Home", "/"),
                Crumb::new("Financial Planning", "/financial"),
            ] />
            <h1>"Money at sea, made simpler"</h1>
            <p class="lede">
                "Months-long assignments, overtime, sea pay and a federal retirement plan: a CIVMAR's finances look nothing like a shore job's. Tell us a little about yourself and an advisor who works with mariners will reach out."
            </p>
            <Separator />
            <ConsultationForm />
        </main>
        <Footer />
    }
}

#[component]
fn ConsultationForm() -> impl IntoView {
    let form = RwSignal::new(LeadForm::new());
    view! { <LeadFormView form=form /> }
}

/// The consultation intake form bound to `form`. Once it has been sent the
/// fields are replaced by a confirmation.
#[component]
pub fn LeadFormView(form: RwSignal<LeadForm>) -> impl IntoView {
    let submitted = Memo::new(move |_| form.with(LeadForm::is_submitted));
    let submitting = Memo::new(move |_| form.with(LeadForm::is_submitting));
    let error = Memo::new(move |_| form.with(|f| f.error().map(String::from)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        spawn_local(async move {
            submit_lead(&form, &DefaultTransport::default(), FINANCIAL_CONSULTATION_ENDPOINT).await;
        });
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| {
                view! {
                    <section class="lead-confirmation" role="status">
                        <h2>"Thank you!"</h2>
                        <p>"Your request is in. An advisor will contact you within two business days."</p>
                    </section>
                }
            }
        >
            <form class="lead-form" on:submit=on_submit novalidate>
                <label>
                    "Name"
                    <input
                        type="text"
                        name="name"
                        autocomplete="name"
                        prop:value=move || form.with(|f| f.fields().name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.edit(|fields| fields.name = value));
                        }
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        name="email"
                        autocomplete="email"
                        prop:value=move || form.with(|f| f.fields().email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.edit(|fields| fields.email = value));
                        }
                    />
                </label>
                <label>
                    "Phone (optional)"
                    <input
                        type="tel"
                        name="phone"
                        autocomplete="tel"
                        prop:value=move || form.with(|f| f.fields().phone.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.edit(|fields| fields.phone = value));
                        }
                    />
                </label>
                <label>
                    "Are you currently sailing?"
                    <select
                        name="currentlySailing"
                        prop:value=move || {
                            form.with(|f| f.fields().status.map(SailingStatus::key).unwrap_or_default())
                        }
                        on:change=move |ev| {
                            let status = SailingStatus::from_key(&event_target_value(&ev));
                            form.update(|f| f.edit(|fields| fields.status = status));
                        }
                    >
                        <option value="">"Select one"</option>
                        {SailingStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.key()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <fieldset class="interests">
                    <legend>"What would you like help with?"</legend>
                    {InterestTag::ALL
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        name="helpWith"
                                        value=tag.key()
                                        prop:checked=move || form.with(|f| f.fields().interests.contains(&tag))
                                        on:change=move |ev| {
                                            let selected = event_target_checked(&ev);
                                            form.update(|f| f.edit(|fields| fields.set_interest(tag, selected)));
                                        }
                                    />
                                    {tag.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <label>
                    "Anything else we should know? (optional)"
                    <textarea
                        name="additionalInfo"
                        rows="4"
                        prop:value=move || form.with(|f| f.fields().notes.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.edit(|fields| fields.notes = value));
                        }
                    ></textarea>
                </label>
                {move || error.get().map(|message| view! { <p class="form-error" role="alert">{message}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending…" } else { "Request my consultation" }}
                </button>
            </form>
        </Show>
    }
}
