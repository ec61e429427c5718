use civsail::lead::{
    submit_lead, InterestTag, LeadForm, LeadResponse, LeadSubmission, LeadTransport, Phase,
    SailingStatus, SubmitOutcome, SubmitRefused, TransportError, ValidationError, FALLBACK_ERROR,
    FINANCIAL_CONSULTATION_ENDPOINT,
};
use std::cell::RefCell;
use std::time::Duration;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Answers every post with a canned result, and remembers what it was sent
/// and whether the form showed as submitting at that moment.
struct Recorder<'a> {
    form: &'a RefCell<LeadForm>,
    answer: Result<LeadResponse, TransportError>,
    calls: RefCell<Vec<(String, LeadSubmission, bool)>>,
}

impl<'a> Recorder<'a> {
    fn new(form: &'a RefCell<LeadForm>, answer: Result<LeadResponse, TransportError>) -> Self {
        Self {
            form,
            answer,
            calls: RefCell::new(vec![]),
        }
    }

    fn replying(form: &'a RefCell<LeadForm>, status: u16, body: &str) -> Self {
        Self::new(
            form,
            Ok(LeadResponse {
                status,
                body: String::from(body),
            }),
        )
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl LeadTransport for Recorder<'_> {
    async fn post(
        &self,
        endpoint: &str,
        submission: &LeadSubmission,
    ) -> Result<LeadResponse, TransportError> {
        let submitting = self.form.borrow().is_submitting();
        self.calls
            .borrow_mut()
            .push((String::from(endpoint), submission.clone(), submitting));
        tokio::task::yield_now().await;
        self.answer.clone()
    }
}

/// Never answers.
struct BlackHole;

impl LeadTransport for BlackHole {
    async fn post(
        &self,
        _endpoint: &str,
        _submission: &LeadSubmission,
    ) -> Result<LeadResponse, TransportError> {
        std::future::pending().await
    }
}

fn jordan() -> RefCell<LeadForm> {
    let mut form = LeadForm::new();
    form.edit(|fields| {
        fields.name = String::from("Jordan Lee");
        fields.email = String::from("jordan@example.com");
        fields.status = SailingStatus::from_key("at-sea");
        fields.set_interest(InterestTag::Retirement, true);
    });
    RefCell::new(form)
}

async fn submit(form: &RefCell<LeadForm>, transport: &Recorder<'_>) -> SubmitOutcome {
    submit_lead(form, transport, FINANCIAL_CONSULTATION_ENDPOINT).await
}

#[tokio::test]
async fn blank_name_is_refused_without_a_call() {
    setup();

    let form = jordan();
    form.borrow_mut().edit(|fields| fields.name = String::from("   "));
    let transport = Recorder::replying(&form, 200, r#"{"ok":true}"#);

    let outcome = submit(&form, &transport).await;
    assert_eq!(
        SubmitOutcome::Refused(SubmitRefused::Invalid(ValidationError::MissingName)),
        outcome
    );
    assert_eq!(0, transport.call_count());
    assert_eq!(Some("Please enter your name."), form.borrow().error());
    assert_eq!(Phase::Editing, form.borrow().phase());
}

#[tokio::test]
async fn email_is_checked_after_the_name() {
    setup();

    let form = RefCell::new(LeadForm::new());
    form.borrow_mut().edit(|fields| fields.email = String::from("nobody"));
    let transport = Recorder::replying(&form, 200, r#"{"ok":true}"#);
    submit(&form, &transport).await;
    assert_eq!(Some("Please enter your name."), form.borrow().error());

    form.borrow_mut().edit(|fields| fields.name = String::from("Jordan"));
    submit(&form, &transport).await;
    assert_eq!(Some("Please enter a valid email address."), form.borrow().error());
    assert_eq!(0, transport.call_count());
}

#[tokio::test]
async fn interests_are_checked_last() {
    setup();

    let form = jordan();
    form.borrow_mut().edit(|fields| {
        fields.set_interest(InterestTag::Retirement, false);
        fields.status = None;
    });
    let transport = Recorder::replying(&form, 200, r#"{"ok":true}"#);

    submit(&form, &transport).await;
    assert_eq!(
        Some("Please let us know whether you are currently sailing."),
        form.borrow().error()
    );

    form.borrow_mut()
        .edit(|fields| fields.status = Some(SailingStatus::Ashore));
    submit(&form, &transport).await;
    assert_eq!(
        Some("Please choose at least one topic you would like help with."),
        form.borrow().error()
    );
    assert_eq!(0, transport.call_count());
}

#[test]
fn typing_then_clearing_is_the_initial_state() {
    let mut form = LeadForm::new();
    form.edit(|fields| {
        fields.name = String::from("J");
        fields.notes = String::from("hello");
        fields.set_interest(InterestTag::Taxes, true);
    });
    form.edit(|fields| {
        fields.name.clear();
        fields.notes.clear();
        fields.set_interest(InterestTag::Taxes, false);
    });
    assert_eq!(LeadForm::new(), form);
}

#[tokio::test]
async fn accepted_submission_closes_the_form() {
    setup();

    let form = jordan();
    let transport = Recorder::replying(&form, 200, r#"{"ok":true}"#);

    assert_eq!(SubmitOutcome::Submitted, submit(&form, &transport).await);

    let calls = transport.calls.borrow();
    assert_eq!(1, calls.len());
    let (endpoint, submission, submitting) = &calls[0];
    assert_eq!(FINANCIAL_CONSULTATION_ENDPOINT, endpoint.as_str());
    assert!(*submitting);
    assert_eq!("Jordan Lee", submission.name);
    assert_eq!("jordan@example.com", submission.email);
    assert_eq!(SailingStatus::AtSea, submission.currently_sailing);
    assert_eq!(vec![InterestTag::Retirement], submission.help_with);

    let form = form.borrow();
    assert!(form.is_submitted());
    assert!(!form.is_submitting());
    assert_eq!(None, form.error());
    assert!(form.fields().name.is_empty());
}

#[tokio::test]
async fn submitted_form_refuses_another_submit() {
    setup();

    let form = jordan();
    let transport = Recorder::replying(&form, 200, r#"{"ok":true}"#);
    submit(&form, &transport).await;

    form.borrow_mut()
        .edit(|fields| fields.name = String::from("Someone else"));
    assert!(form.borrow().fields().name.is_empty());
    assert_eq!(
        SubmitOutcome::Refused(SubmitRefused::Closed),
        submit(&form, &transport).await
    );
    assert_eq!(1, transport.call_count());
}

#[tokio::test]
async fn server_message_is_shown_and_fields_kept() {
    setup();

    let form = jordan();
    let transport = Recorder::replying(&form, 500, r#"{"ok":false,"message":"Server unavailable"}"#);

    let outcome = submit(&form, &transport).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(1, transport.call_count());

    let form = form.borrow();
    assert_eq!(Some("Server unavailable"), form.error());
    assert_eq!(Phase::Editing, form.phase());
    assert_eq!("Jordan Lee", form.fields().name);
    assert!(form.fields().interests.contains(&InterestTag::Retirement));
}

#[tokio::test]
async fn failures_without_a_message_use_the_fallback() {
    setup();

    let form = jordan();
    let cases = [
        Recorder::replying(&form, 200, r#"{"ok":false}"#),
        Recorder::replying(&form, 502, "<html>Bad gateway</html>"),
        Recorder::replying(&form, 404, r#"{"ok":true,"message":""}"#),
        Recorder::new(&form, Err(TransportError::Network(String::from("offline")))),
    ];
    for transport in &cases {
        submit(&form, transport).await;
        assert_eq!(Some(FALLBACK_ERROR), form.borrow().error());
        assert!(!form.borrow().is_submitting());
        assert_eq!(1, transport.call_count());
    }
}

#[tokio::test]
async fn missing_status_makes_no_call() {
    setup();

    let form = jordan();
    form.borrow_mut().edit(|fields| fields.status = None);
    let transport = Recorder::replying(&form, 200, r#"{"ok":true}"#);

    submit(&form, &transport).await;
    assert_eq!(0, transport.call_count());
    assert_eq!(
        Some("Please let us know whether you are currently sailing."),
        form.borrow().error()
    );
}

#[tokio::test]
async fn dropping_an_inflight_submit_releases_the_form() {
    setup();

    let form = jordan();
    let attempt = submit_lead(&form, &BlackHole, FINANCIAL_CONSULTATION_ENDPOINT);
    let result = tokio::time::timeout(Duration::from_millis(20), attempt).await;
    assert!(result.is_err());

    let form = form.borrow();
    assert!(!form.is_submitting());
    assert_eq!(Some(FALLBACK_ERROR), form.error());
    assert_eq!("Jordan Lee", form.fields().name);
}
