use leptos::prelude::*;

use crate::components::{Card, Footer, NavBar, RelatedCallout};

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <NavBar />
        <main class="home">
            <header class="hero">
                <img
                    src="/images/hero-horizon.svg"
                    alt="A supply ship under way on a calm sea at dawn, drawn with a few flat colors."
                />
                <h1>"Go to sea as a civilian"</h1>
                <p>
                    "Civilian mariners crew the Military Sealift Command's fleet of supply ships, hospital ships and tugs. CivSail explains the jobs, the ships, and the money, in plain words."
                </p>
            </header>
            <section class="card-grid">
                <Card title="Careers & Sectors" href="/maritime-101/careers-and-sectors">
                    <p>"From ordinary seaman to chief engineer: find where you fit aboard, sector by sector."</p>
                </Card>
                <Card title="Ships" href="/ships">
                    <p>"Profiles of the ships CIVMARs sail on, with specifications and what life aboard is like."</p>
                </Card>
                <Card title="Editorials" href="/editorials">
                    <p>"First-hand stories and guides written by mariners and the people who advise them."</p>
                </Card>
            </section>
            <RelatedCallout
                title="Free financial consultation"
                href="/financial"
                blurb="Long trips change how pay, taxes and retirement work. Tell us where you are and we will get back to you."
            />
        </main>
        <Footer />
    }
}
