use leptos::prelude::*;

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <section class="legal">
            <h1>"Privacy Policy"</h1>
            <p>
                "We collect only the information you send us through contact channels "
                "and the technical data your browser transmits when loading the site."
            </p>
            <h2>"How we use data"</h2>
            <p>
                "Contact details are used solely to reply to your request. "
                "We do not sell or share personal data with third parties for marketing."
            </p>
            <h2>"Cookies"</h2>
            <p>"The site does not set tracking cookies."</p>
            <h2>"Your rights"</h2>
            <p>
                "You may ask us at any time to access, correct or delete the personal "
                "data we hold about you."
            </p>
        </section>
    }
}
